use actix_web::{get, web, HttpResponse};
use log::{debug, error};

use crate::error::ApiError;
use crate::tournament::repository::{TournamentRepository, TournamentRepositoryImpl};

pub async fn list_tournaments_handler_impl<R>(repo: web::Data<R>) -> Result<HttpResponse, ApiError>
where
    R: TournamentRepository + 'static,
{
    let tournaments = repo.list_all().await.map_err(|e| {
        error!("Failed to list tournaments: {}", e);
        ApiError::database_error(&e)
    })?;
    debug!("Returning {} tournaments", tournaments.len());
    Ok(HttpResponse::Ok().json(tournaments))
}

pub async fn tournament_leaderboard_handler_impl<R>(
    path: web::Path<String>,
    repo: web::Data<R>,
) -> Result<HttpResponse, ApiError>
where
    R: TournamentRepository + 'static,
{
    let tournament_id = path.into_inner();

    let tournament = repo
        .find_by_id(&tournament_id)
        .await
        .map_err(|e| ApiError::database_error(&e))?;
    if tournament.is_none() {
        return Err(ApiError::not_found(&format!("Tournament {} not found", tournament_id)));
    }

    let standings = repo.standings(&tournament_id).await.map_err(|e| {
        error!("Failed to load standings for {}: {}", tournament_id, e);
        ApiError::database_error(&e)
    })?;
    Ok(HttpResponse::Ok().json(standings))
}

#[utoipa::path(
    get,
    path = "/api/tournaments",
    tag = "tournaments",
    responses((status = 200, description = "Every tournament in the store"))
)]
#[get("")]
pub async fn list_tournaments(repo: web::Data<TournamentRepositoryImpl>) -> Result<HttpResponse, ApiError> {
    list_tournaments_handler_impl(repo).await
}

#[utoipa::path(
    get,
    path = "/api/tournaments/{id}/leaderboard",
    tag = "tournaments",
    params(("id" = String, Path, description = "Tournament key")),
    responses(
        (status = 200, description = "Standings ordered by rank"),
        (status = 404, description = "Unknown tournament", body = ApiError)
    )
)]
#[get("/{id}/leaderboard")]
pub async fn tournament_leaderboard(
    path: web::Path<String>,
    repo: web::Data<TournamentRepositoryImpl>,
) -> Result<HttpResponse, ApiError> {
    tournament_leaderboard_handler_impl(path, repo).await
}
