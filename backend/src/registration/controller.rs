use actix_web::http::StatusCode;
use actix_web::{web, HttpRequest, HttpResponse};
use log::info;
use shared::models::registration::RegistrationRecord;

use crate::auth::claims_from_request;
use crate::error::ApiError;
use crate::registration::repository::{RegistrationRepository, RegistrationRepositoryImpl};
use crate::registration::usecase::{RegistrationLock, RegistrationUseCase, RegistrationUseCaseImpl};
use crate::tournament::repository::{TournamentRepository, TournamentRepositoryImpl};

pub async fn register_team_handler_impl<T, R>(
    req: HttpRequest,
    path: web::Path<String>,
    record: web::Json<RegistrationRecord>,
    tournaments: web::Data<T>,
    registrations: web::Data<R>,
    lock: web::Data<RegistrationLock>,
) -> Result<HttpResponse, ApiError>
where
    T: TournamentRepository + Clone + 'static,
    R: RegistrationRepository + Clone + 'static,
{
    let claims = claims_from_request(&req)?;
    let tournament_id = path.into_inner();
    let usecase = RegistrationUseCaseImpl {
        tournaments: tournaments.get_ref().clone(),
        registrations: registrations.get_ref().clone(),
        lock: lock.get_ref().clone(),
    };

    let outcome = usecase.register(&tournament_id, record.into_inner()).await?;
    info!(
        "Registration by {} for tournament {}: {}",
        claims.email,
        tournament_id,
        outcome.message()
    );

    let status = StatusCode::from_u16(outcome.status_code()).unwrap_or(StatusCode::BAD_REQUEST);
    Ok(HttpResponse::build(status).json(outcome))
}

/// `POST /api/tournaments/{id}/registrations`, mounted behind the auth middleware
pub async fn register_team(
    req: HttpRequest,
    path: web::Path<String>,
    record: web::Json<RegistrationRecord>,
    tournaments: web::Data<TournamentRepositoryImpl>,
    registrations: web::Data<RegistrationRepositoryImpl>,
    lock: web::Data<RegistrationLock>,
) -> Result<HttpResponse, ApiError> {
    register_team_handler_impl(req, path, record, tournaments, registrations, lock).await
}
