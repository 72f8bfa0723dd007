use actix_web::{get, web, HttpResponse};
use log::error;
use shared::dto::leaderboard::{LeaderboardResponse, MatchHistoryResponse};

use crate::leaderboard::repository::{LeaderboardRepository, LeaderboardRepositoryImpl};

pub async fn leaderboard_handler_impl<R>(repo: web::Data<R>) -> HttpResponse
where
    R: LeaderboardRepository + 'static,
{
    match repo.global().await {
        Ok(scores) => HttpResponse::Ok().json(LeaderboardResponse::ok(scores)),
        Err(e) => {
            error!("Leaderboard query failed: {}", e);
            HttpResponse::InternalServerError().json(LeaderboardResponse::failed(e))
        }
    }
}

pub async fn matches_handler_impl<R>(path: web::Path<String>, repo: web::Data<R>) -> HttpResponse
where
    R: LeaderboardRepository + 'static,
{
    let player = path.into_inner();
    match repo.matches_for(&player).await {
        Ok(records) => HttpResponse::Ok().json(MatchHistoryResponse::ok(records)),
        Err(e) => {
            error!("Match history query failed for {}: {}", player, e);
            HttpResponse::InternalServerError().json(MatchHistoryResponse::failed(e))
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/leaderboard",
    tag = "leaderboard",
    responses(
        (status = 200, description = "Match scores, highest first"),
        (status = 500, description = "Store unavailable")
    )
)]
#[get("")]
pub async fn leaderboard(repo: web::Data<LeaderboardRepositoryImpl>) -> HttpResponse {
    leaderboard_handler_impl(repo).await
}

#[utoipa::path(
    get,
    path = "/api/matches/{player}",
    tag = "leaderboard",
    params(("player" = String, Path, description = "Player name")),
    responses((status = 200, description = "Matches played by the player"))
)]
#[get("/{player}")]
pub async fn matches(path: web::Path<String>, repo: web::Data<LeaderboardRepositoryImpl>) -> HttpResponse {
    matches_handler_impl(path, repo).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::InMemoryLeaderboardRepository;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value;

    #[actix_web::test]
    async fn test_leaderboard_sorted_by_score() {
        let repo = InMemoryLeaderboardRepository::with_matches(&[("asha", 40), ("bilal", 90), ("asha", 70)]);
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(repo))
                .route("/api/leaderboard", web::get().to(leaderboard_handler_impl::<InMemoryLeaderboardRepository>)),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/leaderboard").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: LeaderboardResponse = test::read_body_json(resp).await;
        assert!(body.success);
        let scores: Vec<i64> = body.leaderboard.iter().map(|row| row.score).collect();
        assert_eq!(scores, vec![90, 70, 40]);
    }

    #[actix_web::test]
    async fn test_leaderboard_failure_body() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(InMemoryLeaderboardRepository::failing()))
                .route("/api/leaderboard", web::get().to(leaderboard_handler_impl::<InMemoryLeaderboardRepository>)),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/leaderboard").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], false);
        assert!(body["message"].is_string());
    }

    #[actix_web::test]
    async fn test_matches_for_player() {
        let repo = InMemoryLeaderboardRepository::with_matches(&[("asha", 40), ("bilal", 90), ("asha", 70)]);
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(repo))
                .route("/api/matches/{player}", web::get().to(matches_handler_impl::<InMemoryLeaderboardRepository>)),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/matches/asha").to_request();
        let body: MatchHistoryResponse = test::call_and_read_body_json(&app, req).await;
        assert!(body.success);
        assert_eq!(body.matches.len(), 2);
        assert!(body.matches.iter().all(|m| m.player == "asha"));
    }
}
