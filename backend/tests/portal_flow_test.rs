//! End-to-end flow through the public handlers: sign up, log in, register a team

use actix_web::http::StatusCode;
use actix_web::{test, web, App};
use async_trait::async_trait;
use backend::auth::{AuthMiddleware, JwtKeys};
use backend::registration::controller::register_team_handler_impl;
use backend::registration::repository::RegistrationRepository;
use backend::registration::usecase::RegistrationLock;
use backend::tournament::controller::list_tournaments_handler_impl;
use backend::tournament::repository::TournamentRepository;
use backend::user::controller::{login_handler_impl, profile_handler_impl, register_handler_impl};
use backend::user::repository::UserRepository;
use chrono::{TimeZone, Utc};
use serde_json::{json, Value};
use shared::dto::auth::{LoginResponse, UserDto};
use shared::models::leaderboard::TournamentStanding;
use shared::models::registration::RegistrationRecord;
use shared::models::tournament::{Participants, Tournament, TournamentStatus, TournamentType};
use shared::models::user::User;
use std::sync::Arc;
use tokio::sync::Mutex;

const SECRET: &str = "integration-secret-with-enough-length";

#[derive(Clone, Default)]
struct Users(Arc<Mutex<Vec<User>>>);

#[async_trait]
impl UserRepository for Users {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, String> {
        Ok(self.0.lock().await.iter().find(|u| u.email.eq_ignore_ascii_case(email)).cloned())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<User>, String> {
        Ok(self.0.lock().await.iter().find(|u| u.id == id).cloned())
    }

    async fn create(&self, mut user: User) -> Result<User, String> {
        let mut users = self.0.lock().await;
        user.id = format!("user-{}", users.len() + 1);
        users.push(user.clone());
        Ok(user)
    }

    async fn update_profile(&self, id: &str, name: &str, phone: Option<&str>) -> Result<Option<User>, String> {
        let mut users = self.0.lock().await;
        Ok(users.iter_mut().find(|u| u.id == id).map(|user| {
            user.name = name.to_string();
            user.phone = phone.map(str::to_string);
            user.clone()
        }))
    }
}

#[derive(Clone)]
struct Tournaments(Arc<Vec<Tournament>>);

impl Tournaments {
    fn single(max: u32) -> Self {
        Self(Arc::new(vec![Tournament {
            id: "spring-cup".to_string(),
            name: "Spring Cup".to_string(),
            tournament_type: TournamentType::Squad,
            status: TournamentStatus::Upcoming,
            start_date: Utc.with_ymd_and_hms(2025, 4, 5, 16, 0, 0).unwrap(),
            end_date: None,
            prize_pool: Some(20_000),
            entry_fee: None,
            participants: Some(Participants { current: 0, max }),
            details: Some("Best of three maps".to_string()),
            image_url: None,
        }]))
    }
}

#[async_trait]
impl TournamentRepository for Tournaments {
    async fn list_all(&self) -> Result<Vec<Tournament>, String> {
        Ok(self.0.to_vec())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Tournament>, String> {
        Ok(self.0.iter().find(|t| t.id == id).cloned())
    }

    async fn standings(&self, _tournament_id: &str) -> Result<Vec<TournamentStanding>, String> {
        Ok(Vec::new())
    }
}

#[derive(Clone, Default)]
struct Registrations(Arc<Mutex<Vec<RegistrationRecord>>>);

#[async_trait]
impl RegistrationRepository for Registrations {
    async fn registrations_for(&self, tournament_id: &str) -> Result<Vec<RegistrationRecord>, String> {
        Ok(self.0.lock().await.iter().filter(|r| r.tournament_id == tournament_id).cloned().collect())
    }

    async fn insert(&self, record: &RegistrationRecord) -> Result<(), String> {
        self.0.lock().await.push(record.clone());
        Ok(())
    }
}

macro_rules! portal_app {
    ($users:expr, $tournaments:expr, $registrations:expr) => {{
        let keys = Arc::new(JwtKeys::new(SECRET, 2));
        test::init_service(
            App::new()
                .app_data(web::Data::new($users))
                .app_data(web::Data::new($tournaments))
                .app_data(web::Data::new($registrations))
                .app_data(web::Data::new(RegistrationLock::default()))
                .app_data(web::Data::from(keys.clone()))
                .service(
                    web::scope("/api/auth")
                        .route("/register", web::post().to(register_handler_impl::<Users>))
                        .route("/login", web::post().to(login_handler_impl::<Users>))
                        .service(
                            web::resource("/profile")
                                .wrap(AuthMiddleware { keys: keys.clone() })
                                .route(web::get().to(profile_handler_impl::<Users>)),
                        ),
                )
                .service(
                    web::scope("/api/tournaments")
                        .route("", web::get().to(list_tournaments_handler_impl::<Tournaments>))
                        .service(
                            web::resource("/{id}/registrations")
                                .wrap(AuthMiddleware { keys })
                                .route(web::post().to(register_team_handler_impl::<Tournaments, Registrations>)),
                        ),
                ),
        )
        .await
    }};
}

fn team(name: &str, whatsapp: &str) -> Value {
    json!({
        "tournament_id": "spring-cup",
        "team_name": name,
        "player1_name": "Asha",
        "player2_name": "Bilal",
        "player3_name": "Chen",
        "player4_name": "Dev",
        "player5_name": null,
        "player6_name": null,
        "whatsapp_number": whatsapp,
        "registration_date": "2025-03-20T09:15:00.000Z",
        "status": "registered"
    })
}

#[actix_rt::test]
async fn test_sign_up_log_in_and_register_team() {
    let registrations = Registrations::default();
    let app = portal_app!(Users::default(), Tournaments::single(8), registrations.clone());

    let req = test::TestRequest::post()
        .uri("/api/auth/register")
        .set_json(json!({ "email": "Captain@Example.com", "password": "hunter22", "phone": "9876543210" }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);

    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(json!({ "email": "captain@example.com", "password": "hunter22" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let LoginResponse { token } = test::read_body_json(resp).await;
    let bearer = ("Authorization", format!("Bearer {}", token));

    let req = test::TestRequest::get()
        .uri("/api/auth/profile")
        .insert_header(bearer.clone())
        .to_request();
    let profile: UserDto = test::call_and_read_body_json(&app, req).await;
    assert_eq!(profile.email, "captain@example.com");

    let req = test::TestRequest::post()
        .uri("/api/tournaments/spring-cup/registrations")
        .insert_header(bearer.clone())
        .set_json(team("Night Owls", "9876543210"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let req = test::TestRequest::post()
        .uri("/api/tournaments/spring-cup/registrations")
        .insert_header(bearer)
        .set_json(team("Early Birds", "98765 43210"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["outcome"], "duplicate_contact");

    assert_eq!(registrations.0.lock().await.len(), 1);
}

#[actix_rt::test]
async fn test_anonymous_visitor_can_browse_but_not_register() {
    let app = portal_app!(Users::default(), Tournaments::single(8), Registrations::default());

    let req = test::TestRequest::get().uri("/api/tournaments").to_request();
    let listed: Vec<Tournament> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, "spring-cup");

    let req = test::TestRequest::post()
        .uri("/api/tournaments/spring-cup/registrations")
        .set_json(team("Night Owls", "9876543210"))
        .to_request();
    let resp = test::try_call_service(&app, req).await;
    assert_eq!(
        resp.err().map(|e| e.as_response_error().status_code()),
        Some(StatusCode::UNAUTHORIZED)
    );
}

#[actix_rt::test]
async fn test_last_slot_then_full() {
    let app = portal_app!(Users::default(), Tournaments::single(1), Registrations::default());
    let token = JwtKeys::new(SECRET, 1).issue("user-1", "captain@example.com").unwrap();

    let mut statuses = Vec::new();
    for (name, whatsapp) in [("Night Owls", "9876543210"), ("Early Birds", "9123456780")] {
        let req = test::TestRequest::post()
            .uri("/api/tournaments/spring-cup/registrations")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .set_json(team(name, whatsapp))
            .to_request();
        statuses.push(test::call_service(&app, req).await.status());
    }

    assert_eq!(statuses, vec![StatusCode::CREATED, StatusCode::CONFLICT]);
}
