use actix_web::{post, web, HttpRequest, HttpResponse};
use log::{error, info, warn};

use crate::auth::{claims_from_request, JwtKeys};
use crate::error::ApiError;
use crate::user::error::UserError;
use crate::user::repository::{UserRepository, UserRepositoryImpl};
use crate::user::usecase::{UserUseCase, UserUseCaseImpl};
use shared::dto::auth::{LoginRequest, LoginResponse, MessageResponse, RegisterRequest, UpdateProfileRequest, UserDto};

pub async fn register_handler_impl<R>(
    request: web::Json<RegisterRequest>,
    repo: web::Data<R>,
) -> Result<HttpResponse, ApiError>
where
    R: UserRepository + Clone + 'static,
{
    let usecase = UserUseCaseImpl { repo: repo.get_ref().clone() };
    let email = request.email.clone();

    match usecase.register(request.into_inner()).await {
        Ok(_) => Ok(HttpResponse::Created().json(MessageResponse::new("Registered"))),
        Err(UserError::AlreadyExists) => {
            info!("Registration attempt for existing account {}", email);
            Err(UserError::AlreadyExists.into())
        }
        Err(e @ UserError::Validation(_)) => Err(e.into()),
        Err(e) => {
            error!("Registration failed for {}: {}", email, e);
            Err(e.into())
        }
    }
}

pub async fn login_handler_impl<R>(
    login: web::Json<LoginRequest>,
    repo: web::Data<R>,
    keys: web::Data<JwtKeys>,
) -> Result<HttpResponse, ApiError>
where
    R: UserRepository + Clone + 'static,
{
    let email = login.email.clone();
    let usecase = UserUseCaseImpl { repo: repo.get_ref().clone() };

    match usecase.login(login.into_inner()).await {
        Ok(user) => {
            let token = keys.issue(&user.id, &user.email)?;
            info!("User {} logged in", user.email);
            Ok(HttpResponse::Ok().json(LoginResponse { token }))
        }
        Err(UserError::NotFound) => {
            info!("Login attempt for unknown account {}", email);
            Err(UserError::NotFound.into())
        }
        Err(UserError::InvalidPassword) => {
            warn!("Invalid password for {}", email);
            Err(UserError::InvalidPassword.into())
        }
        Err(e) => {
            error!("Unexpected login error for {}: {}", email, e);
            Err(e.into())
        }
    }
}

pub async fn profile_handler_impl<R>(
    req: HttpRequest,
    repo: web::Data<R>,
) -> Result<HttpResponse, ApiError>
where
    R: UserRepository + Clone + 'static,
{
    let claims = claims_from_request(&req)?;
    let usecase = UserUseCaseImpl { repo: repo.get_ref().clone() };
    let user = usecase.profile(&claims.sub).await?;
    Ok(HttpResponse::Ok().json(UserDto::from(&user)))
}

pub async fn update_profile_handler_impl<R>(
    req: HttpRequest,
    update: web::Json<UpdateProfileRequest>,
    repo: web::Data<R>,
) -> Result<HttpResponse, ApiError>
where
    R: UserRepository + Clone + 'static,
{
    let claims = claims_from_request(&req)?;
    let usecase = UserUseCaseImpl { repo: repo.get_ref().clone() };
    match usecase.update_profile(&claims.sub, update.into_inner()).await {
        Ok(user) => Ok(HttpResponse::Ok().json(UserDto::from(&user))),
        Err(e @ UserError::Validation(_)) => Err(e.into()),
        Err(e) => {
            error!("Profile update failed for {}: {}", claims.email, e);
            Err(e.into())
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = "auth",
    responses(
        (status = 201, description = "Account created"),
        (status = 400, description = "Invalid email or password", body = ApiError),
        (status = 409, description = "Email already registered", body = ApiError)
    )
)]
#[post("/register")]
pub async fn register_handler(
    request: web::Json<RegisterRequest>,
    repo: web::Data<UserRepositoryImpl>,
) -> Result<HttpResponse, ApiError> {
    register_handler_impl(request, repo).await
}

#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "auth",
    responses(
        (status = 200, description = "Bearer token issued"),
        (status = 401, description = "Invalid password", body = ApiError),
        (status = 404, description = "User not found", body = ApiError)
    )
)]
#[post("/login")]
pub async fn login_handler(
    login: web::Json<LoginRequest>,
    repo: web::Data<UserRepositoryImpl>,
    keys: web::Data<JwtKeys>,
) -> Result<HttpResponse, ApiError> {
    login_handler_impl(login, repo, keys).await
}

/// `GET /api/auth/profile`, mounted behind the auth middleware
pub async fn profile_handler(
    req: HttpRequest,
    repo: web::Data<UserRepositoryImpl>,
) -> Result<HttpResponse, ApiError> {
    profile_handler_impl(req, repo).await
}

/// `PUT /api/auth/profile`, mounted behind the auth middleware
pub async fn update_profile_handler(
    req: HttpRequest,
    update: web::Json<UpdateProfileRequest>,
    repo: web::Data<UserRepositoryImpl>,
) -> Result<HttpResponse, ApiError> {
    update_profile_handler_impl(req, update, repo).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::AuthMiddleware;
    use crate::tests::InMemoryUserRepository;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};
    use std::sync::Arc;

    const SECRET: &str = "a-long-enough-secret-for-the-test-suite";

    macro_rules! auth_app {
        ($repo:expr) => {{
            let keys = web::Data::new(JwtKeys::new(SECRET, 1));
            test::init_service(
                App::new()
                    .app_data(web::Data::new($repo))
                    .app_data(keys)
                    .service(
                        web::scope("/api/auth")
                            .route("/register", web::post().to(register_handler_impl::<InMemoryUserRepository>))
                            .route("/login", web::post().to(login_handler_impl::<InMemoryUserRepository>))
                            .service(
                                web::resource("/profile")
                                    .wrap(AuthMiddleware { keys: Arc::new(JwtKeys::new(SECRET, 1)) })
                                    .route(web::get().to(profile_handler_impl::<InMemoryUserRepository>))
                                    .route(web::put().to(update_profile_handler_impl::<InMemoryUserRepository>)),
                            ),
                    ),
            )
            .await
        }};
    }

    #[actix_web::test]
    async fn test_register_login_profile_flow() {
        let app = auth_app!(InMemoryUserRepository::default());

        let req = test::TestRequest::post()
            .uri("/api/auth/register")
            .set_json(json!({"email": "gamer@example.com", "password": "secret99"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Registered");

        let req = test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(json!({"email": "gamer@example.com", "password": "secret99"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let login: LoginResponse = test::read_body_json(resp).await;
        assert!(!login.token.is_empty());

        let req = test::TestRequest::get()
            .uri("/api/auth/profile")
            .insert_header(("Authorization", format!("Bearer {}", login.token)))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let profile: Value = test::read_body_json(resp).await;
        assert_eq!(profile["email"], "gamer@example.com");
        assert!(profile.get("password").is_none());
    }

    #[actix_web::test]
    async fn test_login_status_codes() {
        let app = auth_app!(InMemoryUserRepository::default());

        let req = test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(json!({"email": "nobody@example.com", "password": "secret99"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "User not found");

        let req = test::TestRequest::post()
            .uri("/api/auth/register")
            .set_json(json!({"email": "gamer@example.com", "password": "secret99"}))
            .to_request();
        test::call_service(&app, req).await;

        let req = test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(json!({"email": "gamer@example.com", "password": "nope"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Invalid password");
    }

    #[actix_web::test]
    async fn test_register_conflict_and_validation() {
        let app = auth_app!(InMemoryUserRepository::default());

        let register = |email: &str, password: &str| {
            test::TestRequest::post()
                .uri("/api/auth/register")
                .set_json(json!({"email": email, "password": password}))
                .to_request()
        };

        assert_eq!(test::call_service(&app, register("gamer@example.com", "secret99")).await.status(), StatusCode::CREATED);
        assert_eq!(test::call_service(&app, register("gamer@example.com", "secret99")).await.status(), StatusCode::CONFLICT);
        assert_eq!(test::call_service(&app, register("not-an-email", "secret99")).await.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_profile_update_round_trip() {
        let app = auth_app!(InMemoryUserRepository::default());

        let req = test::TestRequest::post()
            .uri("/api/auth/register")
            .set_json(json!({"email": "asha@example.com", "password": "secret99", "name": "Asha", "phone": "9876543210"}))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);

        let req = test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(json!({"email": "asha@example.com", "password": "secret99"}))
            .to_request();
        let login: LoginResponse = test::call_and_read_body_json(&app, req).await;
        let bearer = ("Authorization", format!("Bearer {}", login.token));

        let req = test::TestRequest::get().uri("/api/auth/profile").insert_header(bearer.clone()).to_request();
        let profile: UserDto = test::call_and_read_body_json(&app, req).await;
        assert_eq!(profile.name, "Asha");
        assert_eq!(profile.phone.as_deref(), Some("9876543210"));

        let req = test::TestRequest::put()
            .uri("/api/auth/profile")
            .insert_header(bearer.clone())
            .set_json(json!({"name": "Asha K", "phone": "9123456789"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let updated: UserDto = test::read_body_json(resp).await;
        assert_eq!(updated.name, "Asha K");
        assert_eq!(updated.phone.as_deref(), Some("9123456789"));

        let req = test::TestRequest::put()
            .uri("/api/auth/profile")
            .insert_header(bearer)
            .set_json(json!({"name": "  "}))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);

        let req = test::TestRequest::put()
            .uri("/api/auth/profile")
            .set_json(json!({"name": "Nobody"}))
            .to_request();
        let resp = test::try_call_service(&app, req).await;
        assert_eq!(
            resp.err().map(|e| e.as_response_error().status_code()),
            Some(StatusCode::UNAUTHORIZED)
        );
    }
}
