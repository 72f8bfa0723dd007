use actix_web::{web, App, HttpServer};
use backend::auth::{AuthMiddleware, JwtKeys};
use backend::config::Config;
use backend::leaderboard::repository::LeaderboardRepositoryImpl;
use backend::openapi::ApiDoc;
use backend::registration::repository::RegistrationRepositoryImpl;
use backend::registration::usecase::RegistrationLock;
use backend::tournament::repository::TournamentRepositoryImpl;
use backend::user::repository::UserRepositoryImpl;
use log::{error, info};
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::Other, e.to_string()));
        }
    };

    if let Err(e) = backend::logging::init(&config.logging) {
        eprintln!("Failed to initialize logging: {}", e);
        return Err(std::io::Error::new(std::io::ErrorKind::Other, e.to_string()));
    }
    config.log_configuration();

    let db = match backend::database::connect(&config.database).await {
        Ok(db) => db,
        Err(e) => {
            error!("{}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::ConnectionRefused, e.to_string()));
        }
    };
    if let Err(e) = backend::database::ensure_collections(&db).await {
        error!("{}", e);
        return Err(std::io::Error::new(std::io::ErrorKind::Other, e.to_string()));
    }

    let db_data = web::Data::new(db.clone());
    let user_repo = web::Data::new(UserRepositoryImpl::new(db.clone()));
    let tournament_repo = web::Data::new(TournamentRepositoryImpl::new(db.clone()));
    let registration_repo = web::Data::new(RegistrationRepositoryImpl::new(db.clone()));
    let leaderboard_repo = web::Data::new(LeaderboardRepositoryImpl::new(db));
    let registration_lock = web::Data::new(RegistrationLock::default());

    let keys = Arc::new(JwtKeys::from_config(&config.auth));
    let keys_data = web::Data::from(keys.clone());
    let cors = config.cors.clone();

    info!("Starting server on {}:{}", config.server.host, config.server.port);

    HttpServer::new(move || {
        App::new()
            .wrap(backend::middleware::Logger)
            .wrap(backend::middleware::cors_middleware(&cors))
            .app_data(web::JsonConfig::default().limit(64 * 1024))
            .app_data(db_data.clone())
            .app_data(user_repo.clone())
            .app_data(tournament_repo.clone())
            .app_data(registration_repo.clone())
            .app_data(leaderboard_repo.clone())
            .app_data(registration_lock.clone())
            .app_data(keys_data.clone())
            .service(backend::health::index)
            .service(backend::health::health_check)
            .service(backend::health::detailed_health_check)
            .service(
                web::scope("/api/auth")
                    .service(backend::user::controller::register_handler)
                    .service(backend::user::controller::login_handler)
                    .service(
                        web::resource("/profile")
                            .wrap(AuthMiddleware { keys: keys.clone() })
                            .route(web::get().to(backend::user::controller::profile_handler))
                            .route(web::put().to(backend::user::controller::update_profile_handler)),
                    ),
            )
            .service(
                web::scope("/api/tournaments")
                    .service(backend::tournament::controller::list_tournaments)
                    .service(backend::tournament::controller::tournament_leaderboard)
                    .service(
                        web::resource("/{id}/registrations")
                            .wrap(AuthMiddleware { keys: keys.clone() })
                            .route(web::post().to(backend::registration::controller::register_team)),
                    ),
            )
            .service(web::scope("/api/leaderboard").service(backend::leaderboard::controller::leaderboard))
            .service(web::scope("/api/matches").service(backend::leaderboard::controller::matches))
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
    })
    .workers(config.server.workers)
    .bind((config.server.host.as_str(), config.server.port))?
    .run()
    .await
}
