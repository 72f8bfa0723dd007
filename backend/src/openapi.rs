use utoipa::OpenApi;
use crate::error::ApiError;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::health::health_check,
        crate::health::detailed_health_check,
        crate::user::controller::register_handler,
        crate::user::controller::login_handler,
        crate::tournament::controller::list_tournaments,
        crate::tournament::controller::tournament_leaderboard,
        crate::leaderboard::controller::leaderboard,
        crate::leaderboard::controller::matches,
    ),
    components(schemas(
        crate::health::HealthResponse,
        ApiError,
    )),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "auth", description = "Account registration, login and profile"),
        (name = "tournaments", description = "Tournament listing, standings and team registration"),
        (name = "leaderboard", description = "Global leaderboard and match history"),
    ),
    info(
        title = "Spirit Esports Tournament API",
        description = "Backend for the tournament registration portal.\n\n## Authentication\n\nTeam registration and the profile endpoint require a bearer token in the Authorization header:\n\n```\nAuthorization: Bearer <token>\n```\n\nObtain a token from `/api/auth/login`.",
        version = "0.3.0",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    ),
    servers(
        (url = "http://localhost:5000", description = "Development server"),
    )
)]
pub struct ApiDoc;
