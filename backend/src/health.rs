use actix_web::{get, web, HttpResponse, Responder};
use arangors::client::reqwest::ReqwestClient;
use arangors::Database;
use serde::Serialize;
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use tokio::time::timeout;

#[derive(Serialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: u64,
    pub version: &'static str,
}

fn unix_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}

#[get("/")]
pub async fn index() -> impl Responder {
    HttpResponse::Ok().body("Spirit Esports Backend Running ✅")
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
#[get("/health")]
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "ok".to_string(),
        timestamp: unix_timestamp(),
        version: env!("CARGO_PKG_VERSION"),
    })
}

#[derive(Serialize)]
struct DatabaseHealth {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_time_ms: Option<u64>,
}

async fn check_database(db: &Database<ReqwestClient>) -> DatabaseHealth {
    let start = std::time::Instant::now();

    match timeout(Duration::from_secs(5), db.info()).await {
        Ok(Ok(_)) => DatabaseHealth {
            status: "healthy",
            message: None,
            response_time_ms: Some(start.elapsed().as_millis() as u64),
        },
        Ok(Err(e)) => DatabaseHealth {
            status: "unhealthy",
            message: Some(format!("Database query failed: {}", e)),
            response_time_ms: None,
        },
        Err(_) => DatabaseHealth {
            status: "unhealthy",
            message: Some("Database connection timeout".to_string()),
            response_time_ms: None,
        },
    }
}

#[utoipa::path(
    get,
    path = "/health/detailed",
    tag = "health",
    responses(
        (status = 200, description = "Database reachable"),
        (status = 503, description = "Database unreachable")
    )
)]
#[get("/health/detailed")]
pub async fn detailed_health_check(db: web::Data<Database<ReqwestClient>>) -> impl Responder {
    #[derive(Serialize)]
    struct DetailedHealthResponse {
        status: &'static str,
        timestamp: u64,
        version: &'static str,
        database: DatabaseHealth,
    }

    let database = check_database(db.get_ref()).await;
    let healthy = database.status == "healthy";
    let response = DetailedHealthResponse {
        status: if healthy { "ok" } else { "degraded" },
        timestamp: unix_timestamp(),
        version: env!("CARGO_PKG_VERSION"),
        database,
    };

    if healthy {
        HttpResponse::Ok().json(response)
    } else {
        HttpResponse::ServiceUnavailable().json(response)
    }
}
