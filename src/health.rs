use actix_web::{get, web, HttpResponse, Responder};
use sea_orm::{ConnectionTrait, DatabaseConnection, Statement};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::warn;

/// A ping slower than this counts as down.
const DB_PING_TIMEOUT: Duration = Duration::from_secs(2);

#[derive(Serialize)]
struct Probe {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    database: Option<&'static str>,
}

/// Liveness. Never touches the database.
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(Probe {
        status: "ok",
        database: None,
    })
}

async fn database_answers(db: &DatabaseConnection) -> bool {
    let ping = db.execute(Statement::from_string(db.get_database_backend(), "SELECT 1"));

    match tokio::time::timeout(DB_PING_TIMEOUT, ping).await {
        Ok(Ok(_)) => true,
        Ok(Err(e)) => {
            warn!(error = %e, "Readiness ping failed");
            false
        }
        Err(_) => {
            warn!("Readiness ping timed out");
            false
        }
    }
}

/// Readiness: the orders and users tables live in Postgres, so no database
/// means no service.
#[get("/ready")]
pub async fn readiness(db: web::Data<Arc<DatabaseConnection>>) -> impl Responder {
    if database_answers(db.get_ref()).await {
        HttpResponse::Ok().json(Probe {
            status: "ok",
            database: Some("ok"),
        })
    } else {
        HttpResponse::ServiceUnavailable().json(Probe {
            status: "unhealthy",
            database: Some("unhealthy"),
        })
    }
}
