//! Backend CRM: endpoints CRUD para clientes, empleados y vehículos.

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod function;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod state;
pub mod utils;

use axum::{response::Json, routing::get, Router};
use serde_json::json;
use tower_http::trace::TraceLayer;

use middleware::cors::cors_middleware;
use models::{Client, Employee, Resource, Vehicle};
use routes::resource_routes::create_resource_router;
use state::AppState;

/// Rutas de todos los recursos expuestos
pub const RESOURCE_PATHS: [&str; 3] = [Client::PATH, Employee::PATH, Vehicle::PATH];

/// Construir el router completo de la API
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .nest(Client::PATH, create_resource_router::<Client>())
        .nest(Employee::PATH, create_resource_router::<Employee>())
        .nest(Vehicle::PATH, create_resource_router::<Vehicle>())
        .layer(TraceLayer::new_for_http())
        .layer(cors_middleware())
        .with_state(state)
}

/// Health check simple, sin tocar la base de datos
async fn health_check() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
