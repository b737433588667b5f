//! Middleware de CORS
//!
//! Cualquier origen puede llamar a la API. Las peticiones OPTIONS se
//! responden aquí mismo como preflight y nunca llegan a los handlers,
//! así que no tocan la base de datos.

use axum::http::{header, HeaderName, Method};
use std::time::Duration;
use tower_http::cors::{Any, CorsLayer};

/// Tiempo que el navegador puede cachear el preflight (24 horas)
pub const PREFLIGHT_MAX_AGE: Duration = Duration::from_secs(86_400);

/// Crear middleware de CORS
pub fn cors_middleware() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, HeaderName::from_static("x-user-id")])
        .max_age(PREFLIGHT_MAX_AGE)
}
