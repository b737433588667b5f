//! Adaptador de funciones serverless
//!
//! Traduce un evento HTTP de función (`httpMethod`, `body`,
//! `queryStringParameters`, ...) a una petición del router de Axum y la
//! respuesta de vuelta al formato `statusCode`/`headers`/`body`. Así ambos
//! modos de despliegue comparten exactamente el mismo dispatch.

use axum::{
    body::{to_bytes, Body},
    http::{header, HeaderValue, Method, Request},
    response::{IntoResponse, Response},
    Router,
};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use tower::ServiceExt;
use tracing::{debug, error};

use crate::utils::errors::{bad_request_error, AppError};

/// Tamaño máximo del cuerpo de respuesta que se devuelve en el evento
const MAX_RESPONSE_BYTES: usize = 6 * 1024 * 1024;

/// Evento de entrada de una invocación
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionEvent {
    #[serde(default)]
    pub http_method: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub is_base64_encoded: bool,
    #[serde(default)]
    pub query_string_parameters: Option<HashMap<String, String>>,
    #[serde(default)]
    pub headers: Option<HashMap<String, String>>,
}

/// Respuesta de una invocación
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionResponse {
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    pub body: String,
    pub is_base64_encoded: bool,
}

/// Ejecutar un evento contra el router, en la ruta del recurso indicado.
///
/// Nunca falla: un evento inválido se convierte en una respuesta de error.
pub async fn invoke(app: Router, path: &str, event: FunctionEvent) -> FunctionResponse {
    let response = match build_request(path, event) {
        Ok(request) => {
            debug!("⚡ Invocación {} {}", request.method(), request.uri());
            match app.oneshot(request).await {
                Ok(response) => response,
                Err(never) => match never {},
            }
        }
        Err(e) => {
            let mut response = e.into_response();
            response
                .headers_mut()
                .insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
            response
        }
    };

    into_function_response(response).await
}

async fn into_function_response(response: Response) -> FunctionResponse {
    let status_code = response.status().as_u16();
    let headers = response
        .headers()
        .iter()
        .filter_map(|(name, value)| {
            value
                .to_str()
                .ok()
                .map(|value| (canonical_header_name(name.as_str()), value.to_string()))
        })
        .collect();

    let bytes = match to_bytes(response.into_body(), MAX_RESPONSE_BYTES).await {
        Ok(bytes) => bytes,
        Err(e) => {
            error!("❌ No se pudo leer el cuerpo de la respuesta: {}", e);
            return FunctionResponse {
                status_code: 500,
                headers: BTreeMap::from([
                    ("Access-Control-Allow-Origin".to_string(), "*".to_string()),
                    ("Content-Type".to_string(), "application/json".to_string()),
                ]),
                body: r#"{"error":"Internal Server Error"}"#.to_string(),
                is_base64_encoded: false,
            };
        }
    };

    let (body, is_base64_encoded) = match String::from_utf8(bytes.to_vec()) {
        Ok(text) => (text, false),
        Err(e) => (STANDARD.encode(e.into_bytes()), true),
    };

    FunctionResponse {
        status_code,
        headers,
        body,
        is_base64_encoded,
    }
}

fn build_request(path: &str, event: FunctionEvent) -> Result<Request<Body>, AppError> {
    let method = event.http_method.as_deref().unwrap_or("GET").trim().to_ascii_uppercase();
    let method = Method::from_bytes(method.as_bytes())
        .map_err(|_| bad_request_error(format!("invalid HTTP method '{}'", method)))?;

    let mut uri = path.to_string();
    if let Some(params) = event.query_string_parameters.filter(|params| !params.is_empty()) {
        // orden estable para que la URI sea reproducible en los logs
        let params: BTreeMap<_, _> = params.into_iter().collect();
        let query = params
            .iter()
            .map(|(key, value)| format!("{}={}", urlencoding::encode(key), urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&");
        uri.push('?');
        uri.push_str(&query);
    }

    let body = match event.body {
        Some(body) if event.is_base64_encoded => STANDARD
            .decode(body.as_bytes())
            .map_err(|e| bad_request_error(format!("invalid base64 body: {}", e)))?,
        Some(body) => body.into_bytes(),
        None => Vec::new(),
    };

    let mut builder = Request::builder().method(method).uri(uri);
    for (name, value) in event.headers.unwrap_or_default() {
        // la longitud se recalcula sobre el cuerpo ya decodificado
        if name.eq_ignore_ascii_case(header::CONTENT_LENGTH.as_str()) {
            continue;
        }
        builder = builder.header(name, value);
    }
    if !body.is_empty() {
        builder = builder.header(header::CONTENT_LENGTH, body.len());
    }

    builder
        .body(Body::from(body))
        .map_err(|e| bad_request_error(format!("invalid request: {}", e)))
}

/// `access-control-allow-origin` -> `Access-Control-Allow-Origin`
fn canonical_header_name(name: &str) -> String {
    name.split('-')
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join("-")
}
