//! Extractores de Axum con rechazo en formato `AppError`

use async_trait::async_trait;
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

use super::errors::{bad_request_error, AppError};

/// Cuerpo JSON tipado.
///
/// A diferencia de `axum::Json` no exige `Content-Type`, y un cuerpo vacío
/// se interpreta como `{}`.
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| bad_request_error(rejection.body_text()))?;

        parse_body(&bytes).map(JsonBody)
    }
}

pub(crate) fn parse_body<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, AppError> {
    let bytes = if bytes.iter().all(u8::is_ascii_whitespace) {
        b"{}".as_slice()
    } else {
        bytes
    };

    serde_json::from_slice(bytes)
        .map_err(|e| bad_request_error(format!("Invalid JSON body: {}", e)))
}
