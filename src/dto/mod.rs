//! DTOs de la API
//!
//! Estructuras de entrada y salida en el formato del cable (camelCase).

pub mod client_dto;
pub mod employee_dto;
pub mod vehicle_dto;

use serde::{Deserialize, Serialize};

use crate::utils::wire;

/// Request de PUT: el `id` del registro más todos los campos escribibles.
///
/// Los campos que faltan se escriben como NULL (reemplazo completo).
#[derive(Debug, Deserialize)]
pub struct UpdateRequest<P> {
    #[serde(deserialize_with = "wire::deserialize_id")]
    pub id: i64,
    #[serde(flatten)]
    pub fields: P,
}

/// Query string de DELETE (`?id=`)
#[derive(Debug, Deserialize)]
pub struct DeleteQuery {
    #[serde(deserialize_with = "wire::deserialize_id")]
    pub id: i64,
}

/// Response de POST
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub id: String,
    pub message: String,
}

/// Response de PUT y DELETE
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::employee_dto::EmployeePayload;
    use serde_json::json;

    #[test]
    fn test_update_request_splits_id_and_fields() {
        let request: UpdateRequest<EmployeePayload> = serde_json::from_value(json!({
            "id": "12",
            "lastName": "Petrov",
            "position": "Mechanic"
        }))
        .unwrap();

        assert_eq!(request.id, 12);
        assert_eq!(request.fields.last_name.as_deref(), Some("Petrov"));
        assert_eq!(request.fields.position.as_deref(), Some("Mechanic"));
        // reemplazo completo: lo omitido queda en None
        assert!(request.fields.first_name.is_none());
        assert!(request.fields.birth_date.is_none());
    }

    #[test]
    fn test_update_request_requires_id() {
        let result = serde_json::from_value::<UpdateRequest<EmployeePayload>>(json!({
            "lastName": "Petrov"
        }));
        assert!(result.unwrap_err().to_string().contains("missing field `id`"));
    }
}
