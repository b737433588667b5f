use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::Client;
use crate::utils::wire;

// Campos escribibles de un cliente
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientPayload {
    pub last_name: Option<String>,
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    #[serde(default, deserialize_with = "wire::deserialize_date")]
    pub birth_date: Option<NaiveDate>,
    pub passport_series: Option<String>,
    pub passport_number: Option<String>,
    pub license_series: Option<String>,
    pub license_number: Option<String>,
    #[serde(default, deserialize_with = "wire::deserialize_date")]
    pub license_date: Option<NaiveDate>,
    pub phone: Option<String>,
}

// Response de cliente
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientResponse {
    #[serde(serialize_with = "wire::serialize_id")]
    pub id: i64,
    pub last_name: Option<String>,
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    #[serde(serialize_with = "wire::serialize_date")]
    pub birth_date: Option<NaiveDate>,
    pub passport_series: Option<String>,
    pub passport_number: Option<String>,
    pub license_series: Option<String>,
    pub license_number: Option<String>,
    #[serde(serialize_with = "wire::serialize_date")]
    pub license_date: Option<NaiveDate>,
    pub phone: Option<String>,
}

impl From<Client> for ClientResponse {
    fn from(client: Client) -> Self {
        Self {
            id: client.id,
            last_name: client.last_name,
            first_name: client.first_name,
            middle_name: client.middle_name,
            birth_date: client.birth_date,
            passport_series: client.passport_series,
            passport_number: client.passport_number,
            license_series: client.license_series,
            license_number: client.license_number,
            license_date: client.license_date,
            phone: client.phone,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_response_matches_wire_format() {
        let client = Client {
            id: 1,
            last_name: Some("Ivanov".to_string()),
            first_name: Some("Ivan".to_string()),
            middle_name: None,
            birth_date: None,
            passport_series: None,
            passport_number: None,
            license_series: None,
            license_number: None,
            license_date: NaiveDate::from_ymd_opt(2015, 6, 1),
            phone: None,
        };

        let value = serde_json::to_value(ClientResponse::from(client)).unwrap();
        assert_eq!(
            value,
            json!({
                "id": "1",
                "lastName": "Ivanov",
                "firstName": "Ivan",
                "middleName": null,
                "birthDate": "",
                "passportSeries": null,
                "passportNumber": null,
                "licenseSeries": null,
                "licenseNumber": null,
                "licenseDate": "2015-06-01",
                "phone": null
            })
        );
    }

    #[test]
    fn test_payload_accepts_frontend_form() {
        // el formulario envía "" en las fechas que no se rellenan
        let payload: ClientPayload = serde_json::from_value(json!({
            "lastName": "Ivanov",
            "firstName": "Ivan",
            "birthDate": "",
            "licenseDate": "2015-06-01",
            "phone": "+7 900 000-00-00"
        }))
        .unwrap();

        assert_eq!(payload.birth_date, None);
        assert_eq!(payload.license_date, NaiveDate::from_ymd_opt(2015, 6, 1));
        assert_eq!(payload.phone.as_deref(), Some("+7 900 000-00-00"));
        assert!(payload.passport_series.is_none());
    }
}
