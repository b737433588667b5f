//! Modelo de Client
//!
//! Mapea exactamente la tabla `clients`.

use chrono::NaiveDate;
use sqlx::postgres::PgArguments;
use sqlx::{Arguments, FromRow};

use super::Resource;
use crate::dto::client_dto::{ClientPayload, ClientResponse};

#[derive(Debug, Clone, FromRow)]
pub struct Client {
    pub id: i64,
    pub last_name: Option<String>,
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub passport_series: Option<String>,
    pub passport_number: Option<String>,
    pub license_series: Option<String>,
    pub license_number: Option<String>,
    pub license_date: Option<NaiveDate>,
    pub phone: Option<String>,
}

impl Resource for Client {
    const NAME: &'static str = "Client";
    const PATH: &'static str = "/clients";

    const SELECT_ALL: &'static str = r#"
        SELECT id, last_name, first_name, middle_name, birth_date,
               passport_series, passport_number, license_series,
               license_number, license_date, phone
        FROM clients
        ORDER BY id DESC
    "#;

    const INSERT: &'static str = r#"
        INSERT INTO clients (last_name, first_name, middle_name, birth_date,
                             passport_series, passport_number, license_series,
                             license_number, license_date, phone)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
        RETURNING id
    "#;

    const UPDATE: &'static str = r#"
        UPDATE clients
        SET last_name = $1, first_name = $2, middle_name = $3, birth_date = $4,
            passport_series = $5, passport_number = $6, license_series = $7,
            license_number = $8, license_date = $9, phone = $10
        WHERE id = $11
    "#;

    const DELETE: &'static str = "DELETE FROM clients WHERE id = $1";

    type Payload = ClientPayload;
    type Response = ClientResponse;

    fn bind_payload(payload: ClientPayload, args: &mut PgArguments) {
        args.add(payload.last_name);
        args.add(payload.first_name);
        args.add(payload.middle_name);
        args.add(payload.birth_date);
        args.add(payload.passport_series);
        args.add(payload.passport_number);
        args.add(payload.license_series);
        args.add(payload.license_number);
        args.add(payload.license_date);
        args.add(payload.phone);
    }
}

