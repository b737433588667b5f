//! Modelo de Employee

use chrono::NaiveDate;
use sqlx::postgres::PgArguments;
use sqlx::{Arguments, FromRow};

use super::Resource;
use crate::dto::employee_dto::{EmployeePayload, EmployeeResponse};

#[derive(Debug, Clone, FromRow)]
pub struct Employee {
    pub id: i64,
    pub last_name: Option<String>,
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub position: Option<String>,
}

impl Resource for Employee {
    const NAME: &'static str = "Employee";
    const PATH: &'static str = "/employees";

    const SELECT_ALL: &'static str = r#"
        SELECT id, last_name, first_name, middle_name, birth_date, position
        FROM employees
        ORDER BY id DESC
    "#;

    const INSERT: &'static str = r#"
        INSERT INTO employees (last_name, first_name, middle_name, birth_date, position)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id
    "#;

    const UPDATE: &'static str = r#"
        UPDATE employees
        SET last_name = $1, first_name = $2, middle_name = $3, birth_date = $4, position = $5
        WHERE id = $6
    "#;

    const DELETE: &'static str = "DELETE FROM employees WHERE id = $1";

    type Payload = EmployeePayload;
    type Response = EmployeeResponse;

    fn bind_payload(payload: EmployeePayload, args: &mut PgArguments) {
        args.add(payload.last_name);
        args.add(payload.first_name);
        args.add(payload.middle_name);
        args.add(payload.birth_date);
        args.add(payload.position);
    }
}
