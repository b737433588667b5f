use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::Employee;
use crate::utils::wire;

// Campos escribibles de un empleado
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeePayload {
    pub last_name: Option<String>,
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    #[serde(default, deserialize_with = "wire::deserialize_date")]
    pub birth_date: Option<NaiveDate>,
    pub position: Option<String>,
}

// Response de empleado
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeResponse {
    #[serde(serialize_with = "wire::serialize_id")]
    pub id: i64,
    pub last_name: Option<String>,
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    #[serde(serialize_with = "wire::serialize_date")]
    pub birth_date: Option<NaiveDate>,
    pub position: Option<String>,
}

impl From<Employee> for EmployeeResponse {
    fn from(employee: Employee) -> Self {
        Self {
            id: employee.id,
            last_name: employee.last_name,
            first_name: employee.first_name,
            middle_name: employee.middle_name,
            birth_date: employee.birth_date,
            position: employee.position,
        }
    }
}
