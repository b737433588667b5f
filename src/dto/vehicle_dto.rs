use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::Vehicle;
use crate::utils::wire;

// Campos escribibles de un vehículo.
// Los numéricos aceptan número o string; `""` equivale a null.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehiclePayload {
    pub brand: Option<String>,
    pub model: Option<String>,
    pub name: Option<String>,
    pub category: Option<String>,
    #[serde(default, deserialize_with = "wire::deserialize_opt_i32")]
    pub year: Option<i32>,
    pub engine_number: Option<String>,
    pub chassis: Option<String>,
    pub body_number: Option<String>,
    pub color: Option<String>,
    #[serde(default, deserialize_with = "wire::deserialize_opt_decimal")]
    pub power: Option<Decimal>,
    #[serde(default, deserialize_with = "wire::deserialize_opt_decimal")]
    pub displacement: Option<Decimal>,
    pub engine_type: Option<String>,
    pub eco_class: Option<String>,
    #[serde(default, deserialize_with = "wire::deserialize_opt_decimal")]
    pub max_weight: Option<Decimal>,
}

// Response de vehículo; los Decimal se serializan como string
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleResponse {
    #[serde(serialize_with = "wire::serialize_id")]
    pub id: i64,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub name: Option<String>,
    pub category: Option<String>,
    pub year: Option<i32>,
    pub engine_number: Option<String>,
    pub chassis: Option<String>,
    pub body_number: Option<String>,
    pub color: Option<String>,
    pub power: Option<Decimal>,
    pub displacement: Option<Decimal>,
    pub engine_type: Option<String>,
    pub eco_class: Option<String>,
    pub max_weight: Option<Decimal>,
}

impl From<Vehicle> for VehicleResponse {
    fn from(vehicle: Vehicle) -> Self {
        Self {
            id: vehicle.id,
            brand: vehicle.brand,
            model: vehicle.model,
            name: vehicle.name,
            category: vehicle.category,
            year: vehicle.year,
            engine_number: vehicle.engine_number,
            chassis: vehicle.chassis,
            body_number: vehicle.body_number,
            color: vehicle.color,
            power: vehicle.power,
            displacement: vehicle.displacement,
            engine_type: vehicle.engine_type,
            eco_class: vehicle.eco_class,
            max_weight: vehicle.max_weight,
        }
    }
}
