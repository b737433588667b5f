//! Modelo de Vehicle
//!
//! Mapea exactamente la tabla `vehicles`. Las columnas NUMERIC se leen como
//! `Decimal` para no perder precisión.

use rust_decimal::Decimal;
use sqlx::postgres::PgArguments;
use sqlx::{Arguments, FromRow};

use super::Resource;
use crate::dto::vehicle_dto::{VehiclePayload, VehicleResponse};

#[derive(Debug, Clone, FromRow)]
pub struct Vehicle {
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

impl Resource for Vehicle {
    const NAME: &'static str = "Vehicle";
    const PATH: &'static str = "/vehicles";

    const SELECT_ALL: &'static str = r#"
        SELECT id, brand, model, name, category, year, engine_number,
               chassis, body_number, color, power, displacement,
               engine_type, eco_class, max_weight
        FROM vehicles
        ORDER BY id DESC
    "#;

    const INSERT: &'static str = r#"
        INSERT INTO vehicles (brand, model, name, category, year, engine_number,
                              chassis, body_number, color, power, displacement,
                              engine_type, eco_class, max_weight)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
        RETURNING id
    "#;

    const UPDATE: &'static str = r#"
        UPDATE vehicles
        SET brand = $1, model = $2, name = $3, category = $4, year = $5,
            engine_number = $6, chassis = $7, body_number = $8, color = $9,
            power = $10, displacement = $11, engine_type = $12, eco_class = $13,
            max_weight = $14
        WHERE id = $15
    "#;

    const DELETE: &'static str = "DELETE FROM vehicles WHERE id = $1";

    type Payload = VehiclePayload;
    type Response = VehicleResponse;

    fn bind_payload(payload: VehiclePayload, args: &mut PgArguments) {
        args.add(payload.brand);
        args.add(payload.model);
        args.add(payload.name);
        args.add(payload.category);
        args.add(payload.year);
        args.add(payload.engine_number);
        args.add(payload.chassis);
        args.add(payload.body_number);
        args.add(payload.color);
        args.add(payload.power);
        args.add(payload.displacement);
        args.add(payload.engine_type);
        args.add(payload.eco_class);
        args.add(payload.max_weight);
    }
}
