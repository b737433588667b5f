//! Modelos de datos
//!
//! Cada tabla expuesta por la API implementa [`Resource`], que reúne su
//! SQL, sus tipos de cable y el orden de los parámetros posicionales.

pub mod client;
pub mod employee;
pub mod vehicle;

pub use client::Client;
pub use employee::Employee;
pub use vehicle::Vehicle;

use serde::{de::DeserializeOwned, Serialize};
use sqlx::postgres::{PgArguments, PgRow};
use sqlx::FromRow;

/// Un recurso CRUD respaldado por una tabla.
///
/// Los nombres de tabla y columnas son constantes de compilación; los
/// valores siempre se pasan como parámetros `$n`.
pub trait Resource: for<'r> FromRow<'r, PgRow> + Send + Unpin + 'static {
    /// Nombre singular para los mensajes ("Client")
    const NAME: &'static str;
    /// Ruta HTTP del recurso ("/clients")
    const PATH: &'static str;

    /// Todas las filas, la más reciente primero
    const SELECT_ALL: &'static str;
    /// Inserción con los campos de `Payload` en orden; `RETURNING id`
    const INSERT: &'static str;
    /// Actualización completa; el `id` es el último parámetro
    const UPDATE: &'static str;
    const DELETE: &'static str;

    /// Campos escribibles, tal y como llegan en el JSON
    type Payload: DeserializeOwned + Send + 'static;
    /// Representación de una fila en el JSON de salida
    type Response: From<Self> + Serialize + Send + 'static;

    /// Añadir los campos del payload en el orden de `INSERT`/`UPDATE`
    fn bind_payload(payload: Self::Payload, args: &mut PgArguments);
}
