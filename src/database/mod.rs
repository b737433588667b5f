//! Módulo de base de datos
//!
//! Maneja el pool de conexiones con PostgreSQL

pub mod connection;

pub use connection::{create_pool, mask_database_url};
