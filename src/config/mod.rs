//! Configuración del proyecto
//!
//! Este módulo contiene la configuración de base de datos y de entorno.
//! Se construye una sola vez al arrancar el proceso, en `main`.

pub mod database;
pub mod environment;

pub use database::DatabaseConfig;
pub use environment::EnvironmentConfig;

use thiserror::Error;

/// Errores de configuración (fatales al arrancar)
#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("{0} must be set in environment variables")]
    Missing(&'static str),

    #[error("{key} has an invalid value: '{value}'")]
    Invalid { key: &'static str, value: String },
}

/// Configuración completa de la aplicación
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: EnvironmentConfig,
    pub database: DatabaseConfig,
}

impl AppConfig {
    /// Leer la configuración desde las variables de entorno del proceso
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Construir la configuración a partir de una función de búsqueda de claves
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            server: EnvironmentConfig::from_lookup(&lookup)?,
            database: DatabaseConfig::from_lookup(&lookup)?,
        })
    }
}

/// Leer una clave y parsearla, usando `default` si no existe
pub(crate) fn parse_or<T, F>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value: raw }),
        None => Ok(default),
    }
}
