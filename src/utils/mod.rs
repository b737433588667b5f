//! Utilidades del sistema
//!
//! Este módulo contiene utilidades para manejo de errores, formato de los
//! valores en el cable, extractores y hash de contraseñas.

pub mod errors;
pub mod extract;
pub mod password;
pub mod wire;
