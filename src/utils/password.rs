//! Hash de contraseñas con bcrypt

use bcrypt::{hash, BcryptError};

/// Coste usado para las contraseñas de administrador
pub const ADMIN_HASH_COST: u32 = 12;

/// Generar el hash bcrypt de una contraseña
pub fn hash_password(password: &str, cost: u32) -> Result<String, BcryptError> {
    hash(password, cost)
}

/// Sentencia SQL para fijar el hash de un usuario existente
pub fn password_update_statement(username: &str, password_hash: &str) -> String {
    format!(
        "UPDATE users SET password_hash = '{}' WHERE username = '{}';",
        password_hash,
        username.replace('\'', "''")
    )
}
