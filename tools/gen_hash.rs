//! Genera el hash bcrypt de una contraseña de administrador
//!
//! Uso: gen_hash <password> [username]

use anyhow::{bail, Result};
use crm_backend::utils::password::{hash_password, password_update_statement, ADMIN_HASH_COST};
use std::env;

fn main() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    let Some(password) = args.first() else {
        bail!("uso: gen_hash <password> [username]");
    };
    let username = args.get(1).map(String::as_str).unwrap_or("admin");

    let hashed = hash_password(password, ADMIN_HASH_COST)?;

    println!("Hash: {}", hashed);
    println!();
    println!("To use in migration:");
    println!("{}", password_update_statement(username, &hashed));
    Ok(())
}
