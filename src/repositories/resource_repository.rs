//! Acceso a PostgreSQL para un recurso
//!
//! Cada operación ejecuta una sola sentencia parametrizada. La conexión (o la
//! transacción en las escrituras) se toma del pool al empezar y se devuelve al
//! salir del scope, también cuando la sentencia falla. Una transacción que no
//! llega a `commit` hace rollback al soltarse.

use sqlx::postgres::{PgArguments, PgPool};
use sqlx::{Arguments, Postgres};
use std::marker::PhantomData;
use tracing::debug;

use crate::models::Resource;
use crate::utils::errors::AppError;

pub struct ResourceRepository<R> {
    pool: PgPool,
    _resource: PhantomData<fn() -> R>,
}

impl<R: Resource> ResourceRepository<R> {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            _resource: PhantomData,
        }
    }

    /// Todas las filas, la más reciente primero. Solo lectura: no hay commit.
    pub async fn find_all(&self) -> Result<Vec<R>, AppError> {
        let mut conn = self.pool.acquire().await?;

        let rows = sqlx::query_as::<_, R>(R::SELECT_ALL)
            .fetch_all(&mut *conn)
            .await?;

        debug!("📋 {} filas leídas para {}", rows.len(), R::PATH);
        Ok(rows)
    }

    /// Insertar y devolver el id generado por la base de datos
    pub async fn insert(&self, payload: R::Payload) -> Result<i64, AppError> {
        let mut args = PgArguments::default();
        R::bind_payload(payload, &mut args);

        let mut tx = self.pool.begin().await?;
        let id = sqlx::query_scalar_with::<Postgres, i64, _>(R::INSERT, args)
            .fetch_one(&mut *tx)
            .await?;
        tx.commit().await?;

        Ok(id)
    }

    /// Reemplazar todos los campos de la fila `id`.
    ///
    /// No se comprueba que exista: si no afecta a ninguna fila no es un error.
    pub async fn update(&self, id: i64, payload: R::Payload) -> Result<u64, AppError> {
        let mut args = PgArguments::default();
        R::bind_payload(payload, &mut args);
        args.add(id);

        let mut tx = self.pool.begin().await?;
        let result = sqlx::query_with(R::UPDATE, args).execute(&mut *tx).await?;
        tx.commit().await?;

        debug!("✏️ UPDATE {} id={} afectó {} filas", R::PATH, id, result.rows_affected());
        Ok(result.rows_affected())
    }

    /// Borrar la fila `id`, sin comprobar que exista
    pub async fn delete(&self, id: i64) -> Result<u64, AppError> {
        let mut tx = self.pool.begin().await?;
        let result = sqlx::query(R::DELETE).bind(id).execute(&mut *tx).await?;
        tx.commit().await?;

        debug!("🗑️ DELETE {} id={} afectó {} filas", R::PATH, id, result.rows_affected());
        Ok(result.rows_affected())
    }
}
