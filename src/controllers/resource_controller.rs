use crate::dto::{CreatedResponse, MessageResponse, UpdateRequest};
use crate::models::Resource;
use crate::repositories::resource_repository::ResourceRepository;
use crate::utils::errors::AppError;
use sqlx::PgPool;
use tracing::info;

pub struct ResourceController<R> {
    repository: ResourceRepository<R>,
}

impl<R: Resource> ResourceController<R> {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: ResourceRepository::new(pool),
        }
    }

    pub async fn list(&self) -> Result<Vec<R::Response>, AppError> {
        let rows = self.repository.find_all().await?;
        Ok(rows.into_iter().map(R::Response::from).collect())
    }

    pub async fn create(&self, payload: R::Payload) -> Result<CreatedResponse, AppError> {
        let id = self.repository.insert(payload).await?;
        info!("✅ {} creado con id {}", R::NAME, id);

        Ok(CreatedResponse {
            id: id.to_string(),
            message: format!("{} created", R::NAME),
        })
    }

    // PUT es un reemplazo completo y responde 200 aunque el id no exista.
    // Ver DESIGN.md antes de cambiar cualquiera de las dos cosas.
    pub async fn update(&self, request: UpdateRequest<R::Payload>) -> Result<MessageResponse, AppError> {
        let affected = self.repository.update(request.id, request.fields).await?;
        info!("✅ {} {} actualizado ({} filas)", R::NAME, request.id, affected);

        Ok(MessageResponse {
            message: format!("{} updated", R::NAME),
        })
    }

    pub async fn delete(&self, id: i64) -> Result<MessageResponse, AppError> {
        let affected = self.repository.delete(id).await?;
        info!("✅ {} {} eliminado ({} filas)", R::NAME, id, affected);

        Ok(MessageResponse {
            message: format!("{} deleted", R::NAME),
        })
    }
}
