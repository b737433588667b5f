use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use crate::controllers::resource_controller::ResourceController;
use crate::dto::{CreatedResponse, DeleteQuery, MessageResponse, UpdateRequest};
use crate::models::Resource;
use crate::state::AppState;
use crate::utils::errors::{bad_request_error, AppError, AppResult};
use crate::utils::extract::JsonBody;

/// Router de un recurso: GET, POST, PUT y DELETE sobre la misma ruta.
///
/// OPTIONS lo contesta la capa de CORS; cualquier otro método cae en el
/// fallback y recibe 405.
pub fn create_resource_router<R: Resource>() -> Router<AppState> {
    Router::new().route(
        "/",
        get(list_records::<R>)
            .post(create_record::<R>)
            .put(update_record::<R>)
            .delete(delete_record::<R>)
            .fallback(method_not_allowed),
    )
}

async fn list_records<R: Resource>(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<R::Response>>> {
    let controller = ResourceController::<R>::new(state.pool.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn create_record<R: Resource>(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<R::Payload>,
) -> AppResult<(StatusCode, Json<CreatedResponse>)> {
    let controller = ResourceController::<R>::new(state.pool.clone());
    let response = controller.create(payload).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn update_record<R: Resource>(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<UpdateRequest<R::Payload>>,
) -> AppResult<Json<MessageResponse>> {
    let controller = ResourceController::<R>::new(state.pool.clone());
    let response = controller.update(request).await?;
    Ok(Json(response))
}

async fn delete_record<R: Resource>(
    State(state): State<AppState>,
    query: Result<Query<DeleteQuery>, QueryRejection>,
) -> AppResult<Json<MessageResponse>> {
    let Query(query) = query.map_err(|rejection| bad_request_error(rejection.body_text()))?;
    let controller = ResourceController::<R>::new(state.pool.clone());
    let response = controller.delete(query.id).await?;
    Ok(Json(response))
}

async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
