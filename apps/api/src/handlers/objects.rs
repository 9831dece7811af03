use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use permatrix_domain::RoleObject;

use crate::dto::{
    ObjectCatalogActionRequest, ObjectCatalogStateResponse, ObjectListQuery, RoleObjectDto,
};
use crate::error::ApiResult;
use crate::state::AppState;

pub async fn list_objects_handler(
    State(state): State<AppState>,
    Query(query): Query<ObjectListQuery>,
) -> Json<Vec<RoleObjectDto>> {
    let objects = state
        .object_admin_service
        .list_objects(query.query.as_deref())
        .await
        .into_iter()
        .map(RoleObjectDto::from)
        .collect();

    Json(objects)
}

pub async fn get_object_handler(
    State(state): State<AppState>,
    Path(object_id): Path<String>,
) -> ApiResult<Json<RoleObjectDto>> {
    let object = state.object_admin_service.get_object(&object_id).await?;
    Ok(Json(RoleObjectDto::from(object)))
}

pub async fn create_object_handler(
    State(state): State<AppState>,
    Json(payload): Json<RoleObjectDto>,
) -> ApiResult<(StatusCode, Json<RoleObjectDto>)> {
    let object = state
        .object_admin_service
        .create_object(RoleObject::from(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(RoleObjectDto::from(object))))
}

pub async fn update_object_handler(
    State(state): State<AppState>,
    Path(object_id): Path<String>,
    Json(payload): Json<RoleObjectDto>,
) -> ApiResult<Json<RoleObjectDto>> {
    let object = state
        .object_admin_service
        .update_object(&object_id, RoleObject::from(payload))
        .await?;

    Ok(Json(RoleObjectDto::from(object)))
}

pub async fn object_catalog_state_handler(
    State(state): State<AppState>,
) -> Json<ObjectCatalogStateResponse> {
    Json(ObjectCatalogStateResponse::from(
        state.object_admin_service.state().await,
    ))
}

pub async fn dispatch_object_action_handler(
    State(state): State<AppState>,
    Json(payload): Json<ObjectCatalogActionRequest>,
) -> ApiResult<Json<ObjectCatalogStateResponse>> {
    let catalog = state.object_admin_service.dispatch(payload.into()).await?;
    Ok(Json(ObjectCatalogStateResponse::from(catalog)))
}
