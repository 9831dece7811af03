use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use permatrix_application::visible_pages;
use permatrix_domain::User;

use crate::dto::{
    AssignRolesRequest, ProfilePictureRequest, UserDto, UserListRequest, UserPageResponse,
};
use crate::error::ApiResult;
use crate::state::AppState;

pub async fn list_users_handler(
    State(state): State<AppState>,
    Query(query): Query<UserListRequest>,
) -> ApiResult<Json<UserPageResponse>> {
    let list_query = query.to_list_query()?;
    let page = state.user_admin_service.list_users(&list_query).await;
    let markers = visible_pages(page.page, page.total_pages);

    Ok(Json(UserPageResponse::from_page(page, markers)))
}

pub async fn get_user_handler(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
) -> ApiResult<Json<UserDto>> {
    let user = state.user_admin_service.get_user(&employee_id).await?;
    Ok(Json(UserDto::from(user)))
}

pub async fn create_user_handler(
    State(state): State<AppState>,
    Json(payload): Json<UserDto>,
) -> ApiResult<(StatusCode, Json<UserDto>)> {
    let user = state
        .user_admin_service
        .create_user(User::try_from(payload)?)
        .await?;

    Ok((StatusCode::CREATED, Json(UserDto::from(user))))
}

pub async fn update_user_handler(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
    Json(payload): Json<UserDto>,
) -> ApiResult<Json<UserDto>> {
    let user = state
        .user_admin_service
        .update_user(&employee_id, User::try_from(payload)?)
        .await?;

    Ok(Json(UserDto::from(user)))
}

pub async fn delete_user_handler(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
) -> ApiResult<StatusCode> {
    state.user_admin_service.delete_user(&employee_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn update_profile_picture_handler(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
    Json(payload): Json<ProfilePictureRequest>,
) -> ApiResult<Json<UserDto>> {
    let user = state
        .user_admin_service
        .update_profile_picture(&employee_id, payload.profile_picture)
        .await?;

    Ok(Json(UserDto::from(user)))
}

pub async fn assign_user_roles_handler(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
    Json(payload): Json<AssignRolesRequest>,
) -> ApiResult<Json<UserDto>> {
    let user = state
        .user_admin_service
        .assign_roles(&employee_id, &payload.role_ids)
        .await?;

    Ok(Json(UserDto::from(user)))
}
