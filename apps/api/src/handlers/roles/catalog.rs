use super::*;

pub async fn list_roles_handler(
    State(state): State<AppState>,
    Query(query): Query<RoleListQuery>,
) -> ApiResult<Json<Vec<RoleDto>>> {
    let stored = state.role_admin_service.stored_query().await;
    let role_query = query.to_role_query(&stored)?;
    let roles = state
        .role_admin_service
        .list_roles(&role_query)
        .await
        .into_iter()
        .map(RoleDto::from)
        .collect();

    Ok(Json(roles))
}

pub async fn refresh_roles_handler(State(state): State<AppState>) -> ApiResult<Json<Vec<RoleDto>>> {
    let roles = state
        .role_admin_service
        .refresh_roles()
        .await?
        .into_iter()
        .map(RoleDto::from)
        .collect();

    Ok(Json(roles))
}

pub async fn filter_options_handler(
    State(state): State<AppState>,
    Query(query): Query<RoleListQuery>,
) -> Json<FilterOptionsResponse> {
    let stored = state.role_admin_service.stored_query().await;
    let options = state
        .role_admin_service
        .filter_options(&query.filters_or(&stored.filters))
        .await;

    Json(FilterOptionsResponse::from(options))
}

pub async fn create_role_handler(
    State(state): State<AppState>,
    Extension(user): Extension<UserIdentity>,
    Json(payload): Json<CreateRoleRequest>,
) -> ApiResult<(StatusCode, Json<RoleDto>)> {
    let input = CreateRoleInput::try_from(payload)?;
    let role = state.role_admin_service.create_role(&user, input).await?;

    Ok((StatusCode::CREATED, Json(RoleDto::from(role))))
}

pub async fn update_role_handler(
    State(state): State<AppState>,
    Extension(user): Extension<UserIdentity>,
    Path(role_id): Path<String>,
    Json(payload): Json<UpdateRoleRequest>,
) -> ApiResult<Json<RoleDto>> {
    let details = RoleDetails::try_from(payload)?;
    let role = state
        .role_admin_service
        .update_role_details(&user, &role_id, details)
        .await?;

    Ok(Json(RoleDto::from(role)))
}

pub async fn delete_role_handler(
    State(state): State<AppState>,
    Path(role_id): Path<String>,
) -> ApiResult<StatusCode> {
    state.role_admin_service.delete_role(&role_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
