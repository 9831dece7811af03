use super::*;

pub async fn role_selection_handler(State(state): State<AppState>) -> Json<RoleSelectionResponse> {
    Json(RoleSelectionResponse::from(
        state.role_admin_service.catalog().await,
    ))
}

pub async fn dispatch_role_selection_handler(
    State(state): State<AppState>,
    Json(payload): Json<RoleSelectionActionRequest>,
) -> ApiResult<Json<RoleSelectionResponse>> {
    let action = RoleCatalogAction::try_from(payload)?;
    let catalog = state.role_admin_service.dispatch_selection(action).await?;

    Ok(Json(RoleSelectionResponse::from(catalog)))
}

/// Writes the working selection of the selected role back through the role gateway.
pub async fn save_role_selection_handler(
    State(state): State<AppState>,
    Extension(user): Extension<UserIdentity>,
) -> ApiResult<Json<RoleDto>> {
    let role = state.role_admin_service.save_permissions(&user).await?;
    Ok(Json(RoleDto::from(role)))
}
