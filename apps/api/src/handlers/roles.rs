use axum::Json;
use axum::extract::{Extension, Path, Query, State};
use axum::http::StatusCode;

use permatrix_application::{CreateRoleInput, RoleCatalogAction, RoleDetails};
use permatrix_core::UserIdentity;

use crate::dto::{
    CreateRoleRequest, FilterOptionsResponse, RoleDto, RoleListQuery, RoleSelectionActionRequest,
    RoleSelectionResponse, UpdateRoleRequest,
};
use crate::error::ApiResult;
use crate::state::AppState;

mod catalog;
mod selection;

pub use catalog::{
    create_role_handler, delete_role_handler, filter_options_handler, list_roles_handler,
    refresh_roles_handler, update_role_handler,
};
pub use selection::{
    dispatch_role_selection_handler, role_selection_handler, save_role_selection_handler,
};

#[cfg(test)]
mod tests;
