use std::sync::Arc;

use permatrix_application::{AuthGateway, ObjectAdminService, RoleAdminService, UserAdminService};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub object_admin_service: ObjectAdminService,
    pub role_admin_service: RoleAdminService,
    pub user_admin_service: UserAdminService,
    pub auth_gateway: Arc<dyn AuthGateway>,
    pub frontend_url: String,
}
