use std::sync::Arc;

use permatrix_application::{
    ConsoleStore, ObjectAdminService, RoleAdminService, UserAdminService,
};
use permatrix_core::UserIdentity;
use permatrix_infrastructure::{InMemoryRoleGateway, StaticAuthGateway};

use crate::dev_seed::DemoData;
use crate::state::AppState;

pub(crate) const FRONTEND_URL: &str = "http://localhost:3000";

/// Builds state over the demo data with in-memory gateways and loaded roles.
pub(crate) async fn seeded_state() -> AppState {
    let demo_data = DemoData::load().unwrap_or_default();
    let store = Arc::new(ConsoleStore::new(
        demo_data.objects,
        Vec::new(),
        demo_data.users,
    ));
    let role_admin_service = RoleAdminService::new(
        Arc::new(InMemoryRoleGateway::new(demo_data.roles)),
        store.clone(),
    );
    assert!(role_admin_service.refresh_roles().await.is_ok());

    AppState {
        object_admin_service: ObjectAdminService::new(store.clone()),
        role_admin_service,
        user_admin_service: UserAdminService::new(store, 2),
        auth_gateway: Arc::new(StaticAuthGateway::default()),
        frontend_url: FRONTEND_URL.to_owned(),
    }
}

pub(crate) fn admin() -> UserIdentity {
    UserIdentity::new("Ada Admin", Some("ada@company.com".to_owned()))
}
