use std::sync::Arc;
use std::time::Duration;

use permatrix_application::{
    AuthGateway, ConsoleStore, ObjectAdminService, RoleAdminService, RoleGateway,
    UserAdminService,
};
use permatrix_core::{AppError, AppResult};
use permatrix_infrastructure::{
    HttpAuthGateway, HttpRoleGateway, InMemoryRoleGateway, StaticAuthGateway,
};
use tracing::{info, warn};

use crate::api_config::ApiConfig;
use crate::dev_seed::DemoData;
use crate::state::AppState;

pub async fn build_app_state(config: &ApiConfig) -> AppResult<AppState> {
    let demo_data = if config.seed_demo_data {
        DemoData::load()?
    } else {
        DemoData::default()
    };

    let http_client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.role_api_timeout_secs))
        .build()
        .map_err(|error| AppError::Internal(format!("failed to build http client: {error}")))?;

    let role_gateway = build_role_gateway(config, http_client.clone(), &demo_data)?;
    let auth_gateway = build_auth_gateway(config, http_client)?;

    // Roles arrive through the gateway on the first refresh.
    let store = Arc::new(ConsoleStore::new(
        demo_data.objects,
        Vec::new(),
        demo_data.users,
    ));

    let role_admin_service = RoleAdminService::new(role_gateway, store.clone());
    if let Err(error) = role_admin_service.refresh_roles().await {
        warn!(error = %error, "initial role load failed");
    }

    Ok(AppState {
        object_admin_service: ObjectAdminService::new(store.clone()),
        role_admin_service,
        user_admin_service: UserAdminService::new(store, config.users_page_size),
        auth_gateway,
        frontend_url: config.frontend_url.clone(),
    })
}

fn build_role_gateway(
    config: &ApiConfig,
    http_client: reqwest::Client,
    demo_data: &DemoData,
) -> AppResult<Arc<dyn RoleGateway>> {
    match config.role_api_url.as_deref() {
        Some(base_url) => {
            info!(base_url = %base_url, "using remote role api");
            Ok(Arc::new(HttpRoleGateway::new(http_client, base_url)?))
        }
        None => {
            info!("ROLE_API_URL not set, using in-memory role gateway");
            Ok(Arc::new(InMemoryRoleGateway::new(demo_data.roles.clone())))
        }
    }
}

fn build_auth_gateway(
    config: &ApiConfig,
    http_client: reqwest::Client,
) -> AppResult<Arc<dyn AuthGateway>> {
    match config.auth_api_url.as_deref() {
        Some(base_url) => {
            info!(base_url = %base_url, "using remote auth api");
            Ok(Arc::new(HttpAuthGateway::new(http_client, base_url)?))
        }
        None => {
            info!("AUTH_API_URL not set, requests run as the fallback identity");
            Ok(Arc::new(StaticAuthGateway::default()))
        }
    }
}
