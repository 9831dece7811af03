use async_trait::async_trait;

use permatrix_core::{AppResult, UserIdentity};
use permatrix_domain::Role;

/// Remote service owning the persisted role list.
#[async_trait]
pub trait RoleGateway: Send + Sync {
    /// Fetches every role.
    async fn list_roles(&self) -> AppResult<Vec<Role>>;

    /// Persists a new role.
    async fn create_role(&self, role: &Role) -> AppResult<()>;

    /// Replaces the role currently stored under `role_id` with the full body
    /// given. The body may carry a new id.
    async fn update_role(&self, role_id: &str, role: &Role) -> AppResult<()>;

    /// Deletes a role by id.
    async fn delete_role(&self, role_id: &str) -> AppResult<()>;
}

/// Session check against the sign-in service.
#[async_trait]
pub trait AuthGateway: Send + Sync {
    /// Resolves the caller from the forwarded cookie header.
    async fn authenticate(&self, cookie: Option<&str>) -> AppResult<UserIdentity>;
}
