use async_trait::async_trait;
use permatrix_application::RoleGateway;
use permatrix_core::{AppError, AppResult};
use permatrix_domain::Role;
use tokio::sync::RwLock;

/// In-memory role gateway used when no remote Role API is configured.
#[derive(Debug, Default)]
pub struct InMemoryRoleGateway {
    roles: RwLock<Vec<Role>>,
}

impl InMemoryRoleGateway {
    /// Creates a gateway holding `roles`.
    #[must_use]
    pub fn new(roles: Vec<Role>) -> Self {
        Self {
            roles: RwLock::new(roles),
        }
    }
}

#[async_trait]
impl RoleGateway for InMemoryRoleGateway {
    async fn list_roles(&self) -> AppResult<Vec<Role>> {
        Ok(self.roles.read().await.clone())
    }

    async fn create_role(&self, role: &Role) -> AppResult<()> {
        let mut roles = self.roles.write().await;

        if roles.iter().any(|stored| stored.role_id == role.role_id) {
            return Err(AppError::Conflict(format!(
                "role '{}' already exists",
                role.role_id
            )));
        }

        roles.push(role.clone());
        Ok(())
    }

    async fn update_role(&self, role_id: &str, role: &Role) -> AppResult<()> {
        let mut roles = self.roles.write().await;

        if role.role_id != role_id && roles.iter().any(|stored| stored.role_id == role.role_id) {
            return Err(AppError::Conflict(format!(
                "role '{}' already exists",
                role.role_id
            )));
        }

        let stored = roles
            .iter_mut()
            .find(|stored| stored.role_id == role_id)
            .ok_or_else(|| AppError::NotFound(format!("role '{role_id}' does not exist")))?;
        *stored = role.clone();
        Ok(())
    }

    async fn delete_role(&self, role_id: &str) -> AppResult<()> {
        let mut roles = self.roles.write().await;
        let before = roles.len();
        roles.retain(|stored| stored.role_id != role_id);

        if roles.len() == before {
            return Err(AppError::NotFound(format!(
                "role '{role_id}' does not exist"
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
