use async_trait::async_trait;
use permatrix_application::RoleGateway;
use permatrix_core::{AppError, AppResult};
use permatrix_domain::Role;
use tracing::debug;
use url::Url;

use crate::remote_status::error_for_response;

/// Role gateway backed by the remote Role API.
///
/// Failures are reported once; nothing is retried.
pub struct HttpRoleGateway {
    http_client: reqwest::Client,
    base_url: Url,
}

impl HttpRoleGateway {
    /// Creates a gateway for the API rooted at `base_url`, e.g.
    /// `https://roles.example.com/Role`.
    pub fn new(http_client: reqwest::Client, base_url: &str) -> AppResult<Self> {
        let mut base_url = Url::parse(base_url.trim()).map_err(|error| {
            AppError::Validation(format!("invalid role API url '{base_url}': {error}"))
        })?;

        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Ok(Self {
            http_client,
            base_url,
        })
    }

    fn endpoint(&self, name: &str) -> AppResult<Url> {
        self.base_url.join(name).map_err(|error| {
            AppError::Internal(format!("failed to build role API url for '{name}': {error}"))
        })
    }

    async fn send(&self, request: reqwest::RequestBuilder, operation: &str) -> AppResult<reqwest::Response> {
        let response = request.send().await.map_err(|error| {
            AppError::Upstream(format!("{operation} transport error: {error}"))
        })?;

        if !response.status().is_success() {
            return Err(error_for_response(response, operation).await);
        }

        debug!(operation, status = %response.status(), "role API call succeeded");
        Ok(response)
    }
}

#[async_trait]
impl RoleGateway for HttpRoleGateway {
    async fn list_roles(&self) -> AppResult<Vec<Role>> {
        let url = self.endpoint("get_all_roles")?;
        let response = self.send(self.http_client.get(url), "list roles").await?;

        response.json::<Vec<Role>>().await.map_err(|error| {
            AppError::Upstream(format!("role API returned an unreadable role list: {error}"))
        })
    }

    async fn create_role(&self, role: &Role) -> AppResult<()> {
        let url = self.endpoint("create_role")?;
        self.send(self.http_client.post(url).json(role), "create role")
            .await?;
        Ok(())
    }

    async fn update_role(&self, _role_id: &str, role: &Role) -> AppResult<()> {
        let url = self.endpoint("update_role")?;
        self.send(self.http_client.put(url).json(role), "update role")
            .await?;
        Ok(())
    }

    async fn delete_role(&self, role_id: &str) -> AppResult<()> {
        let mut url = self.endpoint("delete_role")?;
        url.query_pairs_mut().append_pair("role_id", role_id);
        self.send(self.http_client.delete(url), "delete role")
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests;
