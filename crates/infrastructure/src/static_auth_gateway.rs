use async_trait::async_trait;
use permatrix_application::AuthGateway;
use permatrix_core::{AppResult, UserIdentity};

/// Auth gateway that treats every caller as one fixed identity.
#[derive(Debug, Clone)]
pub struct StaticAuthGateway {
    identity: UserIdentity,
}

impl StaticAuthGateway {
    /// Creates a gateway answering with `identity`.
    #[must_use]
    pub fn new(identity: UserIdentity) -> Self {
        Self { identity }
    }
}

impl Default for StaticAuthGateway {
    fn default() -> Self {
        Self::new(UserIdentity::fallback())
    }
}

#[async_trait]
impl AuthGateway for StaticAuthGateway {
    async fn authenticate(&self, _cookie: Option<&str>) -> AppResult<UserIdentity> {
        Ok(self.identity.clone())
    }
}

#[cfg(test)]
mod tests {
    use permatrix_application::AuthGateway;

    use super::StaticAuthGateway;

    #[tokio::test]
    async fn answers_with_fallback_identity() {
        let identity = StaticAuthGateway::default().authenticate(None).await;
        assert_eq!(
            identity.ok().map(|identity| identity.display_name().to_owned()),
            Some("Current User".to_owned())
        );
    }
}
