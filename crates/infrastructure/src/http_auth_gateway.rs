use async_trait::async_trait;
use permatrix_application::AuthGateway;
use permatrix_core::{AppError, AppResult, UserIdentity};
use reqwest::header::COOKIE;
use serde::Deserialize;
use url::Url;

use crate::remote_status::error_for_response;

#[derive(Debug, Deserialize)]
struct AuthenticateResponse {
    user: AuthenticatedUser,
}

#[derive(Debug, Deserialize)]
struct AuthenticatedUser {
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    name: String,
}

/// Auth gateway calling `GET /auth/authenticate` with the caller's cookie.
pub struct HttpAuthGateway {
    http_client: reqwest::Client,
    authenticate_url: Url,
}

impl HttpAuthGateway {
    /// Creates a gateway for the auth service at `base_url`.
    pub fn new(http_client: reqwest::Client, base_url: &str) -> AppResult<Self> {
        let invalid = |error: url::ParseError| {
            AppError::Validation(format!("invalid auth API url '{base_url}': {error}"))
        };
        let mut base = Url::parse(base_url.trim()).map_err(invalid)?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        let authenticate_url = base.join("auth/authenticate").map_err(invalid)?;

        Ok(Self {
            http_client,
            authenticate_url,
        })
    }
}

#[async_trait]
impl AuthGateway for HttpAuthGateway {
    async fn authenticate(&self, cookie: Option<&str>) -> AppResult<UserIdentity> {
        let cookie = cookie
            .filter(|value| !value.trim().is_empty())
            .ok_or_else(|| AppError::Unauthorized("missing session cookie".to_owned()))?;

        let response = self
            .http_client
            .get(self.authenticate_url.clone())
            .header(COOKIE, cookie)
            .send()
            .await
            .map_err(|error| AppError::Upstream(format!("authenticate transport error: {error}")))?;

        if !response.status().is_success() {
            return Err(error_for_response(response, "authenticate").await);
        }

        let payload = response.json::<AuthenticateResponse>().await.map_err(|error| {
            AppError::Upstream(format!("auth API returned an unreadable session: {error}"))
        })?;

        Ok(UserIdentity::new(payload.user.name, payload.user.email))
    }
}
