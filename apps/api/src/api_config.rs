use std::env;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

use permatrix_application::DEFAULT_USERS_PAGE_SIZE;
use permatrix_core::AppError;
use tracing_subscriber::EnvFilter;
use url::Url;

const DEFAULT_ROLE_API_TIMEOUT_SECS: u64 = 15;

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub api_host: String,
    pub api_port: u16,
    pub frontend_url: String,
    pub role_api_url: Option<String>,
    pub auth_api_url: Option<String>,
    pub role_api_timeout_secs: u64,
    pub users_page_size: usize,
    pub seed_demo_data: bool,
}

impl ApiConfig {
    pub fn load() -> Result<Self, AppError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the configuration from any variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let non_empty = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let frontend_url =
            non_empty("FRONTEND_URL").unwrap_or_else(|| "http://localhost:3000".to_owned());
        validate_url("FRONTEND_URL", frontend_url.as_str())?;

        let role_api_url = non_empty("ROLE_API_URL");
        if let Some(value) = role_api_url.as_deref() {
            validate_url("ROLE_API_URL", value)?;
        }
        let auth_api_url = non_empty("AUTH_API_URL");
        if let Some(value) = auth_api_url.as_deref() {
            validate_url("AUTH_API_URL", value)?;
        }

        let api_host = non_empty("API_HOST").unwrap_or_else(|| "127.0.0.1".to_owned());
        let api_port = parsed_or("API_PORT", non_empty("API_PORT"), 3001_u16)?;

        let role_api_timeout_secs = parsed_or(
            "ROLE_API_TIMEOUT_SECS",
            non_empty("ROLE_API_TIMEOUT_SECS"),
            DEFAULT_ROLE_API_TIMEOUT_SECS,
        )?;
        if role_api_timeout_secs == 0 {
            return Err(AppError::Validation(
                "ROLE_API_TIMEOUT_SECS must be greater than zero".to_owned(),
            ));
        }

        let users_page_size = parsed_or(
            "USERS_PAGE_SIZE",
            non_empty("USERS_PAGE_SIZE"),
            DEFAULT_USERS_PAGE_SIZE,
        )?;
        if users_page_size == 0 {
            return Err(AppError::Validation(
                "USERS_PAGE_SIZE must be greater than zero".to_owned(),
            ));
        }

        let seed_demo_data = non_empty("SEED_DEMO_DATA")
            .map(|value| value.trim().eq_ignore_ascii_case("true"))
            .unwrap_or(true);

        Ok(Self {
            api_host,
            api_port,
            frontend_url,
            role_api_url,
            auth_api_url,
            role_api_timeout_secs,
            users_page_size,
            seed_demo_data,
        })
    }

    pub fn socket_address(&self) -> Result<SocketAddr, AppError> {
        let host = IpAddr::from_str(&self.api_host).map_err(|error| {
            AppError::Internal(format!("invalid API_HOST '{}': {error}", self.api_host))
        })?;
        Ok(SocketAddr::from((host, self.api_port)))
    }
}

pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .init();
}

fn validate_url(name: &str, value: &str) -> Result<(), AppError> {
    Url::parse(value)
        .map(|_| ())
        .map_err(|error| AppError::Validation(format!("invalid {name} '{value}': {error}")))
}

fn parsed_or<T>(name: &str, value: Option<String>, default: T) -> Result<T, AppError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match value {
        Some(value) => value
            .trim()
            .parse::<T>()
            .map_err(|error| AppError::Validation(format!("invalid {name}: {error}"))),
        None => Ok(default),
    }
}
