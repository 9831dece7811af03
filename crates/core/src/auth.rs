use serde::{Deserialize, Serialize};

/// Display name stamped on writes when no authenticated caller is known.
pub const FALLBACK_DISPLAY_NAME: &str = "Current User";

/// Caller information resolved from the auth service for one request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentity {
    display_name: String,
    email: Option<String>,
}

impl UserIdentity {
    /// Creates a caller identity from auth service data.
    #[must_use]
    pub fn new(display_name: impl Into<String>, email: Option<String>) -> Self {
        Self {
            display_name: display_name.into(),
            email,
        }
    }

    /// Returns the identity used when the console runs without an auth service.
    #[must_use]
    pub fn fallback() -> Self {
        Self::new(FALLBACK_DISPLAY_NAME, None)
    }

    /// Returns the display name for the current user.
    ///
    /// A blank name from the auth service is replaced by the fallback name so
    /// audit fields never end up empty.
    #[must_use]
    pub fn display_name(&self) -> &str {
        if self.display_name.trim().is_empty() {
            FALLBACK_DISPLAY_NAME
        } else {
            self.display_name.as_str()
        }
    }

    /// Returns the email, if the auth service returned one.
    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }
}
