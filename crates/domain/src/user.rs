//! Employee records managed by the user console.

use permatrix_core::{AppError, AppResult, NonEmptyString};
use serde::{Deserialize, Serialize};

use crate::role::Role;

/// Validated email address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Creates a validated email address.
    ///
    /// Performs basic structural validation: non-empty, contains exactly one `@`,
    /// local part and domain are non-empty, domain contains at least one `.`.
    pub fn new(value: impl Into<String>) -> AppResult<Self> {
        let value = value.into();
        let trimmed = value.trim().to_lowercase();

        if trimmed.is_empty() {
            return Err(AppError::Validation(
                "email address must not be empty".to_owned(),
            ));
        }

        let Some((local, domain)) = trimmed.split_once('@') else {
            return Err(AppError::Validation(
                "email address must contain exactly one '@'".to_owned(),
            ));
        };

        if domain.contains('@') {
            return Err(AppError::Validation(
                "email address must contain exactly one '@'".to_owned(),
            ));
        }

        if local.is_empty() {
            return Err(AppError::Validation(
                "email local part must not be empty".to_owned(),
            ));
        }

        if domain.is_empty() || !domain.contains('.') {
            return Err(AppError::Validation(
                "email domain must contain at least one '.'".to_owned(),
            ));
        }

        if trimmed.len() > 254 {
            return Err(AppError::Validation(
                "email address must not exceed 254 characters".to_owned(),
            ));
        }

        Ok(Self(trimmed))
    }

    /// Returns the validated email string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<EmailAddress> for String {
    fn from(value: EmailAddress) -> Self {
        value.0
    }
}

/// Scoped permission grant shown on a user profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Permission {
    /// Permission name, usually an activity name.
    pub name: String,
    /// Whether the grant is in effect.
    pub status: bool,
    /// Departments the grant is scoped to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<Vec<String>>,
    /// Sites the grant is scoped to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site: Option<Vec<String>>,
    /// Companies the grant is scoped to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<Vec<String>>,
    /// Employment categories the grant is scoped to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Vec<String>>,
}

/// Grants acting on the user's own documents and on other users' documents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Permissions {
    /// Grants on the user's own documents.
    #[serde(default)]
    pub own: Vec<Permission>,
    /// Grants on documents owned by others.
    #[serde(default)]
    pub other: Vec<Permission>,
}

/// Employee record with embedded role snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Work email.
    pub email: String,
    /// Identifier, unique across the user catalog.
    pub employee_id: String,
    /// Employment start date.
    #[serde(default)]
    pub start_date: String,
    /// Department name.
    #[serde(default)]
    pub department: String,
    /// Site name.
    #[serde(default)]
    pub site: String,
    /// Company name.
    #[serde(default)]
    pub company: String,
    /// Supervisor display name.
    #[serde(default)]
    pub supervisor: String,
    /// Employment categories such as "Full-time".
    #[serde(default)]
    pub category: Vec<String>,
    /// Maximum requisition amount, kept as entered.
    #[serde(default)]
    pub requisition_limit: String,
    /// Encoded profile picture (usually a data URL).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_picture: Option<String>,
    /// Role snapshots copied at assignment time.
    #[serde(default)]
    pub role: Vec<Role>,
    /// Substitute display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub substitute_user: Option<String>,
    /// Substitution start date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub substitute_start_date: Option<String>,
    /// Substitution end date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub substitute_end_date: Option<String>,
    /// Scoped grants shown on the profile.
    #[serde(default)]
    pub permissions: Permissions,
    /// Whether the account is active.
    #[serde(default)]
    pub active: bool,
}

impl User {
    /// Returns "first last" for list rows.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_owned()
    }

    /// Validates the fields the add-user form requires.
    pub fn validate(&self) -> AppResult<()> {
        NonEmptyString::for_field("first name", self.first_name.as_str())?;
        NonEmptyString::for_field("last name", self.last_name.as_str())?;
        NonEmptyString::for_field("employee id", self.employee_id.as_str())?;
        EmailAddress::new(self.email.as_str())?;
        Ok(())
    }

    /// Returns whether any searchable column contains the lowercase needle.
    #[must_use]
    pub fn matches_search(&self, needle_lowercase: &str) -> bool {
        [
            self.first_name.as_str(),
            self.last_name.as_str(),
            self.email.as_str(),
            self.employee_id.as_str(),
            self.department.as_str(),
            self.site.as_str(),
        ]
        .iter()
        .any(|column| column.to_lowercase().contains(needle_lowercase))
    }
}
