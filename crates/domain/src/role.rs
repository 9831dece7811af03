use std::str::FromStr;

use permatrix_core::{AppError, AppResult, NonEmptyString};
use serde::{Deserialize, Serialize};

use crate::object::{Activity, RoleObject};

/// Lifecycle status of a role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoleStatus {
    /// Role may be assigned and used.
    Active,
    /// Role is kept but switched off.
    Inactive,
}

impl RoleStatus {
    /// Returns the wire value for this status.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
        }
    }

    /// Parses a transport value into a status.
    pub fn from_transport(value: &str) -> AppResult<Self> {
        Self::from_str(value)
    }
}

impl FromStr for RoleStatus {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "Active" => Ok(Self::Active),
            "Inactive" => Ok(Self::Inactive),
            _ => Err(AppError::Validation(format!(
                "unknown role status '{value}'"
            ))),
        }
    }
}

/// Status filter shared by the role and user lists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatusFilter {
    /// No status restriction.
    #[default]
    All,
    /// Only active entries.
    Active,
    /// Only inactive entries.
    Inactive,
}

impl StatusFilter {
    /// Returns the wire value for this filter.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Active => "Active",
            Self::Inactive => "Inactive",
        }
    }

    /// Returns whether an entry in the given active state passes the filter.
    #[must_use]
    pub fn admits(&self, is_active: bool) -> bool {
        match self {
            Self::All => true,
            Self::Active => is_active,
            Self::Inactive => !is_active,
        }
    }

    /// Returns whether a role status passes the filter.
    #[must_use]
    pub fn admits_role(&self, status: RoleStatus) -> bool {
        self.admits(status == RoleStatus::Active)
    }
}

impl FromStr for StatusFilter {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "all" | "" => Ok(Self::All),
            "active" => Ok(Self::Active),
            "inactive" => Ok(Self::Inactive),
            _ => Err(AppError::Validation(format!(
                "unknown status filter '{value}'"
            ))),
        }
    }
}

/// Named bundle of object, activity and action permissions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    /// Display name.
    pub role_name: String,
    /// Identifier, unique across the role catalog.
    pub role_id: String,
    /// Free-text description.
    #[serde(default)]
    pub description: String,
    /// Objects granted through this role.
    #[serde(default)]
    pub object: Vec<RoleObject>,
    /// Lifecycle status.
    pub status: RoleStatus,
    /// Display name of the creator.
    #[serde(default)]
    pub created_by: String,
    /// Creation timestamp as sent by the console.
    #[serde(default)]
    pub created_on: String,
    /// Display name of the last editor.
    #[serde(default)]
    pub modified_by: String,
    /// Last modification timestamp as sent by the console.
    #[serde(default)]
    pub modified_on: String,
}

impl Role {
    /// Iterates every activity across all objects of the role.
    pub fn activities(&self) -> impl Iterator<Item = &Activity> {
        self.object.iter().flat_map(|object| object.activity.iter())
    }

    /// Finds the first activity with the given name across all objects.
    #[must_use]
    pub fn find_activity(&self, activity_name: &str) -> Option<&Activity> {
        self.activities()
            .find(|activity| activity.activity_name == activity_name)
    }

    /// Finds an object of the role by catalog id.
    #[must_use]
    pub fn find_object(&self, object_id: &str) -> Option<&RoleObject> {
        self.object.iter().find(|object| object.id == object_id)
    }

    /// Validates required identity fields.
    pub fn validate(&self) -> AppResult<()> {
        NonEmptyString::for_field("role name", self.role_name.as_str())?;
        NonEmptyString::for_field("role id", self.role_id.as_str())?;
        Ok(())
    }
}
