use permatrix_core::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Finest-grained permission toggle inside an activity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataFieldAction {
    /// Label shown next to the checkbox; unique within its activity.
    pub label: String,
    /// Whether the action is granted.
    pub status: bool,
    /// Free-text explanation shown as a tooltip.
    #[serde(default)]
    pub description: String,
}

impl DataFieldAction {
    /// Creates an enabled action with an empty label, as new form rows start.
    #[must_use]
    pub fn blank() -> Self {
        Self {
            label: String::new(),
            status: true,
            description: String::new(),
        }
    }
}

/// Operation performable on a business object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    /// Activity name; the working selection keys on it.
    pub activity_name: String,
    /// Whether the activity is enabled.
    pub status: bool,
    /// Permission toggles within the activity.
    #[serde(default)]
    pub data_field_actions: Vec<DataFieldAction>,
}

impl Activity {
    /// Creates an enabled activity without actions, as new form rows start.
    #[must_use]
    pub fn blank() -> Self {
        Self {
            activity_name: String::new(),
            status: true,
            data_field_actions: Vec::new(),
        }
    }

    /// Returns every action label in declaration order.
    pub fn action_labels(&self) -> impl Iterator<Item = &str> {
        self.data_field_actions
            .iter()
            .map(|action| action.label.as_str())
    }

    /// Returns the labels of actions whose status is `true`.
    pub fn enabled_action_labels(&self) -> impl Iterator<Item = &str> {
        self.data_field_actions
            .iter()
            .filter(|action| action.status)
            .map(|action| action.label.as_str())
    }

    /// Finds an action by label.
    #[must_use]
    pub fn find_action(&self, label: &str) -> Option<&DataFieldAction> {
        self.data_field_actions
            .iter()
            .find(|action| action.label == label)
    }
}

/// Business entity type carrying activities, e.g. "Purchase Order".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleObject {
    /// Catalog identifier. Role snapshots embedded in users omit it.
    #[serde(default)]
    pub id: String,
    /// Display name of the object.
    pub object_name: String,
    /// Activities declared for the object.
    #[serde(default)]
    pub activity: Vec<Activity>,
}

impl RoleObject {
    /// Finds an activity by name.
    #[must_use]
    pub fn find_activity(&self, activity_name: &str) -> Option<&Activity> {
        self.activity
            .iter()
            .find(|activity| activity.activity_name == activity_name)
    }

    /// Validates the object before it enters the catalog.
    pub fn validate(&self) -> AppResult<()> {
        if self.id.trim().is_empty() {
            return Err(AppError::Validation("object id is required".to_owned()));
        }

        if self.object_name.trim().is_empty() {
            return Err(AppError::Validation("object name is required".to_owned()));
        }

        Ok(())
    }
}
