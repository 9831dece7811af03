use chrono::{DateTime, SecondsFormat, Utc};
use permatrix_core::{AppError, AppResult, NonEmptyString};
use permatrix_domain::{Role, RoleStatus, StatusFilter};
use serde::{Deserialize, Serialize};

use crate::permission_selection::PermissionSelection;
use crate::role_filter::{FilterCategory, RoleFilterSet, RoleQuery};

/// Progress of the last role list load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadState {
    /// Nothing requested yet.
    #[default]
    Idle,
    /// A load is in flight.
    Pending,
    /// The last load succeeded.
    Succeeded,
    /// The last load failed; see the error slot.
    Failed,
}

impl LoadState {
    /// Returns the wire value for this state.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Pending => "pending",
            Self::Succeeded => "succeeded",
            Self::Failed => "failed",
        }
    }
}

/// Editable header fields of a role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleDetails {
    /// New display name.
    pub role_name: String,
    /// New identifier; may differ from the current one.
    pub role_id: String,
    /// New description.
    #[serde(default)]
    pub description: String,
    /// New lifecycle status.
    pub status: RoleStatus,
}

/// User-driven transitions of the role catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RoleCatalogAction {
    /// Selects a role and derives its working selection, or clears it.
    SelectRole {
        /// Role to select; `None` clears the selection.
        #[serde(default)]
        role_id: Option<String>,
    },
    /// Flips one activity of the selected role.
    ToggleActivity {
        /// Activity name.
        activity_name: String,
    },
    /// Flips one action label under an activity.
    ToggleDataFieldAction {
        /// Activity name.
        activity_name: String,
        /// Action label.
        label: String,
    },
    /// Switches everything off.
    ResetAll,
    /// Switches everything on.
    EnableAll,
    /// Switches off one object of the selected role.
    ResetObject {
        /// Catalog id of the object.
        object_id: String,
    },
    /// Switches on one object of the selected role.
    EnableObject {
        /// Catalog id of the object.
        object_id: String,
    },
    /// Sets the sidebar search text.
    SetSearchQuery {
        /// Search text.
        query: String,
    },
    /// Sets the sidebar status filter.
    SetStatusFilter {
        /// Status restriction.
        status: StatusFilter,
    },
    /// Adds or removes one value of the filter drawer.
    ToggleFilter {
        /// Filter dimension.
        category: FilterCategory,
        /// Object name, activity name or action label.
        item: String,
    },
    /// Empties one drawer category and its dependents.
    ClearFilter {
        /// Filter dimension.
        category: FilterCategory,
    },
}

/// In-memory role list plus the working selection of the selected role.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleCatalog {
    roles: Vec<Role>,
    selected_role_id: Option<String>,
    selection: PermissionSelection,
    search_query: String,
    status_filter: StatusFilter,
    filters: RoleFilterSet,
    load_state: LoadState,
    error: Option<String>,
}

impl RoleCatalog {
    /// Creates a catalog already holding `roles`.
    #[must_use]
    pub fn new(roles: Vec<Role>) -> Self {
        Self {
            roles,
            ..Self::default()
        }
    }

    /// Applies one user action.
    pub fn reduce(&mut self, action: RoleCatalogAction) -> AppResult<()> {
        match action {
            RoleCatalogAction::SelectRole { role_id: None } => {
                self.selected_role_id = None;
                self.selection = PermissionSelection::default();
            }
            RoleCatalogAction::SelectRole {
                role_id: Some(role_id),
            } => {
                let selection = PermissionSelection::from_role(self.require_role(&role_id)?);
                self.selection = selection;
                self.selected_role_id = Some(role_id);
            }
            RoleCatalogAction::ToggleActivity { activity_name } => {
                let role = self.require_selected_role()?.clone();
                self.selection.toggle_activity(&role, &activity_name)?;
            }
            RoleCatalogAction::ToggleDataFieldAction {
                activity_name,
                label,
            } => {
                self.require_selected_role()?;
                self.selection.toggle_action(&activity_name, &label);
            }
            RoleCatalogAction::ResetAll => self.selection.reset_all(),
            RoleCatalogAction::EnableAll => {
                let role = self.require_selected_role()?.clone();
                self.selection.enable_all(&role);
            }
            RoleCatalogAction::ResetObject { object_id } => {
                let role = self.require_selected_role()?.clone();
                self.selection.reset_object(&role, &object_id)?;
            }
            RoleCatalogAction::EnableObject { object_id } => {
                let role = self.require_selected_role()?.clone();
                self.selection.enable_object(&role, &object_id)?;
            }
            RoleCatalogAction::SetSearchQuery { query } => self.search_query = query,
            RoleCatalogAction::SetStatusFilter { status } => self.status_filter = status,
            RoleCatalogAction::ToggleFilter { category, item } => {
                self.filters.toggle(category, &item);
            }
            RoleCatalogAction::ClearFilter { category } => self.filters.clear(category),
        }

        Ok(())
    }

    /// Marks a load as in flight.
    pub fn begin_load(&mut self) {
        self.load_state = LoadState::Pending;
    }

    /// Replaces the roles with a fresh remote list and returns how many
    /// repeated role ids were dropped.
    ///
    /// The working selection is kept while its role is still listed.
    pub fn finish_load(&mut self, roles: Vec<Role>) -> usize {
        let received = roles.len();
        let mut unique: Vec<Role> = Vec::with_capacity(received);
        for role in roles {
            if !unique.iter().any(|kept| kept.role_id == role.role_id) {
                unique.push(role);
            }
        }

        self.roles = unique;
        self.load_state = LoadState::Succeeded;
        self.error = None;
        if self.selected_role().is_none() {
            self.selected_role_id = None;
            self.selection = PermissionSelection::default();
        }

        received - self.roles.len()
    }

    /// Records a failed load and keeps the previous roles.
    pub fn fail_load(&mut self, message: impl Into<String>) {
        self.load_state = LoadState::Failed;
        self.error = Some(message.into());
    }

    /// Fails with a conflict when the id is already taken.
    pub fn ensure_role_id_available(&self, role_id: &str) -> AppResult<()> {
        if self.find(role_id).is_some() {
            return Err(AppError::Conflict(format!(
                "role id '{role_id}' is already in use"
            )));
        }

        Ok(())
    }

    /// Adds a role whose id is not yet in use.
    pub fn insert_role(&mut self, role: Role) -> AppResult<()> {
        role.validate()?;
        self.ensure_role_id_available(&role.role_id)?;
        self.roles.push(role);
        Ok(())
    }

    /// Builds the role that results from editing header fields.
    ///
    /// Changing the id to one used by another role is a conflict.
    pub fn prepare_details_update(
        &self,
        role_id: &str,
        details: RoleDetails,
        actor: &str,
        now: DateTime<Utc>,
    ) -> AppResult<Role> {
        let role_name = NonEmptyString::for_field("role name", details.role_name)?;
        let new_role_id = NonEmptyString::for_field("role id", details.role_id)?;
        let current = self.require_role(role_id)?;

        if new_role_id.as_str() != role_id {
            self.ensure_role_id_available(new_role_id.as_str())?;
        }

        Ok(Role {
            role_name: role_name.into(),
            role_id: new_role_id.into(),
            description: details.description,
            status: details.status,
            modified_by: actor.to_owned(),
            modified_on: timestamp(now),
            ..current.clone()
        })
    }

    /// Swaps the role stored under `old_role_id` for `role`.
    ///
    /// A selection pointing at the old id follows the new id and keeps its
    /// working state.
    pub fn replace_role(&mut self, old_role_id: &str, role: Role) -> AppResult<()> {
        role.validate()?;
        if role.role_id != old_role_id {
            self.ensure_role_id_available(&role.role_id)?;
        }

        let index = self.position(old_role_id)?;
        if self.selected_role_id.as_deref() == Some(old_role_id) {
            self.selected_role_id = Some(role.role_id.clone());
        }
        self.roles[index] = role;
        Ok(())
    }

    /// Removes a role and clears the selection when it pointed at it.
    pub fn remove_role(&mut self, role_id: &str) -> AppResult<Role> {
        let index = self.position(role_id)?;
        if self.selected_role_id.as_deref() == Some(role_id) {
            self.selected_role_id = None;
            self.selection = PermissionSelection::default();
        }
        Ok(self.roles.remove(index))
    }

    /// Builds the selected role with the working selection written back.
    pub fn submit_selection(&self, actor: &str, now: DateTime<Utc>) -> AppResult<Role> {
        let role = self.require_selected_role()?;
        let mut updated = self.selection.apply_to(role);
        updated.modified_by = actor.to_owned();
        updated.modified_on = timestamp(now);
        Ok(updated)
    }

    /// Every role in catalog order.
    #[must_use]
    pub fn roles(&self) -> &[Role] {
        &self.roles
    }

    /// Finds a role by id.
    #[must_use]
    pub fn find(&self, role_id: &str) -> Option<&Role> {
        self.roles.iter().find(|role| role.role_id == role_id)
    }

    /// The selected role, if any.
    #[must_use]
    pub fn selected_role(&self) -> Option<&Role> {
        self.selected_role_id
            .as_deref()
            .and_then(|role_id| self.find(role_id))
    }

    /// Id of the selected role.
    #[must_use]
    pub fn selected_role_id(&self) -> Option<&str> {
        self.selected_role_id.as_deref()
    }

    /// Working selection of the selected role.
    #[must_use]
    pub fn selection(&self) -> &PermissionSelection {
        &self.selection
    }

    /// Sidebar search text.
    #[must_use]
    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    /// Sidebar status filter.
    #[must_use]
    pub fn status_filter(&self) -> StatusFilter {
        self.status_filter
    }

    /// Filter drawer selection.
    #[must_use]
    pub fn filters(&self) -> &RoleFilterSet {
        &self.filters
    }

    /// Sidebar query built from the stored search text, status and filters.
    #[must_use]
    pub fn query(&self) -> RoleQuery {
        RoleQuery {
            search: self.search_query.clone(),
            status: self.status_filter,
            filters: self.filters.clone(),
        }
    }

    /// Progress of the last load.
    #[must_use]
    pub fn load_state(&self) -> LoadState {
        self.load_state
    }

    /// Message of the last failed load.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    fn position(&self, role_id: &str) -> AppResult<usize> {
        self.roles
            .iter()
            .position(|role| role.role_id == role_id)
            .ok_or_else(|| AppError::NotFound(format!("role '{role_id}' does not exist")))
    }

    fn require_role(&self, role_id: &str) -> AppResult<&Role> {
        self.find(role_id)
            .ok_or_else(|| AppError::NotFound(format!("role '{role_id}' does not exist")))
    }

    fn require_selected_role(&self) -> AppResult<&Role> {
        let role_id = self
            .selected_role_id
            .as_deref()
            .ok_or_else(|| AppError::Validation("no role is selected".to_owned()))?;
        self.require_role(role_id)
    }
}

/// Formats a timestamp the way the console stores them.
pub(crate) fn timestamp(now: DateTime<Utc>) -> String {
    now.to_rfc3339_opts(SecondsFormat::Millis, true)
}
