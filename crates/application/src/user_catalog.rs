use permatrix_core::{AppError, AppResult};
use permatrix_domain::{StatusFilter, User};
use serde::{Deserialize, Serialize};

/// Transitions accepted by the user catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum UserCatalogAction {
    /// Appends a new user.
    AddUser {
        /// Record to add.
        user: User,
    },
    /// Replaces the user with the same employee id.
    UpdateUser {
        /// Replacement record.
        user: User,
    },
    /// Sets a user's profile picture.
    UpdateProfilePicture {
        /// Target user.
        employee_id: String,
        /// Encoded picture.
        profile_picture: String,
    },
    /// Removes a user.
    DeleteUser {
        /// Target user.
        employee_id: String,
    },
    /// Selects a user, or clears the selection.
    SelectUser {
        /// Target user; `None` clears.
        #[serde(default)]
        employee_id: Option<String>,
    },
    /// Sets the list status filter.
    SetStatusFilter {
        /// Status restriction.
        status: StatusFilter,
    },
}

/// In-memory employee list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserCatalog {
    users: Vec<User>,
    selected_employee_id: Option<String>,
    status_filter: StatusFilter,
}

impl UserCatalog {
    /// Creates a catalog already holding `users`.
    #[must_use]
    pub fn new(users: Vec<User>) -> Self {
        Self {
            users,
            ..Self::default()
        }
    }

    /// Applies one action.
    pub fn reduce(&mut self, action: UserCatalogAction) -> AppResult<()> {
        match action {
            UserCatalogAction::AddUser { user } => {
                user.validate()?;
                if self.find(&user.employee_id).is_some() {
                    return Err(AppError::Conflict(format!(
                        "employee id '{}' is already in use",
                        user.employee_id
                    )));
                }
                self.users.push(user);
            }
            UserCatalogAction::UpdateUser { user } => {
                user.validate()?;
                let index = self.position(&user.employee_id)?;
                self.users[index] = user;
            }
            UserCatalogAction::UpdateProfilePicture {
                employee_id,
                profile_picture,
            } => {
                let index = self.position(&employee_id)?;
                self.users[index].profile_picture = Some(profile_picture);
            }
            UserCatalogAction::DeleteUser { employee_id } => {
                let index = self.position(&employee_id)?;
                self.users.remove(index);
                if self.selected_employee_id.as_deref() == Some(employee_id.as_str()) {
                    self.selected_employee_id = None;
                }
            }
            UserCatalogAction::SelectUser { employee_id: None } => {
                self.selected_employee_id = None;
            }
            UserCatalogAction::SelectUser {
                employee_id: Some(employee_id),
            } => {
                self.position(&employee_id)?;
                self.selected_employee_id = Some(employee_id);
            }
            UserCatalogAction::SetStatusFilter { status } => self.set_status_filter(status),
        }

        Ok(())
    }

    /// Users passing the status filter whose searchable columns contain
    /// `query`, ignoring case.
    #[must_use]
    pub fn search(&self, query: &str, status: StatusFilter) -> Vec<User> {
        let needle = query.to_lowercase();
        self.users
            .iter()
            .filter(|user| status.admits(user.active))
            .filter(|user| user.matches_search(&needle))
            .cloned()
            .collect()
    }

    /// Replaces the status filter used by list requests without one.
    pub fn set_status_filter(&mut self, status: StatusFilter) {
        self.status_filter = status;
    }

    /// Every user in insertion order.
    #[must_use]
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Finds a user by employee id.
    #[must_use]
    pub fn find(&self, employee_id: &str) -> Option<&User> {
        self.users.iter().find(|user| user.employee_id == employee_id)
    }

    /// The selected user, if any.
    #[must_use]
    pub fn selected_user(&self) -> Option<&User> {
        self.selected_employee_id
            .as_deref()
            .and_then(|employee_id| self.find(employee_id))
    }

    /// Status filter set on the list.
    #[must_use]
    pub fn status_filter(&self) -> StatusFilter {
        self.status_filter
    }

    fn position(&self, employee_id: &str) -> AppResult<usize> {
        self.users
            .iter()
            .position(|user| user.employee_id == employee_id)
            .ok_or_else(|| AppError::NotFound(format!("user '{employee_id}' does not exist")))
    }
}

#[cfg(test)]
mod tests;
