use std::sync::Arc;

use permatrix_core::{AppError, AppResult};
use permatrix_domain::{Role, StatusFilter, User};
use tracing::info;

use crate::console_store::ConsoleStore;
use crate::pagination::{Page, PageRequest, paginate};
use crate::user_catalog::UserCatalogAction;

/// Query behind the paginated user list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserListQuery {
    /// Case-insensitive search over name, email, id, department and site.
    pub search: String,
    /// Status restriction; `None` keeps the catalog's current filter.
    pub status: Option<StatusFilter>,
    /// Page number, starting at 1.
    pub page: usize,
}

impl Default for UserListQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            status: None,
            page: 1,
        }
    }
}

/// Application service for the user catalog.
#[derive(Clone)]
pub struct UserAdminService {
    store: Arc<ConsoleStore>,
    page_size: usize,
}

impl UserAdminService {
    /// Creates a new service listing `page_size` users per page.
    #[must_use]
    pub fn new(store: Arc<ConsoleStore>, page_size: usize) -> Self {
        Self {
            store,
            page_size: page_size.max(1),
        }
    }

    /// Lists one page of users passing the query.
    ///
    /// An explicit status becomes the catalog's filter for later requests.
    pub async fn list_users(&self, query: &UserListQuery) -> Page<User> {
        let matches = {
            let mut catalog = self.store.users().write().await;
            if let Some(status) = query.status {
                catalog.set_status_filter(status);
            }
            catalog.search(&query.search, catalog.status_filter())
        };
        paginate(matches, PageRequest::new(query.page, self.page_size))
    }

    /// Returns one user.
    pub async fn get_user(&self, employee_id: &str) -> AppResult<User> {
        self.store
            .users()
            .read()
            .await
            .find(employee_id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("user '{employee_id}' does not exist")))
    }

    /// Adds a user with an unused employee id.
    pub async fn create_user(&self, user: User) -> AppResult<User> {
        self.store
            .users()
            .write()
            .await
            .reduce(UserCatalogAction::AddUser { user: user.clone() })?;

        info!(employee_id = %user.employee_id, "user created");
        Ok(user)
    }

    /// Replaces the record stored under `employee_id`.
    pub async fn update_user(&self, employee_id: &str, user: User) -> AppResult<User> {
        if user.employee_id != employee_id {
            return Err(AppError::Validation(
                "employee id cannot be changed".to_owned(),
            ));
        }

        self.store
            .users()
            .write()
            .await
            .reduce(UserCatalogAction::UpdateUser { user: user.clone() })?;

        info!(employee_id = %employee_id, "user updated");
        Ok(user)
    }

    /// Sets the profile picture of a user.
    pub async fn update_profile_picture(
        &self,
        employee_id: &str,
        profile_picture: String,
    ) -> AppResult<User> {
        let mut catalog = self.store.users().write().await;
        catalog.reduce(UserCatalogAction::UpdateProfilePicture {
            employee_id: employee_id.to_owned(),
            profile_picture,
        })?;

        catalog
            .find(employee_id)
            .cloned()
            .ok_or_else(|| AppError::Internal("updated user is missing".to_owned()))
    }

    /// Removes a user.
    pub async fn delete_user(&self, employee_id: &str) -> AppResult<()> {
        self.store
            .users()
            .write()
            .await
            .reduce(UserCatalogAction::DeleteUser {
                employee_id: employee_id.to_owned(),
            })?;

        info!(employee_id = %employee_id, "user deleted");
        Ok(())
    }

    /// Replaces the roles of a user with snapshots of the given catalog roles.
    ///
    /// Later role edits do not reach the snapshots.
    pub async fn assign_roles(&self, employee_id: &str, role_ids: &[String]) -> AppResult<User> {
        let snapshots = {
            let roles = self.store.roles().read().await;
            role_ids
                .iter()
                .map(|role_id| {
                    roles
                        .find(role_id)
                        .cloned()
                        .ok_or_else(|| AppError::NotFound(format!("role '{role_id}' does not exist")))
                })
                .collect::<AppResult<Vec<Role>>>()?
        };

        let mut catalog = self.store.users().write().await;
        let mut user = catalog
            .find(employee_id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("user '{employee_id}' does not exist")))?;
        user.role = snapshots;
        catalog.reduce(UserCatalogAction::UpdateUser { user: user.clone() })?;

        info!(employee_id = %employee_id, role_count = user.role.len(), "user roles assigned");
        Ok(user)
    }
}

#[cfg(test)]
mod tests;
