use std::sync::Arc;

use chrono::Utc;
use permatrix_core::{AppError, AppResult, NonEmptyString, UserIdentity};
use permatrix_domain::{Activity, DataFieldAction, Role, RoleObject, RoleStatus};
use tokio::sync::Mutex;
use tracing::{info, warn};

use crate::console_store::ConsoleStore;
use crate::role_catalog::{RoleCatalog, RoleCatalogAction, RoleDetails, timestamp};
use crate::role_filter::{FilterOptions, RoleFilterSet, RoleQuery};
use crate::role_ports::RoleGateway;

/// Input payload for creating a role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateRoleInput {
    /// Display name.
    pub role_name: String,
    /// Identifier; must be unused.
    pub role_id: String,
    /// Free-text description.
    pub description: String,
    /// Initial lifecycle status.
    pub status: RoleStatus,
    /// Catalog ids of the objects granted through the role.
    pub object_ids: Vec<String>,
}

/// Application service for role administration.
///
/// Writes run one at a time: the id check, the remote call and the local
/// update happen under `write_lock`. The catalog lock is never held across
/// the remote call.
#[derive(Clone)]
pub struct RoleAdminService {
    gateway: Arc<dyn RoleGateway>,
    store: Arc<ConsoleStore>,
    write_lock: Arc<Mutex<()>>,
}

impl RoleAdminService {
    /// Creates a new service from the remote gateway and the shared store.
    #[must_use]
    pub fn new(gateway: Arc<dyn RoleGateway>, store: Arc<ConsoleStore>) -> Self {
        Self {
            gateway,
            store,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Reloads every role from the remote service.
    pub async fn refresh_roles(&self) -> AppResult<Vec<Role>> {
        let _write = self.write_lock.lock().await;
        self.load_roles().await
    }

    /// Returns a copy of the catalog state, including the working selection.
    pub async fn catalog(&self) -> RoleCatalog {
        self.store.roles().read().await.clone()
    }

    /// Lists roles passing the query, in catalog order.
    pub async fn list_roles(&self, query: &RoleQuery) -> Vec<Role> {
        query.filter_roles(self.store.roles().read().await.roles())
    }

    /// Sidebar query currently stored in the catalog.
    pub async fn stored_query(&self) -> RoleQuery {
        self.store.roles().read().await.query()
    }

    /// Returns the filter drawer options for the current filter selection.
    pub async fn filter_options(&self, filters: &RoleFilterSet) -> FilterOptions {
        FilterOptions::for_filters(self.store.roles().read().await.roles(), filters)
    }

    /// Creates a role granting copies of the chosen catalog objects.
    ///
    /// Copied activities start disabled and copied actions start granted.
    pub async fn create_role(&self, actor: &UserIdentity, input: CreateRoleInput) -> AppResult<Role> {
        let role_name = NonEmptyString::for_field("role name", input.role_name)?;
        let role_id = NonEmptyString::for_field("role id", input.role_id)?;

        let _write = self.write_lock.lock().await;

        let object = {
            let objects = self.store.objects().read().await;
            input
                .object_ids
                .iter()
                .map(|object_id| {
                    objects
                        .find(object_id)
                        .map(grant_template)
                        .ok_or_else(|| {
                            AppError::NotFound(format!("object '{object_id}' does not exist"))
                        })
                })
                .collect::<AppResult<Vec<_>>>()?
        };

        self.store
            .roles()
            .read()
            .await
            .ensure_role_id_available(role_id.as_str())?;

        let now = timestamp(Utc::now());
        let role = Role {
            role_name: role_name.into(),
            role_id: role_id.into(),
            description: input.description,
            object,
            status: input.status,
            created_by: actor.display_name().to_owned(),
            created_on: now.clone(),
            modified_by: actor.display_name().to_owned(),
            modified_on: now,
        };

        self.gateway.create_role(&role).await?;
        self.store.roles().write().await.insert_role(role.clone())?;
        info!(role_id = %role.role_id, actor = %actor.display_name(), "role created");

        self.refresh_after("create").await;
        Ok(role)
    }

    /// Updates name, id, description and status of a role.
    pub async fn update_role_details(
        &self,
        actor: &UserIdentity,
        role_id: &str,
        details: RoleDetails,
    ) -> AppResult<Role> {
        let _write = self.write_lock.lock().await;

        let updated = self.store.roles().read().await.prepare_details_update(
            role_id,
            details,
            actor.display_name(),
            Utc::now(),
        )?;

        self.gateway.update_role(role_id, &updated).await?;
        self.replace_locally(role_id, &updated).await?;
        info!(role_id = %role_id, new_role_id = %updated.role_id, "role details updated");

        self.refresh_after("update").await;
        Ok(updated)
    }

    /// Applies one sidebar or permission-matrix action.
    pub async fn dispatch_selection(&self, action: RoleCatalogAction) -> AppResult<RoleCatalog> {
        let mut catalog = self.store.roles().write().await;
        catalog.reduce(action)?;
        Ok(catalog.clone())
    }

    /// Persists the working selection of the selected role.
    pub async fn save_permissions(&self, actor: &UserIdentity) -> AppResult<Role> {
        let _write = self.write_lock.lock().await;

        let updated = self
            .store
            .roles()
            .read()
            .await
            .submit_selection(actor.display_name(), Utc::now())?;

        self.gateway.update_role(&updated.role_id, &updated).await?;
        self.replace_locally(&updated.role_id, &updated).await?;
        info!(role_id = %updated.role_id, actor = %actor.display_name(), "role permissions saved");

        self.refresh_after("permission save").await;
        Ok(updated)
    }

    /// Deletes a role.
    pub async fn delete_role(&self, role_id: &str) -> AppResult<()> {
        let _write = self.write_lock.lock().await;

        if self.store.roles().read().await.find(role_id).is_none() {
            return Err(AppError::NotFound(format!("role '{role_id}' does not exist")));
        }

        self.gateway.delete_role(role_id).await?;
        self.store.roles().write().await.remove_role(role_id)?;
        info!(role_id = %role_id, "role deleted");

        self.refresh_after("delete").await;
        Ok(())
    }

    async fn load_roles(&self) -> AppResult<Vec<Role>> {
        self.store.roles().write().await.begin_load();

        match self.gateway.list_roles().await {
            Ok(roles) => {
                info!(role_count = roles.len(), "roles loaded");
                let mut catalog = self.store.roles().write().await;
                let dropped = catalog.finish_load(roles);
                if dropped > 0 {
                    warn!(dropped, "role service returned repeated role ids");
                }
                Ok(catalog.roles().to_vec())
            }
            Err(error) => {
                warn!(error = %error, "failed to load roles");
                self.store.roles().write().await.fail_load(error.to_string());
                Err(error)
            }
        }
    }

    async fn replace_locally(&self, role_id: &str, role: &Role) -> AppResult<()> {
        self.store
            .roles()
            .write()
            .await
            .replace_role(role_id, role.clone())
    }

    async fn refresh_after(&self, operation: &str) {
        if let Err(error) = self.load_roles().await {
            warn!(operation, error = %error, "role refresh after mutation failed");
        }
    }
}

fn grant_template(object: &RoleObject) -> RoleObject {
    RoleObject {
        id: object.id.clone(),
        object_name: object.object_name.clone(),
        activity: object
            .activity
            .iter()
            .map(|activity| Activity {
                activity_name: activity.activity_name.clone(),
                status: false,
                data_field_actions: activity
                    .data_field_actions
                    .iter()
                    .map(|action| DataFieldAction {
                        status: true,
                        ..action.clone()
                    })
                    .collect(),
            })
            .collect(),
    }
}
