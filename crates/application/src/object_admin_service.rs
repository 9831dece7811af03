use std::sync::Arc;

use permatrix_core::{AppError, AppResult};
use permatrix_domain::{Activity, RoleObject};
use tracing::info;

use crate::console_store::ConsoleStore;
use crate::object_catalog::{ActivityPatch, ObjectCatalog, ObjectCatalogAction};

/// Application service for the object catalog.
#[derive(Clone)]
pub struct ObjectAdminService {
    store: Arc<ConsoleStore>,
}

impl ObjectAdminService {
    /// Creates a new service over the shared console store.
    #[must_use]
    pub fn new(store: Arc<ConsoleStore>) -> Self {
        Self { store }
    }

    /// Applies one editor action and returns the resulting catalog state.
    pub async fn dispatch(&self, action: ObjectCatalogAction) -> AppResult<ObjectCatalog> {
        let mut catalog = self.store.objects().write().await;
        catalog.reduce(action)?;
        Ok(catalog.clone())
    }

    /// Returns a copy of the catalog state including the editor.
    pub async fn state(&self) -> ObjectCatalog {
        self.store.objects().read().await.clone()
    }

    /// Lists objects whose name contains `query`, ignoring case.
    pub async fn list_objects(&self, query: Option<&str>) -> Vec<RoleObject> {
        let catalog = self.store.objects().read().await;
        catalog
            .search(query.unwrap_or_default())
            .into_iter()
            .cloned()
            .collect()
    }

    /// Returns one object by id.
    pub async fn get_object(&self, object_id: &str) -> AppResult<RoleObject> {
        self.store
            .objects()
            .read()
            .await
            .find(object_id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("object '{object_id}' does not exist")))
    }

    /// Creates an object from a complete payload.
    ///
    /// The payload runs through the same draft steps as the editor, on a
    /// scratch copy so an open draft is left alone. The id is generated.
    pub async fn create_object(&self, object: RoleObject) -> AppResult<RoleObject> {
        let mut catalog = self.store.objects().write().await;
        let mut scratch = ObjectCatalog::new(catalog.objects().to_vec());

        scratch.reduce(ObjectCatalogAction::StartCreating)?;
        scratch.reduce(ObjectCatalogAction::SetDraftName {
            name: object.object_name,
        })?;
        for (index, activity) in object.activity.into_iter().enumerate() {
            if index > 0 {
                scratch.reduce(ObjectCatalogAction::AddDraftActivity)?;
            }
            scratch.reduce(ObjectCatalogAction::UpdateDraftActivity {
                index,
                patch: full_patch(activity),
            })?;
        }
        scratch.reduce(ObjectCatalogAction::SaveDraft)?;

        let created = scratch
            .objects()
            .last()
            .cloned()
            .ok_or_else(|| AppError::Internal("saved draft is missing".to_owned()))?;
        catalog.reduce(ObjectCatalogAction::SetObjects {
            objects: scratch.objects().to_vec(),
        })?;

        info!(object_id = %created.id, object_name = %created.object_name, "object created");
        Ok(created)
    }

    /// Replaces name and activities of an existing object.
    pub async fn update_object(&self, object_id: &str, object: RoleObject) -> AppResult<RoleObject> {
        let mut catalog = self.store.objects().write().await;
        let mut scratch = ObjectCatalog::new(catalog.objects().to_vec());

        scratch.reduce(ObjectCatalogAction::StartEditing {
            object_id: object_id.to_owned(),
        })?;
        scratch.reduce(ObjectCatalogAction::RenameEditing {
            name: object.object_name,
        })?;

        let current_len = scratch
            .editing()
            .map(|editing| editing.activity.len())
            .unwrap_or_default();
        let target_len = object.activity.len();
        for index in (target_len..current_len).rev() {
            scratch.reduce(ObjectCatalogAction::RemoveEditingActivity { index })?;
        }
        for _ in current_len..target_len {
            scratch.reduce(ObjectCatalogAction::AddEditingActivity)?;
        }
        for (index, activity) in object.activity.into_iter().enumerate() {
            scratch.reduce(ObjectCatalogAction::UpdateEditingActivity {
                index,
                patch: full_patch(activity),
            })?;
        }
        scratch.reduce(ObjectCatalogAction::SaveEditing)?;

        let updated = scratch
            .find(object_id)
            .cloned()
            .ok_or_else(|| AppError::Internal("saved object is missing".to_owned()))?;
        catalog.reduce(ObjectCatalogAction::SetObjects {
            objects: scratch.objects().to_vec(),
        })?;

        info!(object_id = %updated.id, "object updated");
        Ok(updated)
    }
}

fn full_patch(activity: Activity) -> ActivityPatch {
    ActivityPatch {
        activity_name: Some(activity.activity_name),
        status: Some(activity.status),
        data_field_actions: Some(activity.data_field_actions),
    }
}
