use permatrix_core::{AppError, AppResult};
use permatrix_domain::{Activity, DataFieldAction, RoleObject};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Partial update for one activity row of a draft or editing copy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityPatch {
    /// New activity name.
    #[serde(default)]
    pub activity_name: Option<String>,
    /// New enabled flag.
    #[serde(default)]
    pub status: Option<bool>,
    /// Replacement action list.
    #[serde(default)]
    pub data_field_actions: Option<Vec<DataFieldAction>>,
}

impl ActivityPatch {
    fn apply(self, activity: &mut Activity) {
        if let Some(activity_name) = self.activity_name {
            activity.activity_name = activity_name;
        }
        if let Some(status) = self.status {
            activity.status = status;
        }
        if let Some(data_field_actions) = self.data_field_actions {
            activity.data_field_actions = data_field_actions;
        }
    }
}

/// Partial update for one data field action row of a draft.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataFieldActionPatch {
    /// New label.
    #[serde(default)]
    pub label: Option<String>,
    /// New granted flag.
    #[serde(default)]
    pub status: Option<bool>,
    /// New description.
    #[serde(default)]
    pub description: Option<String>,
}

impl DataFieldActionPatch {
    fn apply(self, action: &mut DataFieldAction) {
        if let Some(label) = self.label {
            action.label = label;
        }
        if let Some(status) = self.status {
            action.status = status;
        }
        if let Some(description) = self.description {
            action.description = description;
        }
    }
}

/// State transitions accepted by the object catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ObjectCatalogAction {
    /// Replaces every object.
    SetObjects {
        /// New catalog content.
        objects: Vec<RoleObject>,
    },
    /// Marks an object as selected.
    SelectObject {
        /// Catalog id.
        object_id: String,
    },
    /// Clears the selection.
    ClearSelectedObject,
    /// Sets the sidebar search text.
    SetSearchQuery {
        /// Search text.
        query: String,
    },
    /// Opens or closes the sidebar search box.
    ToggleSearch,
    /// Opens a new draft.
    StartCreating,
    /// Discards the draft.
    CancelCreating,
    /// Renames the draft.
    SetDraftName {
        /// New object name.
        name: String,
    },
    /// Appends an empty activity to the draft.
    AddDraftActivity,
    /// Patches one draft activity.
    UpdateDraftActivity {
        /// Activity position.
        index: usize,
        /// Fields to change.
        patch: ActivityPatch,
    },
    /// Appends an empty action to a draft activity.
    AddDraftDataField {
        /// Activity position.
        activity_index: usize,
    },
    /// Patches one action of a draft activity.
    UpdateDraftDataField {
        /// Activity position.
        activity_index: usize,
        /// Action position.
        field_index: usize,
        /// Fields to change.
        patch: DataFieldActionPatch,
    },
    /// Removes one action from a draft activity.
    RemoveDraftDataField {
        /// Activity position.
        activity_index: usize,
        /// Action position.
        field_index: usize,
    },
    /// Moves the draft into the catalog.
    SaveDraft,
    /// Copies an object into the editing slot.
    StartEditing {
        /// Catalog id.
        object_id: String,
    },
    /// Renames the editing copy.
    RenameEditing {
        /// New object name.
        name: String,
    },
    /// Patches one activity of the editing copy.
    UpdateEditingActivity {
        /// Activity position.
        index: usize,
        /// Fields to change.
        patch: ActivityPatch,
    },
    /// Appends an empty activity to the editing copy.
    AddEditingActivity,
    /// Removes an activity from the editing copy.
    RemoveEditingActivity {
        /// Activity position.
        index: usize,
    },
    /// Writes the editing copy back into the catalog.
    SaveEditing,
    /// Discards the editing copy.
    CancelEditing,
}

/// In-memory catalog of business objects plus the object editor state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObjectCatalog {
    objects: Vec<RoleObject>,
    selected_object_id: Option<String>,
    is_searching: bool,
    search_query: String,
    draft: Option<RoleObject>,
    editing: Option<RoleObject>,
}

impl ObjectCatalog {
    /// Creates a catalog seeded with objects.
    #[must_use]
    pub fn new(objects: Vec<RoleObject>) -> Self {
        Self {
            objects,
            ..Self::default()
        }
    }

    /// Applies one action.
    pub fn reduce(&mut self, action: ObjectCatalogAction) -> AppResult<()> {
        match action {
            ObjectCatalogAction::SetObjects { objects } => self.objects = objects,
            ObjectCatalogAction::SelectObject { object_id } => {
                self.find_index(object_id.as_str())?;
                self.selected_object_id = Some(object_id);
            }
            ObjectCatalogAction::ClearSelectedObject => self.selected_object_id = None,
            ObjectCatalogAction::SetSearchQuery { query } => self.search_query = query,
            ObjectCatalogAction::ToggleSearch => {
                self.is_searching = !self.is_searching;
                if !self.is_searching {
                    self.search_query.clear();
                }
            }
            ObjectCatalogAction::StartCreating => {
                self.draft = Some(RoleObject {
                    id: Uuid::new_v4().to_string(),
                    object_name: String::new(),
                    activity: vec![Activity::blank()],
                });
            }
            ObjectCatalogAction::CancelCreating => self.draft = None,
            ObjectCatalogAction::SetDraftName { name } => self.draft_mut()?.object_name = name,
            ObjectCatalogAction::AddDraftActivity => {
                self.draft_mut()?.activity.push(Activity::blank());
            }
            ObjectCatalogAction::UpdateDraftActivity { index, patch } => {
                patch.apply(activity_at(self.draft_mut()?, index)?);
            }
            ObjectCatalogAction::AddDraftDataField { activity_index } => {
                activity_at(self.draft_mut()?, activity_index)?
                    .data_field_actions
                    .push(DataFieldAction::blank());
            }
            ObjectCatalogAction::UpdateDraftDataField {
                activity_index,
                field_index,
                patch,
            } => {
                let activity = activity_at(self.draft_mut()?, activity_index)?;
                let action = activity
                    .data_field_actions
                    .get_mut(field_index)
                    .ok_or_else(|| out_of_range("data field action", field_index))?;
                patch.apply(action);
            }
            ObjectCatalogAction::RemoveDraftDataField {
                activity_index,
                field_index,
            } => {
                let activity = activity_at(self.draft_mut()?, activity_index)?;
                if field_index >= activity.data_field_actions.len() {
                    return Err(out_of_range("data field action", field_index));
                }
                activity.data_field_actions.remove(field_index);
            }
            ObjectCatalogAction::SaveDraft => {
                let draft = self.draft.as_ref().ok_or_else(no_draft)?;
                draft.validate()?;
                if self.objects.iter().any(|object| object.id == draft.id) {
                    return Err(AppError::Conflict(format!(
                        "object '{}' already exists",
                        draft.id
                    )));
                }
                if let Some(draft) = self.draft.take() {
                    self.objects.push(draft);
                }
            }
            ObjectCatalogAction::StartEditing { object_id } => {
                let index = self.find_index(object_id.as_str())?;
                self.editing = Some(self.objects[index].clone());
            }
            ObjectCatalogAction::RenameEditing { name } => {
                self.editing_mut()?.object_name = name;
            }
            ObjectCatalogAction::UpdateEditingActivity { index, patch } => {
                patch.apply(activity_at(self.editing_mut()?, index)?);
            }
            ObjectCatalogAction::AddEditingActivity => {
                self.editing_mut()?.activity.push(Activity::blank());
            }
            ObjectCatalogAction::RemoveEditingActivity { index } => {
                let editing = self.editing_mut()?;
                if index >= editing.activity.len() {
                    return Err(out_of_range("activity", index));
                }
                editing.activity.remove(index);
            }
            ObjectCatalogAction::SaveEditing => {
                let editing = self.editing.as_ref().ok_or_else(no_editing)?;
                editing.validate()?;
                let index = self.find_index(editing.id.as_str())?;
                if let Some(editing) = self.editing.take() {
                    self.objects[index] = editing;
                }
            }
            ObjectCatalogAction::CancelEditing => self.editing = None,
        }

        Ok(())
    }

    /// Returns every object in catalog order.
    #[must_use]
    pub fn objects(&self) -> &[RoleObject] {
        &self.objects
    }

    /// Returns objects whose name contains the current search query.
    #[must_use]
    pub fn filtered_objects(&self) -> Vec<&RoleObject> {
        self.search(self.search_query.as_str())
    }

    /// Returns objects whose name contains `query`, ignoring case.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&RoleObject> {
        let needle = query.to_lowercase();
        self.objects
            .iter()
            .filter(|object| object.object_name.to_lowercase().contains(&needle))
            .collect()
    }

    /// Finds an object by id.
    #[must_use]
    pub fn find(&self, object_id: &str) -> Option<&RoleObject> {
        self.objects.iter().find(|object| object.id == object_id)
    }

    /// Returns the selected object, if it still exists.
    #[must_use]
    pub fn selected_object(&self) -> Option<&RoleObject> {
        self.selected_object_id
            .as_deref()
            .and_then(|object_id| self.find(object_id))
    }

    /// Returns the selected object id.
    #[must_use]
    pub fn selected_object_id(&self) -> Option<&str> {
        self.selected_object_id.as_deref()
    }

    /// Returns whether the sidebar search box is open.
    #[must_use]
    pub fn is_searching(&self) -> bool {
        self.is_searching
    }

    /// Returns the sidebar search text.
    #[must_use]
    pub fn search_query(&self) -> &str {
        self.search_query.as_str()
    }

    /// Returns the object being composed.
    #[must_use]
    pub fn draft(&self) -> Option<&RoleObject> {
        self.draft.as_ref()
    }

    /// Returns the object being edited.
    #[must_use]
    pub fn editing(&self) -> Option<&RoleObject> {
        self.editing.as_ref()
    }

    fn find_index(&self, object_id: &str) -> AppResult<usize> {
        self.objects
            .iter()
            .position(|object| object.id == object_id)
            .ok_or_else(|| AppError::NotFound(format!("object '{object_id}' does not exist")))
    }

    fn draft_mut(&mut self) -> AppResult<&mut RoleObject> {
        self.draft.as_mut().ok_or_else(no_draft)
    }

    fn editing_mut(&mut self) -> AppResult<&mut RoleObject> {
        self.editing.as_mut().ok_or_else(no_editing)
    }
}

fn activity_at(object: &mut RoleObject, index: usize) -> AppResult<&mut Activity> {
    object
        .activity
        .get_mut(index)
        .ok_or_else(|| out_of_range("activity", index))
}

fn out_of_range(kind: &str, index: usize) -> AppError {
    AppError::Validation(format!("{kind} index {index} is out of range"))
}

fn no_draft() -> AppError {
    AppError::Validation("no object draft is open".to_owned())
}

fn no_editing() -> AppError {
    AppError::Validation("no object is being edited".to_owned())
}
