use permatrix_application::{
    ActivityPatch, DataFieldActionPatch, ObjectCatalog, ObjectCatalogAction,
};
use permatrix_domain::{Activity, DataFieldAction, RoleObject};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// API representation of a data field action.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/data-field-action-dto.ts"
)]
pub struct DataFieldActionDto {
    pub label: String,
    pub status: bool,
    #[serde(default)]
    pub description: String,
}

/// API representation of an activity and its actions.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/activity-dto.ts"
)]
pub struct ActivityDto {
    pub activity_name: String,
    pub status: bool,
    #[serde(default)]
    pub data_field_actions: Vec<DataFieldActionDto>,
}

/// API representation of a business object.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/role-object-dto.ts"
)]
pub struct RoleObjectDto {
    #[serde(default)]
    pub id: String,
    pub object_name: String,
    #[serde(default)]
    pub activity: Vec<ActivityDto>,
}

/// Query string accepted by the object list endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct ObjectListQuery {
    #[serde(default)]
    pub query: Option<String>,
}

/// Partial activity update inside an object action.
#[derive(Debug, Default, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/activity-patch-request.ts"
)]
pub struct ActivityPatchRequest {
    #[serde(default)]
    pub activity_name: Option<String>,
    #[serde(default)]
    pub status: Option<bool>,
    #[serde(default)]
    pub data_field_actions: Option<Vec<DataFieldActionDto>>,
}

/// Partial data field action update inside an object action.
#[derive(Debug, Default, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/data-field-action-patch-request.ts"
)]
pub struct DataFieldActionPatchRequest {
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub status: Option<bool>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Incoming object editor action.
#[derive(Debug, Deserialize, TS)]
#[serde(tag = "type", rename_all = "snake_case")]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/object-catalog-action-request.ts"
)]
pub enum ObjectCatalogActionRequest {
    SetObjects {
        objects: Vec<RoleObjectDto>,
    },
    SelectObject {
        object_id: String,
    },
    ClearSelectedObject,
    SetSearchQuery {
        query: String,
    },
    ToggleSearch,
    StartCreating,
    CancelCreating,
    SetDraftName {
        name: String,
    },
    AddDraftActivity,
    UpdateDraftActivity {
        index: usize,
        patch: ActivityPatchRequest,
    },
    AddDraftDataField {
        activity_index: usize,
    },
    UpdateDraftDataField {
        activity_index: usize,
        field_index: usize,
        patch: DataFieldActionPatchRequest,
    },
    RemoveDraftDataField {
        activity_index: usize,
        field_index: usize,
    },
    SaveDraft,
    StartEditing {
        object_id: String,
    },
    RenameEditing {
        name: String,
    },
    UpdateEditingActivity {
        index: usize,
        patch: ActivityPatchRequest,
    },
    AddEditingActivity,
    RemoveEditingActivity {
        index: usize,
    },
    SaveEditing,
    CancelEditing,
}

/// API representation of the object editor state.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/object-catalog-state-response.ts"
)]
pub struct ObjectCatalogStateResponse {
    pub objects: Vec<RoleObjectDto>,
    pub filtered_object_ids: Vec<String>,
    pub selected_object_id: Option<String>,
    pub is_searching: bool,
    pub search_query: String,
    pub draft: Option<RoleObjectDto>,
    pub editing: Option<RoleObjectDto>,
}

impl From<DataFieldAction> for DataFieldActionDto {
    fn from(value: DataFieldAction) -> Self {
        Self {
            label: value.label,
            status: value.status,
            description: value.description,
        }
    }
}

impl From<DataFieldActionDto> for DataFieldAction {
    fn from(value: DataFieldActionDto) -> Self {
        Self {
            label: value.label,
            status: value.status,
            description: value.description,
        }
    }
}

impl From<Activity> for ActivityDto {
    fn from(value: Activity) -> Self {
        Self {
            activity_name: value.activity_name,
            status: value.status,
            data_field_actions: value
                .data_field_actions
                .into_iter()
                .map(DataFieldActionDto::from)
                .collect(),
        }
    }
}

impl From<ActivityDto> for Activity {
    fn from(value: ActivityDto) -> Self {
        Self {
            activity_name: value.activity_name,
            status: value.status,
            data_field_actions: value
                .data_field_actions
                .into_iter()
                .map(DataFieldAction::from)
                .collect(),
        }
    }
}

impl From<RoleObject> for RoleObjectDto {
    fn from(value: RoleObject) -> Self {
        Self {
            id: value.id,
            object_name: value.object_name,
            activity: value.activity.into_iter().map(ActivityDto::from).collect(),
        }
    }
}

impl From<RoleObjectDto> for RoleObject {
    fn from(value: RoleObjectDto) -> Self {
        Self {
            id: value.id,
            object_name: value.object_name,
            activity: value.activity.into_iter().map(Activity::from).collect(),
        }
    }
}

impl From<ActivityPatchRequest> for ActivityPatch {
    fn from(value: ActivityPatchRequest) -> Self {
        Self {
            activity_name: value.activity_name,
            status: value.status,
            data_field_actions: value
                .data_field_actions
                .map(|actions| actions.into_iter().map(DataFieldAction::from).collect()),
        }
    }
}

impl From<DataFieldActionPatchRequest> for DataFieldActionPatch {
    fn from(value: DataFieldActionPatchRequest) -> Self {
        Self {
            label: value.label,
            status: value.status,
            description: value.description,
        }
    }
}

impl From<ObjectCatalogActionRequest> for ObjectCatalogAction {
    fn from(value: ObjectCatalogActionRequest) -> Self {
        use ObjectCatalogActionRequest as Request;

        match value {
            Request::SetObjects { objects } => Self::SetObjects {
                objects: objects.into_iter().map(RoleObject::from).collect(),
            },
            Request::SelectObject { object_id } => Self::SelectObject { object_id },
            Request::ClearSelectedObject => Self::ClearSelectedObject,
            Request::SetSearchQuery { query } => Self::SetSearchQuery { query },
            Request::ToggleSearch => Self::ToggleSearch,
            Request::StartCreating => Self::StartCreating,
            Request::CancelCreating => Self::CancelCreating,
            Request::SetDraftName { name } => Self::SetDraftName { name },
            Request::AddDraftActivity => Self::AddDraftActivity,
            Request::UpdateDraftActivity { index, patch } => Self::UpdateDraftActivity {
                index,
                patch: patch.into(),
            },
            Request::AddDraftDataField { activity_index } => {
                Self::AddDraftDataField { activity_index }
            }
            Request::UpdateDraftDataField {
                activity_index,
                field_index,
                patch,
            } => Self::UpdateDraftDataField {
                activity_index,
                field_index,
                patch: patch.into(),
            },
            Request::RemoveDraftDataField {
                activity_index,
                field_index,
            } => Self::RemoveDraftDataField {
                activity_index,
                field_index,
            },
            Request::SaveDraft => Self::SaveDraft,
            Request::StartEditing { object_id } => Self::StartEditing { object_id },
            Request::RenameEditing { name } => Self::RenameEditing { name },
            Request::UpdateEditingActivity { index, patch } => Self::UpdateEditingActivity {
                index,
                patch: patch.into(),
            },
            Request::AddEditingActivity => Self::AddEditingActivity,
            Request::RemoveEditingActivity { index } => Self::RemoveEditingActivity { index },
            Request::SaveEditing => Self::SaveEditing,
            Request::CancelEditing => Self::CancelEditing,
        }
    }
}

impl From<ObjectCatalog> for ObjectCatalogStateResponse {
    fn from(value: ObjectCatalog) -> Self {
        Self {
            filtered_object_ids: value
                .filtered_objects()
                .into_iter()
                .map(|object| object.id.clone())
                .collect(),
            selected_object_id: value.selected_object_id().map(ToOwned::to_owned),
            is_searching: value.is_searching(),
            search_query: value.search_query().to_owned(),
            draft: value.draft().cloned().map(RoleObjectDto::from),
            editing: value.editing().cloned().map(RoleObjectDto::from),
            objects: value
                .objects()
                .iter()
                .cloned()
                .map(RoleObjectDto::from)
                .collect(),
        }
    }
}
