use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::objects::RoleObjectDto;

mod conversions;

/// API representation of a role, matching the remote Role API body.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/role-dto.ts"
)]
pub struct RoleDto {
    pub role_name: String,
    pub role_id: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub object: Vec<RoleObjectDto>,
    pub status: String,
    #[serde(default)]
    pub created_by: String,
    #[serde(default)]
    pub created_on: String,
    #[serde(default)]
    pub modified_by: String,
    #[serde(default)]
    pub modified_on: String,
}

/// Incoming payload for role creation.
#[derive(Debug, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/create-role-request.ts"
)]
pub struct CreateRoleRequest {
    pub role_name: String,
    pub role_id: String,
    #[serde(default)]
    pub description: String,
    pub status: String,
    /// Catalog ids of the objects to copy into the role.
    #[serde(default)]
    pub object_ids: Vec<String>,
}

/// Incoming payload for role detail edits.
#[derive(Debug, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/update-role-request.ts"
)]
pub struct UpdateRoleRequest {
    pub role_name: String,
    pub role_id: String,
    #[serde(default)]
    pub description: String,
    pub status: String,
}

/// Query string accepted by the role list and filter option endpoints.
///
/// Filter values are comma separated.
#[derive(Debug, Default, Deserialize)]
pub struct RoleListQuery {
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub objects: Option<String>,
    #[serde(default)]
    pub activities: Option<String>,
    #[serde(default)]
    pub data_field_actions: Option<String>,
}

/// Filter values still reachable from the current filter selection.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/filter-options-response.ts"
)]
pub struct FilterOptionsResponse {
    pub objects: Vec<String>,
    pub activities: Vec<String>,
    pub data_field_actions: Vec<String>,
}

/// Incoming role sidebar or permission matrix action.
#[derive(Debug, Deserialize, TS)]
#[serde(tag = "type", rename_all = "snake_case")]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/role-selection-action-request.ts"
)]
pub enum RoleSelectionActionRequest {
    SelectRole {
        #[serde(default)]
        role_id: Option<String>,
    },
    ToggleActivity {
        activity_name: String,
    },
    ToggleDataFieldAction {
        activity_name: String,
        label: String,
    },
    ResetAll,
    EnableAll,
    ResetObject {
        object_id: String,
    },
    EnableObject {
        object_id: String,
    },
    SetSearchQuery {
        query: String,
    },
    SetStatusFilter {
        status: String,
    },
    /// `category` is `objects`, `activities` or `data_field_actions`.
    ToggleFilter {
        category: String,
        item: String,
    },
    ClearFilter {
        category: String,
    },
}

/// Filter drawer selection stored with the role sidebar.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/role-filter-set-dto.ts"
)]
pub struct RoleFilterSetDto {
    pub objects: Vec<String>,
    pub activities: Vec<String>,
    pub data_field_actions: Vec<String>,
}

/// API representation of the role sidebar and working selection.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/role-selection-response.ts"
)]
pub struct RoleSelectionResponse {
    pub selected_role: Option<RoleDto>,
    pub active_activities: BTreeMap<String, bool>,
    pub selected_actions: BTreeMap<String, Vec<String>>,
    pub search_query: String,
    pub status_filter: String,
    pub filters: RoleFilterSetDto,
    pub load_state: String,
    pub error: Option<String>,
}
