use std::str::FromStr;

use permatrix_application::{
    CreateRoleInput, FilterCategory, FilterOptions, RoleCatalog, RoleCatalogAction, RoleDetails,
    RoleFilterSet, RoleQuery,
};
use permatrix_core::{AppError, AppResult};
use permatrix_domain::{Role, RoleObject, RoleStatus, StatusFilter};

use super::{
    CreateRoleRequest, FilterOptionsResponse, RoleDto, RoleFilterSetDto, RoleListQuery,
    RoleSelectionActionRequest, RoleSelectionResponse, UpdateRoleRequest,
};
use crate::dto::objects::RoleObjectDto;

impl From<Role> for RoleDto {
    fn from(value: Role) -> Self {
        Self {
            role_name: value.role_name,
            role_id: value.role_id,
            description: value.description,
            object: value.object.into_iter().map(RoleObjectDto::from).collect(),
            status: value.status.as_str().to_owned(),
            created_by: value.created_by,
            created_on: value.created_on,
            modified_by: value.modified_by,
            modified_on: value.modified_on,
        }
    }
}

impl TryFrom<RoleDto> for Role {
    type Error = AppError;

    fn try_from(value: RoleDto) -> Result<Self, Self::Error> {
        Ok(Self {
            role_name: value.role_name,
            role_id: value.role_id,
            description: value.description,
            object: value.object.into_iter().map(RoleObject::from).collect(),
            status: RoleStatus::from_transport(value.status.as_str())?,
            created_by: value.created_by,
            created_on: value.created_on,
            modified_by: value.modified_by,
            modified_on: value.modified_on,
        })
    }
}

impl TryFrom<CreateRoleRequest> for CreateRoleInput {
    type Error = AppError;

    fn try_from(value: CreateRoleRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            role_name: value.role_name,
            role_id: value.role_id,
            description: value.description,
            status: RoleStatus::from_transport(value.status.as_str())?,
            object_ids: value.object_ids,
        })
    }
}

impl TryFrom<UpdateRoleRequest> for RoleDetails {
    type Error = AppError;

    fn try_from(value: UpdateRoleRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            role_name: value.role_name,
            role_id: value.role_id,
            description: value.description,
            status: RoleStatus::from_transport(value.status.as_str())?,
        })
    }
}

impl RoleListQuery {
    /// Returns the requested filters with multi-selections collapsed, or
    /// `stored` when the request names no filter at all.
    #[must_use]
    pub fn filters_or(&self, stored: &RoleFilterSet) -> RoleFilterSet {
        if self.objects.is_none() && self.activities.is_none() && self.data_field_actions.is_none()
        {
            return stored.clone();
        }

        RoleFilterSet {
            objects: split_list(self.objects.as_deref()),
            activities: split_list(self.activities.as_deref()),
            data_field_actions: split_list(self.data_field_actions.as_deref()),
        }
        .cascaded()
    }

    /// Builds the full list query on top of the stored sidebar query,
    /// rejecting unknown status values.
    pub fn to_role_query(&self, stored: &RoleQuery) -> AppResult<RoleQuery> {
        let status = match self.status.as_deref() {
            Some(value) => StatusFilter::from_str(value)?,
            None => stored.status,
        };

        Ok(RoleQuery {
            search: self
                .search
                .clone()
                .unwrap_or_else(|| stored.search.clone()),
            status,
            filters: self.filters_or(&stored.filters),
        })
    }
}

fn split_list(value: Option<&str>) -> Vec<String> {
    value
        .map(|value| {
            value
                .split(',')
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .map(ToOwned::to_owned)
                .collect()
        })
        .unwrap_or_default()
}

impl From<FilterOptions> for FilterOptionsResponse {
    fn from(value: FilterOptions) -> Self {
        Self {
            objects: value.objects,
            activities: value.activities,
            data_field_actions: value.data_field_actions,
        }
    }
}

impl TryFrom<RoleSelectionActionRequest> for RoleCatalogAction {
    type Error = AppError;

    fn try_from(value: RoleSelectionActionRequest) -> Result<Self, Self::Error> {
        use RoleSelectionActionRequest as Request;

        Ok(match value {
            Request::SelectRole { role_id } => Self::SelectRole { role_id },
            Request::ToggleActivity { activity_name } => Self::ToggleActivity { activity_name },
            Request::ToggleDataFieldAction {
                activity_name,
                label,
            } => Self::ToggleDataFieldAction {
                activity_name,
                label,
            },
            Request::ResetAll => Self::ResetAll,
            Request::EnableAll => Self::EnableAll,
            Request::ResetObject { object_id } => Self::ResetObject { object_id },
            Request::EnableObject { object_id } => Self::EnableObject { object_id },
            Request::SetSearchQuery { query } => Self::SetSearchQuery { query },
            Request::SetStatusFilter { status } => Self::SetStatusFilter {
                status: StatusFilter::from_str(status.as_str())?,
            },
            Request::ToggleFilter { category, item } => Self::ToggleFilter {
                category: FilterCategory::from_str(category.as_str())?,
                item,
            },
            Request::ClearFilter { category } => Self::ClearFilter {
                category: FilterCategory::from_str(category.as_str())?,
            },
        })
    }
}

impl From<RoleCatalog> for RoleSelectionResponse {
    fn from(value: RoleCatalog) -> Self {
        let selection = value.selection();

        Self {
            selected_role: value.selected_role().cloned().map(RoleDto::from),
            active_activities: selection.active_activities().clone(),
            selected_actions: selection.selected_actions().clone(),
            search_query: value.search_query().to_owned(),
            status_filter: value.status_filter().as_str().to_owned(),
            filters: RoleFilterSetDto::from(value.filters().clone()),
            load_state: value.load_state().as_str().to_owned(),
            error: value.error().map(ToOwned::to_owned),
        }
    }
}

impl From<RoleFilterSet> for RoleFilterSetDto {
    fn from(value: RoleFilterSet) -> Self {
        Self {
            objects: value.objects,
            activities: value.activities,
            data_field_actions: value.data_field_actions,
        }
    }
}
