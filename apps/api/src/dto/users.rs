use std::str::FromStr;

use permatrix_application::{Page, PageMarker, UserListQuery};
use permatrix_core::{AppError, AppResult};
use permatrix_domain::{Permission, Permissions, Role, StatusFilter, User};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::roles::RoleDto;

/// API representation of a scoped permission grant.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/permission-dto.ts"
)]
pub struct PermissionDto {
    pub name: String,
    pub status: bool,
    #[serde(default)]
    pub department: Option<Vec<String>>,
    #[serde(default)]
    pub site: Option<Vec<String>>,
    #[serde(default)]
    pub company: Option<Vec<String>>,
    #[serde(default)]
    pub category: Option<Vec<String>>,
}

/// API representation of own and other grants.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/permissions-dto.ts"
)]
pub struct PermissionsDto {
    #[serde(default)]
    pub own: Vec<PermissionDto>,
    #[serde(default)]
    pub other: Vec<PermissionDto>,
}

/// API representation of an employee record.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/user-dto.ts"
)]
pub struct UserDto {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub employee_id: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub site: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub supervisor: String,
    #[serde(default)]
    pub category: Vec<String>,
    #[serde(default)]
    pub requisition_limit: String,
    #[serde(default)]
    pub profile_picture: Option<String>,
    #[serde(default)]
    pub role: Vec<RoleDto>,
    #[serde(default)]
    pub substitute_user: Option<String>,
    #[serde(default)]
    pub substitute_start_date: Option<String>,
    #[serde(default)]
    pub substitute_end_date: Option<String>,
    #[serde(default)]
    pub permissions: PermissionsDto,
    #[serde(default)]
    pub active: bool,
}

/// Query string accepted by the user list endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct UserListRequest {
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub page: Option<usize>,
}

/// One entry of the pagination strip.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/page-marker-response.ts"
)]
pub struct PageMarkerResponse {
    /// `page`, `start_ellipsis` or `end_ellipsis`.
    pub kind: String,
    pub page: Option<usize>,
}

/// One page of users plus the strip to render under it.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/user-page-response.ts"
)]
pub struct UserPageResponse {
    pub items: Vec<UserDto>,
    pub page: usize,
    pub page_size: usize,
    pub total_items: usize,
    pub total_pages: usize,
    pub pages: Vec<PageMarkerResponse>,
}

/// Incoming payload for profile picture uploads.
#[derive(Debug, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/profile-picture-request.ts"
)]
pub struct ProfilePictureRequest {
    pub profile_picture: String,
}

/// Incoming payload for role assignment.
#[derive(Debug, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/assign-roles-request.ts"
)]
pub struct AssignRolesRequest {
    pub role_ids: Vec<String>,
}

impl UserListRequest {
    /// Builds the service query, rejecting unknown status values.
    pub fn to_list_query(&self) -> AppResult<UserListQuery> {
        let status = self
            .status
            .as_deref()
            .map(StatusFilter::from_str)
            .transpose()?;

        Ok(UserListQuery {
            search: self.search.clone().unwrap_or_default(),
            status,
            page: self.page.unwrap_or(1),
        })
    }
}

impl From<Permission> for PermissionDto {
    fn from(value: Permission) -> Self {
        Self {
            name: value.name,
            status: value.status,
            department: value.department,
            site: value.site,
            company: value.company,
            category: value.category,
        }
    }
}

impl From<PermissionDto> for Permission {
    fn from(value: PermissionDto) -> Self {
        Self {
            name: value.name,
            status: value.status,
            department: value.department,
            site: value.site,
            company: value.company,
            category: value.category,
        }
    }
}

impl From<Permissions> for PermissionsDto {
    fn from(value: Permissions) -> Self {
        Self {
            own: value.own.into_iter().map(PermissionDto::from).collect(),
            other: value.other.into_iter().map(PermissionDto::from).collect(),
        }
    }
}

impl From<PermissionsDto> for Permissions {
    fn from(value: PermissionsDto) -> Self {
        Self {
            own: value.own.into_iter().map(Permission::from).collect(),
            other: value.other.into_iter().map(Permission::from).collect(),
        }
    }
}

impl From<User> for UserDto {
    fn from(value: User) -> Self {
        Self {
            first_name: value.first_name,
            last_name: value.last_name,
            email: value.email,
            employee_id: value.employee_id,
            start_date: value.start_date,
            department: value.department,
            site: value.site,
            company: value.company,
            supervisor: value.supervisor,
            category: value.category,
            requisition_limit: value.requisition_limit,
            profile_picture: value.profile_picture,
            role: value.role.into_iter().map(RoleDto::from).collect(),
            substitute_user: value.substitute_user,
            substitute_start_date: value.substitute_start_date,
            substitute_end_date: value.substitute_end_date,
            permissions: value.permissions.into(),
            active: value.active,
        }
    }
}

impl TryFrom<UserDto> for User {
    type Error = AppError;

    fn try_from(value: UserDto) -> Result<Self, Self::Error> {
        let role = value
            .role
            .into_iter()
            .map(Role::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            first_name: value.first_name,
            last_name: value.last_name,
            email: value.email,
            employee_id: value.employee_id,
            start_date: value.start_date,
            department: value.department,
            site: value.site,
            company: value.company,
            supervisor: value.supervisor,
            category: value.category,
            requisition_limit: value.requisition_limit,
            profile_picture: value.profile_picture,
            role,
            substitute_user: value.substitute_user,
            substitute_start_date: value.substitute_start_date,
            substitute_end_date: value.substitute_end_date,
            permissions: value.permissions.into(),
            active: value.active,
        })
    }
}

impl From<PageMarker> for PageMarkerResponse {
    fn from(value: PageMarker) -> Self {
        match value {
            PageMarker::Page(page) => Self {
                kind: "page".to_owned(),
                page: Some(page),
            },
            PageMarker::StartEllipsis => Self {
                kind: "start_ellipsis".to_owned(),
                page: None,
            },
            PageMarker::EndEllipsis => Self {
                kind: "end_ellipsis".to_owned(),
                page: None,
            },
        }
    }
}

impl UserPageResponse {
    /// Builds the response from a page and its pagination strip.
    #[must_use]
    pub fn from_page(page: Page<User>, markers: Vec<PageMarker>) -> Self {
        Self {
            items: page.items.into_iter().map(UserDto::from).collect(),
            page: page.page,
            page_size: page.page_size,
            total_items: page.total_items,
            total_pages: page.total_pages,
            pages: markers.into_iter().map(PageMarkerResponse::from).collect(),
        }
    }
}
