mod common;
mod objects;
mod roles;
mod users;

pub use common::{HealthResponse, UserIdentityResponse};
pub use objects::{
    ActivityDto, ActivityPatchRequest, DataFieldActionDto, DataFieldActionPatchRequest,
    ObjectCatalogActionRequest, ObjectCatalogStateResponse, ObjectListQuery, RoleObjectDto,
};
pub use roles::{
    CreateRoleRequest, FilterOptionsResponse, RoleDto, RoleFilterSetDto, RoleListQuery,
    RoleSelectionActionRequest, RoleSelectionResponse, UpdateRoleRequest,
};
pub use users::{
    AssignRolesRequest, PageMarkerResponse, PermissionDto, PermissionsDto, ProfilePictureRequest,
    UserDto, UserListRequest, UserPageResponse,
};
