//! Application services and ports.

#![forbid(unsafe_code)]

mod console_store;
mod object_admin_service;
mod object_catalog;
mod pagination;
mod permission_selection;
mod role_admin_service;
mod role_catalog;
mod role_filter;
mod role_ports;
mod user_admin_service;
mod user_catalog;

pub use console_store::ConsoleStore;
pub use object_admin_service::ObjectAdminService;
pub use object_catalog::{
    ActivityPatch, DataFieldActionPatch, ObjectCatalog, ObjectCatalogAction,
};
pub use pagination::{
    DEFAULT_USERS_PAGE_SIZE, Page, PageMarker, PageRequest, page_count, paginate, visible_pages,
};
pub use permission_selection::PermissionSelection;
pub use role_admin_service::{CreateRoleInput, RoleAdminService};
pub use role_catalog::{LoadState, RoleCatalog, RoleCatalogAction, RoleDetails};
pub use role_filter::{FilterCategory, FilterOptions, RoleFilterSet, RoleQuery, role_matches_filters};
pub use role_ports::{AuthGateway, RoleGateway};
pub use user_admin_service::{UserAdminService, UserListQuery};
pub use user_catalog::{UserCatalog, UserCatalogAction};
