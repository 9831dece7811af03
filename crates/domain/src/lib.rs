//! Domain entities and invariants.

#![forbid(unsafe_code)]

mod object;
mod role;
mod user;

pub use object::{Activity, DataFieldAction, RoleObject};
pub use role::{Role, RoleStatus, StatusFilter};
pub use user::{EmailAddress, Permission, Permissions, User};
