use permatrix_domain::{Role, RoleObject, User};
use tokio::sync::RwLock;

use crate::object_catalog::ObjectCatalog;
use crate::role_catalog::RoleCatalog;
use crate::user_catalog::UserCatalog;

/// Process-wide console state shared by the admin services.
///
/// Each catalog has its own lock. Callers must release a guard before
/// awaiting a remote call.
#[derive(Debug, Default)]
pub struct ConsoleStore {
    objects: RwLock<ObjectCatalog>,
    roles: RwLock<RoleCatalog>,
    users: RwLock<UserCatalog>,
}

impl ConsoleStore {
    /// Creates a store from initial catalog content.
    #[must_use]
    pub fn new(objects: Vec<RoleObject>, roles: Vec<Role>, users: Vec<User>) -> Self {
        Self {
            objects: RwLock::new(ObjectCatalog::new(objects)),
            roles: RwLock::new(RoleCatalog::new(roles)),
            users: RwLock::new(UserCatalog::new(users)),
        }
    }

    /// Object catalog lock.
    #[must_use]
    pub fn objects(&self) -> &RwLock<ObjectCatalog> {
        &self.objects
    }

    /// Role catalog lock.
    #[must_use]
    pub fn roles(&self) -> &RwLock<RoleCatalog> {
        &self.roles
    }

    /// User catalog lock.
    #[must_use]
    pub fn users(&self) -> &RwLock<UserCatalog> {
        &self.users
    }
}
