use std::collections::HashSet;

use crate::{
    model::permission::Permission,
    server::error::{auth::AuthError, Error},
};

/// The authenticated account a service operation runs on behalf of.
///
/// Built by controllers from the session and passed explicitly into every service call,
/// services check the permission they need with [`Caller::require`].
#[derive(Clone, Debug)]
pub struct Caller {
    pub account_id: i32,
    pub username: String,
    pub is_superuser: bool,
    permissions: HashSet<Permission>,
}

impl Caller {
    pub fn new(
        account_id: i32,
        username: String,
        is_superuser: bool,
        permissions: impl IntoIterator<Item = Permission>,
    ) -> Self {
        Self {
            account_id,
            username,
            is_superuser,
            permissions: permissions.into_iter().collect(),
        }
    }

    /// A caller holding every permission
    pub fn superuser(account_id: i32, username: String) -> Self {
        Self::new(account_id, username, true, Permission::ALL)
    }

    pub fn has(&self, permission: Permission) -> bool {
        self.is_superuser || self.permissions.contains(&permission)
    }

    pub fn require(&self, permission: Permission) -> Result<(), Error> {
        if self.has(permission) {
            Ok(())
        } else {
            Err(AuthError::PermissionDenied(permission).into())
        }
    }

    /// Effective permissions in a stable order
    pub fn permissions(&self) -> Vec<Permission> {
        let mut permissions: Vec<Permission> = if self.is_superuser {
            Permission::ALL.to_vec()
        } else {
            self.permissions.iter().copied().collect()
        };
        permissions.sort();

        permissions
    }
}
