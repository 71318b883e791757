//! Role mapping domain models.
//!
//! Oracle identifiers are bounded at 30 characters, so both sides of a
//! mapping are checked against that limit when the mapping is built.
//! Length is measured in UTF-16 code units, the unit the service and the
//! client applications count in.

use crate::error::ValidationError;

/// Minimum length of either side of a role mapping.
pub const MIN_NAME_LENGTH: usize = 1;
/// Maximum length of either side of a role mapping.
pub const MAX_NAME_LENGTH: usize = 30;

fn check_length(field: &'static str, value: &str) -> Result<(), ValidationError> {
    let actual = value.encode_utf16().count();
    if (MIN_NAME_LENGTH..=MAX_NAME_LENGTH).contains(&actual) {
        Ok(())
    } else {
        Err(ValidationError::FieldLength {
            field,
            min: MIN_NAME_LENGTH,
            max: MAX_NAME_LENGTH,
            actual,
        })
    }
}

/// A mapping between a database role and a permission granted to it
/// (e.g. `SELECT`, `EXECUTE`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RoleToPermissionMap {
    role: String,
    permission: String,
}

impl RoleToPermissionMap {
    pub fn new(
        role: impl Into<String>,
        permission: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let role = role.into();
        let permission = permission.into();
        check_length("Role", &role)?;
        check_length("Permission", &permission)?;
        Ok(Self { role, permission })
    }

    pub fn role(&self) -> &str {
        &self.role
    }

    pub fn permission(&self) -> &str {
        &self.permission
    }
}

/// A mapping between a database role and a user the role is granted to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RoleToUserMap {
    role: String,
    user: String,
}

impl RoleToUserMap {
    pub fn new(role: impl Into<String>, user: impl Into<String>) -> Result<Self, ValidationError> {
        let role = role.into();
        let user = user.into();
        check_length("Role", &role)?;
        check_length("User", &user)?;
        Ok(Self { role, user })
    }

    pub fn role(&self) -> &str {
        &self.role
    }

    pub fn user(&self) -> &str {
        &self.user
    }
}
