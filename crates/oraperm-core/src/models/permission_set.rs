//! Oracle object permission set domain model.

use super::role_map::RoleToPermissionMap;

/// The set of permissions relating to one object in an Oracle database.
///
/// Object name and owner are stored in uppercase, the form Oracle uses
/// for unquoted identifiers. The object type (e.g. `Stored Procedure`,
/// `View`) is kept as given.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OracleObjectPermissionSet {
    object_name: String,
    object_type: String,
    object_owner: String,
    /// Whether grant statements are generated for this object.
    pub add_flag: bool,
    /// Whether revoke statements are generated for this object.
    pub remove_flag: bool,
    /// Permissions granted on the object, in the order they were supplied.
    pub object_permissions: Vec<RoleToPermissionMap>,
}

impl OracleObjectPermissionSet {
    pub fn new(
        object_name: &str,
        object_type: impl Into<String>,
        object_owner: &str,
    ) -> Self {
        Self {
            object_name: object_name.to_uppercase(),
            object_type: object_type.into(),
            object_owner: object_owner.to_uppercase(),
            ..Self::default()
        }
    }

    pub fn with_flags(mut self, add_flag: bool, remove_flag: bool) -> Self {
        self.add_flag = add_flag;
        self.remove_flag = remove_flag;
        self
    }

    pub fn with_permissions(mut self, permissions: Vec<RoleToPermissionMap>) -> Self {
        self.object_permissions = permissions;
        self
    }

    pub fn object_name(&self) -> &str {
        &self.object_name
    }

    pub fn set_object_name(&mut self, object_name: &str) {
        self.object_name = object_name.to_uppercase();
    }

    pub fn object_type(&self) -> &str {
        &self.object_type
    }

    pub fn set_object_type(&mut self, object_type: impl Into<String>) {
        self.object_type = object_type.into();
    }

    pub fn object_owner(&self) -> &str {
        &self.object_owner
    }

    pub fn set_object_owner(&mut self, object_owner: &str) {
        self.object_owner = object_owner.to_uppercase();
    }
}
