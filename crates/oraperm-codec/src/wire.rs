//! Wire representations of the container objects.
//!
//! Each struct mirrors one JSON shape of the web-service contract. Field
//! declaration order is emission order, which the service-side fixtures
//! depend on. Outbound structs borrow from the domain values; inbound
//! structs own their data and are converted with the domain constructors
//! so construction-time invariants still apply.

use oraperm_core::ValidationError;
use oraperm_core::models::{
    AuthenticationContext, Location, OracleObjectPermissionSet, RoleToPermissionMap,
    RoleToUserMap, TrackingData, ValidationResult,
};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Role mappings
// ---------------------------------------------------------------------------

/// `{"Role","Permission"}` as sent by the client.
#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct RoleToPermissionMapOut<'a> {
    pub role: &'a str,
    pub permission: &'a str,
}

impl<'a> From<&'a RoleToPermissionMap> for RoleToPermissionMapOut<'a> {
    fn from(map: &'a RoleToPermissionMap) -> Self {
        Self {
            role: map.role(),
            permission: map.permission(),
        }
    }
}

/// `{"Permission","Role"}` as nested inside service-side permission sets.
#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct ObjectPermissionOut<'a> {
    pub permission: &'a str,
    pub role: &'a str,
}

impl<'a> From<&'a RoleToPermissionMap> for ObjectPermissionOut<'a> {
    fn from(map: &'a RoleToPermissionMap) -> Self {
        Self {
            permission: map.permission(),
            role: map.role(),
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct RoleToPermissionMapIn {
    pub role: String,
    pub permission: String,
}

impl TryFrom<RoleToPermissionMapIn> for RoleToPermissionMap {
    type Error = ValidationError;

    fn try_from(wire: RoleToPermissionMapIn) -> Result<Self, Self::Error> {
        RoleToPermissionMap::new(wire.role, wire.permission)
    }
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct RoleToUserMapOut<'a> {
    pub role: &'a str,
    pub user: &'a str,
}

impl<'a> From<&'a RoleToUserMap> for RoleToUserMapOut<'a> {
    fn from(map: &'a RoleToUserMap) -> Self {
        Self {
            role: map.role(),
            user: map.user(),
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct RoleToUserMapIn {
    pub role: String,
    pub user: String,
}

impl TryFrom<RoleToUserMapIn> for RoleToUserMap {
    type Error = ValidationError;

    fn try_from(wire: RoleToUserMapIn) -> Result<Self, Self::Error> {
        RoleToUserMap::new(wire.role, wire.user)
    }
}

// ---------------------------------------------------------------------------
// Permission sets
// ---------------------------------------------------------------------------

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct PermissionSetOut<'a> {
    pub add_flag: bool,
    pub object_name: &'a str,
    pub object_owner: &'a str,
    pub object_permissions: Vec<ObjectPermissionOut<'a>>,
    pub object_type: &'a str,
    pub remove_flag: bool,
}

impl<'a> From<&'a OracleObjectPermissionSet> for PermissionSetOut<'a> {
    fn from(set: &'a OracleObjectPermissionSet) -> Self {
        Self {
            add_flag: set.add_flag,
            object_name: set.object_name(),
            object_owner: set.object_owner(),
            object_permissions: set.object_permissions.iter().map(Into::into).collect(),
            object_type: set.object_type(),
            remove_flag: set.remove_flag,
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct PermissionSetIn {
    pub object_name: String,
    pub object_type: String,
    pub object_owner: String,
    pub add_flag: bool,
    pub remove_flag: bool,
    pub object_permissions: Vec<RoleToPermissionMapIn>,
}

impl TryFrom<PermissionSetIn> for OracleObjectPermissionSet {
    type Error = ValidationError;

    fn try_from(wire: PermissionSetIn) -> Result<Self, Self::Error> {
        let permissions = wire
            .object_permissions
            .into_iter()
            .map(RoleToPermissionMap::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(
            OracleObjectPermissionSet::new(&wire.object_name, wire.object_type, &wire.object_owner)
                .with_flags(wire.add_flag, wire.remove_flag)
                .with_permissions(permissions),
        )
    }
}

// ---------------------------------------------------------------------------
// Authentication, tracking, validation
// ---------------------------------------------------------------------------

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct AuthenticationContextOut<'a> {
    pub user_identifier: &'a str,
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct AuthenticationContextIn {
    pub user_identifier: String,
}

impl From<AuthenticationContextIn> for AuthenticationContext {
    fn from(wire: AuthenticationContextIn) -> Self {
        AuthenticationContext::new(wire.user_identifier)
    }
}

/// Latitude, SecondsSinceUpdate, Longitude: the order the service emits.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct LocationWire {
    pub latitude: f64,
    pub seconds_since_update: i32,
    pub longitude: f64,
}

impl From<&Location> for LocationWire {
    fn from(location: &Location) -> Self {
        Self {
            latitude: location.latitude,
            seconds_since_update: location.seconds_since_update,
            longitude: location.longitude,
        }
    }
}

impl From<LocationWire> for Location {
    fn from(wire: LocationWire) -> Self {
        Location::new(wire.latitude, wire.longitude, wire.seconds_since_update)
    }
}

/// Absent members are omitted, never written as `null`.
#[derive(Serialize, Deserialize)]
pub(crate) struct TrackingDataWire {
    #[serde(
        rename = "IpV4Address",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub ip_v4_address: Option<[u8; 4]>,
    #[serde(rename = "Location", default, skip_serializing_if = "Option::is_none")]
    pub location: Option<LocationWire>,
}

impl From<&TrackingData> for TrackingDataWire {
    fn from(data: &TrackingData) -> Self {
        Self {
            ip_v4_address: data.ip_v4_address,
            location: data.location.as_ref().map(Into::into),
        }
    }
}

impl From<TrackingDataWire> for TrackingData {
    fn from(wire: TrackingDataWire) -> Self {
        TrackingData {
            location: wire.location.map(Into::into),
            ip_v4_address: wire.ip_v4_address,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct ValidationResultOut<'a> {
    pub is_valid: bool,
    pub validation_error: &'a str,
}

impl<'a> From<&'a ValidationResult> for ValidationResultOut<'a> {
    fn from(result: &'a ValidationResult) -> Self {
        Self {
            is_valid: result.is_valid,
            validation_error: &result.validation_error,
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct ValidationResultIn {
    pub is_valid: bool,
    pub validation_error: String,
}

impl From<ValidationResultIn> for ValidationResult {
    fn from(wire: ValidationResultIn) -> Self {
        ValidationResult::new(wire.is_valid, wire.validation_error)
    }
}
