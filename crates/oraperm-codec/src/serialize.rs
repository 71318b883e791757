//! Domain → JSON.

use oraperm_core::models::{
    AuthenticationContext, Location, OracleObjectPermissionSet, RoleToPermissionMap,
    RoleToUserMap, TrackingData, ValidationResult,
};
use serde_json::{Map, Value};

use crate::error::{CodecError, CodecResult};
use crate::wire::{
    AuthenticationContextOut, PermissionSetOut, RoleToPermissionMapOut, RoleToUserMapOut,
    TrackingDataWire, ValidationResultOut,
};

fn single_field(field_name: &str, value: Value) -> CodecResult<String> {
    let mut object = Map::new();
    object.insert(field_name.to_owned(), value);
    Ok(serde_json::to_string(&Value::Object(object))?)
}

/// `{"<field_name>": "<value>"}`
pub fn serialize_string(field_name: &str, value: &str) -> CodecResult<String> {
    single_field(field_name, Value::String(value.to_owned()))
}

/// `{"<field_name>": true|false}`
pub fn serialize_boolean(field_name: &str, value: bool) -> CodecResult<String> {
    single_field(field_name, Value::Bool(value))
}

/// `[{"Role": .., "Permission": ..}, ..]`, in input order.
pub fn serialize_role_to_permission_map_list(list: &[RoleToPermissionMap]) -> CodecResult<String> {
    let wire: Vec<RoleToPermissionMapOut<'_>> = list.iter().map(Into::into).collect();
    Ok(serde_json::to_string(&wire)?)
}

/// `{"UserIdentifier": ..}`
pub fn serialize_authentication_context(ctx: &AuthenticationContext) -> CodecResult<String> {
    Ok(serde_json::to_string(&AuthenticationContextOut {
        user_identifier: &ctx.user_identifier,
    })?)
}

fn ensure_finite(field: &'static str, value: f64) -> CodecResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(CodecError::NonFiniteNumber { field, value })
    }
}

/// Serialize tracking data, omitting whichever members are absent.
///
/// The address is written as four unsigned integers. Non-finite
/// coordinates are rejected because JSON has no representation for them.
pub fn serialize_tracking_data(data: &TrackingData) -> CodecResult<String> {
    if let Some(Location {
        latitude,
        longitude,
        ..
    }) = data.location
    {
        ensure_finite("Latitude", latitude)?;
        ensure_finite("Longitude", longitude)?;
    }
    Ok(serde_json::to_string(&TrackingDataWire::from(data))?)
}

/// Service-side encoding of a permission set list.
pub fn serialize_oracle_object_permission_set_list(
    list: &[OracleObjectPermissionSet],
) -> CodecResult<String> {
    let wire: Vec<PermissionSetOut<'_>> = list.iter().map(Into::into).collect();
    Ok(serde_json::to_string(&wire)?)
}

pub fn serialize_string_list<S: AsRef<str>>(list: &[S]) -> CodecResult<String> {
    let wire: Vec<&str> = list.iter().map(AsRef::as_ref).collect();
    Ok(serde_json::to_string(&wire)?)
}

pub fn serialize_validation_result(result: &ValidationResult) -> CodecResult<String> {
    Ok(serde_json::to_string(&ValidationResultOut::from(result))?)
}

pub fn serialize_role_to_user_map_list(list: &[RoleToUserMap]) -> CodecResult<String> {
    let wire: Vec<RoleToUserMapOut<'_>> = list.iter().map(Into::into).collect();
    Ok(serde_json::to_string(&wire)?)
}
