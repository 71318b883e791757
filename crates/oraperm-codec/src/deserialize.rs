//! JSON → domain.
//!
//! Parsing happens in two stages: `serde_json` maps the text onto the wire
//! structs (any malformed text, missing key or wrong value type fails
//! here as [`CodecError::Format`](crate::CodecError::Format)), then the domain constructors run and
//! may fail with [`CodecError::Validation`](crate::CodecError::Validation). Nothing partial is returned.

use oraperm_core::models::{
    AuthenticationContext, OracleObjectPermissionSet, RoleToPermissionMap, RoleToUserMap,
    TrackingData, ValidationResult,
};

use crate::error::CodecResult;
use crate::wire::{
    AuthenticationContextIn, PermissionSetIn, RoleToPermissionMapIn, RoleToUserMapIn,
    TrackingDataWire, ValidationResultIn,
};

/// Parse a JSON array of strings, preserving order.
pub fn deserialize_string_list(json: &str) -> CodecResult<Vec<String>> {
    Ok(serde_json::from_str(json)?)
}

/// Parse a JSON array of permission sets.
///
/// Every element must carry `ObjectName`, `ObjectType`, `ObjectOwner`,
/// `AddFlag`, `RemoveFlag` and `ObjectPermissions`.
pub fn deserialize_oracle_object_permission_set_list(
    json: &str,
) -> CodecResult<Vec<OracleObjectPermissionSet>> {
    let wire: Vec<PermissionSetIn> = serde_json::from_str(json)?;
    Ok(wire
        .into_iter()
        .map(OracleObjectPermissionSet::try_from)
        .collect::<Result<Vec<_>, _>>()?)
}

/// `Role` and `Permission` must be JSON strings; numbers or other values
/// are rejected rather than stringified.
pub fn deserialize_role_to_permission_map_list(
    json: &str,
) -> CodecResult<Vec<RoleToPermissionMap>> {
    let wire: Vec<RoleToPermissionMapIn> = serde_json::from_str(json)?;
    Ok(wire
        .into_iter()
        .map(RoleToPermissionMap::try_from)
        .collect::<Result<Vec<_>, _>>()?)
}

pub fn deserialize_role_to_user_map_list(json: &str) -> CodecResult<Vec<RoleToUserMap>> {
    let wire: Vec<RoleToUserMapIn> = serde_json::from_str(json)?;
    Ok(wire
        .into_iter()
        .map(RoleToUserMap::try_from)
        .collect::<Result<Vec<_>, _>>()?)
}

pub fn deserialize_validation_result(json: &str) -> CodecResult<ValidationResult> {
    let wire: ValidationResultIn = serde_json::from_str(json)?;
    Ok(wire.into())
}

pub fn deserialize_authentication_context(json: &str) -> CodecResult<AuthenticationContext> {
    let wire: AuthenticationContextIn = serde_json::from_str(json)?;
    Ok(wire.into())
}

/// Either member may be missing or `null`.
pub fn deserialize_tracking_data(json: &str) -> CodecResult<TrackingData> {
    let wire: TrackingDataWire = serde_json::from_str(json)?;
    Ok(wire.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CodecError;

    #[test]
    fn empty_arrays() {
        assert!(deserialize_string_list("[]").unwrap().is_empty());
        assert!(deserialize_role_to_permission_map_list("[]").unwrap().is_empty());
        assert!(deserialize_role_to_user_map_list("[]").unwrap().is_empty());
        assert!(deserialize_oracle_object_permission_set_list("[]").unwrap().is_empty());
    }

    #[test]
    fn malformed_text_is_a_format_error() {
        let err = deserialize_string_list("[\"View\",").unwrap_err();
        assert!(matches!(err, CodecError::Format(_)));
    }

    #[test]
    fn object_where_array_expected() {
        let err = deserialize_role_to_permission_map_list(r#"{"Role":"R","Permission":"P"}"#)
            .unwrap_err();
        assert!(err.is_format());
    }

    #[test]
    fn numeric_role_is_not_stringified() {
        let err = deserialize_role_to_permission_map_list(r#"[{"Role":5,"Permission":"SELECT"}]"#)
            .unwrap_err();
        assert!(matches!(err, CodecError::Format(_)));

        let err = deserialize_role_to_user_map_list(r#"[{"Role":"R","User":true}]"#).unwrap_err();
        assert!(matches!(err, CodecError::Format(_)));
    }

    #[test]
    fn string_flag_is_a_type_mismatch() {
        let err = deserialize_validation_result(r#"{"IsValid":"true","ValidationError":""}"#)
            .unwrap_err();
        assert!(matches!(err, CodecError::Format(_)));
    }

    #[test]
    fn missing_validation_error_key() {
        let err = deserialize_validation_result(r#"{"IsValid":true}"#).unwrap_err();
        assert!(err.to_string().contains("ValidationError"));
    }

    #[test]
    fn overlong_role_surfaces_as_validation() {
        let json = format!(r#"[{{"Role":"{}","Permission":"SELECT"}}]"#, "R".repeat(31));
        let err = deserialize_role_to_permission_map_list(&json).unwrap_err();
        assert!(matches!(err, CodecError::Validation(_)));
        assert!(!err.is_format());
    }

    #[test]
    fn address_octet_out_of_range() {
        let err = deserialize_tracking_data(r#"{"IpV4Address":[192,168,2,256]}"#).unwrap_err();
        assert!(err.is_format());
        let err = deserialize_tracking_data(r#"{"IpV4Address":[192,168,2]}"#).unwrap_err();
        assert!(err.is_format());
    }

    #[test]
    fn null_members_read_as_absent() {
        let data = deserialize_tracking_data(r#"{"IpV4Address":null,"Location":null}"#).unwrap();
        assert_eq!(data, TrackingData::default());
    }
}
