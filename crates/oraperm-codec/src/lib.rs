//! ORAPERM Codec — JSON serialization of container objects for the Oracle
//! permission generator web service.
//!
//! The wire shape is fixed by the service: key names, key order and the
//! omission of absent members all have to match exactly. Every function
//! here is pure and thread-safe; none of them log or retain state.
//!
//! The client half of the contract:
//! - [`serialize_string`], [`serialize_boolean`]
//! - [`serialize_role_to_permission_map_list`]
//! - [`serialize_authentication_context`], [`serialize_tracking_data`]
//! - [`deserialize_string_list`], [`deserialize_oracle_object_permission_set_list`]
//! - [`deserialize_role_to_permission_map_list`], [`deserialize_role_to_user_map_list`]
//! - [`deserialize_validation_result`]
//!
//! The service half, useful for fixtures and service-side consumers:
//! - [`serialize_oracle_object_permission_set_list`], [`serialize_string_list`]
//! - [`serialize_validation_result`], [`serialize_role_to_user_map_list`]
//! - [`deserialize_authentication_context`], [`deserialize_tracking_data`]

pub mod deserialize;
pub mod error;
pub mod serialize;
mod wire;

pub use deserialize::{
    deserialize_authentication_context, deserialize_oracle_object_permission_set_list,
    deserialize_role_to_permission_map_list, deserialize_role_to_user_map_list,
    deserialize_string_list, deserialize_tracking_data, deserialize_validation_result,
};
pub use error::{CodecError, CodecResult};
pub use serialize::{
    serialize_authentication_context, serialize_boolean,
    serialize_oracle_object_permission_set_list, serialize_role_to_permission_map_list,
    serialize_role_to_user_map_list, serialize_string, serialize_string_list,
    serialize_tracking_data, serialize_validation_result,
};
