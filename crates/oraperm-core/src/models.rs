//! Container objects for ORAPERM.
//!
//! All containers are plain values: they are built by the caller, handed
//! to the codec, and discarded once the request/response cycle is over.

pub mod auth_context;
pub mod permission_set;
pub mod role_map;
pub mod settings;
pub mod tracking;
pub mod validation;

pub use auth_context::AuthenticationContext;
pub use permission_set::OracleObjectPermissionSet;
pub use role_map::{RoleToPermissionMap, RoleToUserMap};
pub use settings::{ClientSettings, RemoteDataModelProxyType};
pub use tracking::{Location, TrackingData};
pub use validation::ValidationResult;
