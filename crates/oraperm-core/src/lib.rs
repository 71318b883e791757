//! ORAPERM Core — Container objects exchanged with the Oracle permission
//! generator web service.
//!
//! These are the domain types shared by the codec and the tooling. They
//! enforce their own construction-time invariants and know nothing about
//! the wire format.

pub mod error;
pub mod models;
pub mod network;

pub use error::{OrapermError, OrapermResult, ValidationError};
