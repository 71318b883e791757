//! `oraperm decode` — parse a service payload.

use std::fmt::Debug;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, ValueEnum};
use oraperm_codec as codec;
use tracing::info;

/// Payload shapes the service sends.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum PayloadKind {
    /// Array of strings (object types, owners, roles...).
    Strings,
    /// Array of Oracle object permission sets.
    PermissionSets,
    /// Array of role-to-permission maps.
    RolePermissions,
    /// Array of role-to-user maps.
    RoleUsers,
    /// A single validation result.
    ValidationResult,
    /// An authentication context (service side).
    AuthContext,
    /// Tracking data (service side).
    TrackingData,
}

#[derive(Debug, Args)]
pub struct DecodeArgs {
    /// Shape of the payload.
    #[arg(value_enum)]
    pub kind: PayloadKind,

    /// File holding the payload; stdin when omitted.
    pub file: Option<PathBuf>,
}

fn render_list<T: Debug>(items: &[T]) -> String {
    info!(count = items.len(), "Decoded payload");
    items
        .iter()
        .map(|item| format!("{item:#?}\n"))
        .collect()
}

/// Decode `json` as `kind` and render the containers for display.
pub fn decode(kind: PayloadKind, json: &str) -> Result<String> {
    let rendered = match kind {
        PayloadKind::Strings => render_list(&codec::deserialize_string_list(json)?),
        PayloadKind::PermissionSets => {
            render_list(&codec::deserialize_oracle_object_permission_set_list(json)?)
        }
        PayloadKind::RolePermissions => {
            render_list(&codec::deserialize_role_to_permission_map_list(json)?)
        }
        PayloadKind::RoleUsers => render_list(&codec::deserialize_role_to_user_map_list(json)?),
        PayloadKind::ValidationResult => {
            format!("{:#?}\n", codec::deserialize_validation_result(json)?)
        }
        PayloadKind::AuthContext => {
            format!("{:#?}\n", codec::deserialize_authentication_context(json)?)
        }
        PayloadKind::TrackingData => format!("{:#?}\n", codec::deserialize_tracking_data(json)?),
    };
    Ok(rendered)
}

pub fn execute(args: DecodeArgs) -> Result<()> {
    let json = super::read_input(args.file.as_deref())?;
    print!("{}", decode(args.kind, &json)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strings_render_one_per_line() {
        let out = decode(PayloadKind::Strings, r#"["View","Table"]"#).unwrap();
        assert_eq!(out, "\"View\"\n\"Table\"\n");
        assert_eq!(decode(PayloadKind::Strings, "[]").unwrap(), "");
    }

    #[test]
    fn validation_result_is_rendered() {
        let out = decode(
            PayloadKind::ValidationResult,
            r#"{"IsValid":false,"ValidationError":"already exists"}"#,
        )
        .unwrap();
        assert!(out.contains("is_valid: false"));
        assert!(out.contains("already exists"));
    }

    #[test]
    fn codec_errors_propagate() {
        let err = decode(PayloadKind::RoleUsers, r#"[{"Role":"R"}]"#).unwrap_err();
        assert!(format!("{err:#}").contains("missing field `User`"));
    }
}
