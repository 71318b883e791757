//! `oraperm encode` — build a request payload.

use std::net::Ipv4Addr;
use std::path::Path;

use anyhow::{Context, Result, bail};
use clap::Subcommand;
use oraperm_codec as codec;
use oraperm_core::models::{AuthenticationContext, Location, RoleToPermissionMap, TrackingData};
use tracing::debug;

use crate::config;

#[derive(Debug, Subcommand)]
pub enum EncodeCommands {
    /// Authentication context for the configured (or given) user.
    AuthContext {
        /// Overrides the user identifier from the settings.
        #[arg(long)]
        user_identifier: Option<String>,
    },

    /// Tracking data. Omitted members are left out of the payload.
    Tracking {
        #[arg(long, requires_all = ["longitude", "seconds_since_update"], allow_negative_numbers = true)]
        latitude: Option<f64>,

        #[arg(long, requires = "latitude", allow_negative_numbers = true)]
        longitude: Option<f64>,

        #[arg(long, requires = "latitude")]
        seconds_since_update: Option<i32>,

        /// Device IPv4 address.
        #[arg(long)]
        ip: Option<Ipv4Addr>,
    },

    /// Single-field string object.
    String { field: String, value: String },

    /// Single-field boolean object.
    Boolean {
        field: String,
        #[arg(action = clap::ArgAction::Set)]
        value: bool,
    },

    /// Role-to-permission map list from `ROLE=PERMISSION` pairs.
    RolePermissions {
        #[arg(value_name = "ROLE=PERMISSION")]
        pairs: Vec<String>,
    },
}

fn parse_role_permission(pair: &str) -> Result<RoleToPermissionMap> {
    let Some((role, permission)) = pair.split_once('=') else {
        bail!("expected ROLE=PERMISSION, got '{pair}'");
    };
    RoleToPermissionMap::new(role, permission).with_context(|| format!("invalid pair '{pair}'"))
}

/// Build the JSON payload for a command.
pub fn encode(cmd: EncodeCommands, settings_path: Option<&Path>) -> Result<String> {
    let json = match cmd {
        EncodeCommands::AuthContext { user_identifier } => {
            let user_identifier = match user_identifier {
                Some(user) => user,
                None => config::load_settings(settings_path)?.user_identifier,
            };
            if user_identifier.is_empty() {
                bail!(
                    "no user identifier; pass --user-identifier, set {} or configure a settings file",
                    config::USER_IDENTIFIER_ENV
                );
            }
            codec::serialize_authentication_context(&AuthenticationContext::new(user_identifier))?
        }
        EncodeCommands::Tracking {
            latitude,
            longitude,
            seconds_since_update,
            ip,
        } => {
            let location = match (latitude, longitude, seconds_since_update) {
                (Some(lat), Some(lon), Some(secs)) => Some(Location::new(lat, lon, secs)),
                _ => None,
            };
            codec::serialize_tracking_data(&TrackingData::new(location, ip))?
        }
        EncodeCommands::String { field, value } => codec::serialize_string(&field, &value)?,
        EncodeCommands::Boolean { field, value } => codec::serialize_boolean(&field, value)?,
        EncodeCommands::RolePermissions { pairs } => {
            let maps = pairs
                .iter()
                .map(|pair| parse_role_permission(pair))
                .collect::<Result<Vec<_>>>()?;
            codec::serialize_role_to_permission_map_list(&maps)?
        }
    };

    debug!(bytes = json.len(), "Encoded payload");
    Ok(json)
}

pub fn execute(cmd: EncodeCommands, settings_path: Option<&Path>) -> Result<()> {
    println!("{}", encode(cmd, settings_path)?);
    Ok(())
}
