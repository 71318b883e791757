//! Client settings loading.

use std::path::Path;

use anyhow::{Context, Result};
use oraperm_core::error::{OrapermError, OrapermResult};
use oraperm_core::models::ClientSettings;
use tracing::debug;

/// Environment variable overriding the configured user identifier.
pub const USER_IDENTIFIER_ENV: &str = "ORAPERM_USER_IDENTIFIER";

/// Parse the JSON form of [`ClientSettings`]. Missing fields take their
/// defaults.
pub fn parse_settings(text: &str) -> OrapermResult<ClientSettings> {
    serde_json::from_str(text).map_err(|e| OrapermError::Config(e.to_string()))
}

/// Load settings from a JSON file if one is given, otherwise start from
/// the defaults. The user identifier may be overridden from the
/// environment.
pub fn load_settings(path: Option<&Path>) -> Result<ClientSettings> {
    let mut settings = match path {
        Some(path) => {
            debug!(path = %path.display(), "Loading client settings");
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read settings file {}", path.display()))?;
            parse_settings(&text)
                .with_context(|| format!("invalid settings file {}", path.display()))?
        }
        None => ClientSettings::default(),
    };

    if let Ok(user) = std::env::var(USER_IDENTIFIER_ENV) {
        settings.user_identifier = user;
    }

    Ok(settings)
}
