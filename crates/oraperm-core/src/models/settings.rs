//! Client connection settings.
//!
//! Where and how these are persisted is up to the host application; this
//! module only defines their shape and defaults.

use serde::{Deserialize, Serialize};

/// Which remote data model proxy the client talks through.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum RemoteDataModelProxyType {
    Soap,
    #[default]
    Rest,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct ClientSettings {
    /// Identifier sent in the authentication context of every request.
    pub user_identifier: String,
    pub remote_data_model_proxy_type: RemoteDataModelProxyType,
    /// Endpoint URL of the SOAP web service.
    pub soap_data_service_location: String,
    /// Base URL of the REST web service.
    pub rest_data_service_location: String,
}

impl ClientSettings {
    /// The service location matching the selected proxy type.
    pub fn data_service_location(&self) -> &str {
        match self.remote_data_model_proxy_type {
            RemoteDataModelProxyType::Soap => &self.soap_data_service_location,
            RemoteDataModelProxyType::Rest => &self.rest_data_service_location,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_rest() {
        let settings = ClientSettings::default();
        assert_eq!(
            settings.remote_data_model_proxy_type,
            RemoteDataModelProxyType::Rest
        );
        assert!(settings.user_identifier.is_empty());
    }

    #[test]
    fn location_follows_proxy_type() {
        let mut settings = ClientSettings {
            soap_data_service_location: "http://host/soap".into(),
            rest_data_service_location: "http://host/rest".into(),
            ..ClientSettings::default()
        };
        assert_eq!(settings.data_service_location(), "http://host/rest");
        settings.remote_data_model_proxy_type = RemoteDataModelProxyType::Soap;
        assert_eq!(settings.data_service_location(), "http://host/soap");
    }
}
