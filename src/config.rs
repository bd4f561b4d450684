//! Provider configuration for the provisioning harness.
//!
//! The configuration is an external artifact this crate only reads: a JSON
//! file checked into the CI environment, or environment variables for
//! pipelines that inject settings directly. Loading and validation are
//! separate steps so the provisioner can validate explicitly before its
//! first network call.

use crate::error::{HarnessError, HarnessResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;
use url::Url;

/// Artifact key for the user pool identifier, as reported in errors.
pub const FIELD_USER_POOL_ID: &str = "userPoolId";
/// Artifact key for the client identifier, as reported in errors.
pub const FIELD_CLIENT_ID: &str = "clientId";

/// Environment variables consulted by [`ProviderConfig::from_env`].
const ENV_USER_POOL_ID: &str = "IDP_USER_POOL_ID";
const ENV_CLIENT_ID: &str = "IDP_CLIENT_ID";
const ENV_REGION: &str = "IDP_REGION";
const ENV_ENDPOINT: &str = "IDP_ENDPOINT";
const ENV_ADMIN_AUTHORIZATION: &str = "IDP_ADMIN_AUTHORIZATION";

/// Read-only identity provider settings for one provisioning run.
///
/// `user_pool_id` and `client_id` are required and checked by
/// [`validate`](Self::validate). `region` is consumed when deriving the
/// provider endpoint but is not independently validated; an empty region
/// without an `endpoint` override surfaces as a transport error from the
/// provider call instead.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderConfig {
    /// Tenant-like grouping of users within the identity provider.
    pub user_pool_id: String,
    /// Application client credential for the provider's public APIs.
    pub client_id: String,
    /// Provider region used to derive the default endpoint.
    pub region: String,
    /// Explicit endpoint override, e.g. a local emulator in CI.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<Url>,
    /// Authorization header value for administrative calls, when the
    /// deployment requires one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_authorization: Option<String>,
}

impl ProviderConfig {
    /// Loads configuration from a JSON artifact on disk.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::InvalidConfiguration`] if the file cannot be
    /// read or does not parse as a configuration object.
    pub fn from_file(path: impl AsRef<Path>) -> HarnessResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            HarnessError::invalid_config(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        serde_json::from_str(&contents).map_err(|e| {
            HarnessError::invalid_config(format!(
                "failed to parse config file '{}': {}",
                path.display(),
                e
            ))
        })
    }

    /// Builds configuration from `IDP_*` environment variables.
    ///
    /// Required variables that are unset become empty fields, so the usual
    /// [`validate`](Self::validate) step reports them by name rather than
    /// this constructor guessing at intent.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::InvalidConfiguration`] if `IDP_ENDPOINT` is
    /// set but is not a valid URL.
    pub fn from_env() -> HarnessResult<Self> {
        let endpoint = match env::var(ENV_ENDPOINT) {
            Ok(raw) if !raw.is_empty() => Some(Url::parse(&raw).map_err(|e| {
                HarnessError::invalid_config(format!("invalid {}: {}", ENV_ENDPOINT, e))
            })?),
            _ => None,
        };

        Ok(Self {
            user_pool_id: env::var(ENV_USER_POOL_ID).unwrap_or_default(),
            client_id: env::var(ENV_CLIENT_ID).unwrap_or_default(),
            region: env::var(ENV_REGION).unwrap_or_default(),
            endpoint,
            admin_authorization: env::var(ENV_ADMIN_AUTHORIZATION).ok().filter(|v| !v.is_empty()),
        })
    }

    /// Checks that the required fields are present and non-empty.
    ///
    /// Fields are checked in artifact order, so the first missing one is the
    /// one reported.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::MissingConfiguration`] naming the first
    /// missing or empty required field.
    pub fn validate(&self) -> HarnessResult<()> {
        if self.user_pool_id.trim().is_empty() {
            return Err(HarnessError::missing_field(FIELD_USER_POOL_ID));
        }
        if self.client_id.trim().is_empty() {
            return Err(HarnessError::missing_field(FIELD_CLIENT_ID));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> ProviderConfig {
        ProviderConfig {
            user_pool_id: "us-east-1_TestPool".to_string(),
            client_id: "3fa85f64client".to_string(),
            region: "us-east-1".to_string(),
            endpoint: None,
            admin_authorization: None,
        }
    }

    #[test]
    fn valid_config_passes_validation() {
        assert!(valid_config().validate().is_ok());
    }

    #[test]
    fn empty_user_pool_id_is_reported_first() {
        let mut config = valid_config();
        config.user_pool_id = String::new();
        config.client_id = String::new();

        let err = config.validate().unwrap_err();
        match err {
            HarnessError::MissingConfiguration { field } => {
                assert_eq!(field, FIELD_USER_POOL_ID);
            }
            other => panic!("expected MissingConfiguration, got {:?}", other),
        }
    }

    #[test]
    fn whitespace_client_id_counts_as_missing() {
        let mut config = valid_config();
        config.client_id = "   ".to_string();

        let err = config.validate().unwrap_err();
        match err {
            HarnessError::MissingConfiguration { field } => {
                assert_eq!(field, FIELD_CLIENT_ID);
            }
            other => panic!("expected MissingConfiguration, got {:?}", other),
        }
    }

    #[test]
    fn parses_camel_case_artifact() {
        let json = r#"{
            "userPoolId": "us-east-1_TestPool",
            "clientId": "abc123",
            "region": "us-east-1",
            "endpoint": "http://localhost:9229/"
        }"#;

        let config: ProviderConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.user_pool_id, "us-east-1_TestPool");
        assert_eq!(config.client_id, "abc123");
        assert_eq!(config.endpoint.unwrap().as_str(), "http://localhost:9229/");
        assert!(config.admin_authorization.is_none());
    }
}
