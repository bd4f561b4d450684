//! Shared test utilities for provisioning tests.

use idp_harness::config::ProviderConfig;

/// Creates a fully populated provider configuration.
pub fn test_config() -> ProviderConfig {
    ProviderConfig {
        user_pool_id: "us-east-1_TestPool".to_string(),
        client_id: "3fa85f64client".to_string(),
        region: "us-east-1".to_string(),
        endpoint: None,
        admin_authorization: None,
    }
}

/// Creates a configuration with the given artifact field blanked out.
pub fn config_without(field: &str) -> ProviderConfig {
    let mut config = test_config();
    match field {
        "userPoolId" => config.user_pool_id = String::new(),
        "clientId" => config.client_id = String::new(),
        other => panic!("unknown config field '{}'", other),
    }
    config
}
