//! # Test User Provisioner
//!
//! A command-line utility that provisions a throwaway identity-provider user
//! for a CI run and prints its credentials for the downstream authenticated
//! test flow.
//!
//! ## Usage
//!
//! ### From a JSON configuration artifact
//!
//! ```bash
//! cargo run --bin provision-user config.json
//! ```
//!
//! ### From environment variables
//!
//! ```bash
//! IDP_USER_POOL_ID=us-east-1_TestPool \
//! IDP_CLIENT_ID=3fa85f64client \
//! IDP_REGION=us-east-1 \
//! cargo run --bin provision-user
//! ```
//!
//! On success the credential set is printed as JSON on stdout and the
//! process exits 0:
//!
//! ```text
//! ✓ Provisioned test user ci-test-1700000000000abcd1234@test.example.com
//! {"username":"ci-test-...@test.example.com","password":"...","email":"..."}
//! ```
//!
//! Any configuration or provider failure is printed to stderr and the
//! process exits 1:
//!
//! ```text
//! ❌ Failed to provision test user: Configuration error: missing required field 'userPoolId'
//! ```

use idp_harness::config::ProviderConfig;
use idp_harness::provider::HttpIdentityProvider;
use idp_harness::{HarnessError, HarnessResult, Provisioner, RunContext};
use std::env;
use std::process;

#[tokio::main]
async fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() > 2 {
        eprintln!("Usage: {} [config.json]", args[0]);
        eprintln!();
        eprintln!("Without a config file, settings are read from IDP_* environment variables.");
        process::exit(1);
    }

    match run(args.get(1).map(String::as_str)).await {
        Ok(()) => {}
        Err(e) => {
            eprintln!("❌ Failed to provision test user: {}", e);
            process::exit(1);
        }
    }
}

async fn run(config_path: Option<&str>) -> HarnessResult<()> {
    let config = match config_path {
        Some(path) => ProviderConfig::from_file(path)?,
        None => ProviderConfig::from_env()?,
    };

    let provider = HttpIdentityProvider::from_config(&config)
        .map_err(|e| HarnessError::invalid_config(e.to_string()))?;
    let provisioner = Provisioner::new(config, provider);

    let context = RunContext::with_generated_id();
    let credentials = provisioner.provision(&context).await?;

    eprintln!("✓ Provisioned test user {}", credentials.username);
    // The stdout line is the handoff consumed by the downstream test flow.
    let json = serde_json::to_string(&credentials)
        .map_err(|e| HarnessError::invalid_config(format!("failed to encode credentials: {}", e)))?;
    println!("{}", json);
    Ok(())
}
