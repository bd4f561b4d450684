//! CI test-user provisioning harness for identity providers.
//!
//! Provisions a throwaway user in an identity provider pool (generate
//! unique credentials, register through the public sign-up operation,
//! bypass email verification with an administrative confirmation) and
//! hands the credentials to a downstream authenticated test flow.
//!
//! # Core Components
//!
//! - [`Provisioner`] - The sequential provisioning flow
//! - [`IdentityProvider`] - Trait for pluggable provider backends
//! - [`credentials`] - Unique token, password, and email generators
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use idp_harness::{Provisioner, RunContext};
//! use idp_harness::config::ProviderConfig;
//! use idp_harness::provider::HttpIdentityProvider;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ProviderConfig::from_file("config.json")?;
//! let provider = HttpIdentityProvider::from_config(&config)?;
//! let provisioner = Provisioner::new(config, provider);
//!
//! let credentials = provisioner.provision(&RunContext::with_generated_id()).await?;
//! println!("sign in as {}", credentials.username);
//! # Ok(())
//! # }
//! ```
//!
//! Failures are returned as typed errors, never by terminating the process;
//! the `provision-user` binary maps them to exit codes for CI.

pub mod config;
pub mod context;
pub mod credentials;
pub mod error;
pub mod provider;
pub mod provisioner;

// Re-export commonly used types for convenience
pub use config::ProviderConfig;
pub use context::RunContext;
pub use credentials::CredentialSet;
pub use error::{HarnessError, HarnessResult, ProviderOperation};
pub use provider::{IdentityProvider, SignUpRequest, UserAttribute};
pub use provisioner::Provisioner;
