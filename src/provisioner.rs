//! Test-user provisioning sequence.
//!
//! Four sequential steps, each a terminal failure point: validate the
//! provider configuration, register a fresh user through the public sign-up
//! operation, confirm it administratively, and hand the credentials back.
//! There are no retries; a CI run either gets a usable user or a single
//! descriptive error.

use crate::config::ProviderConfig;
use crate::context::RunContext;
use crate::credentials::{self, CredentialSet};
use crate::error::{HarnessError, HarnessResult, ProviderOperation};
use crate::provider::{IdentityProvider, SignUpRequest, UserAttribute};
use log::{info, warn};

/// Provisions throwaway test users against an identity provider.
///
/// Generic over the provider so the full sequence runs unchanged against the
/// HTTP provider in CI and the in-memory provider in tests.
///
/// # Examples
///
/// ```rust,no_run
/// use idp_harness::{Provisioner, RunContext};
/// use idp_harness::config::ProviderConfig;
/// use idp_harness::provider::HttpIdentityProvider;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = ProviderConfig::from_env()?;
/// let provider = HttpIdentityProvider::from_config(&config)?;
/// let provisioner = Provisioner::new(config, provider);
/// let credentials = provisioner.provision(&RunContext::with_generated_id()).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Provisioner<P: IdentityProvider> {
    config: ProviderConfig,
    provider: P,
}

impl<P: IdentityProvider> Provisioner<P> {
    /// Creates a provisioner over the given configuration and provider.
    pub fn new(config: ProviderConfig, provider: P) -> Self {
        Self { config, provider }
    }

    /// The configuration this provisioner runs with.
    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    /// Consumes the provisioner, returning the provider.
    pub fn into_provider(self) -> P {
        self.provider
    }

    /// Provisions one confirmed test user and returns its credentials.
    ///
    /// Validation runs before any provider call, so a misconfigured pipeline
    /// fails without touching the network. Sign-up completes before
    /// confirmation is attempted; a sign-up failure therefore never leaves a
    /// half-confirmed user behind, while a confirmation failure leaves the
    /// user registered but unconfirmed (no cleanup is performed).
    ///
    /// # Errors
    ///
    /// * [`HarnessError::MissingConfiguration`] when a required field is
    ///   absent or empty
    /// * [`HarnessError::Provider`] when the registration or confirmation
    ///   call is rejected
    pub async fn provision(&self, context: &RunContext) -> HarnessResult<CredentialSet> {
        self.config.validate()?;

        let token = credentials::generate_username();
        let password = credentials::generate_password();
        let email = credentials::generate_email(&token);
        info!("[{}] provisioning test user '{}'", context.run_id, email);

        // The pool uses email as its username attribute, so the derived
        // email doubles as the username for both provider calls.
        let request = SignUpRequest {
            client_id: self.config.client_id.clone(),
            username: email.clone(),
            password: password.clone(),
            attributes: vec![UserAttribute::email(email.clone())],
        };
        self.provider
            .sign_up(request, context)
            .await
            .map_err(|e| HarnessError::provider(ProviderOperation::SignUp, &e))?;

        self.provider
            .admin_confirm_sign_up(&self.config.user_pool_id, &email, context)
            .await
            .map_err(|e| {
                warn!(
                    "[{}] user '{}' left registered but unconfirmed in pool '{}'",
                    context.run_id, email, self.config.user_pool_id
                );
                HarnessError::provider(ProviderOperation::AdminConfirm, &e)
            })?;

        info!("[{}] test user '{}' confirmed and ready", context.run_id, email);
        Ok(CredentialSet {
            username: email.clone(),
            password,
            email,
        })
    }
}
