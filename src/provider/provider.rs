//! Identity provider trait for the provisioning sequence.
//!
//! The provisioner consumes exactly two provider operations: public
//! self-registration and administrative confirmation. Keeping them behind a
//! trait lets tests run the full sequence against an in-memory provider and
//! inject failures at either step.

use crate::context::RunContext;
use std::future::Future;

/// A single named attribute attached to a registration, e.g. `email`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserAttribute {
    /// Attribute name in the provider's schema
    pub name: String,
    /// Attribute value
    pub value: String,
}

impl UserAttribute {
    /// Creates an attribute from a name/value pair.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Creates the email attribute carried by every test registration.
    pub fn email(value: impl Into<String>) -> Self {
        Self::new("email", value)
    }
}

/// Input to the provider's public self-registration operation.
#[derive(Debug, Clone)]
pub struct SignUpRequest {
    /// Application client identifier for the public API
    pub client_id: String,
    /// Username to register; the target pool uses the email address here
    pub username: String,
    /// Password satisfying the pool's complexity policy
    pub password: String,
    /// Attribute list; contains at least the email attribute
    pub attributes: Vec<UserAttribute>,
}

/// Identity provider operations consumed by the provisioner.
///
/// Implementations perform the actual calls; the provisioner owns sequencing
/// (sign-up completes before confirmation is attempted) and converts
/// `Self::Error` values into its own terminal error type. Neither operation
/// is retried.
pub trait IdentityProvider {
    /// Error type returned by provider operations
    type Error: std::error::Error + Send + Sync + 'static;

    /// Register a user through the provider's public self-registration
    /// operation.
    ///
    /// # Arguments
    /// * `request` - Client id, username, password, and attribute list
    /// * `context` - Run context for log correlation
    fn sign_up(
        &self,
        request: SignUpRequest,
        context: &RunContext,
    ) -> impl Future<Output = Result<(), Self::Error>> + Send;

    /// Confirm a registered user administratively, bypassing the email
    /// verification step that would otherwise block sign-in.
    ///
    /// # Arguments
    /// * `user_pool_id` - Pool the user was registered in
    /// * `username` - Username passed to [`sign_up`](Self::sign_up)
    /// * `context` - Run context for log correlation
    fn admin_confirm_sign_up(
        &self,
        user_pool_id: &str,
        username: &str,
        context: &RunContext,
    ) -> impl Future<Output = Result<(), Self::Error>> + Send;
}
