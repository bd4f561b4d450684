//! In-memory identity provider for testing and development.
//!
//! Keeps registered users in a tokio `RwLock`-guarded map so tests may share
//! one instance across tasks. Supports failure injection at either operation
//! and counts calls, which lets flow tests assert that confirmation is never
//! attempted after a failed sign-up.

use crate::context::RunContext;
use crate::provider::provider::{IdentityProvider, SignUpRequest};
use log::debug;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Errors that can occur during in-memory provider operations.
#[derive(Debug, Clone, thiserror::Error)]
pub enum InMemoryProviderError {
    /// A user with the same username is already registered.
    #[error("Username already exists: '{username}'")]
    UsernameExists {
        /// The duplicate username
        username: String,
    },

    /// Confirmation was requested for a user that was never registered.
    #[error("User not found: '{username}' in pool '{user_pool_id}'")]
    UserNotFound {
        /// The unknown username
        username: String,
        /// The pool the lookup ran against
        user_pool_id: String,
    },

    /// A failure injected by the test setup.
    #[error("{message}")]
    Injected {
        /// The injected provider message, surfaced verbatim
        message: String,
    },
}

/// A user registered with the in-memory provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredUser {
    /// Password supplied at registration
    pub password: String,
    /// Email attribute supplied at registration, empty if absent
    pub email: String,
    /// Whether the administrative confirmation has run
    pub confirmed: bool,
}

#[derive(Debug, Default)]
struct State {
    users: HashMap<String, StoredUser>,
    sign_up_calls: usize,
    confirm_calls: usize,
}

/// Thread-safe in-memory identity provider.
#[derive(Debug, Default)]
pub struct InMemoryIdentityProvider {
    state: RwLock<State>,
    sign_up_failure: Option<String>,
    confirm_failure: Option<String>,
}

impl InMemoryIdentityProvider {
    /// Creates an empty provider that accepts every operation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every sign-up call fail with the given provider message.
    pub fn with_sign_up_failure(mut self, message: impl Into<String>) -> Self {
        self.sign_up_failure = Some(message.into());
        self
    }

    /// Makes every confirmation call fail with the given provider message.
    pub fn with_confirm_failure(mut self, message: impl Into<String>) -> Self {
        self.confirm_failure = Some(message.into());
        self
    }

    /// Number of sign-up calls received, including failed ones.
    pub async fn sign_up_calls(&self) -> usize {
        self.state.read().await.sign_up_calls
    }

    /// Number of confirmation calls received, including failed ones.
    pub async fn confirm_calls(&self) -> usize {
        self.state.read().await.confirm_calls
    }

    /// Looks up a registered user by username.
    pub async fn user(&self, username: &str) -> Option<StoredUser> {
        self.state.read().await.users.get(username).cloned()
    }

    /// All registered usernames, in no particular order.
    pub async fn usernames(&self) -> Vec<String> {
        self.state.read().await.users.keys().cloned().collect()
    }

    /// Whether the named user exists and has been confirmed.
    pub async fn is_confirmed(&self, username: &str) -> bool {
        self.state
            .read()
            .await
            .users
            .get(username)
            .is_some_and(|u| u.confirmed)
    }
}

impl IdentityProvider for InMemoryIdentityProvider {
    type Error = InMemoryProviderError;

    async fn sign_up(
        &self,
        request: SignUpRequest,
        context: &RunContext,
    ) -> Result<(), Self::Error> {
        let mut state = self.state.write().await;
        state.sign_up_calls += 1;

        if let Some(message) = &self.sign_up_failure {
            return Err(InMemoryProviderError::Injected {
                message: message.clone(),
            });
        }
        if state.users.contains_key(&request.username) {
            return Err(InMemoryProviderError::UsernameExists {
                username: request.username,
            });
        }

        let email = request
            .attributes
            .iter()
            .find(|a| a.name == "email")
            .map(|a| a.value.clone())
            .unwrap_or_default();
        debug!("[{}] registered '{}'", context.run_id, request.username);
        state.users.insert(
            request.username,
            StoredUser {
                password: request.password,
                email,
                confirmed: false,
            },
        );
        Ok(())
    }

    async fn admin_confirm_sign_up(
        &self,
        user_pool_id: &str,
        username: &str,
        context: &RunContext,
    ) -> Result<(), Self::Error> {
        let mut state = self.state.write().await;
        state.confirm_calls += 1;

        if let Some(message) = &self.confirm_failure {
            return Err(InMemoryProviderError::Injected {
                message: message.clone(),
            });
        }
        match state.users.get_mut(username) {
            Some(user) => {
                user.confirmed = true;
                debug!("[{}] confirmed '{}'", context.run_id, username);
                Ok(())
            }
            None => Err(InMemoryProviderError::UserNotFound {
                username: username.to_string(),
                user_pool_id: user_pool_id.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::provider::UserAttribute;

    fn request(username: &str) -> SignUpRequest {
        SignUpRequest {
            client_id: "client".to_string(),
            username: username.to_string(),
            password: "Aa1!secret".to_string(),
            attributes: vec![UserAttribute::email(username)],
        }
    }

    #[tokio::test]
    async fn sign_up_then_confirm_round_trip() {
        let provider = InMemoryIdentityProvider::new();
        let context = RunContext::with_generated_id();

        provider
            .sign_up(request("a@test.example.com"), &context)
            .await
            .unwrap();
        assert!(!provider.is_confirmed("a@test.example.com").await);

        provider
            .admin_confirm_sign_up("pool", "a@test.example.com", &context)
            .await
            .unwrap();
        assert!(provider.is_confirmed("a@test.example.com").await);
    }

    #[tokio::test]
    async fn duplicate_username_is_rejected() {
        let provider = InMemoryIdentityProvider::new();
        let context = RunContext::with_generated_id();

        provider
            .sign_up(request("dup@test.example.com"), &context)
            .await
            .unwrap();
        let err = provider
            .sign_up(request("dup@test.example.com"), &context)
            .await
            .unwrap_err();
        assert!(matches!(err, InMemoryProviderError::UsernameExists { .. }));
    }

    #[tokio::test]
    async fn confirming_unknown_user_fails() {
        let provider = InMemoryIdentityProvider::new();
        let context = RunContext::with_generated_id();

        let err = provider
            .admin_confirm_sign_up("pool", "ghost@test.example.com", &context)
            .await
            .unwrap_err();
        assert!(matches!(err, InMemoryProviderError::UserNotFound { .. }));
    }

    #[tokio::test]
    async fn injected_failure_message_is_surfaced_verbatim() {
        let provider =
            InMemoryIdentityProvider::new().with_sign_up_failure("PasswordPolicyException");
        let context = RunContext::with_generated_id();

        let err = provider
            .sign_up(request("x@test.example.com"), &context)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "PasswordPolicyException");
        assert_eq!(provider.sign_up_calls().await, 1);
    }
}
