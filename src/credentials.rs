//! Credential generation for throwaway test users.
//!
//! Each provisioning run derives one unique token and builds the username
//! and email from it; the password is generated independently. Tokens
//! combine a millisecond timestamp with a random alphanumeric suffix so
//! parallel CI runs against the same user pool cannot collide.

use chrono::Utc;
use rand::Rng;
use rand::distributions::Alphanumeric;
use serde::{Deserialize, Serialize};

/// Length of the random component appended to the timestamp in a token.
const TOKEN_SUFFIX_LEN: usize = 8;

/// Length of the random component appended to the password prefix.
const PASSWORD_SUFFIX_LEN: usize = 8;

/// Fixed password prefix satisfying the provider's complexity policy:
/// one uppercase letter, one lowercase letter, one digit, one special
/// character. The random suffix adds entropy only.
const PASSWORD_PREFIX: &str = "Aa1!";

/// Domain used for generated test addresses. Mail is never delivered;
/// verification is bypassed by the administrative confirmation call.
const EMAIL_DOMAIN: &str = "test.example.com";

/// Credentials for one provisioned test user.
///
/// `username` and `email` are equal by construction because the target user
/// pool uses the email address as its username attribute. The set is created
/// once per run and discarded at process exit; nothing persists it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialSet {
    /// Sign-in name handed to the downstream test flow
    pub username: String,
    /// Generated password satisfying the provider's complexity policy
    pub password: String,
    /// Email address derived from the run's unique token
    pub email: String,
}

/// Generates a unique per-run token usable as a username component.
///
/// The token is a millisecond UTC timestamp followed by an 8-character
/// random alphanumeric suffix. The timestamp keeps tokens roughly ordered
/// and human-datable in provider consoles; the random suffix makes
/// collisions across concurrent CI runs negligible. Contains only
/// alphanumeric characters, so it needs no escaping in the provider's
/// username grammar.
pub fn generate_username() -> String {
    let timestamp = Utc::now().timestamp_millis();
    format!("{}{}", timestamp, random_alphanumeric(TOKEN_SUFFIX_LEN))
}

/// Generates a password accepted by the provider's complexity policy.
///
/// The fixed prefix alone contains an uppercase letter, a lowercase letter,
/// a digit, and a special character; the alphanumeric suffix only adds
/// entropy, so its composition is unconstrained.
pub fn generate_password() -> String {
    format!(
        "{}{}",
        PASSWORD_PREFIX,
        random_alphanumeric(PASSWORD_SUFFIX_LEN)
    )
}

/// Formats a unique token as a test email address.
///
/// Pure and deterministic. The token must be non-empty; callers derive it
/// from [`generate_username`].
///
/// # Examples
///
/// ```rust
/// use idp_harness::credentials::generate_email;
///
/// assert_eq!(
///     generate_email("1700000000000abcd1234"),
///     "ci-test-1700000000000abcd1234@test.example.com"
/// );
/// ```
pub fn generate_email(token: &str) -> String {
    debug_assert!(!token.is_empty(), "unique token must be non-empty");
    format!("ci-test-{}@{}", token, EMAIL_DOMAIN)
}

fn random_alphanumeric(len: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}
