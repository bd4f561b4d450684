//! Property-based and example tests for the credential generators.
//!
//! Covers the guarantees downstream flows rely on: usernames never collide
//! in practice, passwords always satisfy the provider's complexity policy,
//! and the email formatter embeds the unique token exactly.

use idp_harness::credentials::{generate_email, generate_password, generate_username};
use proptest::prelude::*;
use std::collections::HashSet;

proptest! {
    /// Any batch of generated usernames is pairwise distinct.
    #[test]
    fn usernames_are_pairwise_distinct(n in 2usize..64) {
        let tokens: Vec<String> = (0..n).map(|_| generate_username()).collect();
        let unique: HashSet<&String> = tokens.iter().collect();
        prop_assert_eq!(unique.len(), tokens.len());
    }

    /// Every generated password satisfies the complexity policy.
    #[test]
    fn passwords_satisfy_complexity_policy(_i in 0u8..32) {
        let password = generate_password();
        prop_assert!(password.len() >= 8);
        prop_assert!(password.chars().any(|c| c.is_ascii_uppercase()));
        prop_assert!(password.chars().any(|c| c.is_ascii_lowercase()));
        prop_assert!(password.chars().any(|c| c.is_ascii_digit()));
        prop_assert!(password.chars().any(|c| !c.is_ascii_alphanumeric()));
    }

    /// The email formatter embeds any non-empty token unchanged.
    #[test]
    fn email_embeds_token_exactly(token in "[A-Za-z0-9]{1,40}") {
        let email = generate_email(&token);
        prop_assert!(email.starts_with("ci-test-"));
        prop_assert!(email.ends_with("@test.example.com"));

        let captured = email
            .strip_prefix("ci-test-")
            .and_then(|rest| rest.strip_suffix("@test.example.com"))
            .unwrap();
        prop_assert_eq!(captured, token);
    }
}

#[test]
fn username_fits_the_provider_grammar() {
    // Alphanumeric only: nothing that needs escaping in a username or the
    // local part of an email address.
    let token = generate_username();
    assert!(!token.is_empty());
    assert!(token.chars().all(|c| c.is_ascii_alphanumeric()));
}

#[test]
fn username_leads_with_a_timestamp() {
    let token = generate_username();
    let digits: String = token.chars().take_while(|c| c.is_ascii_digit()).collect();
    // Millisecond timestamps are 13 digits for any plausible test date.
    assert!(digits.len() >= 13, "token '{}' lacks a timestamp prefix", token);
}

#[test]
fn generated_email_matches_expected_shape() {
    let token = generate_username();
    let email = generate_email(&token);
    assert_eq!(email, format!("ci-test-{}@test.example.com", token));
}
