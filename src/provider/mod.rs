//! Identity provider implementations.
//!
//! This module defines the [`IdentityProvider`] trait the provisioner calls
//! through, plus the implementations shipped with the crate.
//!
//! # Available Providers
//!
//! * [`HttpIdentityProvider`] - Production provider speaking the identity
//!   provider's JSON wire protocol over HTTPS
//! * [`InMemoryIdentityProvider`] - Thread-safe in-memory provider with
//!   failure injection, for testing and development

pub mod http;
pub mod in_memory;
mod provider;

pub use http::{HttpIdentityProvider, HttpProviderError};
pub use in_memory::{InMemoryIdentityProvider, InMemoryProviderError};
pub use provider::{IdentityProvider, SignUpRequest, UserAttribute};
