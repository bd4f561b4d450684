//! HTTP identity provider implementation.
//!
//! Speaks the provider's JSON wire protocol: every operation is a POST to a
//! single endpoint, dispatched by a target header, with errors returned as a
//! JSON body carrying a type tag and message. The endpoint is derived from
//! the configured region, or overridden outright for CI deployments that
//! point at a local emulator or a signing proxy.

use crate::config::ProviderConfig;
use crate::context::RunContext;
use crate::provider::provider::{IdentityProvider, SignUpRequest};
use log::{debug, warn};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::{Deserialize, Serialize};
use url::Url;

const TARGET_HEADER: &str = "X-Amz-Target";
const WIRE_CONTENT_TYPE: &str = "application/x-amz-json-1.1";
const SIGN_UP_TARGET: &str = "AWSCognitoIdentityProviderService.SignUp";
const ADMIN_CONFIRM_TARGET: &str = "AWSCognitoIdentityProviderService.AdminConfirmSignUp";

/// Errors from the HTTP provider.
#[derive(Debug, thiserror::Error)]
pub enum HttpProviderError {
    /// The underlying HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// No usable endpoint could be derived from the configuration.
    #[error("invalid provider endpoint: {0}")]
    Endpoint(String),

    /// The request never produced a provider response.
    #[error("transport failure: {0}")]
    Transport(#[source] reqwest::Error),

    /// The provider answered with an error body.
    #[error("{kind}: {message}")]
    Rejected {
        /// Provider error type tag, e.g. `UsernameExistsException`
        kind: String,
        /// Provider error message, verbatim
        message: String,
    },
}

/// Production identity provider backed by an HTTPS endpoint.
#[derive(Debug, Clone)]
pub struct HttpIdentityProvider {
    client: reqwest::Client,
    endpoint: Url,
    admin_authorization: Option<String>,
}

impl HttpIdentityProvider {
    /// Creates a provider from the given configuration.
    ///
    /// Uses `config.endpoint` when set, otherwise derives the regional
    /// endpoint `https://cognito-idp.{region}.amazonaws.com/`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpProviderError::Client`] if the TLS client cannot be
    /// built, or [`HttpProviderError::Endpoint`] if no valid endpoint URL
    /// can be derived.
    pub fn from_config(config: &ProviderConfig) -> Result<Self, HttpProviderError> {
        let endpoint = match &config.endpoint {
            Some(url) => url.clone(),
            None => {
                let derived = format!("https://cognito-idp.{}.amazonaws.com/", config.region);
                Url::parse(&derived).map_err(|e| {
                    HttpProviderError::Endpoint(format!("'{}': {}", derived, e))
                })?
            }
        };

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .map_err(HttpProviderError::Client)?;

        Ok(Self {
            client,
            endpoint,
            admin_authorization: config.admin_authorization.clone(),
        })
    }

    /// The endpoint requests are sent to.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    async fn post<B: Serialize>(
        &self,
        target: &str,
        body: &B,
        authorization: Option<&str>,
    ) -> Result<(), HttpProviderError> {
        let mut request = self
            .client
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, WIRE_CONTENT_TYPE)
            .header(TARGET_HEADER, target)
            .json(body);
        if let Some(value) = authorization {
            request = request.header(AUTHORIZATION, value);
        }

        let response = request.send().await.map_err(HttpProviderError::Transport)?;
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let text = response.text().await.unwrap_or_default();
        match serde_json::from_str::<RejectionBody>(&text) {
            Ok(rejection) => Err(HttpProviderError::Rejected {
                kind: rejection.kind,
                message: rejection.message.unwrap_or_else(|| text.clone()),
            }),
            Err(_) => {
                warn!("provider returned undecodable error body (HTTP {})", status);
                Err(HttpProviderError::Rejected {
                    kind: format!("HTTP {}", status.as_u16()),
                    message: text,
                })
            }
        }
    }
}

impl IdentityProvider for HttpIdentityProvider {
    type Error = HttpProviderError;

    async fn sign_up(
        &self,
        request: SignUpRequest,
        context: &RunContext,
    ) -> Result<(), Self::Error> {
        debug!(
            "[{}] sign-up request for '{}' via {}",
            context.run_id, request.username, self.endpoint
        );
        let body = SignUpBody {
            client_id: &request.client_id,
            username: &request.username,
            password: &request.password,
            user_attributes: request
                .attributes
                .iter()
                .map(|a| AttributeBody {
                    name: &a.name,
                    value: &a.value,
                })
                .collect(),
        };
        self.post(SIGN_UP_TARGET, &body, None).await
    }

    async fn admin_confirm_sign_up(
        &self,
        user_pool_id: &str,
        username: &str,
        context: &RunContext,
    ) -> Result<(), Self::Error> {
        debug!(
            "[{}] admin confirmation for '{}' in pool '{}'",
            context.run_id, username, user_pool_id
        );
        let body = AdminConfirmBody {
            user_pool_id,
            username,
        };
        self.post(
            ADMIN_CONFIRM_TARGET,
            &body,
            self.admin_authorization.as_deref(),
        )
        .await
    }
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct SignUpBody<'a> {
    client_id: &'a str,
    username: &'a str,
    password: &'a str,
    user_attributes: Vec<AttributeBody<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct AttributeBody<'a> {
    name: &'a str,
    value: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct AdminConfirmBody<'a> {
    user_pool_id: &'a str,
    username: &'a str,
}

#[derive(Deserialize)]
struct RejectionBody {
    #[serde(rename = "__type")]
    kind: String,
    #[serde(alias = "Message")]
    message: Option<String>,
}
