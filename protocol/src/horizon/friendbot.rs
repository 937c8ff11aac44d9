//! # Friendbot
//!
//! The test network runs a faucet, friendbot, that credits a new account with
//! starting lumens. Funding is a single GET:
//!
//! ```text
//! GET https://horizon-testnet.stellar.org/friendbot?addr=G...
//! ```
//!
//! The response body (a transaction result document on success) is returned
//! as-is. One request, no timeout beyond the HTTP client's defaults, and no
//! retry: a second funding of the same account fails anyway.

use super::error::HorizonError;
use crate::config::{FRIENDBOT_PATH, LOG_LIB_NAME, TESTNET_HORIZON_URL};
use crate::strkey::{validate_address, ValidationError};
use reqwest::Client;
use thiserror::Error;

/// Errors from a friendbot request.
#[derive(Debug, Error)]
pub enum FriendbotError {
    /// The address was rejected before any request was made.
    #[error(transparent)]
    InvalidAddress(#[from] ValidationError),

    /// Transport-level failure (DNS, TLS, connection, body read).
    #[error("friendbot request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Horizon answered with a problem document.
    #[error("friendbot refused funding: {0}")]
    Horizon(#[source] HorizonError),

    /// Non-success status with a body that is not a problem document.
    #[error("friendbot returned HTTP {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        body: String,
    },
}

/// Client for a Horizon server's friendbot endpoint.
#[derive(Debug, Clone)]
pub struct FriendbotClient {
    base_url: String,
    client: Client,
}

impl Default for FriendbotClient {
    fn default() -> Self {
        Self::new()
    }
}

impl FriendbotClient {
    /// Client for the public test network.
    pub fn new() -> Self {
        Self::with_base_url(TESTNET_HORIZON_URL)
    }

    /// Client for the Horizon server at `base_url` (e.g. a local quickstart).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The full funding URL for `address`.
    pub fn funding_url(&self, address: &str) -> String {
        format!("{}{}?addr={}", self.base_url, FRIENDBOT_PATH, address)
    }

    /// Fund `address` with starting lumens and return the response body.
    pub async fn fund(&self, address: &str) -> Result<String, FriendbotError> {
        tracing::debug!(
            lib = LOG_LIB_NAME,
            method = "fund",
            "funding address: {}",
            address
        );
        validate_address(address)?;

        let resp = self.client.get(self.funding_url(address)).send().await?;
        let status = resp.status();
        let body = resp.text().await?;

        if !status.is_success() {
            tracing::debug!(
                lib = LOG_LIB_NAME,
                method = "fund",
                status = status.as_u16(),
                "friendbot refused funding"
            );
            return Err(match HorizonError::from_body(&body) {
                Some(herr) => FriendbotError::Horizon(herr),
                None => FriendbotError::Status {
                    status: status.as_u16(),
                    body,
                },
            });
        }

        Ok(body)
    }
}

/// Fund `address` on the public test network.
pub async fn fund_with_friendbot(address: &str) -> Result<String, FriendbotError> {
    FriendbotClient::new().fund(address).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_testnet() {
        let client = FriendbotClient::default();
        assert_eq!(client.base_url(), "https://horizon-testnet.stellar.org");
    }

    #[test]
    fn funding_url_shape() {
        let client = FriendbotClient::with_base_url("http://localhost:8000/");
        assert_eq!(
            client.funding_url("GABC"),
            "http://localhost:8000/friendbot?addr=GABC"
        );
    }

    #[tokio::test]
    async fn invalid_address_fails_before_request() {
        // Port 9 (discard) would fail the request; we never get that far.
        let client = FriendbotClient::with_base_url("http://127.0.0.1:9");
        let err = client.fund("not-an-address").await.unwrap_err();
        assert!(matches!(err, FriendbotError::InvalidAddress(_)));
    }
}
