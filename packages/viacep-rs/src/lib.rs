//! Pure ViaCEP REST API client
//!
//! Resolves Brazilian postal codes (CEP) to street, neighborhood, city and
//! state. No retries, no caching, no domain logic.
//!
//! # Example
//!
//! ```rust,ignore
//! use viacep::ViaCepClient;
//!
//! let client = ViaCepClient::new()?;
//! match client.lookup("01001000").await? {
//!     Some(address) => println!("{} - {}", address.street, address.city),
//!     None => println!("unknown CEP"),
//! }
//! ```

pub mod error;
pub mod models;

pub use error::{Result, ViaCepError};
pub use models::{CepAddress, CepResponse};

use std::time::Duration;

use reqwest::Client;
use tracing::{debug, instrument, warn};

/// Public ViaCEP endpoint.
pub const DEFAULT_BASE_URL: &str = "https://viacep.com.br/ws";

/// Default request timeout. ViaCEP itself sets none.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// ViaCEP API client.
#[derive(Debug, Clone)]
pub struct ViaCepClient {
    http_client: Client,
    base_url: String,
    timeout: Duration,
}

impl ViaCepClient {
    /// Create a client against the public endpoint with the default timeout.
    pub fn new() -> Result<Self> {
        Self::with_options(DEFAULT_BASE_URL, DEFAULT_TIMEOUT)
    }

    /// Create a client with a custom base URL (proxies, test stubs) and timeout.
    pub fn with_options(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(ViaCepError::Config("base URL must not be empty".into()));
        }

        let http_client = Client::builder()
            .timeout(timeout)
            .user_agent("ConectaVoluntarios/1.0")
            .build()
            .map_err(|e| ViaCepError::Config(e.to_string()))?;

        Ok(Self {
            http_client,
            base_url,
            timeout,
        })
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Look up a CEP given as eight digits (no hyphen).
    ///
    /// Returns `Ok(None)` when ViaCEP answers but does not know the code.
    #[instrument(skip(self), fields(base_url = %self.base_url))]
    pub async fn lookup(&self, cep_digits: &str) -> Result<Option<CepAddress>> {
        if cep_digits.len() != 8 || !cep_digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ViaCepError::InvalidCep(cep_digits.to_string()));
        }

        let url = format!("{}/{}/json/", self.base_url, cep_digits);
        debug!(url = %url, "Requesting CEP from ViaCEP");

        let response = self.http_client.get(&url).send().await.map_err(|e| {
            if e.is_timeout() {
                warn!(cep = %cep_digits, timeout = ?self.timeout, "ViaCEP request timed out");
                ViaCepError::Timeout(self.timeout)
            } else {
                warn!(error = %e, cep = %cep_digits, "ViaCEP request failed");
                ViaCepError::Network(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, body = %body, "ViaCEP API error");
            return Err(ViaCepError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await.map_err(|e| {
            if e.is_timeout() {
                ViaCepError::Timeout(self.timeout)
            } else {
                ViaCepError::Network(e.to_string())
            }
        })?;

        let parsed: CepResponse = serde_json::from_str(&body)
            .map_err(|e| ViaCepError::Parse(format!("Failed to parse ViaCEP response: {}", e)))?;

        Ok(parsed.into_address())
    }
}
