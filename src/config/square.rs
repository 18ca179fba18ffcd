//! Square API configuration

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use super::error::ValidationError;

/// Default base URL for the Square Connect API.
const DEFAULT_API_BASE_URL: &str = "https://connect.squareup.com";

/// Square configuration (Connect API and webhook signing)
#[derive(Debug, Clone, Deserialize)]
pub struct SquareConfig {
    /// Personal access token for the Connect API (bearer credential)
    pub access_token: SecretString,

    /// Webhook signature key shared with Square
    pub signature_key: SecretString,

    /// Base URL for the Connect API
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

impl SquareConfig {
    /// Validate Square configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.access_token.expose_secret().is_empty() {
            return Err(ValidationError::MissingRequired("SQUARE_ACCESS_TOKEN"));
        }
        if self.signature_key.expose_secret().is_empty() {
            return Err(ValidationError::MissingRequired("SQUARE_SIGNATURE_KEY"));
        }
        if !self.api_base_url.starts_with("http://") && !self.api_base_url.starts_with("https://") {
            return Err(ValidationError::InvalidApiBaseUrl);
        }
        Ok(())
    }
}
