// client_builder.rs
//! Builder pattern for constructing Coolify clients with better ergonomics and validation

use crate::client::Client;
use crate::error::CoolifyError;
use crate::models::ClientConfig;

type Result<T> = std::result::Result<T, CoolifyError>;

/// Builder for creating Coolify API clients
///
/// # Examples
///
/// ```no_run
/// use coolify::ClientBuilder;
///
/// let client = ClientBuilder::new()
///     .api_url("https://coolify.example.com")
///     .api_token("your-api-token")
///     .team_id("1")
///     .build()?;
/// # Ok::<(), coolify::CoolifyError>(())
/// ```
#[derive(Default)]
pub struct ClientBuilder {
    api_url: Option<String>,
    api_token: Option<String>,
    team_id: Option<String>,
}

impl ClientBuilder {
    /// Create a new builder with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL of the Coolify instance
    pub fn api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = Some(url.into());
        self
    }

    /// Set the API token used as the bearer credential
    pub fn api_token(mut self, token: impl Into<String>) -> Self {
        self.api_token = Some(token.into());
        self
    }

    /// Scope all requests to a specific team
    pub fn team_id(mut self, team_id: impl Into<String>) -> Self {
        self.team_id = Some(team_id.into());
        self
    }

    /// Validate the configuration before building
    fn validate(&self) -> Result<()> {
        if self.api_url.is_none() {
            return Err(CoolifyError::ConfigurationError("API URL is required".to_string()));
        }
        if self.api_token.is_none() {
            return Err(CoolifyError::ConfigurationError("API token is required".to_string()));
        }
        Ok(())
    }

    /// Build the client
    pub fn build(self) -> Result<Client> {
        self.validate()?;

        let config = ClientConfig {
            api_url: self.api_url.unwrap_or_default(),
            api_token: self.api_token.unwrap_or_default(),
            team_id: self.team_id,
        };

        Client::new(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_validation() {
        // Should fail: no token
        let result = ClientBuilder::new().api_url("https://coolify.example.com").build();
        assert!(result.is_err());

        // Should fail: no URL
        let result = ClientBuilder::new().api_token("token").build();
        assert!(result.is_err());

        // Should fail: URL is not well-formed
        let result = ClientBuilder::new().api_url("coolify.example.com").api_token("token").build();
        assert!(result.is_err());

        // Should fail: empty token
        let result = ClientBuilder::new().api_url("https://coolify.example.com").api_token("").build();
        assert!(result.is_err());
    }

    #[test]
    fn test_builder_accepts_minimal_config() {
        let result = ClientBuilder::new().api_url("https://coolify.example.com").api_token("token").build();
        assert!(result.is_ok());
    }
}
