//! Configuration for the Zendesk client.
//!
//! Credentials and the target endpoint are carried in an explicit [`Config`]
//! struct passed to the client constructor. A convenience loader reads the
//! same values from environment variables.

use std::env;

use crate::error::ZendeskError;

/// Configuration for connecting to a Zendesk instance.
///
/// The password (or API token) is stored but never logged or exposed in
/// error messages.
#[derive(Clone)]
pub struct Config {
    /// Fully qualified endpoint, e.g. `https://example.zendesk.com`.
    pub endpoint: String,

    /// Account username (email address).
    ///
    /// To authenticate with an API token instead of a password, append
    /// `/token` to the email and use the token as the password.
    pub username: String,

    /// Account password or API token.
    /// This value must never be logged or included in error messages.
    pub password: String,
}

impl Config {
    /// Creates a configuration for a hosted Zendesk subdomain.
    ///
    /// The endpoint becomes `https://{domain}.zendesk.com`.
    pub fn new(
        domain: impl AsRef<str>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, ZendeskError> {
        let domain = domain.as_ref().trim();
        if domain.is_empty() {
            return Err(ZendeskError::invalid_config("domain must not be empty"));
        }
        Self::with_endpoint(
            format!("https://{}.zendesk.com", domain),
            username,
            password,
        )
    }

    /// Creates a configuration with an explicit endpoint URL.
    ///
    /// Use this for self-hosted or proxied instances where the subdomain
    /// convention does not apply.
    pub fn with_endpoint(
        endpoint: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, ZendeskError> {
        let endpoint = Self::validate_endpoint(endpoint.into())?;
        let username = username.into();
        let password = password.into();

        if username.trim().is_empty() {
            return Err(ZendeskError::invalid_config("username must not be empty"));
        }
        if password.trim().is_empty() {
            return Err(ZendeskError::invalid_config("password must not be empty"));
        }

        Ok(Config {
            endpoint,
            username,
            password,
        })
    }

    /// Loads configuration from environment variables.
    ///
    /// # Required Environment Variables
    ///
    /// - `ZENDESK_DOMAIN`: The Zendesk subdomain (e.g. `example` for
    ///   `example.zendesk.com`)
    /// - `ZENDESK_USERNAME`: The account email
    /// - `ZENDESK_PASSWORD`: The account password or API token
    ///
    /// # Errors
    ///
    /// Returns `ZendeskError::Config` if any required variable is missing
    /// or if values fail validation.
    pub fn from_env() -> Result<Self, ZendeskError> {
        let domain = Self::get_required_env("ZENDESK_DOMAIN")?;
        let username = Self::get_required_env("ZENDESK_USERNAME")?;
        let password = Self::get_required_env("ZENDESK_PASSWORD")?;

        Self::new(domain, username, password)
    }

    /// Gets a required environment variable, returning an error if missing or empty.
    fn get_required_env(name: &str) -> Result<String, ZendeskError> {
        env::var(name)
            .map_err(|_| ZendeskError::missing_env(name))
            .and_then(|value| {
                if value.trim().is_empty() {
                    Err(ZendeskError::missing_env(name))
                } else {
                    Ok(value)
                }
            })
    }

    /// Validates and normalizes the endpoint URL.
    fn validate_endpoint(endpoint: String) -> Result<String, ZendeskError> {
        let endpoint = endpoint.trim().trim_end_matches('/').to_string();

        if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
            return Err(ZendeskError::invalid_config(
                "endpoint must start with http:// or https://",
            ));
        }

        Ok(endpoint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_builds_subdomain_endpoint() {
        let config = Config::new("example", "agent@example.com", "secret").unwrap();
        assert_eq!(config.endpoint, "https://example.zendesk.com");
    }

    #[test]
    fn test_new_rejects_empty_domain() {
        assert!(Config::new("", "agent@example.com", "secret").is_err());
        assert!(Config::new("  ", "agent@example.com", "secret").is_err());
    }

    #[test]
    fn test_with_endpoint_removes_trailing_slash() {
        let config =
            Config::with_endpoint("https://example.zendesk.com/", "agent@example.com", "secret")
                .unwrap();
        assert_eq!(config.endpoint, "https://example.zendesk.com");
    }

    #[test]
    fn test_with_endpoint_requires_scheme() {
        let result = Config::with_endpoint("example.zendesk.com", "agent@example.com", "secret");
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_empty_username() {
        let result = Config::with_endpoint("https://example.zendesk.com", "", "secret");
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_empty_password() {
        let result =
            Config::with_endpoint("https://example.zendesk.com", "agent@example.com", "  ");
        assert!(result.is_err());
    }
}
