/// Client configuration for the Tokopay API.
use std::time::Duration;

use url::Url;

use crate::errors::TokopayError;

/// Production API base URL.
pub const DEFAULT_API_BASE: &str = "https://api.tokopay.id";

/// Default request timeout handed to the HTTP transport.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration holding the API base URL and transport options.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_base: String,
    /// Dump full requests and responses to the `tokopay_sdk::trace` log target.
    pub debug: bool,
    pub timeout: Option<Duration>,
    pub user_agent: String,
}

impl ClientConfig {
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Validate `api_base` and return it without trailing slashes.
    pub fn normalized_api_base(&self) -> Result<String, TokopayError> {
        let parsed = Url::parse(&self.api_base)?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(TokopayError::validation(format!(
                "Invalid API base URL: unsupported scheme {}",
                parsed.scheme()
            )));
        }
        Ok(self.api_base.trim_end_matches('/').to_string())
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.into(),
            debug: false,
            timeout: Some(DEFAULT_TIMEOUT),
            user_agent: concat!("tokopay-sdk/", env!("CARGO_PKG_VERSION")).into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    #[test]
    fn default_points_at_production() {
        let config = ClientConfig::default();
        assert_eq!(config.api_base, "https://api.tokopay.id");
        assert!(!config.debug);
        assert_eq!(config.timeout, Some(DEFAULT_TIMEOUT));
    }

    #[test]
    fn trailing_slashes_are_trimmed() {
        let config = ClientConfig::default().with_api_base("http://localhost:8080//");
        assert_eq!(
            config.normalized_api_base().unwrap(),
            "http://localhost:8080"
        );
    }

    #[test]
    fn invalid_base_is_a_validation_error() {
        let err = ClientConfig::default()
            .with_api_base("not a url")
            .normalized_api_base()
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        let err = ClientConfig::default()
            .with_api_base("ftp://api.tokopay.id")
            .normalized_api_base()
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }
}
