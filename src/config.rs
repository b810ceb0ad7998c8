#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("API_KEY environment variable is required")]
    MissingApiKey,
    #[error("PORT is not a valid port number: {0}")]
    InvalidPort(String),
}

/// Process-wide configuration, loaded once at startup and shared read-only
/// through the router state.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub port: u16,
    pub base_url: String,
}

impl Config {
    /// Read configuration from the environment. `API_KEY` is required;
    /// `PORT` defaults to 3000 and `BASE_URL` to `http://localhost:<port>`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = std::env::var("API_KEY")
            .ok()
            .filter(|k| !k.is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        let port = match std::env::var("PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            Err(_) => 3000,
        };

        let base_url = std::env::var("BASE_URL")
            .ok()
            .filter(|u| !u.is_empty())
            .unwrap_or_else(|| format!("http://localhost:{}", port))
            .trim_end_matches('/')
            .to_string();

        Ok(Config {
            api_key,
            port,
            base_url,
        })
    }

    /// Endpoint URL automation tools should POST extraction requests to.
    pub fn webhook_url(&self) -> String {
        format!("{}/api/extract", self.base_url)
    }

    /// Endpoint URL for verifying connectivity and the API key.
    pub fn test_url(&self) -> String {
        format!("{}/api/test-connection", self.base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(base_url: &str) -> Config {
        Config {
            api_key: "secret".to_string(),
            port: 3000,
            base_url: base_url.to_string(),
        }
    }

    #[test]
    fn test_webhook_url() {
        assert_eq!(
            config("http://localhost:3000").webhook_url(),
            "http://localhost:3000/api/extract"
        );
    }

    #[test]
    fn test_test_url() {
        assert_eq!(
            config("https://extractor.example.com").test_url(),
            "https://extractor.example.com/api/test-connection"
        );
    }
}
