use std::time::Duration;

use log::{debug, warn};
use reqwest::header::{ACCEPT, USER_AGENT};
use reqwest::Url;

use crate::config::Config;
use crate::errors::FreeProxyError;
use crate::filter::{build_url, ProxyFilter};
use crate::proxy_model::Proxy;

const CLIENT_USER_AGENT: &str = concat!("freeproxy-rs/", env!("CARGO_PKG_VERSION"));

/// Client for the GetFreeProxy API.
///
/// Each call issues one independent GET request; no state is shared between
/// calls, so a single instance can be used from concurrent tasks.
#[derive(Clone, Debug)]
pub struct Client {
    http: reqwest::Client,
    base_url: Url,
    api_key: String,
    timeout_ms: u64,
}

impl Client {
    /// Creates a client from the given configuration.
    ///
    /// Fails with [`FreeProxyError::Config`] before any network activity if
    /// the API key is empty or the base URL is not a valid absolute URL.
    pub fn new(config: Config) -> Result<Self, FreeProxyError> {
        if config.api_key.is_empty() {
            return Err(FreeProxyError::Config("api_key is required".to_string()));
        }
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| FreeProxyError::Config(format!("invalid base_url: {}", e)))?;
        let http = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| FreeProxyError::Config(e.to_string()))?;
        Ok(Client {
            http,
            base_url,
            api_key: config.api_key,
            timeout_ms: config.timeout_ms,
        })
    }

    /// Queries proxies with the given filter.
    pub async fn query(&self, filter: &ProxyFilter) -> Result<Vec<Proxy>, FreeProxyError> {
        let url = build_url(&self.base_url, filter);
        self.request(url).await
    }

    /// Queries proxies located in the given country, e.g. `US` or `GB`.
    pub async fn query_country(&self, country: &str) -> Result<Vec<Proxy>, FreeProxyError> {
        self.query(&ProxyFilter::new().country(country)).await
    }

    /// Queries proxies speaking the given protocol, e.g. `http` or `socks5`.
    pub async fn query_protocol(&self, protocol: &str) -> Result<Vec<Proxy>, FreeProxyError> {
        self.query(&ProxyFilter::new().protocol(protocol)).await
    }

    /// Queries one page of the proxy listing.
    pub async fn query_page(&self, page: u32) -> Result<Vec<Proxy>, FreeProxyError> {
        self.query(&ProxyFilter::new().page(page)).await
    }

    async fn request(&self, url: Url) -> Result<Vec<Proxy>, FreeProxyError> {
        debug!("GET {}", url);
        let response = self
            .http
            .get(url)
            .bearer_auth(&self.api_key)
            .header(ACCEPT, "application/json")
            .header(USER_AGENT, CLIENT_USER_AGENT)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| self.transport_error(e))?;

        if !status.is_success() {
            warn!("API returned status {}", status);
            return Err(FreeProxyError::from_api_response(status.as_u16(), &body));
        }

        serde_json::from_str::<Vec<Proxy>>(&body).map_err(|e| FreeProxyError::Parse(e.to_string()))
    }

    // reqwest reports an elapsed deadline through the same error type as
    // connection failures; split them back into the two failure kinds.
    fn transport_error(&self, err: reqwest::Error) -> FreeProxyError {
        if err.is_timeout() {
            FreeProxyError::Timeout {
                timeout_ms: self.timeout_ms,
            }
        } else {
            FreeProxyError::Request(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_api_key_is_rejected() {
        let err = Client::new(Config::new("")).unwrap_err();
        assert!(matches!(err, FreeProxyError::Config(_)));
        assert!(err.to_string().contains("api_key"));
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        let config = Config::new("test-api-key").with_base_url("not a url");
        let err = Client::new(config).unwrap_err();
        assert!(matches!(err, FreeProxyError::Config(_)));
    }

    #[test]
    fn test_valid_config_builds_a_client() {
        let config = Config::new("test-api-key").with_timeout_ms(5000);
        assert!(Client::new(config).is_ok());
    }
}
