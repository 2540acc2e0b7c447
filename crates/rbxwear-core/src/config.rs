//! Configuration module
//!
//! Holds the client configuration: remote host base URLs, the optional proxy
//! override, the request timeout, and the upload poll parameters. Defaults
//! carry the production values; tests point the endpoints at a mock server.

use std::time::Duration;

// Common constants
const REQUEST_TIMEOUT_SECS: u64 = 60;
const POLL_MAX_ATTEMPTS: u32 = 10;
const POLL_INTERVAL_SECS: u64 = 1;

/// Base URLs of the remote services, one per host.
///
/// Every path the client touches hangs off one of these bases, so overriding
/// them redirects the whole client (the seam used by the endpoint tests).
#[derive(Clone, Debug)]
pub struct Endpoints {
    /// Asset upload, anti-forgery token, and operation-status host.
    pub apis: String,
    /// Asset details host.
    pub economy: String,
    /// Asset binary/XML delivery host.
    pub asset_delivery: String,
    /// Collectibles (on-sale) configuration host.
    pub item_configuration: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            apis: "https://apis.roblox.com".to_string(),
            economy: "https://economy.roblox.com".to_string(),
            asset_delivery: "https://assetdelivery.roblox.com".to_string(),
            item_configuration: "https://itemconfiguration.roblox.com".to_string(),
        }
    }
}

impl Endpoints {
    /// Upload endpoint; also serves as the anti-forgery token endpoint.
    pub fn upload(&self) -> String {
        format!("{}/assets/user-auth/v1/assets", self.apis)
    }

    pub fn operation(&self, operation_id: &str) -> String {
        format!("{}/assets/user-auth/v1/operations/{}", self.apis, operation_id)
    }

    pub fn asset_details(&self, asset_id: u64) -> String {
        format!("{}/v2/assets/{}/details", self.economy, asset_id)
    }

    pub fn asset_delivery(&self, asset_id: u64) -> String {
        format!("{}/v1/asset/?id={}", self.asset_delivery, asset_id)
    }

    pub fn collectibles(&self) -> String {
        format!("{}/v1/collectibles", self.item_configuration)
    }
}

/// Client configuration with production defaults.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub endpoints: Endpoints,
    /// Optional host that replaces the service domain in every outbound URL.
    /// The substitution is purely textual; path, query, and body are untouched.
    pub proxy: Option<String>,
    pub request_timeout: Duration,
    /// Maximum number of status polls after an asynchronous upload.
    pub poll_max_attempts: u32,
    /// Sleep between status polls.
    pub poll_interval: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoints: Endpoints::default(),
            proxy: None,
            request_timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
            poll_max_attempts: POLL_MAX_ATTEMPTS,
            poll_interval: Duration::from_secs(POLL_INTERVAL_SECS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_endpoints_build_production_urls() {
        let endpoints = Endpoints::default();
        assert_eq!(
            endpoints.upload(),
            "https://apis.roblox.com/assets/user-auth/v1/assets"
        );
        assert_eq!(
            endpoints.operation("op-1"),
            "https://apis.roblox.com/assets/user-auth/v1/operations/op-1"
        );
        assert_eq!(
            endpoints.asset_details(123),
            "https://economy.roblox.com/v2/assets/123/details"
        );
        assert_eq!(
            endpoints.asset_delivery(123),
            "https://assetdelivery.roblox.com/v1/asset/?id=123"
        );
        assert_eq!(
            endpoints.collectibles(),
            "https://itemconfiguration.roblox.com/v1/collectibles"
        );
    }

    #[test]
    fn default_config_polls_ten_times_at_one_second() {
        let config = ClientConfig::default();
        assert_eq!(config.poll_max_attempts, 10);
        assert_eq!(config.poll_interval, Duration::from_secs(1));
        assert!(config.proxy.is_none());
    }
}
