//! HTTP client for the Roblox clothing-asset endpoints.
//!
//! Provides [`RobloxClient`], which holds one reusable connection pool plus
//! the session credential, and exposes the remote operations: asset lookup,
//! clothing image download, multipart upload with operation polling, and
//! putting an asset on sale. Domain methods live in [`api`].
//!
//! Every operation is a sequential chain of awaits; nothing is retried and
//! nothing runs concurrently inside the client. The underlying pool is safe
//! to share across tasks, but ordering between operations issued on the same
//! client is the caller's responsibility.

pub mod api;

use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE, COOKIE, ORIGIN, REFERER, USER_AGENT};
use reqwest::{RequestBuilder, Response, StatusCode};

use rbxwear_core::constants::{
    BROWSER_USER_AGENT, CREATE_ORIGIN, CREATE_REFERER, CSRF_HEADER, FETCH_USER_AGENT,
    SECURITY_COOKIE, SERVICE_DOMAIN, UPLOAD_ACCEPT, UPLOAD_ACCEPT_LANGUAGE,
    UPLOAD_SEC_FETCH_DEST, UPLOAD_SEC_FETCH_MODE, UPLOAD_SEC_FETCH_SITE,
};
// Re-export the core types callers need alongside the client.
pub use rbxwear_core::config::{ClientConfig, Endpoints};
pub use rbxwear_core::error::{Error, Result};
pub use rbxwear_core::models::{
    Asset, AssetDetails, AssetType, BatchResult, BatchUploadItem, ClothingAsset, Creator,
    CreatorKind,
};

/// Client for the Roblox asset endpoints.
///
/// Construction opens one reusable connection pool that lives as long as the
/// client and is released when it is dropped (dropping twice is impossible,
/// so the release happens exactly once). The credential is never validated up
/// front: a bad token surfaces later as an [`Error::Authentication`] or
/// [`Error::Transport`] from the remote service.
#[derive(Clone, Debug)]
pub struct RobloxClient {
    http: reqwest::Client,
    credential: String,
    publisher_user_id: u64,
    config: ClientConfig,
}

impl RobloxClient {
    /// Create a client with the production configuration.
    pub fn new(credential: impl Into<String>, publisher_user_id: u64) -> Result<Self> {
        Self::with_config(credential, publisher_user_id, ClientConfig::default())
    }

    /// Create a client with explicit configuration (endpoint overrides, proxy,
    /// poll parameters).
    pub fn with_config(
        credential: impl Into<String>,
        publisher_user_id: u64,
        config: ClientConfig,
    ) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self {
            http,
            credential: credential.into(),
            publisher_user_id,
            config,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }

    pub fn publisher_user_id(&self) -> u64 {
        self.publisher_user_id
    }

    /// Fetch a fresh anti-forgery token.
    ///
    /// The token endpoint is expected to reject the bare request; the token
    /// rides back in a response header either way. The header being absent is
    /// the failure signal, not the status code.
    pub async fn fetch_csrf_token(&self) -> Result<String> {
        let url = self.request_url(&self.config.endpoints.upload());
        let response = self
            .browser_headers(self.http.post(&url))
            .send()
            .await?;

        response
            .headers()
            .get(CSRF_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned)
            .ok_or_else(|| {
                Error::Authentication(format!(
                    "response did not include a {} header",
                    CSRF_HEADER
                ))
            })
    }

    /// Build the final request URL, applying the proxy override.
    pub(crate) fn request_url(&self, url: &str) -> String {
        apply_proxy(url, self.config.proxy.as_deref())
    }

    pub(crate) fn cookie_value(&self) -> String {
        format!("{}={}", SECURITY_COOKIE, self.credential)
    }

    /// Headers for metadata and asset-delivery fetches.
    pub(crate) fn fetch_headers(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header(COOKIE, self.cookie_value())
            .header(USER_AGENT, FETCH_USER_AGENT)
    }

    /// Headers for token fetches and mutating calls.
    pub(crate) fn browser_headers(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header(COOKIE, self.cookie_value())
            .header(USER_AGENT, BROWSER_USER_AGENT)
            .header(REFERER, CREATE_REFERER)
            .header(ORIGIN, CREATE_ORIGIN)
    }

    /// Extra browser headers the upload endpoint insists on.
    pub(crate) fn upload_headers(&self, request: RequestBuilder) -> RequestBuilder {
        self.browser_headers(request)
            .header(ACCEPT, UPLOAD_ACCEPT)
            .header(ACCEPT_LANGUAGE, UPLOAD_ACCEPT_LANGUAGE)
            .header("Sec-Fetch-Dest", UPLOAD_SEC_FETCH_DEST)
            .header("Sec-Fetch-Mode", UPLOAD_SEC_FETCH_MODE)
            .header("Sec-Fetch-Site", UPLOAD_SEC_FETCH_SITE)
    }

    /// Map a non-success status to the right error, rate limit first.
    pub(crate) async fn check_status(
        &self,
        response: Response,
        operation: &'static str,
    ) -> Result<Response> {
        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(Error::RateLimited { operation });
        }
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(Error::Transport {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }
}

/// Replace the service domain with the proxy host, leaving everything else
/// byte-for-byte intact. No-op without a proxy.
fn apply_proxy(url: &str, proxy: Option<&str>) -> String {
    match proxy {
        Some(host) => url.replace(SERVICE_DOMAIN, host),
        None => url.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn proxy_replaces_only_the_service_domain() {
        let url = "https://apis.roblox.com/assets/user-auth/v1/assets";
        assert_eq!(
            apply_proxy(url, Some("rprxy.xyz")),
            "https://apis.rprxy.xyz/assets/user-auth/v1/assets"
        );
    }

    #[test]
    fn proxy_preserves_path_and_query() {
        let url = "https://assetdelivery.roblox.com/v1/asset/?id=80789317092375";
        assert_eq!(
            apply_proxy(url, Some("rprxy.xyz")),
            "https://assetdelivery.rprxy.xyz/v1/asset/?id=80789317092375"
        );
    }

    #[test]
    fn no_proxy_is_a_no_op() {
        let url = "https://economy.roblox.com/v2/assets/123/details";
        assert_eq!(apply_proxy(url, None), url);
    }

    #[test]
    fn proxy_ignores_unrelated_hosts() {
        let url = "https://example.com/v1/asset/?id=1";
        assert_eq!(apply_proxy(url, Some("rprxy.xyz")), url);
    }
}
