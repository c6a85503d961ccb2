//! Cloudflare API client
//!
//! Covers the two SSO connector endpoints cflr needs:
//!
//! - `GET   /accounts/{account_id}/sso/v2/connectors`
//! - `PATCH /accounts/{account_id}/sso/v2/connectors/{connector_id}`

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder};
use std::time::Duration;

use crate::config::{Credentials, Settings};
use crate::connectors::{ApiEnvelope, Connector, ConnectorStatus};
use crate::error::Result;

/// Header carrying the account email
pub const AUTH_EMAIL_HEADER: &str = "X-Auth-Email";

/// Header carrying the Global API Key
pub const AUTH_KEY_HEADER: &str = "X-Auth-Key";

/// Operations on SSO connectors
#[async_trait]
pub trait SsoApi: Send + Sync {
    /// Fetch every connector of the account
    async fn list_connectors(&self, account_id: &str) -> Result<Vec<Connector>>;

    /// Change the status of one connector, returning the raw response body
    async fn set_connector_status(
        &self,
        account_id: &str,
        connector_id: &str,
        status: &ConnectorStatus,
    ) -> Result<serde_json::Value>;
}

/// Authenticated HTTP client for the Cloudflare v4 API
pub struct ApiClient {
    client: Client,
    base_url: String,
    credentials: Credentials,
}

impl ApiClient {
    /// Create a new API client
    pub fn new(settings: &Settings, credentials: Credentials) -> Result<Self> {
        let mut builder =
            Client::builder().user_agent(concat!("cflr/", env!("CARGO_PKG_VERSION")));
        if let Some(secs) = settings.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            client: builder.build()?,
            base_url: settings.api_base_url.trim_end_matches('/').to_string(),
            credentials,
        })
    }

    /// Base URL requests are sent to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn connectors_url(&self, account_id: &str) -> String {
        format!("{}/accounts/{}/sso/v2/connectors", self.base_url, account_id)
    }

    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        tracing::debug!("{} {}", method, url);
        self.client
            .request(method, url)
            .header(AUTH_EMAIL_HEADER, self.credentials.email())
            .header(AUTH_KEY_HEADER, self.credentials.api_key())
    }
}

#[async_trait]
impl SsoApi for ApiClient {
    async fn list_connectors(&self, account_id: &str) -> Result<Vec<Connector>> {
        let url = self.connectors_url(account_id);
        let response = self
            .request(Method::GET, &url)
            .send()
            .await?
            .error_for_status()?;

        let body = response.bytes().await?;
        let envelope: ApiEnvelope<Vec<Connector>> = serde_json::from_slice(&body)?;
        let connectors = envelope.into_result()?.unwrap_or_default();

        tracing::debug!("Fetched {} connectors", connectors.len());
        Ok(connectors)
    }

    async fn set_connector_status(
        &self,
        account_id: &str,
        connector_id: &str,
        status: &ConnectorStatus,
    ) -> Result<serde_json::Value> {
        let url = format!("{}/{}", self.connectors_url(account_id), connector_id);
        let body = serde_json::json!({ "sso_connector_status": status.code() });

        let response = self
            .request(Method::PATCH, &url)
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        let bytes = response.bytes().await?;
        tracing::debug!("Set connector {} to {}", connector_id, status.code());
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_trimmed() {
        let settings = Settings::default().with_api_base_url("http://localhost:1234/client/v4/");
        let client = ApiClient::new(&settings, Credentials::new("a@b.c", "k")).unwrap();
        assert_eq!(client.base_url(), "http://localhost:1234/client/v4");
        assert_eq!(
            client.connectors_url("acc"),
            "http://localhost:1234/client/v4/accounts/acc/sso/v2/connectors"
        );
    }

    #[test]
    fn test_client_with_timeout() {
        let settings = Settings {
            timeout_secs: Some(3),
            ..Settings::default()
        };
        let client = ApiClient::new(&settings, Credentials::new("a@b.c", "k")).unwrap();
        assert_eq!(client.base_url(), crate::config::DEFAULT_API_BASE_URL);
    }
}
