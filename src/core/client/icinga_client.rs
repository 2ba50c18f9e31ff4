use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::debug;

use crate::core::client::http_client::with_auth;
use crate::core::client::monitoring_store_trait::MonitoringStore;
use crate::core::config::app_config::{BasicAuth, UpstreamConfig};
use crate::domain::graph::dto::monitored_object::MonitoredObject;

/// Object existence checks against the Icinga 2 REST API.
///
/// Visibility follows the permissions of the configured API user.
pub struct IcingaApiMonitoringStore {
    client: Client,
    base_url: String,
    auth: Option<BasicAuth>,
}

impl IcingaApiMonitoringStore {
    pub fn new(client: Client, upstream: &UpstreamConfig) -> Self {
        Self {
            client,
            base_url: upstream.base_url.clone(),
            auth: upstream.auth.clone(),
        }
    }

    /// API path of the object, e.g. `/v1/objects/services/web01%21disk`.
    pub fn object_path(object: &MonitoredObject) -> String {
        match &object.service {
            Some(service) => format!(
                "/v1/objects/services/{}",
                urlencoding::encode(&format!("{}!{}", object.hostname, service))
            ),
            None => format!("/v1/objects/hosts/{}", urlencoding::encode(&object.hostname)),
        }
    }
}

#[async_trait]
impl MonitoringStore for IcingaApiMonitoringStore {
    async fn lookup(&self, object: &MonitoredObject) -> Result<bool> {
        let url = format!("{}{}", self.base_url, Self::object_path(object));

        let resp = with_auth(self.client.get(&url), self.auth.as_ref())
            .header("Accept", "application/json")
            .send()
            .await
            .with_context(|| format!("Failed to call Icinga API (url={})", url))?;

        match resp.status() {
            s if s.is_success() => Ok(true),
            StatusCode::NOT_FOUND => {
                debug!("Icinga API does not know {} {}", object.object_type, object);
                Ok(false)
            }
            s => {
                let text = resp.text().await.unwrap_or_default();
                Err(anyhow!("Icinga API returned {}: {} (url={})", s, text, url))
            }
        }
    }
}
