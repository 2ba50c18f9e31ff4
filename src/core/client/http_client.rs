use std::time::Duration;

use anyhow::{anyhow, Result};
use reqwest::{Client, RequestBuilder};

use crate::core::config::app_config::BasicAuth;

/// Shared reqwest client for upstream calls. Request timeouts live here.
pub fn build_http_client(timeout: Duration, tls_insecure: bool) -> Result<Client> {
    Client::builder()
        .timeout(timeout)
        .danger_accept_invalid_certs(tls_insecure)
        .user_agent(concat!("graphview-core/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| anyhow!("Failed to build HTTP client: {}", e))
}

pub(crate) fn with_auth(req: RequestBuilder, auth: Option<&BasicAuth>) -> RequestBuilder {
    match auth {
        Some(a) => req.basic_auth(&a.username, a.password.as_deref()),
        None => req,
    }
}
