use std::collections::HashMap;

use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::core::client::http_client::with_auth;
use crate::core::client::metrics_backend_trait::MetricsBackend;
use crate::core::config::app_config::{BasicAuth, UpstreamConfig};
use crate::domain::graph::dto::chart_image::{ChartImageHandle, RenderOptions};
use crate::domain::graph::dto::metric_query::MetricQuery;

/// Graphite-web HTTP API as the metrics backend.
///
/// Queries are turned into path patterns and expanded through
/// `/metrics/expand`; every leaf path is one chart. Charts are drawn by
/// `/render` in PNG format.
pub struct GraphiteWebBackend {
    client: Client,
    base_url: String,
    auth: Option<BasicAuth>,
}

#[derive(Debug, Deserialize)]
struct ExpandResponse {
    results: Vec<String>,
}

impl GraphiteWebBackend {
    pub fn new(client: Client, upstream: &UpstreamConfig) -> Self {
        Self {
            client,
            base_url: upstream.base_url.clone(),
            auth: upstream.auth.clone(),
        }
    }

    /// Fill the template pattern from the query constraints.
    ///
    /// For repeated keys the last constraint wins; placeholders no constraint
    /// names become `*`.
    pub fn expand_pattern(query: &MetricQuery) -> String {
        let mut vars: HashMap<&str, &str> = HashMap::new();
        for (key, value) in query.constraints() {
            vars.insert(key.as_str(), value.as_str());
        }

        let pattern = query.pattern.as_str();
        let mut out = String::with_capacity(pattern.len());
        let mut rest = pattern;

        while let Some(open) = rest.find('$') {
            out.push_str(&rest[..open]);
            let after = &rest[open + 1..];
            match after.find('$') {
                Some(0) => {
                    out.push_str("$$");
                    rest = &after[1..];
                }
                Some(close) => {
                    let name = &after[..close];
                    out.push_str(vars.get(name).copied().unwrap_or("*"));
                    rest = &after[close + 1..];
                }
                None => {
                    out.push('$');
                    rest = after;
                }
            }
        }
        out.push_str(rest);
        out
    }

    pub fn render_params(handle: &ChartImageHandle, options: &RenderOptions) -> Vec<(&'static str, String)> {
        let mut params = vec![("target", handle.target().to_string())];
        if let Some(from) = &options.from {
            params.push(("from", from.clone()));
        }
        if let Some(until) = &options.until {
            params.push(("until", until.clone()));
        }
        if let Some(width) = options.width {
            params.push(("width", width.to_string()));
        }
        if let Some(height) = options.height {
            params.push(("height", height.to_string()));
        }
        if let Some(legend) = options.legend {
            params.push(("hideLegend", (!legend).to_string()));
        }
        params.push(("format", "png".to_string()));
        params
    }
}

#[async_trait]
impl MetricsBackend for GraphiteWebBackend {
    async fn execute(&self, query: &MetricQuery) -> Result<Vec<ChartImageHandle>> {
        let pattern = Self::expand_pattern(query);
        let url = format!("{}/metrics/expand", self.base_url);
        debug!(
            "Expanding {} for {} template {}",
            pattern, query.object_type, query.template_name
        );

        let resp = with_auth(self.client.get(&url), self.auth.as_ref())
            .query(&[("query", pattern.as_str()), ("leavesOnly", "1")])
            .send()
            .await
            .with_context(|| format!("Failed to call Graphite (url={})", url))?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            return Err(anyhow!("Graphite returned {} for {}: {}", status, pattern, text));
        }

        let body: ExpandResponse = resp
            .json()
            .await
            .context("Failed to decode Graphite expand response")?;

        Ok(body.results.into_iter().map(ChartImageHandle::new).collect())
    }

    async fn render(&self, handle: &ChartImageHandle, options: &RenderOptions) -> Result<Vec<u8>> {
        let url = format!("{}/render", self.base_url);
        let params = Self::render_params(handle, options);

        let resp = with_auth(self.client.get(&url), self.auth.as_ref())
            .query(&params)
            .send()
            .await
            .with_context(|| format!("Failed to call Graphite (url={})", url))?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            return Err(anyhow!(
                "Graphite returned {} rendering {}: {}",
                status,
                handle.target(),
                text
            ));
        }

        let bytes = resp.bytes().await.context("Failed to read rendered image")?;
        Ok(bytes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::persistence::templates::graph_object_type::GraphObjectType;

    fn query(pattern: &str) -> MetricQuery {
        MetricQuery::new(GraphObjectType::Service, "disk", pattern)
    }

    #[test]
    fn expand_fills_known_and_wildcards_unknown() {
        let q = query("icinga2.$hostname$.services.$service$.disk.perfdata.$metric$.value")
            .where_eq("hostname", "web01")
            .where_eq("service", "disk_root");

        assert_eq!(
            GraphiteWebBackend::expand_pattern(&q),
            "icinga2.web01.services.disk_root.disk.perfdata.*.value"
        );
    }

    #[test]
    fn expand_last_constraint_wins() {
        let q = query("a.$metric$")
            .where_eq("metric", "load1")
            .where_eq("metric", "load5");
        assert_eq!(GraphiteWebBackend::expand_pattern(&q), "a.load5");
    }

    #[test]
    fn expand_ignores_constraints_without_placeholder() {
        let q = query("a.$hostname$.b").where_eq("hostname", "h").where_eq("colour", "red");
        assert_eq!(GraphiteWebBackend::expand_pattern(&q), "a.h.b");
    }

    #[test]
    fn expand_keeps_stray_dollars() {
        let q = query("a.$$.b$").where_eq("x", "y");
        assert_eq!(GraphiteWebBackend::expand_pattern(&q), "a.$$.b$");
    }

    #[test]
    fn render_params_map_presentation() {
        let handle = ChartImageHandle::new("icinga2.web01.host.load.perfdata.load1.value");
        let options = RenderOptions {
            from: Some("-1h".into()),
            until: Some("now".into()),
            width: Some(300),
            height: Some(100),
            legend: Some(true),
        };

        let params = GraphiteWebBackend::render_params(&handle, &options);
        assert_eq!(
            params,
            vec![
                ("target", "icinga2.web01.host.load.perfdata.load1.value".to_string()),
                ("from", "-1h".to_string()),
                ("until", "now".to_string()),
                ("width", "300".to_string()),
                ("height", "100".to_string()),
                ("hideLegend", "false".to_string()),
                ("format", "png".to_string()),
            ]
        );
    }

    #[test]
    fn render_params_leave_defaults_to_graphite() {
        let handle = ChartImageHandle::new("a.b");
        let params = GraphiteWebBackend::render_params(&handle, &RenderOptions::default());
        assert_eq!(
            params,
            vec![("target", "a.b".to_string()), ("format", "png".to_string())]
        );
    }
}
