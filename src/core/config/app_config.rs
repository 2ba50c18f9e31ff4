use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use tracing::warn;

const LOG_DIR_KEY: &str = "GRAPHVIEW_LOG_DIR";

/// Optional HTTP basic-auth credentials for an upstream service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicAuth {
    pub username: String,
    pub password: Option<String>,
}

/// Connection settings for one upstream HTTP service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamConfig {
    pub base_url: String,
    pub auth: Option<BasicAuth>,
}

/// Runtime configuration, read from `GRAPHVIEW_*` environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind_addr: String,
    pub graphite: UpstreamConfig,
    pub icinga: UpstreamConfig,
    pub tls_insecure: bool,
    pub http_timeout: Duration,
    pub template_path: PathBuf,
    pub log_dir: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Log directory alone, for setting up logging before the full config is read.
    pub fn log_dir_from_env() -> PathBuf {
        log_dir(env::var(LOG_DIR_KEY).ok())
    }

    /// Build the config from an arbitrary key lookup; empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let upstream = |prefix: &str, default_url: &str| UpstreamConfig {
            base_url: get(&format!("{prefix}_URL"))
                .unwrap_or_else(|| default_url.to_string())
                .trim_end_matches('/')
                .to_string(),
            auth: get(&format!("{prefix}_USER")).map(|username| BasicAuth {
                username,
                password: get(&format!("{prefix}_PASSWORD")),
            }),
        };

        Self {
            bind_addr: get("GRAPHVIEW_BIND_ADDR").unwrap_or_else(|| "0.0.0.0:5000".to_string()),
            graphite: upstream("GRAPHVIEW_GRAPHITE", "http://localhost:8080"),
            icinga: upstream("GRAPHVIEW_ICINGA_API", "https://localhost:5665"),
            tls_insecure: parse_or("GRAPHVIEW_TLS_INSECURE", get("GRAPHVIEW_TLS_INSECURE"), false),
            http_timeout: Duration::from_secs(parse_or(
                "GRAPHVIEW_HTTP_TIMEOUT_SECS",
                get("GRAPHVIEW_HTTP_TIMEOUT_SECS"),
                10,
            )),
            template_path: get("GRAPHVIEW_TEMPLATE_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("config/graph_templates.rci")),
            log_dir: log_dir(lookup(LOG_DIR_KEY)),
        }
    }
}

fn log_dir(raw: Option<String>) -> PathBuf {
    raw.map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("logs"))
}

fn parse_or<T: FromStr + std::fmt::Debug>(key: &str, raw: Option<String>, default: T) -> T {
    match raw {
        Some(v) => v.parse::<T>().unwrap_or_else(|_| {
            warn!("Invalid value {:?} for {}, using {:?}", v, key, default);
            default
        }),
        None => default,
    }
}
