pub mod graphite_client;
pub mod http_client;
pub mod icinga_client;
pub mod metrics_backend_trait;
pub mod monitoring_store_trait;
