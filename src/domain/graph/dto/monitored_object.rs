use crate::core::persistence::templates::graph_object_type::GraphObjectType;

/// Identity of the host or service a graph is requested for, unescaped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonitoredObject {
    pub object_type: GraphObjectType,
    pub hostname: String,
    /// Service description, only set for `GraphObjectType::Service`.
    pub service: Option<String>,
}

impl MonitoredObject {
    pub fn host(hostname: impl Into<String>) -> Self {
        Self {
            object_type: GraphObjectType::Host,
            hostname: hostname.into(),
            service: None,
        }
    }

    pub fn service(hostname: impl Into<String>, service: impl Into<String>) -> Self {
        Self {
            object_type: GraphObjectType::Service,
            hostname: hostname.into(),
            service: Some(service.into()),
        }
    }

    /// Filter keys carrying this object's identity.
    pub fn identity_keys(&self) -> &'static [&'static str] {
        match self.object_type {
            GraphObjectType::Host => &["hostname"],
            GraphObjectType::Service => &["hostname", "service"],
        }
    }
}

impl std::fmt::Display for MonitoredObject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.service {
            Some(service) => write!(f, "{}!{}", self.hostname, service),
            None => f.write_str(&self.hostname),
        }
    }
}
