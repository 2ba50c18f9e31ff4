use serde::Serialize;

/// Kind of monitored object a graph belongs to.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum GraphObjectType {
    Host,
    Service,
}

impl GraphObjectType {
    pub fn from_code<S: AsRef<str>>(code: S) -> Option<Self> {
        match code.as_ref().trim().to_lowercase().as_str() {
            "host" => Some(Self::Host),
            "service" => Some(Self::Service),
            _ => None,
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Self::Host => "host",
            Self::Service => "service",
        }
    }
}

impl std::fmt::Display for GraphObjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_code())
    }
}
