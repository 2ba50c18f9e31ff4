use crate::core::persistence::templates::graph_object_type::GraphObjectType;

/// One backend query derived from a single graph template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricQuery {
    pub object_type: GraphObjectType,
    pub template_name: String,
    pub pattern: String,
    constraints: Vec<(String, String)>,
}

impl MetricQuery {
    pub fn new(
        object_type: GraphObjectType,
        template_name: impl Into<String>,
        pattern: impl Into<String>,
    ) -> Self {
        Self {
            object_type,
            template_name: template_name.into(),
            pattern: pattern.into(),
            constraints: Vec::new(),
        }
    }

    /// Add an equality constraint. Repeated keys are kept as separate clauses.
    pub fn where_eq(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.constraints.push((key.into(), value.into()));
        self
    }

    pub fn constraints(&self) -> &[(String, String)] {
        &self.constraints
    }
}
