use serde::Serialize;

use super::graph_object_type::GraphObjectType;

/// A preconfigured graph definition for one object type.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct GraphTemplateEntity {
    pub name: String,
    pub object_type: GraphObjectType,
    /// Compared verbatim against the `template` request parameter.
    pub selector: String,
    /// Metric path with `$variable$` placeholders, e.g.
    /// `icinga2.$hostname$.host.$check$.perfdata.$metric$.value`.
    pub pattern: String,
}
