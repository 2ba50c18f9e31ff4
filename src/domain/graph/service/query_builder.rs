use crate::core::persistence::templates::graph_template_entity::GraphTemplateEntity;
use crate::domain::graph::dto::filter_parameter_set::FilterParameterSet;
use crate::domain::graph::dto::metric_query::MetricQuery;
use crate::domain::graph::dto::monitored_object::MonitoredObject;

/// Escape the identity entries (`hostname`, plus `service` for services) in place.
///
/// Must run once, before any query is built from `filters`.
pub fn escape_identity(filters: &mut FilterParameterSet, object: &MonitoredObject) {
    for key in object.identity_keys() {
        filters.escape_value(key);
    }
}

/// Query for one template: every filter pair becomes an equality constraint, in order.
pub fn build_query(
    template: &GraphTemplateEntity,
    object: &MonitoredObject,
    filters: &FilterParameterSet,
) -> MetricQuery {
    filters.iter().fold(
        MetricQuery::new(object.object_type, &template.name, &template.pattern),
        |query, (key, value)| query.where_eq(key, value),
    )
}

pub fn build_queries(
    templates: &[GraphTemplateEntity],
    object: &MonitoredObject,
    filters: &FilterParameterSet,
) -> Vec<MetricQuery> {
    templates
        .iter()
        .map(|t| build_query(t, object, filters))
        .collect()
}
