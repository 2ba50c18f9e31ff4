use crate::core::persistence::templates::graph_object_type::GraphObjectType;
use crate::core::persistence::templates::graph_template_entity::GraphTemplateEntity;

/// Templates of `object_type` whose selector equals `requested` exactly.
///
/// Without a requested selector every template of the type is a candidate;
/// an unmatched selector yields an empty list rather than an error.
pub fn select_templates(
    object_type: GraphObjectType,
    templates: Vec<GraphTemplateEntity>,
    requested: Option<&str>,
) -> Vec<GraphTemplateEntity> {
    templates
        .into_iter()
        .filter(|t| t.object_type == object_type)
        .filter(|t| match requested {
            Some(selector) => t.selector == selector,
            None => true,
        })
        .collect()
}
