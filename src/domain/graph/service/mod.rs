pub mod graph_service;
pub mod image_renderer;
pub mod image_resolver;
pub mod param_splitter;
pub mod query_builder;
pub mod template_selector;

#[cfg(test)]
pub(crate) mod test_support;
