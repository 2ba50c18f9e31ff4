pub mod graph_object_type;
pub mod graph_template_api_repository_trait;
pub mod graph_template_entity;
pub mod graph_template_fs_adapter;
pub mod graph_template_fs_adapter_trait;
pub mod graph_template_repository;
