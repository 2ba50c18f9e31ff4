use std::path::PathBuf;

use super::graph_template_api_repository_trait::GraphTemplateApiRepository;
use super::graph_template_fs_adapter::GraphTemplateFsAdapter;
use super::graph_template_fs_adapter_trait::GraphTemplateFsAdapterTrait;

pub struct GraphTemplateRepository {
    adapter: GraphTemplateFsAdapter,
}

impl GraphTemplateRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            adapter: GraphTemplateFsAdapter::new(path),
        }
    }
}

impl GraphTemplateApiRepository for GraphTemplateRepository {
    fn fs_adapter(&self) -> &dyn GraphTemplateFsAdapterTrait {
        &self.adapter
    }
}
