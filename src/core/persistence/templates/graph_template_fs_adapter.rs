use std::{
    collections::HashMap,
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use tracing::warn;

use super::graph_object_type::GraphObjectType;
use super::graph_template_entity::GraphTemplateEntity;
use super::graph_template_fs_adapter_trait::GraphTemplateFsAdapterTrait;

/// FS adapter for graph templates.
///
/// Reads a simple key-value file (`graph_templates.rci` by default):
///
/// ```text
/// TEMPLATE_COUNT:1
/// TEMPLATE_0_NAME:load
/// TEMPLATE_0_OBJECT_TYPE:host
/// TEMPLATE_0_SELECTOR:load
/// TEMPLATE_0_PATTERN:icinga2.$hostname$.host.load.perfdata.$metric$.value
/// ```
///
/// A missing file means no templates are configured.
pub struct GraphTemplateFsAdapter {
    path: PathBuf,
}

impl GraphTemplateFsAdapter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_from_path(path: &Path) -> Result<Vec<GraphTemplateEntity>> {
        let file = File::open(path)
            .with_context(|| format!("Failed to open template file {}", path.display()))?;
        let reader = BufReader::new(file);
        let mut raw: HashMap<String, String> = HashMap::new();

        for line in reader.lines() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            if let Some((key, val)) = line.split_once(':') {
                raw.insert(key.trim().to_uppercase(), val.trim().to_string());
            }
        }

        Ok(Self::parse_templates(&raw))
    }

    fn parse_templates(raw: &HashMap<String, String>) -> Vec<GraphTemplateEntity> {
        let count = raw
            .get("TEMPLATE_COUNT")
            .and_then(|v| v.parse::<usize>().ok())
            .unwrap_or(0);

        // Only indices that occur in the file are visited; the count just caps them.
        let mut indices: Vec<usize> = raw
            .keys()
            .filter_map(|key| key.strip_prefix("TEMPLATE_")?.split_once('_')?.0.parse().ok())
            .filter(|idx| *idx < count)
            .collect();
        indices.sort_unstable();
        indices.dedup();

        let mut templates = Vec::with_capacity(indices.len());

        for idx in indices {
            let prefix = format!("TEMPLATE_{}_", idx);
            let get = |suffix: &str| -> Option<String> {
                raw.get(&(prefix.clone() + suffix)).map(|v| v.to_string())
            };

            let Some(name) = get("NAME").filter(|v| !v.is_empty()) else {
                warn!("Graph template #{} has no name, skipping", idx);
                continue;
            };
            let Some(object_type) = get("OBJECT_TYPE").and_then(GraphObjectType::from_code) else {
                warn!("Graph template {} has no valid object type, skipping", name);
                continue;
            };
            let Some(pattern) = get("PATTERN").filter(|v| !v.is_empty()) else {
                warn!("Graph template {} has no metric pattern, skipping", name);
                continue;
            };
            let selector = get("SELECTOR").unwrap_or_else(|| name.clone());

            templates.push(GraphTemplateEntity {
                name,
                object_type,
                selector,
                pattern,
            });
        }

        templates
    }
}

impl GraphTemplateFsAdapterTrait for GraphTemplateFsAdapter {
    fn read(&self) -> Result<Vec<GraphTemplateEntity>> {
        if !self.path.exists() {
            warn!("Template file {} not found, no graphs configured", self.path.display());
            return Ok(Vec::new());
        }
        Self::read_from_path(&self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::persistence::templates::graph_template_api_repository_trait::GraphTemplateApiRepository;
    use crate::core::persistence::templates::graph_template_repository::GraphTemplateRepository;
    use std::io::Write;

    fn write_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn reads_templates_in_file_order() {
        let file = write_file(
            "# graphs\n\
             TEMPLATE_COUNT:2\n\
             TEMPLATE_0_NAME:load\n\
             TEMPLATE_0_OBJECT_TYPE:host\n\
             TEMPLATE_0_SELECTOR:load\n\
             TEMPLATE_0_PATTERN:icinga2.$hostname$.host.load.perfdata.$metric$.value\n\
             TEMPLATE_1_NAME:disk\n\
             TEMPLATE_1_OBJECT_TYPE:service\n\
             TEMPLATE_1_PATTERN:icinga2.$hostname$.services.$service$.disk.perfdata.$metric$.value\n",
        );

        let templates = GraphTemplateFsAdapter::new(file.path()).read().unwrap();
        assert_eq!(templates.len(), 2);
        assert_eq!(templates[0].name, "load");
        assert_eq!(templates[0].object_type, GraphObjectType::Host);
        assert_eq!(
            templates[0].pattern,
            "icinga2.$hostname$.host.load.perfdata.$metric$.value"
        );
        // selector falls back to the name
        assert_eq!(templates[1].selector, "disk");
        assert_eq!(templates[1].object_type, GraphObjectType::Service);
    }

    #[test]
    fn skips_incomplete_entries() {
        let file = write_file(
            "TEMPLATE_COUNT:3\n\
             TEMPLATE_0_NAME:nopattern\n\
             TEMPLATE_0_OBJECT_TYPE:host\n\
             TEMPLATE_1_NAME:badtype\n\
             TEMPLATE_1_OBJECT_TYPE:cluster\n\
             TEMPLATE_1_PATTERN:a.b\n\
             TEMPLATE_2_NAME:ping\n\
             TEMPLATE_2_OBJECT_TYPE:HOST\n\
             TEMPLATE_2_PATTERN:icinga2.$hostname$.host.ping.perfdata.rta.value\n",
        );

        let templates = GraphTemplateFsAdapter::new(file.path()).read().unwrap();
        assert_eq!(templates.len(), 1);
        assert_eq!(templates[0].name, "ping");
    }

    #[test]
    fn oversized_count_only_reads_present_entries() {
        let file = write_file(
            "TEMPLATE_COUNT:18446744073709551615\n\
             TEMPLATE_0_NAME:load\n\
             TEMPLATE_0_OBJECT_TYPE:host\n\
             TEMPLATE_0_PATTERN:a.$hostname$\n\
             TEMPLATE_7_NAME:ping\n\
             TEMPLATE_7_OBJECT_TYPE:host\n\
             TEMPLATE_7_PATTERN:b.$hostname$\n",
        );

        let templates = GraphTemplateFsAdapter::new(file.path()).read().unwrap();
        let names: Vec<_> = templates.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["load", "ping"]);
    }

    #[test]
    fn entries_beyond_count_are_ignored() {
        let file = write_file(
            "TEMPLATE_COUNT:1\n\
             TEMPLATE_0_NAME:load\n\
             TEMPLATE_0_OBJECT_TYPE:host\n\
             TEMPLATE_0_PATTERN:a.$hostname$\n\
             TEMPLATE_1_NAME:ping\n\
             TEMPLATE_1_OBJECT_TYPE:host\n\
             TEMPLATE_1_PATTERN:b.$hostname$\n",
        );

        let templates = GraphTemplateFsAdapter::new(file.path()).read().unwrap();
        assert_eq!(templates.len(), 1);
        assert_eq!(templates[0].name, "load");
    }

    #[test]
    fn missing_file_yields_no_templates() {
        let dir = tempfile::tempdir().unwrap();
        let adapter = GraphTemplateFsAdapter::new(dir.path().join("absent.rci"));
        assert!(adapter.read().unwrap().is_empty());
    }

    #[test]
    fn repository_filters_by_object_type() {
        let file = write_file(
            "TEMPLATE_COUNT:2\n\
             TEMPLATE_0_NAME:load\n\
             TEMPLATE_0_OBJECT_TYPE:host\n\
             TEMPLATE_0_PATTERN:a.$hostname$\n\
             TEMPLATE_1_NAME:disk\n\
             TEMPLATE_1_OBJECT_TYPE:service\n\
             TEMPLATE_1_PATTERN:b.$hostname$.$service$\n",
        );

        let repo = GraphTemplateRepository::new(file.path());
        let host = repo.templates_for(GraphObjectType::Host).unwrap();
        let service = repo.templates_for(GraphObjectType::Service).unwrap();
        assert_eq!(host.len(), 1);
        assert_eq!(host[0].name, "load");
        assert_eq!(service.len(), 1);
        assert_eq!(service[0].name, "disk");
    }
}
