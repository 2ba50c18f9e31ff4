use crate::core::util::graphite_util::GraphiteUtil;

/// Ordered metric filter criteria, object identity included.
///
/// Keys are unique and never collide with the presentation keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterParameterSet {
    entries: Vec<(String, String)>,
}

impl FilterParameterSet {
    /// Insert or overwrite `key`. An existing key keeps its position.
    pub(crate) fn insert(&mut self, key: String, value: String) {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Replace the value of `key` by its backend-escaped form.
    pub(crate) fn escape_value(&mut self, key: &str) {
        if let Some(entry) = self.entries.iter_mut().find(|(k, _)| k == key) {
            entry.1 = GraphiteUtil::escape(&entry.1);
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
