/// Request values that control how a graph is drawn rather than which graph
/// is picked, as they arrived on the query string.
///
/// Nothing is parsed here; numeric coercion happens when the image is rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PresentationParams {
    pub start: Option<String>,
    pub end: Option<String>,
    pub width: Option<String>,
    pub height: Option<String>,
    pub legend: Option<String>,
    pub template: Option<String>,
}

impl PresentationParams {
    /// Slot for `key`, or `None` if it is not a presentation key.
    pub(crate) fn slot_mut(&mut self, key: &str) -> Option<&mut Option<String>> {
        match key {
            "start" => Some(&mut self.start),
            "end" => Some(&mut self.end),
            "width" => Some(&mut self.width),
            "height" => Some(&mut self.height),
            "legend" => Some(&mut self.legend),
            "template" => Some(&mut self.template),
            _ => None,
        }
    }
}
