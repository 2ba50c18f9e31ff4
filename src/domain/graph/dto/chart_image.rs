use validator::Validate;

pub const PNG_CONTENT_TYPE: &str = "image/png";

/// Backend reference to exactly one drawable series.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartImageHandle {
    target: String,
}

impl ChartImageHandle {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
        }
    }

    pub fn target(&self) -> &str {
        &self.target
    }
}

/// The single handle a request resolved to and the template it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedImage {
    pub handle: ChartImageHandle,
    pub template_name: String,
}

/// Typed presentation settings handed to the backend renderer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Validate)]
pub struct RenderOptions {
    pub from: Option<String>,
    pub until: Option<String>,
    #[validate(range(min = 1, max = 10000))]
    pub width: Option<u32>,
    #[validate(range(min = 1, max = 10000))]
    pub height: Option<u32>,
    /// `None` leaves the choice to the backend.
    pub legend: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedImage {
    pub bytes: Vec<u8>,
    pub content_type: &'static str,
}
