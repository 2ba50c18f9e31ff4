use crate::domain::graph::dto::filter_parameter_set::FilterParameterSet;
use crate::domain::graph::dto::presentation_params::PresentationParams;

/// Request parameters partitioned into "how to draw" and "what to draw".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SplitParams {
    pub presentation: PresentationParams,
    pub filters: FilterParameterSet,
}

/// Move the presentation keys out of `raw`; everything else becomes a filter.
///
/// A repeated key keeps its last value, presentation or filter alike, and a
/// presentation key never leaks into the filters. Filter order follows the
/// request.
pub fn split_params<I>(raw: I) -> SplitParams
where
    I: IntoIterator<Item = (String, String)>,
{
    let mut split = SplitParams::default();

    for (key, value) in raw {
        match split.presentation.slot_mut(&key) {
            Some(slot) => *slot = Some(value),
            None => split.filters.insert(key, value),
        }
    }

    split
}
