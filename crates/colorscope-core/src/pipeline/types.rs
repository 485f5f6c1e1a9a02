use crate::io::samples::SampleSet;
use crate::region::Region;
use crate::selection::SelectionUpdate;

/// Session stage, used for progress reporting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionStage {
    Loading,
    Sampling,
    Writing,
}

impl std::fmt::Display for SessionStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Loading => write!(f, "Loading image"),
            Self::Sampling => write!(f, "Sampling regions"),
            Self::Writing => write!(f, "Writing samples"),
        }
    }
}

/// One color read from a region.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SampledColor {
    pub region: Region,
    pub color: [u8; 3],
}

/// Outcome of feeding one pointer event to a [`super::ColorReader`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PointerResult {
    pub update: SelectionUpdate,
    /// Set when the event completed a drag and a color was appended.
    pub sample: Option<SampledColor>,
}

/// Result of a scripted session.
#[derive(Clone, Debug)]
pub struct SessionOutput {
    pub samples: SampleSet,
    pub sampled: Vec<SampledColor>,
    /// Regions that produced no sample (clicks, or entirely outside the image).
    pub skipped: Vec<Region>,
}

/// Thread-safe progress reporting for scripted sessions.
///
/// All methods default to no-ops.
pub trait ProgressReporter: Send + Sync {
    /// A stage has started. `total_items` is the number of work items, if known.
    fn begin_stage(&self, _stage: SessionStage, _total_items: Option<usize>) {}

    /// One more work item in the current stage is done.
    fn advance(&self, _items_done: usize) {}

    fn finish_stage(&self) {}
}

pub(super) struct NoOpReporter;
impl ProgressReporter for NoOpReporter {}
