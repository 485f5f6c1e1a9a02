use std::path::PathBuf;

use tracing::{debug, warn};

use crate::color::aggregate::AggregateStrategy;
use crate::color::sample_region;
use crate::color::space::ColorSpace;
use crate::error::{ColorscopeError, Result};
use crate::frame::CanonicalImage;
use crate::io::samples::{SampleSet, SampleStore};
use crate::preview::{draw_region, SELECTION_COLOR};
use crate::region::Region;
use crate::selection::{PointerEvent, SelectionController, SelectionUpdate};

use super::types::{PointerResult, SampledColor};

/// An interactive sampling session over one image.
///
/// Pointer events drive the selection; each completed drag is sampled in the
/// configured color space and appended to the store. Nothing is written to
/// disk until [`ColorReader::finish`].
#[derive(Debug)]
pub struct ColorReader {
    image: CanonicalImage,
    space: ColorSpace,
    strategy: AggregateStrategy,
    selection: SelectionController,
    store: SampleStore,
}

impl ColorReader {
    pub fn new(
        image: CanonicalImage,
        space: ColorSpace,
        strategy: AggregateStrategy,
        output: impl Into<PathBuf>,
    ) -> Self {
        Self {
            image,
            space,
            strategy,
            selection: SelectionController::new(),
            store: SampleStore::create(output, space),
        }
    }

    pub fn image(&self) -> &CanonicalImage {
        &self.image
    }

    pub fn space(&self) -> ColorSpace {
        self.space
    }

    pub fn strategy(&self) -> AggregateStrategy {
        self.strategy
    }

    pub fn samples(&self) -> &SampleSet {
        self.store.samples()
    }

    /// Color of `region` without recording it.
    pub fn read_region(&self, region: &Region) -> Result<[u8; 3]> {
        sample_region(&self.image, region, self.space, self.strategy)
    }

    /// Color of the single pixel at `(x, y)`.
    pub fn read_pixel(&self, x: i32, y: i32) -> Result<[u8; 3]> {
        self.read_region(&Region::from_coords(x, y, x, y))
    }

    /// Copy of the image with `region` outlined, for live drag feedback.
    pub fn preview(&self, region: &Region) -> Result<CanonicalImage> {
        draw_region(&self.image, region, SELECTION_COLOR)
    }

    /// Feed one pointer event. A finished drag is sampled and appended; a
    /// drag that ends entirely outside the image is skipped with a warning.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> Result<PointerResult> {
        let update = self.selection.handle(event);
        let sample = match update.sample_region() {
            Some(region) => self.record(region)?,
            None => {
                if let SelectionUpdate::Finished { region, .. } = update {
                    debug!(%region, "Click without drag, no sample");
                }
                None
            }
        };
        Ok(PointerResult { update, sample })
    }

    fn record(&mut self, region: Region) -> Result<Option<SampledColor>> {
        let color = match self.read_region(&region) {
            Ok(color) => color,
            Err(ColorscopeError::EmptyRegion) => {
                warn!(%region, "Selection lies outside the image, skipped");
                return Ok(None);
            }
            Err(e) => return Err(e),
        };
        self.store.append(&color.map(i64::from))?;
        debug!(%region, ?color, space = %self.space, "Region sampled");
        Ok(Some(SampledColor { region, color }))
    }

    /// Write all samples and return them.
    pub fn finish(self) -> Result<SampleSet> {
        self.store.write()?;
        Ok(self.store.samples().clone())
    }
}
