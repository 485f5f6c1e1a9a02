use std::sync::Arc;

use tracing::{debug, info};

use crate::error::Result;
use crate::io::raw::FrameSource;
use crate::region::Region;
use crate::selection::PointerEvent;

use super::config::SessionConfig;
use super::reader::ColorReader;
use super::types::{NoOpReporter, ProgressReporter, SampledColor, SessionOutput, SessionStage};

/// Open the configured input and build a reader over it.
pub fn open_reader(config: &SessionConfig) -> Result<ColorReader> {
    let source = FrameSource::open(&config.input, config.pixel_format, config.size)?;
    let image = source.rendered()?;
    info!(
        input = %config.input.display(),
        format = %config.pixel_format,
        width = image.width(),
        height = image.height(),
        "Image loaded"
    );
    Ok(ColorReader::new(
        image,
        config.sampling.color_space,
        config.sampling.strategy,
        config.output.clone(),
    ))
}

/// Replay every configured region as a press, move and release, then write
/// the sample file.
pub fn run_session_reported(
    config: &SessionConfig,
    reporter: Arc<dyn ProgressReporter>,
) -> Result<SessionOutput> {
    reporter.begin_stage(SessionStage::Loading, None);
    let mut reader = open_reader(config)?;
    reporter.finish_stage();

    let total = config.regions.len();
    reporter.begin_stage(SessionStage::Sampling, Some(total));
    let mut sampled = Vec::with_capacity(total);
    let mut skipped = Vec::new();
    for (i, region) in config.regions.iter().enumerate() {
        match replay_drag(&mut reader, region)? {
            Some(sample) => sampled.push(sample),
            None => {
                debug!(%region, "Region produced no sample");
                skipped.push(*region);
            }
        }
        reporter.advance(i + 1);
    }
    reporter.finish_stage();

    reporter.begin_stage(SessionStage::Writing, None);
    let output = config.output.clone();
    let samples = reader.finish()?;
    reporter.finish_stage();

    info!(
        output = %output.display(),
        sampled = sampled.len(),
        skipped = skipped.len(),
        space = %config.sampling.color_space,
        "Session complete"
    );
    Ok(SessionOutput {
        samples,
        sampled,
        skipped,
    })
}

/// Run a scripted session without progress reporting.
pub fn run_session(config: &SessionConfig) -> Result<SessionOutput> {
    run_session_reported(config, Arc::new(NoOpReporter))
}

fn replay_drag(reader: &mut ColorReader, region: &Region) -> Result<Option<SampledColor>> {
    reader.handle_pointer(PointerEvent::Press(region.p1))?;
    reader.handle_pointer(PointerEvent::Move(region.p2))?;
    Ok(reader.handle_pointer(PointerEvent::Release(region.p2))?.sample)
}
