mod common;

use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use colorscope_core::color::aggregate::AggregateStrategy;
use colorscope_core::color::space::ColorSpace;
use colorscope_core::error::ColorscopeError;
use colorscope_core::io::raw::{FrameSize, PixelFormat};
use colorscope_core::io::samples::load;
use colorscope_core::pipeline::config::{SamplingConfig, SessionConfig};
use colorscope_core::pipeline::{
    open_reader, run_session, run_session_reported, ColorReader, ProgressReporter, SessionStage,
};
use colorscope_core::region::{Point, Region};
use colorscope_core::selection::{PointerEvent, SelectionUpdate};

use common::{nv12_frame, uniform_image, write_bytes, write_png};

const RED: [u8; 3] = [255, 0, 0];

fn red_reader(space: ColorSpace, output: PathBuf) -> ColorReader {
    ColorReader::new(uniform_image(10, 10, RED), space, AggregateStrategy::Average, output)
}

fn drag(reader: &mut ColorReader, from: (i32, i32), to: (i32, i32)) -> SelectionUpdate {
    reader.handle_pointer(PointerEvent::Press(from.into())).unwrap();
    reader.handle_pointer(PointerEvent::Move(to.into())).unwrap();
    reader
        .handle_pointer(PointerEvent::Release(to.into()))
        .unwrap()
        .update
}

// ---------------------------------------------------------------------------
// ColorReader
// ---------------------------------------------------------------------------

#[test]
fn test_reader_drag_appends_sample() {
    let dir = tempfile::tempdir().unwrap();
    let mut reader = red_reader(ColorSpace::Yuv, dir.path().join("out.json"));

    reader.handle_pointer(PointerEvent::Press(Point::new(1, 1))).unwrap();
    let result = reader
        .handle_pointer(PointerEvent::Release(Point::new(5, 5)))
        .unwrap();
    let sample = result.sample.unwrap();
    assert_eq!(sample.region, Region::from_coords(1, 1, 5, 5));
    assert_eq!(sample.color, [76, 91, 255]);
    assert_eq!(reader.samples().len(), 1);
}

#[test]
fn test_reader_click_without_drag_records_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let mut reader = red_reader(ColorSpace::Rgb, dir.path().join("out.json"));

    reader.handle_pointer(PointerEvent::Press(Point::new(0, 0))).unwrap();
    reader.handle_pointer(PointerEvent::Move(Point::new(3, 3))).unwrap();
    let result = reader
        .handle_pointer(PointerEvent::Release(Point::new(0, 0)))
        .unwrap();
    assert_eq!(result.sample, None);
    assert!(reader.samples().is_empty());
}

#[test]
fn test_reader_move_reports_preview() {
    let dir = tempfile::tempdir().unwrap();
    let mut reader = red_reader(ColorSpace::Rgb, dir.path().join("out.json"));

    reader.handle_pointer(PointerEvent::Press(Point::new(2, 2))).unwrap();
    let result = reader.handle_pointer(PointerEvent::Move(Point::new(4, 6))).unwrap();
    assert_eq!(result.update, SelectionUpdate::Preview(Region::from_coords(2, 2, 4, 6)));
    assert_eq!(result.sample, None);
}

#[test]
fn test_reader_drag_outside_image_is_skipped() {
    let dir = tempfile::tempdir().unwrap();
    let mut reader = red_reader(ColorSpace::Rgb, dir.path().join("out.json"));

    let update = drag(&mut reader, (20, 20), (30, 30));
    assert!(update.sample_region().is_some());
    assert!(reader.samples().is_empty());
}

#[test]
fn test_reader_drag_partly_outside_is_clipped() {
    let dir = tempfile::tempdir().unwrap();
    let mut reader = red_reader(ColorSpace::Hsv, dir.path().join("out.json"));

    drag(&mut reader, (-4, 8), (40, 40));
    assert_eq!(reader.samples().get(0), Some([0, 255, 255]));
}

#[test]
fn test_reader_read_region_and_pixel() {
    let dir = tempfile::tempdir().unwrap();
    let reader = red_reader(ColorSpace::Hls, dir.path().join("out.json"));

    assert_eq!(reader.read_pixel(9, 9).unwrap(), [0, 128, 255]);
    assert!(matches!(reader.read_pixel(10, 0), Err(ColorscopeError::EmptyRegion)));
    assert_eq!(
        reader.read_region(&Region::from_coords(0, 0, 10, 10)).unwrap(),
        [0, 128, 255]
    );
    assert!(reader.samples().is_empty());
}

#[test]
fn test_reader_finish_writes_samples() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("color_data.json");
    let mut reader = red_reader(ColorSpace::Rgb, path.clone());

    drag(&mut reader, (0, 0), (4, 4));
    drag(&mut reader, (6, 6), (9, 9));
    assert!(!path.exists());

    let samples = reader.finish().unwrap();
    assert_eq!(samples.len(), 2);
    let record = load(&path).unwrap();
    assert_eq!(record.format, "rgb");
    assert_eq!(record.channel("r"), Some(&[255, 255][..]));
    assert_eq!(record.channel("b"), Some(&[0, 0][..]));
}

#[test]
fn test_reader_preview_keeps_source() {
    let dir = tempfile::tempdir().unwrap();
    let reader = red_reader(ColorSpace::Rgb, dir.path().join("out.json"));
    let before = reader.image().clone();

    let preview = reader.preview(&Region::from_coords(1, 1, 4, 4)).unwrap();
    assert_eq!(reader.image(), &before);
    assert_eq!(preview.width(), before.width());
}

// ---------------------------------------------------------------------------
// Scripted sessions
// ---------------------------------------------------------------------------

#[test]
fn test_run_session_png() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_png(dir.path(), "red.png", &uniform_image(10, 10, RED));
    let output = dir.path().join("samples.json");

    let mut config = SessionConfig::new(&input);
    config.output = output.clone();
    config.sampling = SamplingConfig {
        color_space: ColorSpace::Yuv,
        strategy: AggregateStrategy::Median,
    };
    config.regions = vec![
        Region::from_coords(1, 1, 5, 5),
        Region::from_coords(2, 2, 2, 2),
        Region::from_coords(50, 50, 60, 60),
        Region::from_coords(9, 0, 0, 9),
    ];

    let result = run_session(&config).unwrap();
    assert_eq!(result.sampled.len(), 2);
    assert_eq!(
        result.skipped,
        vec![Region::from_coords(2, 2, 2, 2), Region::from_coords(50, 50, 60, 60)]
    );
    assert_eq!(result.sampled[0].color, [76, 91, 255]);
    assert_eq!(result.samples.len(), 2);

    let record = load(&output).unwrap();
    assert_eq!(record.format, "yuv");
    assert_eq!(record.channel("y"), Some(&[76, 76][..]));
    assert_eq!(record.channel("u"), Some(&[91, 91][..]));
    assert_eq!(record.channel("v"), Some(&[255, 255][..]));
}

#[test]
fn test_run_session_raw_frame() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_bytes(dir.path(), "frame.nv12", &nv12_frame(8, 4, 235, 128, 128));

    let mut config = SessionConfig::new(&input);
    config.pixel_format = PixelFormat::Nv12;
    config.size = Some(FrameSize::new(8, 4));
    config.output = dir.path().join("out.json");
    config.regions = vec![Region::from_coords(0, 0, 8, 4)];

    let result = run_session(&config).unwrap();
    assert_eq!(result.sampled[0].color, [255, 255, 255]);
}

#[test]
fn test_run_session_missing_size() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = SessionConfig::new(dir.path().join("frame.nv21"));
    config.pixel_format = PixelFormat::Nv21;
    assert!(matches!(
        run_session(&config),
        Err(ColorscopeError::MissingFrameSize(_))
    ));
}

#[test]
fn test_open_reader_missing_input() {
    let config = SessionConfig::new("/nonexistent/input.png");
    assert!(matches!(open_reader(&config), Err(ColorscopeError::Load { .. })));
}

#[derive(Default)]
struct RecordingReporter {
    stages: Mutex<Vec<SessionStage>>,
    advanced: AtomicUsize,
}

impl ProgressReporter for RecordingReporter {
    fn begin_stage(&self, stage: SessionStage, _total_items: Option<usize>) {
        self.stages.lock().unwrap().push(stage);
    }

    fn advance(&self, items_done: usize) {
        self.advanced.store(items_done, Ordering::SeqCst);
    }
}

#[test]
fn test_run_session_reports_progress() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_png(dir.path(), "red.png", &uniform_image(6, 6, RED));
    let mut config = SessionConfig::new(&input);
    config.output = dir.path().join("out.json");
    config.regions = vec![Region::from_coords(0, 0, 2, 2), Region::from_coords(3, 3, 5, 5)];

    let reporter = Arc::new(RecordingReporter::default());
    run_session_reported(&config, reporter.clone()).unwrap();

    assert_eq!(
        *reporter.stages.lock().unwrap(),
        vec![SessionStage::Loading, SessionStage::Sampling, SessionStage::Writing]
    );
    assert_eq!(reporter.advanced.load(Ordering::SeqCst), 2);
}
