pub mod config;
mod orchestrator;
mod reader;
mod types;

pub use orchestrator::{open_reader, run_session, run_session_reported};
pub use reader::ColorReader;
pub use types::{PointerResult, ProgressReporter, SampledColor, SessionOutput, SessionStage};
