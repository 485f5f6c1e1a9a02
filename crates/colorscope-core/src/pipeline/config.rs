use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::color::aggregate::AggregateStrategy;
use crate::color::space::ColorSpace;
use crate::consts::DEFAULT_SAMPLE_FILE;
use crate::io::raw::{FrameSize, PixelFormat};
use crate::region::Region;

/// A scripted sampling session, usually loaded from TOML.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    pub input: PathBuf,
    #[serde(default)]
    pub pixel_format: PixelFormat,
    /// Required for raw pixel formats.
    #[serde(default)]
    pub size: Option<FrameSize>,
    #[serde(default = "default_output")]
    pub output: PathBuf,
    /// Regions sampled in order, each as `[[x1, y1], [x2, y2]]`.
    #[serde(default)]
    pub regions: Vec<Region>,
    #[serde(default)]
    pub sampling: SamplingConfig,
}

fn default_output() -> PathBuf {
    PathBuf::from(DEFAULT_SAMPLE_FILE)
}

impl SessionConfig {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            pixel_format: PixelFormat::default(),
            size: None,
            output: default_output(),
            regions: Vec::new(),
            sampling: SamplingConfig::default(),
        }
    }
}

/// How each region is turned into a color.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SamplingConfig {
    #[serde(default)]
    pub color_space: ColorSpace,
    #[serde(default)]
    pub strategy: AggregateStrategy,
}
