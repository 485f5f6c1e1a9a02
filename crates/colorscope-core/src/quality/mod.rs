pub mod psnr;
pub mod ssim;

use std::str::FromStr;

use ndarray::{Array3, Axis};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{ColorscopeError, Result};
use crate::io::raw::FrameSource;

/// Similarity metric family.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum QualityMetric {
    #[default]
    Ssim,
    Psnr,
}

impl std::fmt::Display for QualityMetric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ssim => write!(f, "SSIM"),
            Self::Psnr => write!(f, "PSNR"),
        }
    }
}

/// A metric applied to the whole image or to one channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum QualityMethod {
    Psnr,
    PsnrSingleChannel,
    Ssim,
    SsimSingleChannel,
}

impl QualityMethod {
    pub const ALL: &[Self] = &[
        Self::Psnr,
        Self::PsnrSingleChannel,
        Self::Ssim,
        Self::SsimSingleChannel,
    ];

    pub fn tag(&self) -> &'static str {
        match self {
            Self::Psnr => "psnr",
            Self::PsnrSingleChannel => "psnr-sc",
            Self::Ssim => "ssim",
            Self::SsimSingleChannel => "ssim-sc",
        }
    }

    /// Whole-image method, or the single-channel variant when a channel is given.
    pub fn for_metric(metric: QualityMetric, channel: Option<usize>) -> Self {
        match (metric, channel.is_some()) {
            (QualityMetric::Psnr, false) => Self::Psnr,
            (QualityMetric::Psnr, true) => Self::PsnrSingleChannel,
            (QualityMetric::Ssim, false) => Self::Ssim,
            (QualityMetric::Ssim, true) => Self::SsimSingleChannel,
        }
    }

    pub fn is_single_channel(&self) -> bool {
        matches!(self, Self::PsnrSingleChannel | Self::SsimSingleChannel)
    }
}

impl std::fmt::Display for QualityMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for QualityMethod {
    type Err = ColorscopeError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let tag = s.trim().to_ascii_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|m| m.tag() == tag)
            .ok_or_else(|| ColorscopeError::Method(s.to_string()))
    }
}

/// A reference/capture pair loaded in their native channel space, ready to
/// be scored.
#[derive(Clone, Debug)]
pub struct QualityMeasurement {
    method: QualityMethod,
    reference: Array3<u8>,
    capture: Array3<u8>,
}

impl QualityMeasurement {
    /// Load both sources through [`FrameSource::native_channels`] so that two
    /// YUV captures are compared without an RGB round trip.
    pub fn create(reference: &FrameSource, capture: &FrameSource, method: QualityMethod) -> Result<Self> {
        let reference_data = reference.native_channels()?;
        let capture_data = capture.native_channels()?;
        info!(
            reference = %reference.path().display(),
            capture = %capture.path().display(),
            method = %method,
            "Images loaded for quality measurement"
        );
        Self::from_arrays(reference_data, capture_data, method)
    }

    /// Build from already decoded `(h, w, c)` arrays.
    pub fn from_arrays(reference: Array3<u8>, capture: Array3<u8>, method: QualityMethod) -> Result<Self> {
        if reference.dim() != capture.dim() {
            return Err(ColorscopeError::Shape {
                reference: reference.dim(),
                capture: capture.dim(),
            });
        }
        Ok(Self {
            method,
            reference,
            capture,
        })
    }

    pub fn method(&self) -> QualityMethod {
        self.method
    }

    /// Score the pair. Single-channel methods need `Some(channel)`; whole-image
    /// methods need `None`.
    pub fn process(&self, channel: Option<usize>) -> Result<f64> {
        let score = match (self.method, channel) {
            (QualityMethod::Psnr, None) => psnr::psnr(self.reference.view(), self.capture.view()),
            (QualityMethod::Ssim, None) => ssim::ssim(self.reference.view(), self.capture.view())?,
            (QualityMethod::PsnrSingleChannel, Some(ch)) => {
                self.check_channel(ch)?;
                psnr::psnr_channel(
                    self.reference.index_axis(Axis(2), ch),
                    self.capture.index_axis(Axis(2), ch),
                )
            }
            (QualityMethod::SsimSingleChannel, Some(ch)) => {
                self.check_channel(ch)?;
                ssim::ssim_channel(
                    self.reference.index_axis(Axis(2), ch),
                    self.capture.index_axis(Axis(2), ch),
                )?
            }
            (method, Some(ch)) => {
                return Err(ColorscopeError::Method(format!(
                    "{method} measures the whole image, got channel {ch}"
                )))
            }
            (method, None) => {
                return Err(ColorscopeError::Method(format!(
                    "{method} requires a channel index"
                )))
            }
        };
        debug!(method = %self.method, ?channel, score, "Quality measured");
        Ok(score)
    }

    fn check_channel(&self, index: usize) -> Result<()> {
        let channels = self.reference.len_of(Axis(2));
        if index >= channels {
            return Err(ColorscopeError::ChannelOutOfRange { index, channels });
        }
        Ok(())
    }
}
