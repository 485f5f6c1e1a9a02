use std::str::FromStr;

use ndarray::ArrayView3;
use serde::{Deserialize, Serialize};

use crate::color::convert::{rgb_to_hls, rgb_to_hsv, rgb_to_yuv};
use crate::error::ColorscopeError;

/// Color space a sample is reported in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorSpace {
    #[default]
    Rgb,
    Yuv,
    Hsv,
    Hls,
}

impl ColorSpace {
    pub const ALL: &[Self] = &[Self::Rgb, Self::Yuv, Self::Hsv, Self::Hls];

    /// Lowercase tag written to sample files.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Rgb => "rgb",
            Self::Yuv => "yuv",
            Self::Hsv => "hsv",
            Self::Hls => "hls",
        }
    }

    /// Channel names in storage order; used as keys in sample files.
    pub fn channel_names(&self) -> [&'static str; 3] {
        match self {
            Self::Rgb => ["r", "g", "b"],
            Self::Yuv => ["y", "u", "v"],
            Self::Hsv => ["h", "s", "v"],
            Self::Hls => ["h", "l", "s"],
        }
    }

    /// Convert one RGB pixel into this space.
    pub fn convert(&self, rgb: [u8; 3]) -> [u8; 3] {
        match self {
            Self::Rgb => rgb,
            Self::Yuv => rgb_to_yuv(rgb),
            Self::Hsv => rgb_to_hsv(rgb),
            Self::Hls => rgb_to_hls(rgb),
        }
    }
}

impl std::fmt::Display for ColorSpace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rgb => write!(f, "RGB"),
            Self::Yuv => write!(f, "YUV"),
            Self::Hsv => write!(f, "HSV"),
            Self::Hls => write!(f, "HLS"),
        }
    }
}

impl FromStr for ColorSpace {
    type Err = ColorscopeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim().to_ascii_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|space| space.tag() == tag)
            .ok_or_else(|| ColorscopeError::Format(format!("color space '{s}'")))
    }
}

/// Map every pixel of an RGB region into `space`, row-major.
pub fn project(region: ArrayView3<'_, u8>, space: ColorSpace) -> Vec<[u8; 3]> {
    let (h, w, _) = region.dim();
    let mut out = Vec::with_capacity(h * w);
    for row in 0..h {
        for col in 0..w {
            let rgb = [
                region[[row, col, 0]],
                region[[row, col, 1]],
                region[[row, col, 2]],
            ];
            out.push(space.convert(rgb));
        }
    }
    out
}
