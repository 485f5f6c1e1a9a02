use std::fs::File;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use memmap2::Mmap;
use ndarray::{Array3, ArrayView3};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::color::convert::yuv_to_rgb_bt601;
use crate::consts::{COLOR_CHANNEL_COUNT, PARALLEL_PIXEL_THRESHOLD};
use crate::error::{ColorscopeError, Result};
use crate::frame::CanonicalImage;
use crate::io::image_io::load_image;

/// Pixel layout of an input resource.
///
/// Serialized as its tag and parsed through [`FromStr`], so config files
/// accept the same spellings as the command line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum PixelFormat {
    /// Encoded image file (PNG, JPEG, BMP, ...), already 3-channel.
    #[default]
    Native,
    /// Y plane followed by interleaved V/U at quarter resolution.
    Nv21,
    /// Y plane followed by interleaved U/V at quarter resolution.
    Nv12,
    /// Y plane, then the U plane, then the V plane.
    I420,
}

/// How the chroma half of a 4:2:0 frame is laid out.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ChromaLayout {
    InterleavedVu,
    InterleavedUv,
    Planar,
}

impl PixelFormat {
    pub const ALL: &[Self] = &[Self::Native, Self::Nv21, Self::Nv12, Self::I420];

    pub fn tag(&self) -> &'static str {
        match self {
            Self::Native => "native",
            Self::Nv21 => "nv21",
            Self::Nv12 => "nv12",
            Self::I420 => "i420",
        }
    }

    /// Raw formats need an explicit frame size.
    pub fn is_raw(&self) -> bool {
        self.chroma_layout().is_some()
    }

    fn chroma_layout(&self) -> Option<ChromaLayout> {
        match self {
            Self::Native => None,
            Self::Nv21 => Some(ChromaLayout::InterleavedVu),
            Self::Nv12 => Some(ChromaLayout::InterleavedUv),
            Self::I420 => Some(ChromaLayout::Planar),
        }
    }
}

impl std::fmt::Display for PixelFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Native => write!(f, "Native"),
            Self::Nv21 => write!(f, "NV21"),
            Self::Nv12 => write!(f, "NV12"),
            Self::I420 => write!(f, "I420"),
        }
    }
}

/// An empty tag selects the native format.
impl FromStr for PixelFormat {
    type Err = ColorscopeError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let tag = s.trim().to_ascii_lowercase();
        if tag.is_empty() {
            return Ok(Self::Native);
        }
        Self::ALL
            .iter()
            .copied()
            .find(|f| f.tag() == tag)
            .ok_or_else(|| ColorscopeError::Format(format!("pixel format '{s}'")))
    }
}

impl TryFrom<String> for PixelFormat {
    type Error = ColorscopeError;

    fn try_from(s: String) -> std::result::Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<PixelFormat> for String {
    fn from(format: PixelFormat) -> Self {
        format.tag().to_string()
    }
}

/// Frame dimensions of a raw buffer, written as `WxH`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FrameSize {
    pub width: u32,
    pub height: u32,
}

impl FrameSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Bytes in one 4:2:0 frame: full luma plus two quarter chroma planes.
    pub fn raw_frame_len(&self) -> usize {
        self.width as usize * self.height as usize * 3 / 2
    }
}

impl std::fmt::Display for FrameSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl FromStr for FrameSize {
    type Err = ColorscopeError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let invalid = || ColorscopeError::Format(format!("frame size '{s}' (expected WxH)"));
        let (w, h) = s
            .trim()
            .split_once(['x', 'X'])
            .ok_or_else(invalid)?;
        let width = w.trim().parse().map_err(|_| invalid())?;
        let height = h.trim().parse().map_err(|_| invalid())?;
        Ok(Self { width, height })
    }
}

impl TryFrom<String> for FrameSize {
    type Error = ColorscopeError;

    fn try_from(s: String) -> std::result::Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<FrameSize> for String {
    fn from(size: FrameSize) -> Self {
        size.to_string()
    }
}

/// Result of decoding one frame.
#[derive(Clone, Debug)]
pub struct DecodedFrame {
    rendered: CanonicalImage,
    native: Array3<u8>,
}

impl DecodedFrame {
    /// RGB rendering, used for display and color sampling.
    pub fn rendered(&self) -> &CanonicalImage {
        &self.rendered
    }

    /// Channels in the space the data was physically stored in: Y/U/V for
    /// raw 4:2:0 frames, RGB for native images.
    pub fn native_channels(&self) -> ArrayView3<'_, u8> {
        self.native.view()
    }

    pub fn into_parts(self) -> (CanonicalImage, Array3<u8>) {
        (self.rendered, self.native)
    }
}

/// Decode a buffer in `format`. Raw formats require `size`; native buffers
/// carry their own dimensions.
pub fn decode(bytes: &[u8], format: PixelFormat, size: Option<FrameSize>) -> Result<DecodedFrame> {
    match format.chroma_layout() {
        None => {
            let img = image::load_from_memory(bytes).map_err(|source| ColorscopeError::Load {
                name: "<buffer>".into(),
                source,
            })?;
            Ok(native_frame(CanonicalImage::from_rgb_image(&img.to_rgb8())))
        }
        Some(layout) => {
            let size =
                size.ok_or_else(|| ColorscopeError::MissingFrameSize(format.to_string()))?;
            decode_yuv420(bytes, size, layout)
        }
    }
}

fn native_frame(rendered: CanonicalImage) -> DecodedFrame {
    let native = rendered.data().to_owned();
    DecodedFrame { rendered, native }
}

fn decode_yuv420(bytes: &[u8], size: FrameSize, layout: ChromaLayout) -> Result<DecodedFrame> {
    let (w, h) = (size.width as usize, size.height as usize);
    if w == 0 || h == 0 || w % 2 != 0 || h % 2 != 0 {
        return Err(ColorscopeError::InvalidDimensions {
            width: size.width,
            height: size.height,
        });
    }

    let frame_len = size.raw_frame_len();
    if bytes.len() < frame_len {
        return Err(ColorscopeError::Size {
            expected: frame_len,
            actual: bytes.len(),
        });
    }

    let (luma, chroma) = bytes[..frame_len].split_at(w * h);
    let chroma_w = w / 2;
    let plane_len = chroma_w * (h / 2);

    // Nearest-sample 4:2:0 upsampling: pixel (row, col) uses chroma (row/2, col/2).
    let decode_row = |row: usize| -> Vec<[u8; 3]> {
        let chroma_row = row / 2;
        (0..w)
            .map(|col| {
                let ci = chroma_row * chroma_w + col / 2;
                let (u, v) = match layout {
                    ChromaLayout::InterleavedVu => (chroma[ci * 2 + 1], chroma[ci * 2]),
                    ChromaLayout::InterleavedUv => (chroma[ci * 2], chroma[ci * 2 + 1]),
                    ChromaLayout::Planar => (chroma[ci], chroma[plane_len + ci]),
                };
                [luma[row * w + col], u, v]
            })
            .collect()
    };

    let rows: Vec<Vec<[u8; 3]>> = if h * w >= PARALLEL_PIXEL_THRESHOLD {
        (0..h).into_par_iter().map(decode_row).collect()
    } else {
        (0..h).map(decode_row).collect()
    };

    let mut native = Array3::<u8>::zeros((h, w, COLOR_CHANNEL_COUNT));
    let mut rgb = Array3::<u8>::zeros((h, w, COLOR_CHANNEL_COUNT));
    for (row, pixels) in rows.into_iter().enumerate() {
        for (col, [y, u, v]) in pixels.into_iter().enumerate() {
            let [r, g, b] = yuv_to_rgb_bt601(y, u, v);
            native[[row, col, 0]] = y;
            native[[row, col, 1]] = u;
            native[[row, col, 2]] = v;
            rgb[[row, col, 0]] = r;
            rgb[[row, col, 1]] = g;
            rgb[[row, col, 2]] = b;
        }
    }

    debug!(width = w, height = h, layout = ?layout, "Decoded 4:2:0 frame");
    Ok(DecodedFrame {
        rendered: CanonicalImage::new(rgb)?,
        native,
    })
}

/// A file-backed image resource.
///
/// Opening only records the path and format; the data is read on each call
/// to [`FrameSource::read`], so a size that does not match the file surfaces
/// as a [`ColorscopeError::Size`] at read time.
#[derive(Clone, Debug)]
pub struct FrameSource {
    path: PathBuf,
    format: PixelFormat,
    size: Option<FrameSize>,
}

impl FrameSource {
    pub fn open(path: impl Into<PathBuf>, format: PixelFormat, size: Option<FrameSize>) -> Result<Self> {
        if format.is_raw() && size.is_none() {
            return Err(ColorscopeError::MissingFrameSize(format.to_string()));
        }
        Ok(Self {
            path: path.into(),
            format,
            size,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> PixelFormat {
        self.format
    }

    pub fn size(&self) -> Option<FrameSize> {
        self.size
    }

    /// Read and decode the resource.
    pub fn read(&self) -> Result<DecodedFrame> {
        if !self.format.is_raw() {
            let rendered = load_image(&self.path)?;
            debug!(path = %self.path.display(), "Loaded encoded image");
            return Ok(native_frame(rendered));
        }

        let file = File::open(&self.path)
            .map_err(|e| self.load_error(image::ImageError::IoError(e)))?;
        let len = file
            .metadata()
            .map_err(|e| self.load_error(image::ImageError::IoError(e)))?
            .len();
        if len == 0 {
            return decode(&[], self.format, self.size);
        }
        let mmap = unsafe { Mmap::map(&file)? };
        debug!(path = %self.path.display(), bytes = mmap.len(), format = %self.format, "Mapped raw frame");
        decode(&mmap, self.format, self.size)
    }

    /// RGB rendering of the resource.
    pub fn rendered(&self) -> Result<CanonicalImage> {
        Ok(self.read()?.into_parts().0)
    }

    /// Channels in the physically stored space (see [`DecodedFrame::native_channels`]).
    pub fn native_channels(&self) -> Result<Array3<u8>> {
        Ok(self.read()?.into_parts().1)
    }

    fn load_error(&self, source: image::ImageError) -> ColorscopeError {
        ColorscopeError::Load {
            name: self.path.display().to_string(),
            source,
        }
    }
}
