use image::{Rgb, RgbImage};
use ndarray::{s, Array3, ArrayView3};

use crate::consts::COLOR_CHANNEL_COUNT;
use crate::error::{ColorscopeError, Result};
use crate::region::{PixelRect, Region};

/// A decoded 8-bit image in RGB order.
///
/// Pixel data is row-major, shape = (height, width, 3). Never mutated after
/// construction; overlays and conversions produce new images.
#[derive(Clone, Debug, PartialEq)]
pub struct CanonicalImage {
    data: Array3<u8>,
}

impl CanonicalImage {
    /// Wrap a `(height, width, 3)` array.
    pub fn new(data: Array3<u8>) -> Result<Self> {
        let (h, w, c) = data.dim();
        if h == 0 || w == 0 || c != COLOR_CHANNEL_COUNT {
            return Err(ColorscopeError::InvalidDimensions {
                width: w as u32,
                height: h as u32,
            });
        }
        Ok(Self { data })
    }

    /// A uniformly colored image. Zero width or height is rejected like in
    /// [`CanonicalImage::new`].
    pub fn from_elem(width: usize, height: usize, rgb: [u8; 3]) -> Result<Self> {
        Self::new(Array3::from_shape_fn(
            (height, width, COLOR_CHANNEL_COUNT),
            |(_, _, c)| rgb[c],
        ))
    }

    pub fn from_rgb_image(img: &RgbImage) -> Self {
        let (w, h) = img.dimensions();
        let data = Array3::from_shape_fn((h as usize, w as usize, COLOR_CHANNEL_COUNT), |(r, c, ch)| {
            img.get_pixel(c as u32, r as u32).0[ch]
        });
        Self { data }
    }

    pub fn to_rgb_image(&self) -> RgbImage {
        RgbImage::from_fn(self.width() as u32, self.height() as u32, |x, y| {
            Rgb(self.pixel(x as usize, y as usize))
        })
    }

    pub fn width(&self) -> usize {
        self.data.dim().1
    }

    pub fn height(&self) -> usize {
        self.data.dim().0
    }

    pub fn data(&self) -> ArrayView3<'_, u8> {
        self.data.view()
    }

    /// RGB value at column `x`, row `y`. Panics when out of bounds.
    pub fn pixel(&self, x: usize, y: usize) -> [u8; 3] {
        [
            self.data[[y, x, 0]],
            self.data[[y, x, 1]],
            self.data[[y, x, 2]],
        ]
    }

    /// The pixel-aligned rectangle `region` covers in this image.
    pub fn pixel_rect(&self, region: &Region) -> Result<PixelRect> {
        region
            .pixel_rect(self.width(), self.height())
            .ok_or(ColorscopeError::EmptyRegion)
    }

    /// Borrowed view of the pixels inside `region`.
    pub fn region(&self, region: &Region) -> Result<ArrayView3<'_, u8>> {
        let rect = self.pixel_rect(region)?;
        Ok(self.data.slice(s![
            rect.y..rect.y + rect.height,
            rect.x..rect.x + rect.width,
            ..
        ]))
    }
}
