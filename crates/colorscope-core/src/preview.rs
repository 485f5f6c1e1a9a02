use crate::error::Result;
use crate::frame::CanonicalImage;
use crate::region::Region;

/// Outline color used for selections (RGB).
pub const SELECTION_COLOR: [u8; 3] = [255, 0, 0];

/// Copy of `image` with a 1-pixel outline around `region`.
///
/// The source image is left untouched, so repeated previews during a drag
/// always start from the original pixels.
pub fn draw_region(image: &CanonicalImage, region: &Region, color: [u8; 3]) -> Result<CanonicalImage> {
    draw_regions(image, std::slice::from_ref(region), color)
}

/// Copy of `image` with every region in `regions` outlined.
pub fn draw_regions(image: &CanonicalImage, regions: &[Region], color: [u8; 3]) -> Result<CanonicalImage> {
    let mut data = image.data().to_owned();
    for region in regions {
        let rect = image.pixel_rect(region)?;
        let (x0, y0) = (rect.x, rect.y);
        let (x1, y1) = (rect.x + rect.width - 1, rect.y + rect.height - 1);

        let mut put = |x: usize, y: usize| {
            for (ch, &v) in color.iter().enumerate() {
                data[[y, x, ch]] = v;
            }
        };
        for x in x0..=x1 {
            put(x, y0);
            put(x, y1);
        }
        for y in y0..=y1 {
            put(x0, y);
            put(x1, y);
        }
    }
    CanonicalImage::new(data)
}
