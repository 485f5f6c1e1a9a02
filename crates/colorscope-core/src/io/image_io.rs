use std::path::Path;

use image::ImageFormat;

use crate::error::{ColorscopeError, Result};
use crate::frame::CanonicalImage;

/// Save an image as 8-bit RGB PNG.
pub fn save_png(image: &CanonicalImage, path: &Path) -> Result<()> {
    image
        .to_rgb_image()
        .save_with_format(path, ImageFormat::Png)?;
    Ok(())
}

/// Save an image, choosing the encoder from the file extension.
pub fn save_image(image: &CanonicalImage, path: &Path) -> Result<()> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("png") | None => save_png(image, path),
        Some(_) => {
            image.to_rgb_image().save(path)?;
            Ok(())
        }
    }
}

/// Load an encoded image file (PNG, JPEG, BMP, ...) as RGB.
pub fn load_image(path: &Path) -> Result<CanonicalImage> {
    let img = image::open(path).map_err(|source| ColorscopeError::Load {
        name: path.display().to_string(),
        source,
    })?;
    Ok(CanonicalImage::from_rgb_image(&img.to_rgb8()))
}
