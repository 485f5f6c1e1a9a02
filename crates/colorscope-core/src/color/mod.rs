pub mod aggregate;
pub mod convert;
pub mod space;

use crate::error::Result;
use crate::frame::CanonicalImage;
use crate::region::Region;

use aggregate::AggregateStrategy;
use space::ColorSpace;

/// Project the pixels of `region` into `space` and reduce them to one color.
pub fn sample_region(
    image: &CanonicalImage,
    region: &Region,
    space: ColorSpace,
    strategy: AggregateStrategy,
) -> Result<[u8; 3]> {
    let pixels = space::project(image.region(region)?, space);
    aggregate::reduce(&pixels, strategy)
}
