mod common;

use colorscope_core::color::aggregate::AggregateStrategy;
use colorscope_core::color::sample_region;
use colorscope_core::color::space::{project, ColorSpace};
use colorscope_core::consts::MAX_HUE;
use colorscope_core::error::ColorscopeError;
use colorscope_core::frame::CanonicalImage;
use colorscope_core::region::{PixelRect, Region};
use ndarray::Array3;

use common::{pattern_image, uniform_image};

const RED: [u8; 3] = [255, 0, 0];

// ---------------------------------------------------------------------------
// ColorSpace
// ---------------------------------------------------------------------------

#[test]
fn test_color_space_tags_roundtrip() {
    for &space in ColorSpace::ALL {
        assert_eq!(space.tag().parse::<ColorSpace>().unwrap(), space);
    }
    assert_eq!("HLS".parse::<ColorSpace>().unwrap(), ColorSpace::Hls);
}

#[test]
fn test_color_space_unknown_tag() {
    assert!(matches!(
        "lab".parse::<ColorSpace>(),
        Err(ColorscopeError::Format(_))
    ));
}

#[test]
fn test_color_space_channel_names() {
    assert_eq!(ColorSpace::Rgb.channel_names(), ["r", "g", "b"]);
    assert_eq!(ColorSpace::Yuv.channel_names(), ["y", "u", "v"]);
    assert_eq!(ColorSpace::Hsv.channel_names(), ["h", "s", "v"]);
    assert_eq!(ColorSpace::Hls.channel_names(), ["h", "l", "s"]);
}

#[test]
fn test_convert_red() {
    assert_eq!(ColorSpace::Rgb.convert(RED), RED);
    assert_eq!(ColorSpace::Yuv.convert(RED), [76, 91, 255]);
    assert_eq!(ColorSpace::Hsv.convert(RED), [0, 255, 255]);
    assert_eq!(ColorSpace::Hls.convert(RED), [0, 128, 255]);
}

#[test]
fn test_hue_stays_in_half_scale_range() {
    let image = pattern_image(32, 32);
    for space in [ColorSpace::Hsv, ColorSpace::Hls] {
        for [h, _, _] in project(image.data(), space) {
            assert!(h <= MAX_HUE, "{space}: hue {h}");
        }
    }
}

#[test]
fn test_project_is_row_major() {
    let data = Array3::from_shape_fn((2, 3, 3), |(y, x, _)| (y * 10 + x) as u8);
    let image = CanonicalImage::new(data).unwrap();
    let pixels = project(image.data(), ColorSpace::Rgb);
    let firsts: Vec<u8> = pixels.iter().map(|p| p[0]).collect();
    assert_eq!(firsts, vec![0, 1, 2, 10, 11, 12]);
}

// ---------------------------------------------------------------------------
// Region extent
// ---------------------------------------------------------------------------

#[test]
fn test_region_corner_order_does_not_matter() {
    let a = Region::from_coords(1, 1, 5, 5);
    let b = Region::from_coords(5, 5, 1, 1);
    let c = Region::from_coords(5, 1, 1, 5);
    let expected = Some(PixelRect {
        x: 1,
        y: 1,
        width: 4,
        height: 4,
    });
    assert_eq!(a.pixel_rect(10, 10), expected);
    assert_eq!(b.pixel_rect(10, 10), expected);
    assert_eq!(c.pixel_rect(10, 10), expected);
}

#[test]
fn test_region_single_point_covers_one_pixel() {
    let rect = Region::from_coords(3, 4, 3, 4).pixel_rect(10, 10).unwrap();
    assert_eq!((rect.x, rect.y, rect.width, rect.height), (3, 4, 1, 1));
}

#[test]
fn test_region_line_widened_to_one_pixel() {
    let rect = Region::from_coords(2, 5, 8, 5).pixel_rect(10, 10).unwrap();
    assert_eq!((rect.width, rect.height), (6, 1));
}

#[test]
fn test_region_clipped_to_image() {
    let rect = Region::from_coords(-5, -5, 100, 3).pixel_rect(10, 10).unwrap();
    assert_eq!((rect.x, rect.y, rect.width, rect.height), (0, 0, 10, 3));
}

#[test]
fn test_region_outside_image() {
    assert_eq!(Region::from_coords(20, 20, 30, 30).pixel_rect(10, 10), None);
    assert_eq!(Region::from_coords(-8, 0, -2, 5).pixel_rect(10, 10), None);
}

#[test]
fn test_region_parse_and_display() {
    let region: Region = "1, 2,5,6".parse().unwrap();
    assert_eq!(region, Region::from_coords(1, 2, 5, 6));
    assert_eq!(region.to_string(), "[[1, 2], [5, 6]]");
    assert!("1,2,3".parse::<Region>().is_err());
    assert!("a,b,c,d".parse::<Region>().is_err());
}

// ---------------------------------------------------------------------------
// sample_region
// ---------------------------------------------------------------------------

#[test]
fn test_sample_red_region() {
    let image = uniform_image(10, 10, RED);
    let region = Region::from_coords(1, 1, 5, 5);
    let rgb = sample_region(&image, &region, ColorSpace::Rgb, AggregateStrategy::Average).unwrap();
    assert_eq!(rgb, [255, 0, 0]);
    let yuv = sample_region(&image, &region, ColorSpace::Yuv, AggregateStrategy::Average).unwrap();
    assert_eq!(yuv, [76, 91, 255]);
}

#[test]
fn test_sample_uniform_any_strategy() {
    let image = uniform_image(6, 6, [12, 200, 77]);
    let region = Region::from_coords(0, 0, 6, 6);
    for strategy in [AggregateStrategy::Average, AggregateStrategy::Median] {
        let color = sample_region(&image, &region, ColorSpace::Rgb, strategy).unwrap();
        assert_eq!(color, [12, 200, 77]);
    }
}

#[test]
fn test_sample_outside_image() {
    let image = uniform_image(4, 4, RED);
    let err = sample_region(
        &image,
        &Region::from_coords(10, 10, 12, 12),
        ColorSpace::Rgb,
        AggregateStrategy::Average,
    )
    .unwrap_err();
    assert!(matches!(err, ColorscopeError::EmptyRegion));
}

#[test]
fn test_sample_only_inside_region() {
    // Left half black, right half white.
    let data = Array3::from_shape_fn((4, 4, 3), |(_, x, _)| if x < 2 { 0 } else { 255 });
    let image = CanonicalImage::new(data).unwrap();
    let left = sample_region(
        &image,
        &Region::from_coords(0, 0, 2, 4),
        ColorSpace::Rgb,
        AggregateStrategy::Average,
    )
    .unwrap();
    assert_eq!(left, [0, 0, 0]);
    let all = sample_region(
        &image,
        &Region::from_coords(0, 0, 4, 4),
        ColorSpace::Rgb,
        AggregateStrategy::Average,
    )
    .unwrap();
    assert_eq!(all, [127, 127, 127]);
}
