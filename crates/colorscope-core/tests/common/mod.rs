#![allow(dead_code)]

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use colorscope_core::frame::CanonicalImage;
use colorscope_core::io::image_io::save_png;
use colorscope_core::io::samples::SampleRecord;
use ndarray::Array3;

/// A `width` x `height` image filled with one RGB color.
pub fn uniform_image(width: usize, height: usize, rgb: [u8; 3]) -> CanonicalImage {
    CanonicalImage::from_elem(width, height, rgb).unwrap()
}

/// Deterministic non-uniform RGB pattern, useful for quality metrics.
pub fn pattern_array(width: usize, height: usize) -> Array3<u8> {
    Array3::from_shape_fn((height, width, 3), |(y, x, c)| {
        ((x * 7 + y * 13 + c * 29) % 256) as u8
    })
}

pub fn pattern_image(width: usize, height: usize) -> CanonicalImage {
    CanonicalImage::new(pattern_array(width, height)).unwrap()
}

/// A 4:2:0 frame with constant luma and chroma, NV21 layout (V before U).
pub fn nv21_frame(width: usize, height: usize, y: u8, u: u8, v: u8) -> Vec<u8> {
    let mut buf = vec![y; width * height];
    for _ in 0..(width / 2) * (height / 2) {
        buf.push(v);
        buf.push(u);
    }
    buf
}

/// Same as [`nv21_frame`] with the NV12 chroma order (U before V).
pub fn nv12_frame(width: usize, height: usize, y: u8, u: u8, v: u8) -> Vec<u8> {
    let mut buf = vec![y; width * height];
    for _ in 0..(width / 2) * (height / 2) {
        buf.push(u);
        buf.push(v);
    }
    buf
}

/// Planar 4:2:0: full Y plane, then the U plane, then the V plane.
pub fn i420_frame(width: usize, height: usize, y: u8, u: u8, v: u8) -> Vec<u8> {
    let chroma = (width / 2) * (height / 2);
    let mut buf = vec![y; width * height];
    buf.extend(std::iter::repeat(u).take(chroma));
    buf.extend(std::iter::repeat(v).take(chroma));
    buf
}

pub fn write_bytes(dir: &Path, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, bytes).unwrap();
    path
}

pub fn write_png(dir: &Path, name: &str, image: &CanonicalImage) -> PathBuf {
    let path = dir.join(name);
    save_png(image, &path).unwrap();
    path
}

/// An HLS sample record built from per-channel values.
pub fn hls_record(h: &[i64], l: &[i64], s: &[i64]) -> SampleRecord {
    let mut channels = BTreeMap::new();
    channels.insert("h".to_string(), h.to_vec());
    channels.insert("l".to_string(), l.to_vec());
    channels.insert("s".to_string(), s.to_vec());
    SampleRecord {
        format: "hls".to_string(),
        channels,
    }
}
