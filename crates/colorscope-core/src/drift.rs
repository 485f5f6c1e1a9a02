use tracing::warn;

use crate::color::space::ColorSpace;
use crate::error::{ColorscopeError, Result};
use crate::io::samples::SampleRecord;

/// Mean per-channel drift of a capture relative to a reference, in percent
/// (100.0 = unchanged).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DriftResult {
    pub hue: f64,
    pub lightness: f64,
    pub saturation: f64,
}

impl DriftResult {
    /// `[H, L, S]`.
    pub fn as_array(&self) -> [f64; 3] {
        [self.hue, self.lightness, self.saturation]
    }
}

/// Compare two HLS sample records channel by channel.
///
/// Samples are paired by index; when the records differ in length the extra
/// samples of the longer one are ignored. A zero reference value contributes
/// a ratio of 0.
pub fn drift(reference: &SampleRecord, capture: &SampleRecord) -> Result<DriftResult> {
    let names = ColorSpace::Hls.channel_names();
    let mut result = [0.0f64; 3];

    for (slot, name) in result.iter_mut().zip(names) {
        let ref_values = hls_channel(reference, name)?;
        let cap_values = hls_channel(capture, name)?;
        if ref_values.len() != cap_values.len() {
            warn!(
                channel = name,
                reference = ref_values.len(),
                capture = cap_values.len(),
                "Sample counts differ, comparing the common prefix only"
            );
        }
        *slot = mean_ratio_percent(ref_values, cap_values)?;
    }

    Ok(DriftResult {
        hue: result[0],
        lightness: result[1],
        saturation: result[2],
    })
}

fn hls_channel<'a>(record: &'a SampleRecord, name: &str) -> Result<&'a [i64]> {
    if record.format != ColorSpace::Hls.tag() {
        return Err(ColorscopeError::Format(format!(
            "drift needs hls samples, got '{}'",
            record.format
        )));
    }
    record
        .channel(name)
        .ok_or_else(|| ColorscopeError::Format(format!("hls sample file missing channel '{name}'")))
}

fn mean_ratio_percent(reference: &[i64], capture: &[i64]) -> Result<f64> {
    let ratios: Vec<f64> = reference
        .iter()
        .zip(capture)
        .map(|(&r, &c)| {
            if r == 0 {
                0.0
            } else {
                c as f64 * 100.0 / r as f64
            }
        })
        .collect();
    if ratios.is_empty() {
        return Err(ColorscopeError::EmptySamples);
    }
    Ok(ratios.iter().sum::<f64>() / ratios.len() as f64)
}
