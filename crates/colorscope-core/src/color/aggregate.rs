use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts::COLOR_CHANNEL_COUNT;
use crate::error::{ColorscopeError, Result};

/// Statistic used to collapse a region into one color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AggregateStrategy {
    /// Per-channel arithmetic mean, truncated.
    #[default]
    #[serde(alias = "avg")]
    Average,
    /// Per-channel median, truncated.
    #[serde(alias = "med")]
    Median,
}

impl std::fmt::Display for AggregateStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Average => write!(f, "Average"),
            Self::Median => write!(f, "Median"),
        }
    }
}

impl FromStr for AggregateStrategy {
    type Err = ColorscopeError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "avg" | "average" => Ok(Self::Average),
            "med" | "median" => Ok(Self::Median),
            _ => Err(ColorscopeError::Format(format!("filter '{s}'"))),
        }
    }
}

/// Reduce projected pixels to a single color, each channel independently.
pub fn reduce(pixels: &[[u8; 3]], strategy: AggregateStrategy) -> Result<[u8; 3]> {
    if pixels.is_empty() {
        return Err(ColorscopeError::EmptyRegion);
    }

    let mut out = [0u8; COLOR_CHANNEL_COUNT];
    for (ch, slot) in out.iter_mut().enumerate() {
        let mut values: Vec<u8> = pixels.iter().map(|p| p[ch]).collect();
        *slot = match strategy {
            AggregateStrategy::Average => average(&values),
            AggregateStrategy::Median => median(&mut values),
        };
    }
    Ok(out)
}

fn average(values: &[u8]) -> u8 {
    let sum: u64 = values.iter().map(|&v| v as u64).sum();
    (sum / values.len() as u64) as u8
}

fn median(values: &mut [u8]) -> u8 {
    values.sort_unstable();
    let n = values.len();
    if n % 2 == 1 {
        values[n / 2]
    } else {
        // Mean of the two middle values, truncated.
        ((values[n / 2 - 1] as u16 + values[n / 2] as u16) / 2) as u8
    }
}
