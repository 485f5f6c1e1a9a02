use ndarray::{Array2, ArrayView2, ArrayView3, Axis};
use rayon::prelude::*;

use crate::consts::{CHANNEL_MAX_VALUE, PARALLEL_PIXEL_THRESHOLD, SSIM_K1, SSIM_K2, SSIM_WINDOW};
use crate::error::{ColorscopeError, Result};

/// Summed-area tables of the per-pixel moments needed by SSIM.
struct Moments {
    x: Array2<f64>,
    y: Array2<f64>,
    xx: Array2<f64>,
    yy: Array2<f64>,
    xy: Array2<f64>,
}

impl Moments {
    fn new(a: ArrayView2<'_, u8>, b: ArrayView2<'_, u8>) -> Self {
        let (h, w) = a.dim();
        let mut m = Self {
            x: Array2::zeros((h + 1, w + 1)),
            y: Array2::zeros((h + 1, w + 1)),
            xx: Array2::zeros((h + 1, w + 1)),
            yy: Array2::zeros((h + 1, w + 1)),
            xy: Array2::zeros((h + 1, w + 1)),
        };
        for row in 0..h {
            for col in 0..w {
                let x = a[[row, col]] as f64;
                let y = b[[row, col]] as f64;
                for (table, v) in [
                    (&mut m.x, x),
                    (&mut m.y, y),
                    (&mut m.xx, x * x),
                    (&mut m.yy, y * y),
                    (&mut m.xy, x * y),
                ] {
                    table[[row + 1, col + 1]] =
                        v + table[[row, col + 1]] + table[[row + 1, col]] - table[[row, col]];
                }
            }
        }
        m
    }
}

/// Sum of an `n` x `n` window with top-left corner `(row, col)`.
#[inline]
fn window_sum(table: &Array2<f64>, row: usize, col: usize, n: usize) -> f64 {
    table[[row + n, col + n]] - table[[row, col + n]] - table[[row + n, col]] + table[[row, col]]
}

/// SSIM of one window from its raw sums.
#[inline]
fn window_ssim(sx: f64, sy: f64, sxx: f64, syy: f64, sxy: f64) -> f64 {
    let np = (SSIM_WINDOW * SSIM_WINDOW) as f64;
    // Sample covariance, N / (N - 1).
    let cov_norm = np / (np - 1.0);
    let c1 = (SSIM_K1 * CHANNEL_MAX_VALUE).powi(2);
    let c2 = (SSIM_K2 * CHANNEL_MAX_VALUE).powi(2);

    let ux = sx / np;
    let uy = sy / np;
    let vx = cov_norm * (sxx / np - ux * ux);
    let vy = cov_norm * (syy / np - uy * uy);
    let vxy = cov_norm * (sxy / np - ux * uy);

    let numerator = (2.0 * ux * uy + c1) * (2.0 * vxy + c2);
    let denominator = (ux * ux + uy * uy + c1) * (vx + vy + c2);
    numerator / denominator
}

/// Mean structural similarity of two planes.
///
/// Uses a 7x7 uniform window, K1 = 0.01, K2 = 0.03 and a data range of 255.
/// Only windows lying fully inside the image contribute to the mean.
pub fn ssim_channel(reference: ArrayView2<'_, u8>, capture: ArrayView2<'_, u8>) -> Result<f64> {
    let (h, w) = reference.dim();
    if capture.dim() != (h, w) {
        let (ch, cw) = capture.dim();
        return Err(ColorscopeError::Shape {
            reference: (h, w, 1),
            capture: (ch, cw, 1),
        });
    }
    let n = SSIM_WINDOW;
    if h < n || w < n {
        return Err(ColorscopeError::ImageTooSmall {
            width: w,
            height: h,
            window: n,
        });
    }

    let m = Moments::new(reference, capture);
    let rows = h - n + 1;
    let cols = w - n + 1;

    let row_sum = |row: usize| -> f64 {
        (0..cols)
            .map(|col| {
                window_ssim(
                    window_sum(&m.x, row, col, n),
                    window_sum(&m.y, row, col, n),
                    window_sum(&m.xx, row, col, n),
                    window_sum(&m.yy, row, col, n),
                    window_sum(&m.xy, row, col, n),
                )
            })
            .sum()
    };

    let total: f64 = if h * w >= PARALLEL_PIXEL_THRESHOLD {
        (0..rows).into_par_iter().map(row_sum).sum()
    } else {
        (0..rows).map(row_sum).sum()
    };

    Ok(total / (rows * cols) as f64)
}

/// Multichannel SSIM: the mean of the per-channel SSIM values.
pub fn ssim(reference: ArrayView3<'_, u8>, capture: ArrayView3<'_, u8>) -> Result<f64> {
    if reference.dim() != capture.dim() {
        return Err(ColorscopeError::Shape {
            reference: reference.dim(),
            capture: capture.dim(),
        });
    }
    let channels = reference.len_of(Axis(2));
    let mut total = 0.0;
    for ch in 0..channels {
        total += ssim_channel(
            reference.index_axis(Axis(2), ch),
            capture.index_axis(Axis(2), ch),
        )?;
    }
    Ok(total / channels as f64)
}
