use ndarray::{ArrayView, ArrayView2, ArrayView3, Dimension, Zip};

use crate::consts::CHANNEL_MAX_VALUE;

/// Mean squared error between two equally shaped 8-bit arrays.
///
/// Panics if the shapes differ.
pub fn mean_squared_error<D: Dimension>(a: ArrayView<'_, u8, D>, b: ArrayView<'_, u8, D>) -> f64 {
    let count = a.len();
    if count == 0 {
        return 0.0;
    }
    let sum = Zip::from(&a).and(&b).fold(0.0f64, |acc, &x, &y| {
        let d = x as f64 - y as f64;
        acc + d * d
    });
    sum / count as f64
}

/// `10 * log10(255^2 / mse)`; `+inf` for identical inputs.
pub fn psnr_from_mse(mse: f64) -> f64 {
    if mse == 0.0 {
        return f64::INFINITY;
    }
    10.0 * (CHANNEL_MAX_VALUE * CHANNEL_MAX_VALUE / mse).log10()
}

/// PSNR over every channel and pixel of two `(h, w, c)` images.
pub fn psnr(reference: ArrayView3<'_, u8>, capture: ArrayView3<'_, u8>) -> f64 {
    psnr_from_mse(mean_squared_error(reference, capture))
}

/// PSNR of a single plane.
pub fn psnr_channel(reference: ArrayView2<'_, u8>, capture: ArrayView2<'_, u8>) -> f64 {
    psnr_from_mse(mean_squared_error(reference, capture))
}
