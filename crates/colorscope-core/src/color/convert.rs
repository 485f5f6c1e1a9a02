//! Per-pixel conversions between 8-bit RGB and the other color spaces.
//!
//! Forward transforms follow the 8-bit conventions used by common vision
//! libraries: hue is stored at half scale (`0..=179`), everything else spans
//! `0..=255`. YUV uses full-range BT.601 luma with the analog U/V scale
//! factors; the inverse used for raw frames is limited-range BT.601.

use crate::consts::{
    BT601_CUB, BT601_CUG, BT601_CVG, BT601_CVR, BT601_CY, CHROMA_U_FIX, CHROMA_V_FIX, HUE_RANGE,
    LUMA_B_FIX, LUMA_G_FIX, LUMA_R_FIX, MAX_LIGHTNESS, MAX_SATURATION, YUV_INV_SHIFT, YUV_SHIFT,
};

#[inline]
fn saturate(v: i32) -> u8 {
    v.clamp(0, 255) as u8
}

/// RGB -> YUV (BT.601 luma, U = 0.492 (B - Y), V = 0.877 (R - Y), offset 128).
pub fn rgb_to_yuv([r, g, b]: [u8; 3]) -> [u8; 3] {
    let (r, g, b) = (r as i32, g as i32, b as i32);
    let half = 1 << (YUV_SHIFT - 1);
    let delta = 128 << YUV_SHIFT;

    let y = (r * LUMA_R_FIX + g * LUMA_G_FIX + b * LUMA_B_FIX + half) >> YUV_SHIFT;
    let u = ((b - y) * CHROMA_U_FIX + delta + half) >> YUV_SHIFT;
    let v = ((r - y) * CHROMA_V_FIX + delta + half) >> YUV_SHIFT;

    [saturate(y), saturate(u), saturate(v)]
}

/// RGB -> HSV with hue in `0..=179`.
pub fn rgb_to_hsv([r, g, b]: [u8; 3]) -> [u8; 3] {
    const SHIFT: u32 = 12;
    let (r, g, b) = (r as i32, g as i32, b as i32);
    let v = r.max(g).max(b);
    let vmin = r.min(g).min(b);
    let diff = v - vmin;
    let half = 1 << (SHIFT - 1);

    let s = if v == 0 {
        0
    } else {
        let sdiv = ((i32::from(MAX_SATURATION) << SHIFT) as f64 / v as f64).round() as i32;
        (diff * sdiv + half) >> SHIFT
    };

    let h = if diff == 0 {
        0
    } else {
        let sector = if v == r {
            g - b
        } else if v == g {
            b - r + 2 * diff
        } else {
            r - g + 4 * diff
        };
        let hdiv = ((HUE_RANGE << SHIFT) as f64 / (6 * diff) as f64).round() as i32;
        let h = (sector * hdiv + half) >> SHIFT;
        if h < 0 {
            h + HUE_RANGE
        } else {
            h
        }
    };

    [wrap_hue(h), saturate(s), saturate(v)]
}

/// RGB -> HLS with hue in `0..=179`.
pub fn rgb_to_hls([r, g, b]: [u8; 3]) -> [u8; 3] {
    let (r, g, b) = (r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0);
    let vmax = r.max(g).max(b);
    let vmin = r.min(g).min(b);
    let diff = vmax - vmin;
    let l = (vmax + vmin) * 0.5;

    let (mut h, mut s) = (0.0f32, 0.0f32);
    if diff > f32::EPSILON {
        s = if l < 0.5 {
            diff / (vmax + vmin)
        } else {
            diff / (2.0 - vmax - vmin)
        };
        let scale = 60.0 / diff;
        h = if vmax == r {
            (g - b) * scale
        } else if vmax == g {
            (b - r) * scale + 120.0
        } else {
            (r - g) * scale + 240.0
        };
        if h < 0.0 {
            h += 360.0;
        }
    }

    let hue = (h * 0.5).round_ties_even() as i32;
    let lightness = (l * f32::from(MAX_LIGHTNESS)).round_ties_even() as i32;
    let saturation = (s * f32::from(MAX_SATURATION)).round_ties_even() as i32;
    [wrap_hue(hue), saturate(lightness), saturate(saturation)]
}

#[inline]
fn wrap_hue(h: i32) -> u8 {
    h.rem_euclid(HUE_RANGE) as u8
}

/// Limited-range BT.601 YUV -> RGB, as used for NV21/NV12/I420 frames.
pub fn yuv_to_rgb_bt601(y: u8, u: u8, v: u8) -> [u8; 3] {
    let luma = (y as i32 - 16).max(0) * BT601_CY;
    let u = u as i32 - 128;
    let v = v as i32 - 128;
    let half = 1 << (YUV_INV_SHIFT - 1);

    let r = (luma + BT601_CVR * v + half) >> YUV_INV_SHIFT;
    let g = (luma + BT601_CVG * v + BT601_CUG * u + half) >> YUV_INV_SHIFT;
    let b = (luma + BT601_CUB * u + half) >> YUV_INV_SHIFT;

    [saturate(r), saturate(g), saturate(b)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::MAX_HUE;

    #[test]
    fn primaries_hsv() {
        assert_eq!(rgb_to_hsv([255, 0, 0]), [0, 255, 255]);
        assert_eq!(rgb_to_hsv([0, 255, 0]), [60, 255, 255]);
        assert_eq!(rgb_to_hsv([0, 0, 255]), [120, 255, 255]);
    }

    #[test]
    fn primaries_hls() {
        assert_eq!(rgb_to_hls([255, 0, 0]), [0, 128, 255]);
        assert_eq!(rgb_to_hls([0, 255, 0]), [60, 128, 255]);
        assert_eq!(rgb_to_hls([0, 0, 255]), [120, 128, 255]);
    }

    #[test]
    fn gray_has_no_hue_or_saturation() {
        assert_eq!(rgb_to_hsv([128, 128, 128]), [0, 0, 128]);
        assert_eq!(rgb_to_hls([128, 128, 128]), [0, 128, 0]);
    }

    #[test]
    fn hue_never_exceeds_max() {
        for r in (0..=255u16).step_by(15) {
            for b in (0..=255u16).step_by(15) {
                let px = [r as u8, 0, b as u8];
                assert!(rgb_to_hsv(px)[0] <= MAX_HUE);
                assert!(rgb_to_hls(px)[0] <= MAX_HUE);
            }
        }
    }

    #[test]
    fn yuv_white_and_black() {
        assert_eq!(rgb_to_yuv([255, 255, 255]), [255, 128, 128]);
        assert_eq!(rgb_to_yuv([0, 0, 0]), [0, 128, 128]);
    }

    #[test]
    fn limited_range_extremes() {
        assert_eq!(yuv_to_rgb_bt601(16, 128, 128), [0, 0, 0]);
        assert_eq!(yuv_to_rgb_bt601(235, 128, 128), [255, 255, 255]);
    }
}
