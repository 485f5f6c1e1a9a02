/// Minimum pixel count (h*w) to use row-level Rayon parallelism.
pub const PARALLEL_PIXEL_THRESHOLD: usize = 65_536;

/// Number of channels in every canonical image and color sample.
pub const COLOR_CHANNEL_COUNT: usize = 3;

/// Largest hue value in the 8-bit half-scale convention (degrees / 2).
pub const MAX_HUE: u8 = 179;

/// Number of distinct hue values; negative hues wrap by this amount.
pub const HUE_RANGE: i32 = 180;

/// Largest saturation value for HSV/HLS.
pub const MAX_SATURATION: u8 = 255;

/// Largest lightness value for HLS.
pub const MAX_LIGHTNESS: u8 = 255;

/// Peak value of an 8-bit channel, used as the PSNR / SSIM data range.
pub const CHANNEL_MAX_VALUE: f64 = 255.0;

/// Bits of fixed-point precision for the RGB -> YUV forward transform.
pub const YUV_SHIFT: u32 = 14;

/// ITU-R BT.601 luma weights in 14-bit fixed point (R, G, B). Sum = 1 << 14.
pub const LUMA_R_FIX: i32 = 4899;
pub const LUMA_G_FIX: i32 = 9617;
pub const LUMA_B_FIX: i32 = 1868;

/// Chroma scale factors for U = (B - Y) * 0.492 and V = (R - Y) * 0.877.
pub const CHROMA_U_FIX: i32 = 8061;
pub const CHROMA_V_FIX: i32 = 14369;

/// Bits of fixed-point precision for the YUV -> RGB inverse transform.
pub const YUV_INV_SHIFT: u32 = 20;

/// BT.601 limited-range inverse coefficients in 20-bit fixed point.
pub const BT601_CY: i32 = 1_220_542; // 1.164
pub const BT601_CUB: i32 = 2_116_026; // 2.018
pub const BT601_CUG: i32 = -409_993; // -0.391
pub const BT601_CVG: i32 = -852_492; // -0.813
pub const BT601_CVR: i32 = 1_673_527; // 1.596

/// Side length of the square SSIM window.
pub const SSIM_WINDOW: usize = 7;

/// SSIM stabilisation constants (relative to the data range).
pub const SSIM_K1: f64 = 0.01;
pub const SSIM_K2: f64 = 0.03;

/// Default JSON file written by a sampling session.
pub const DEFAULT_SAMPLE_FILE: &str = "color_data.json";
