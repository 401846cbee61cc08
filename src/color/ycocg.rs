//! YCoCg and YCoCg-R
//!
//! Both transforms are exactly reversible and never clamp, their outputs
//! are defined to already be in range for the round trip. Chroma can be
//! negative, so feeding them through an 8 bit frame conversion will
//! usually report an overflow; they are primarily per-pixel transforms.

use super::ConversionSpec;

/// Forward YCoCg in its exact dyadic form
///
/// All coefficients are powers of two, so the result is exact in floating
/// point and [`yuv2rgb_ycocg`] reconstructs the input without error.
pub(crate) fn rgb2yuv_ycocg(_spec: &ConversionSpec, r: i32, g: i32, b: i32) -> (f64, f64, f64) {
    let (r, g, b) = (r as f64, g as f64, b as f64);
    let y = 0.25 * r + 0.5 * g + 0.25 * b;
    let co = 0.5 * r - 0.5 * b;
    let cg = -0.25 * r + 0.5 * g - 0.25 * b;
    (y, co, cg)
}

pub(crate) fn yuv2rgb_ycocg(_spec: &ConversionSpec, y: i32, co: i32, cg: i32) -> (f64, f64, f64) {
    ycocg_inverse(y as f64, co as f64, cg as f64)
}

fn ycocg_inverse(y: f64, co: f64, cg: f64) -> (f64, f64, f64) {
    (y + co - cg, y + cg, y - co - cg)
}

/// Forward YCoCg-R, the lossless lifting variant
pub(crate) fn rgb2yuv_ycocgr(_spec: &ConversionSpec, r: i32, g: i32, b: i32) -> (f64, f64, f64) {
    let co = r - b;
    let tmp = b + (co >> 1);
    let cg = g - tmp;
    let y = tmp + (cg >> 1);
    (y as f64, co as f64, cg as f64)
}

pub(crate) fn yuv2rgb_ycocgr(_spec: &ConversionSpec, y: i32, co: i32, cg: i32) -> (f64, f64, f64) {
    let tmp = y - (cg >> 1);
    let g = cg + tmp;
    let b = tmp - (co >> 1);
    let r = b + co;
    (r as f64, g as f64, b as f64)
}
