//! The classic fixed-matrix transforms
//!
//! Coefficient sets follow Keith Jack, "Video Demystified", plus the
//! unscaled BT.601/BT.709 matrices. The `analog` variants work on a 1/256
//! scale and requantize their outputs to integers, the `digital` variants
//! rescale full range RGB into the 16-235 studio range around the matrix,
//! and the `computer` variants fold that scaling into the coefficients.

use super::ConversionSpec;

/// Truncate toward zero and clamp into the 8 bit sample range
pub(crate) fn normalize(v: f64) -> f64 {
    v.trunc().clamp(0.0, 255.0)
}

/// Full range (0-255) to studio range (16-235)
fn fr2lr(v: f64) -> f64 {
    (v * 219.0 / 255.0 + 16.0).trunc()
}

/// Studio range (16-235) back to full range (0-255)
///
/// Values outside the studio range are pinned to its bounds without
/// rescaling.
fn lr2fr(v: f64) -> f64 {
    if v < 16.0 {
        16.0
    } else if v > 235.0 {
        235.0
    } else {
        ((v - 16.0) * 255.0 / 219.0).trunc()
    }
}

pub(crate) fn rgb2yuv_yiq(_spec: &ConversionSpec, r: i32, g: i32, b: i32) -> (f64, f64, f64) {
    let (r, g, b) = (r as f64, g as f64, b as f64);
    let y = 0.299 * r + 0.587 * g + 0.114 * b;
    let i = 0.596 * r - 0.275 * g - 0.321 * b;
    let q = 0.212 * r - 0.523 * g + 0.311 * b;
    (y, i, q)
}

pub(crate) fn yuv2rgb_yiq(_spec: &ConversionSpec, y: i32, i: i32, q: i32) -> (f64, f64, f64) {
    let (y, i, q) = (y as f64, i as f64, q as f64);
    let r = y + 0.956 * i + 0.621 * q;
    let g = y - 0.272 * i - 0.647 * q;
    let b = y - 1.107 * i + 1.704 * q;
    (r, g, b)
}

pub(crate) fn rgb2yuv_sdtv_basic(_spec: &ConversionSpec, r: i32, g: i32, b: i32) -> (f64, f64, f64) {
    let (r, g, b) = (r as f64, g as f64, b as f64);
    let y = 0.299 * r + 0.587 * g + 0.114 * b;
    let u = -0.147 * r - 0.289 * g + 0.436 * b;
    let v = 0.615 * r - 0.515 * g - 0.100 * b;
    (normalize(y), normalize(u), normalize(v))
}

// Does not invert rgb2yuv_sdtv_basic, the chroma inputs are used
// without a 128 offset.
pub(crate) fn yuv2rgb_sdtv_basic(_spec: &ConversionSpec, y: i32, u: i32, v: i32) -> (f64, f64, f64) {
    let (y, u, v) = (y as f64, u as f64, v as f64);
    let r = y + 1.140 * v;
    let g = y - 0.395 * u - 0.581 * v;
    let b = y + 2.032 * u;
    (normalize(r), normalize(g), normalize(b))
}

pub(crate) fn rgb2yuv_sdtv_analog(_spec: &ConversionSpec, r: i32, g: i32, b: i32) -> (f64, f64, f64) {
    let (r, g, b) = (r as f64 / 256.0, g as f64 / 256.0, b as f64 / 256.0);
    let y = 0.299 * r + 0.587 * g + 0.114 * b;
    let pb = -0.169 * r - 0.331 * g + 0.500 * b;
    let pr = 0.500 * r - 0.419 * g - 0.081 * b;
    ((256.0 * y).trunc(), (256.0 * pb + 128.0).trunc(), (256.0 * pr + 128.0).trunc())
}

pub(crate) fn yuv2rgb_sdtv_analog(_spec: &ConversionSpec, y: i32, u: i32, v: i32) -> (f64, f64, f64) {
    let y = y as f64 / 256.0;
    let pb = (u - 128) as f64 / 256.0;
    let pr = (v - 128) as f64 / 256.0;
    let r = y + 1.402 * pr;
    let g = y - 0.714 * pr - 0.344 * pb;
    let b = y + 1.772 * pb;
    (
        normalize((256.0 * r).trunc()),
        normalize((256.0 * g).trunc()),
        normalize((256.0 * b).trunc()),
    )
}

pub(crate) fn rgb2yuv_sdtv_digital(_spec: &ConversionSpec, r: i32, g: i32, b: i32) -> (f64, f64, f64) {
    let (r, g, b) = (fr2lr(r as f64), fr2lr(g as f64), fr2lr(b as f64));
    let y = 0.299 * r + 0.587 * g + 0.114 * b;
    let cb = -0.172 * r - 0.339 * g + 0.511 * b;
    let cr = 0.511 * r - 0.428 * g - 0.083 * b;
    (normalize(y), normalize(cb + 128.0), normalize(cr + 128.0))
}

pub(crate) fn yuv2rgb_sdtv_digital(_spec: &ConversionSpec, y: i32, u: i32, v: i32) -> (f64, f64, f64) {
    let (y, cb, cr) = (y as f64, (u - 128) as f64, (v - 128) as f64);
    let r = y + 1.371 * cr;
    let g = y - 0.698 * cr - 0.336 * cb;
    let b = y + 1.732 * cb;
    (lr2fr(r), lr2fr(g), lr2fr(b))
}

pub(crate) fn rgb2yuv_sdtv_computer(_spec: &ConversionSpec, r: i32, g: i32, b: i32) -> (f64, f64, f64) {
    let (r, g, b) = (r as f64, g as f64, b as f64);
    let y = 0.257 * r + 0.504 * g + 0.098 * b + 16.0;
    let cb = -0.148 * r - 0.291 * g + 0.439 * b + 128.0;
    let cr = 0.439 * r - 0.368 * g - 0.071 * b + 128.0;
    (normalize(y), normalize(cb), normalize(cr))
}

pub(crate) fn yuv2rgb_sdtv_computer(_spec: &ConversionSpec, y: i32, u: i32, v: i32) -> (f64, f64, f64) {
    let (y, cb, cr) = ((y - 16) as f64, (u - 128) as f64, (v - 128) as f64);
    let r = 1.164 * y + 1.596 * cr;
    let g = 1.164 * y - 0.813 * cr - 0.391 * cb;
    let b = 1.164 * y + 2.018 * cb;
    (normalize(r), normalize(g), normalize(b))
}

pub(crate) fn rgb2yuv_hdtv_basic(_spec: &ConversionSpec, r: i32, g: i32, b: i32) -> (f64, f64, f64) {
    let (r, g, b) = (r as f64, g as f64, b as f64);
    let y = 0.2126 * r + 0.7152 * g + 0.0722 * b;
    let u = -0.09991 * r - 0.33609 * g + 0.436 * b;
    let v = 0.615 * r - 0.55861 * g - 0.05639 * b;
    (normalize(y), normalize(u), normalize(v))
}

// Same caveat as yuv2rgb_sdtv_basic.
pub(crate) fn yuv2rgb_hdtv_basic(_spec: &ConversionSpec, y: i32, u: i32, v: i32) -> (f64, f64, f64) {
    let (y, u, v) = (y as f64, u as f64, v as f64);
    let r = y + 1.28033 * v;
    let g = y - 0.21482 * u - 0.38059 * v;
    let b = y + 2.12798 * u;
    (normalize(r), normalize(g), normalize(b))
}

pub(crate) fn rgb2yuv_hdtv_analog(_spec: &ConversionSpec, r: i32, g: i32, b: i32) -> (f64, f64, f64) {
    let (r, g, b) = (r as f64 / 256.0, g as f64 / 256.0, b as f64 / 256.0);
    let y = 0.213 * r + 0.715 * g + 0.072 * b;
    let pb = -0.115 * r - 0.385 * g + 0.500 * b;
    let pr = 0.500 * r - 0.454 * g - 0.046 * b;
    ((256.0 * y).trunc(), (256.0 * pb + 128.0).trunc(), (256.0 * pr + 128.0).trunc())
}

pub(crate) fn yuv2rgb_hdtv_analog(_spec: &ConversionSpec, y: i32, u: i32, v: i32) -> (f64, f64, f64) {
    let y = y as f64 / 256.0;
    let pb = (u - 128) as f64 / 256.0;
    let pr = (v - 128) as f64 / 256.0;
    let r = y + 1.575 * pr;
    let g = y - 0.468 * pr - 0.187 * pb;
    let b = y + 1.856 * pb;
    (
        normalize((256.0 * r).trunc()),
        normalize((256.0 * g).trunc()),
        normalize((256.0 * b).trunc()),
    )
}

pub(crate) fn rgb2yuv_hdtv_digital(_spec: &ConversionSpec, r: i32, g: i32, b: i32) -> (f64, f64, f64) {
    let (r, g, b) = (fr2lr(r as f64), fr2lr(g as f64), fr2lr(b as f64));
    let y = 0.213 * r + 0.715 * g + 0.072 * b;
    let cb = -0.117 * r - 0.394 * g + 0.511 * b + 128.0;
    let cr = 0.511 * r - 0.464 * g - 0.047 * b + 128.0;
    (y, cb, cr)
}

pub(crate) fn yuv2rgb_hdtv_digital(_spec: &ConversionSpec, y: i32, u: i32, v: i32) -> (f64, f64, f64) {
    let (y, cb, cr) = (y as f64, (u - 128) as f64, (v - 128) as f64);
    let r = y + 1.540 * cr;
    let g = y - 0.459 * cr - 0.183 * cb;
    let b = y + 1.816 * cb;
    (lr2fr(r), lr2fr(g), lr2fr(b))
}

pub(crate) fn rgb2yuv_hdtv_computer(_spec: &ConversionSpec, r: i32, g: i32, b: i32) -> (f64, f64, f64) {
    let (r, g, b) = (r as f64, g as f64, b as f64);
    let y = 0.183 * r + 0.614 * g + 0.062 * b + 16.0;
    let cb = -0.101 * r - 0.338 * g + 0.439 * b + 128.0;
    let cr = 0.439 * r - 0.399 * g - 0.040 * b + 128.0;
    (normalize(y), normalize(cb), normalize(cr))
}

pub(crate) fn yuv2rgb_hdtv_computer(_spec: &ConversionSpec, y: i32, u: i32, v: i32) -> (f64, f64, f64) {
    let (y, cb, cr) = ((y - 16) as f64, (u - 128) as f64, (v - 128) as f64);
    let r = 1.164 * y + 1.793 * cr;
    let g = 1.164 * y - 0.534 * cr - 0.213 * cb;
    let b = 1.164 * y + 2.115 * cb;
    (normalize(r), normalize(g), normalize(b))
}
