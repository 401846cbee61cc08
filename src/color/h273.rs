//! Matrix coefficients from ITU-T H.273
//!
//! Samples are dequantized to the nominal [0, 1] (luma) and [-0.5, 0.5]
//! (chroma) ranges, mapped through the selected matrix and requantized
//! with half-up rounding. Transfer characteristics are out of scope, the
//! 8 bit inputs are taken as already nonlinear signal values.
//!
//! Index 10 (BT.2020 constant luminance) ships in two variants that
//! disagree with each other: `h273` reuses the non-constant-luminance
//! matrix of index 9, `h273chromium` mirrors Chromium's interpretation
//! and emits (R', Y', B') with luma quantization on all three outputs.
//! Neither is declared canonical, both stay available.

use super::{Conversion, ConversionSpec};
use std::fmt;

/// Full or limited (studio swing) quantization range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorRange {
    Full,
    Limited,
}

impl ColorRange {
    pub const fn name(self) -> &'static str {
        match self {
            ColorRange::Full => "full",
            ColorRange::Limited => "limited",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "full" => Some(ColorRange::Full),
            "limited" => Some(ColorRange::Limited),
            _ => None,
        }
    }
}

impl fmt::Display for ColorRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The supported H.273 MatrixCoefficients indices
///
/// Indices 2 (unspecified), 3 (reserved), 12 and 13 (chromaticity derived)
/// are not representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatrixCoefficients {
    /// 0, RGB passthrough
    Identity,
    /// 1
    Bt709,
    /// 4
    Fcc,
    /// 5
    Bt470Bg,
    /// 6
    Smpte170M,
    /// 7
    Smpte240M,
    /// 8
    YCgCo,
    /// 9, BT.2020 non-constant luminance
    Bt2020Ncl,
    /// 10, BT.2020 constant luminance
    Bt2020Cl,
    /// 11, SMPTE ST 2085
    YDzDx,
    /// 14, BT.2100 ICtCp
    ICtCp,
}

impl MatrixCoefficients {
    pub const ALL: &'static [MatrixCoefficients] = &[
        MatrixCoefficients::Identity,
        MatrixCoefficients::Bt709,
        MatrixCoefficients::Fcc,
        MatrixCoefficients::Bt470Bg,
        MatrixCoefficients::Smpte170M,
        MatrixCoefficients::Smpte240M,
        MatrixCoefficients::YCgCo,
        MatrixCoefficients::Bt2020Ncl,
        MatrixCoefficients::Bt2020Cl,
        MatrixCoefficients::YDzDx,
        MatrixCoefficients::ICtCp,
    ];

    pub const fn index(self) -> u8 {
        match self {
            MatrixCoefficients::Identity => 0,
            MatrixCoefficients::Bt709 => 1,
            MatrixCoefficients::Fcc => 4,
            MatrixCoefficients::Bt470Bg => 5,
            MatrixCoefficients::Smpte170M => 6,
            MatrixCoefficients::Smpte240M => 7,
            MatrixCoefficients::YCgCo => 8,
            MatrixCoefficients::Bt2020Ncl => 9,
            MatrixCoefficients::Bt2020Cl => 10,
            MatrixCoefficients::YDzDx => 11,
            MatrixCoefficients::ICtCp => 14,
        }
    }

    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.iter().copied().find(|mc| mc.index() == index)
    }
}

impl fmt::Display for MatrixCoefficients {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index())
    }
}

fn dequant_luma(v: i32, range: ColorRange) -> f64 {
    match range {
        ColorRange::Full => v as f64 / 255.0,
        ColorRange::Limited => (v - 16) as f64 / 219.0,
    }
}

fn dequant_chroma(v: i32, range: ColorRange) -> f64 {
    match range {
        ColorRange::Full => v as f64 / 255.0 - 0.5,
        ColorRange::Limited => (v - 128) as f64 / 224.0,
    }
}

// YCgCo dequantizes its full range chroma around the integer midpoint,
// not around 127.5 like the weighted matrices.
fn dequant_chroma_centered(v: i32, range: ColorRange) -> f64 {
    match range {
        ColorRange::Full => (v - 128) as f64 / 255.0,
        ColorRange::Limited => (v - 128) as f64 / 224.0,
    }
}

fn round_half_up(v: f64) -> f64 {
    (v + 0.5).trunc().clamp(0.0, 255.0)
}

fn quant_luma(e: f64, range: ColorRange) -> f64 {
    match range {
        ColorRange::Full => round_half_up(255.0 * e),
        ColorRange::Limited => round_half_up(219.0 * e + 16.0),
    }
}

fn quant_chroma(e: f64, range: ColorRange) -> f64 {
    match range {
        ColorRange::Full => round_half_up(255.0 * (e + 0.5)),
        ColorRange::Limited => round_half_up(224.0 * e + 128.0),
    }
}

pub(crate) fn rgb2yuv(spec: &ConversionSpec, r: i32, g: i32, b: i32) -> (f64, f64, f64) {
    let mc = spec.matrix_coefficients;
    let chromium = spec.conversion == Conversion::H273Chromium;

    if mc == MatrixCoefficients::Identity {
        return (r as f64, g as f64, b as f64);
    }

    let er = dequant_luma(r, spec.rgb_range);
    let eg = dequant_luma(g, spec.rgb_range);
    let eb = dequant_luma(b, spec.rgb_range);
    let yuv = spec.yuv_range;

    match mc {
        MatrixCoefficients::Bt709 => weighted_forward(0.2126, 0.0722, er, eg, eb, yuv),
        MatrixCoefficients::Fcc => weighted_forward(0.30, 0.11, er, eg, eb, yuv),
        MatrixCoefficients::Bt470Bg | MatrixCoefficients::Smpte170M => {
            weighted_forward(0.299, 0.114, er, eg, eb, yuv)
        }
        MatrixCoefficients::Smpte240M => weighted_forward(0.212, 0.087, er, eg, eb, yuv),
        MatrixCoefficients::Bt2020Ncl => weighted_forward(0.2627, 0.0593, er, eg, eb, yuv),
        MatrixCoefficients::Bt2020Cl => {
            if chromium {
                let ey = 0.2627 * er + (1.0 - 0.2627 - 0.0593) * eg + 0.0593 * eb;
                (quant_luma(er, yuv), quant_luma(ey, yuv), quant_luma(eb, yuv))
            } else {
                weighted_forward(0.2627, 0.0593, er, eg, eb, yuv)
            }
        }
        MatrixCoefficients::YCgCo => {
            let ey = 0.25 * er + 0.5 * eg + 0.25 * eb;
            let ecg = -0.25 * er + 0.5 * eg - 0.25 * eb;
            let eco = 0.5 * er - 0.5 * eb;
            (
                quant_luma(ey, yuv),
                quant_chroma(ecg, yuv),
                quant_chroma(eco, yuv),
            )
        }
        MatrixCoefficients::YDzDx => {
            let ey = eg;
            let edz = (0.986566 * eb - ey) * 0.5;
            let edx = (er - 0.991902 * ey) * 0.5;
            (
                quant_luma(ey, yuv),
                quant_chroma(edz, yuv),
                quant_chroma(edx, yuv),
            )
        }
        MatrixCoefficients::ICtCp => {
            let l = (1688.0 * er + 2146.0 * eg + 262.0 * eb) / 4096.0;
            let m = (683.0 * er + 2951.0 * eg + 462.0 * eb) / 4096.0;
            let s = (99.0 * er + 309.0 * eg + 3688.0 * eb) / 4096.0;
            let i = 0.5 * l + 0.5 * m;
            let ct = (6610.0 * l - 13613.0 * m + 7003.0 * s) / 4096.0;
            let cp = (17933.0 * l - 17390.0 * m - 543.0 * s) / 4096.0;
            (
                quant_luma(i, yuv),
                quant_chroma(ct, yuv),
                quant_chroma(cp, yuv),
            )
        }
        MatrixCoefficients::Identity => (r as f64, g as f64, b as f64),
    }
}

pub(crate) fn yuv2rgb(spec: &ConversionSpec, y: i32, u: i32, v: i32) -> (f64, f64, f64) {
    let mc = spec.matrix_coefficients;
    let chromium = spec.conversion == Conversion::H273Chromium;

    if mc == MatrixCoefficients::Identity {
        return (y as f64, u as f64, v as f64);
    }

    let yuv = spec.yuv_range;
    let rgb = spec.rgb_range;

    match mc {
        MatrixCoefficients::Bt709 => weighted_inverse(0.2126, 0.0722, y, u, v, yuv, rgb),
        MatrixCoefficients::Fcc => weighted_inverse(0.30, 0.11, y, u, v, yuv, rgb),
        MatrixCoefficients::Bt470Bg | MatrixCoefficients::Smpte170M => {
            weighted_inverse(0.299, 0.114, y, u, v, yuv, rgb)
        }
        MatrixCoefficients::Smpte240M => weighted_inverse(0.212, 0.087, y, u, v, yuv, rgb),
        MatrixCoefficients::Bt2020Ncl => weighted_inverse(0.2627, 0.0593, y, u, v, yuv, rgb),
        MatrixCoefficients::Bt2020Cl => {
            if chromium {
                let (kr, kb) = (0.2627, 0.0593);
                let er = dequant_luma(y, yuv);
                let ey = dequant_luma(u, yuv);
                let eb = dequant_luma(v, yuv);
                let eg = (ey - kr * er - kb * eb) / (1.0 - kr - kb);
                (
                    quant_luma(er, rgb),
                    quant_luma(eg, rgb),
                    quant_luma(eb, rgb),
                )
            } else {
                weighted_inverse(0.2627, 0.0593, y, u, v, yuv, rgb)
            }
        }
        MatrixCoefficients::YCgCo => {
            let ey = dequant_luma(y, yuv);
            let ecg = dequant_chroma_centered(u, yuv);
            let eco = dequant_chroma_centered(v, yuv);
            let er = ey - ecg + eco;
            let eg = ey + ecg;
            let eb = ey - ecg - eco;
            (
                quant_luma(er, rgb),
                quant_luma(eg, rgb),
                quant_luma(eb, rgb),
            )
        }
        MatrixCoefficients::YDzDx => {
            let ey = dequant_luma(y, yuv);
            let edz = dequant_chroma(u, yuv);
            let edx = dequant_chroma(v, yuv);
            let er = 2.0 * edx + 0.991902 * ey;
            let eg = ey;
            let eb = (2.0 * edz + ey) / 0.986566;
            (
                quant_luma(er, rgb),
                quant_luma(eg, rgb),
                quant_luma(eb, rgb),
            )
        }
        MatrixCoefficients::ICtCp => {
            let i = dequant_luma(y, yuv);
            let ct = dequant_chroma(u, yuv);
            let cp = dequant_chroma(v, yuv);

            // exact inverse of the forward LMS and ICtCp matrices
            let l = i + (1112064.0 / 129174029.0) * ct + (14342144.0 / 129174029.0) * cp;
            let m = i - (1112064.0 / 129174029.0) * ct - (14342144.0 / 129174029.0) * cp;
            let s = i + (72341504.0 / 129174029.0) * ct - (41416704.0 / 129174029.0) * cp;

            let er = (10740530.0 * l - 7833490.0 * m + 218290.0 * s) / 3125330.0;
            let eg = (-2473166.0 * l + 6199406.0 * m - 600910.0 * s) / 3125330.0;
            let eb = (-81102.0 * l - 309138.0 * m + 3515570.0 * s) / 3125330.0;
            (
                quant_luma(er, rgb),
                quant_luma(eg, rgb),
                quant_luma(eb, rgb),
            )
        }
        MatrixCoefficients::Identity => (y as f64, u as f64, v as f64),
    }
}

fn weighted_forward(
    kr: f64,
    kb: f64,
    er: f64,
    eg: f64,
    eb: f64,
    yuv: ColorRange,
) -> (f64, f64, f64) {
    let ey = kr * er + (1.0 - kr - kb) * eg + kb * eb;
    let epb = 0.5 * (eb - ey) / (1.0 - kb);
    let epr = 0.5 * (er - ey) / (1.0 - kr);
    (
        quant_luma(ey, yuv),
        quant_chroma(epb, yuv),
        quant_chroma(epr, yuv),
    )
}

fn weighted_inverse(
    kr: f64,
    kb: f64,
    y: i32,
    u: i32,
    v: i32,
    yuv: ColorRange,
    rgb: ColorRange,
) -> (f64, f64, f64) {
    let ey = dequant_luma(y, yuv);
    let epb = dequant_chroma(u, yuv);
    let epr = dequant_chroma(v, yuv);
    let er = ey + 2.0 * (1.0 - kr) * epr;
    let eb = ey + 2.0 * (1.0 - kb) * epb;
    let eg = (ey - kr * er - kb * eb) / (1.0 - kr - kb);
    (
        quant_luma(er, rgb),
        quant_luma(eg, rgb),
        quant_luma(eb, rgb),
    )
}
