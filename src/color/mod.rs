use crate::Direction;
use std::fmt;

mod h273;
mod matrix;
mod ycocg;

pub use h273::{ColorRange, MatrixCoefficients};

/// Signature shared by all per-pixel transforms
///
/// Inputs are the raw samples of one pixel, outputs are unrounded values
/// that the frame converter truncates and range checks before writing.
pub(crate) type TransformFn = fn(&ConversionSpec, i32, i32, i32) -> (f64, f64, f64);

/// The named color transforms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Conversion {
    /// Pass samples through unchanged
    Unit,
    /// NTSC YIQ, raw matrix without any clamping
    Yiq,
    /// BT.601 YUV with unscaled coefficients
    SdtvBasic,
    /// BT.601 YPbPr on a 1/256 scale with integer requantization
    SdtvAnalog,
    /// BT.601 YCbCr with studio swing in and out
    SdtvDigital,
    /// BT.601 YCbCr mapping full range RGB to studio range YUV
    SdtvComputer,
    /// BT.709 YUV with unscaled coefficients
    HdtvBasic,
    /// BT.709 YPbPr on a 1/256 scale with integer requantization
    HdtvAnalog,
    /// BT.709 YCbCr with studio swing in and out
    HdtvDigital,
    /// BT.709 YCbCr mapping full range RGB to studio range YUV
    HdtvComputer,
    /// YCoCg in its exact dyadic form
    YCoCg,
    /// Reversible YCoCg-R lifting scheme
    YCoCgR,
    /// ITU-T H.273 matrix coefficients, parameterized by
    /// [`MatrixCoefficients`] and [`ColorRange`]
    H273,
    /// Like [`Conversion::H273`] but reproducing the constant luminance
    /// handling found in Chromium's converter
    H273Chromium,
}

impl Conversion {
    pub const ALL: &'static [Conversion] = &[
        Conversion::Unit,
        Conversion::Yiq,
        Conversion::SdtvBasic,
        Conversion::SdtvAnalog,
        Conversion::SdtvDigital,
        Conversion::SdtvComputer,
        Conversion::HdtvBasic,
        Conversion::HdtvAnalog,
        Conversion::HdtvDigital,
        Conversion::HdtvComputer,
        Conversion::YCoCg,
        Conversion::YCoCgR,
        Conversion::H273,
        Conversion::H273Chromium,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Conversion::Unit => "unit",
            Conversion::Yiq => "yiq",
            Conversion::SdtvBasic => "sdtv.basic",
            Conversion::SdtvAnalog => "sdtv.analog",
            Conversion::SdtvDigital => "sdtv.digital",
            Conversion::SdtvComputer => "sdtv.computer",
            Conversion::HdtvBasic => "hdtv.basic",
            Conversion::HdtvAnalog => "hdtv.analog",
            Conversion::HdtvDigital => "hdtv.digital",
            Conversion::HdtvComputer => "hdtv.computer",
            Conversion::YCoCg => "ycocg",
            Conversion::YCoCgR => "ycocgr",
            Conversion::H273 => "h273",
            Conversion::H273Chromium => "h273chromium",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.name() == name)
    }

    /// The transform used when none is requested explicitly
    pub const fn default_for(direction: Direction) -> Conversion {
        match direction {
            Direction::Yuv2Yuv | Direction::Rgb2Rgb => Conversion::Unit,
            Direction::Yuv2Rgb | Direction::Rgb2Yuv => Conversion::SdtvComputer,
        }
    }

    /// Look up the per-pixel function for a direction
    ///
    /// Returns `None` when the transform does not define that direction,
    /// e.g. `unit` only maps within a sample family.
    pub(crate) fn function(self, direction: Direction) -> Option<TransformFn> {
        use Direction::*;

        match (self, direction) {
            (Conversion::Unit, Yuv2Yuv | Rgb2Rgb) => Some(unit),
            (Conversion::Yiq, Rgb2Yuv) => Some(matrix::rgb2yuv_yiq),
            (Conversion::Yiq, Yuv2Rgb) => Some(matrix::yuv2rgb_yiq),
            (Conversion::SdtvBasic, Rgb2Yuv) => Some(matrix::rgb2yuv_sdtv_basic),
            (Conversion::SdtvBasic, Yuv2Rgb) => Some(matrix::yuv2rgb_sdtv_basic),
            (Conversion::SdtvAnalog, Rgb2Yuv) => Some(matrix::rgb2yuv_sdtv_analog),
            (Conversion::SdtvAnalog, Yuv2Rgb) => Some(matrix::yuv2rgb_sdtv_analog),
            (Conversion::SdtvDigital, Rgb2Yuv) => Some(matrix::rgb2yuv_sdtv_digital),
            (Conversion::SdtvDigital, Yuv2Rgb) => Some(matrix::yuv2rgb_sdtv_digital),
            (Conversion::SdtvComputer, Rgb2Yuv) => Some(matrix::rgb2yuv_sdtv_computer),
            (Conversion::SdtvComputer, Yuv2Rgb) => Some(matrix::yuv2rgb_sdtv_computer),
            (Conversion::HdtvBasic, Rgb2Yuv) => Some(matrix::rgb2yuv_hdtv_basic),
            (Conversion::HdtvBasic, Yuv2Rgb) => Some(matrix::yuv2rgb_hdtv_basic),
            (Conversion::HdtvAnalog, Rgb2Yuv) => Some(matrix::rgb2yuv_hdtv_analog),
            (Conversion::HdtvAnalog, Yuv2Rgb) => Some(matrix::yuv2rgb_hdtv_analog),
            (Conversion::HdtvDigital, Rgb2Yuv) => Some(matrix::rgb2yuv_hdtv_digital),
            (Conversion::HdtvDigital, Yuv2Rgb) => Some(matrix::yuv2rgb_hdtv_digital),
            (Conversion::HdtvComputer, Rgb2Yuv) => Some(matrix::rgb2yuv_hdtv_computer),
            (Conversion::HdtvComputer, Yuv2Rgb) => Some(matrix::yuv2rgb_hdtv_computer),
            (Conversion::YCoCg, Rgb2Yuv) => Some(ycocg::rgb2yuv_ycocg),
            (Conversion::YCoCg, Yuv2Rgb) => Some(ycocg::yuv2rgb_ycocg),
            (Conversion::YCoCgR, Rgb2Yuv) => Some(ycocg::rgb2yuv_ycocgr),
            (Conversion::YCoCgR, Yuv2Rgb) => Some(ycocg::yuv2rgb_ycocgr),
            (Conversion::H273 | Conversion::H273Chromium, Rgb2Yuv) => Some(h273::rgb2yuv),
            (Conversion::H273 | Conversion::H273Chromium, Yuv2Rgb) => Some(h273::yuv2rgb),
            _ => None,
        }
    }
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Conversion {
    type Err = crate::ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| crate::ConvertError::UnknownConversion(s.to_owned()))
    }
}

/// A transform plus the parameters that configure it
///
/// Only the `h273` family reads [`Self::matrix_coefficients`] and the two
/// range fields, the classic transforms bake their ranges into their
/// coefficients.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConversionSpec {
    pub conversion: Conversion,
    pub matrix_coefficients: MatrixCoefficients,
    pub yuv_range: ColorRange,
    pub rgb_range: ColorRange,
}

impl ConversionSpec {
    pub fn new(conversion: Conversion) -> Self {
        Self {
            conversion,
            matrix_coefficients: MatrixCoefficients::Bt709,
            yuv_range: ColorRange::Full,
            rgb_range: ColorRange::Full,
        }
    }
}

impl From<Conversion> for ConversionSpec {
    fn from(conversion: Conversion) -> Self {
        Self::new(conversion)
    }
}

fn unit(_spec: &ConversionSpec, a: i32, b: i32, c: i32) -> (f64, f64, f64) {
    (a as f64, b as f64, c as f64)
}
