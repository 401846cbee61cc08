use crate::PixelFormat;
use std::fmt;

/// Which way a conversion runs, derived from the source and destination
/// sample families
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Yuv2Yuv,
    Yuv2Rgb,
    Rgb2Yuv,
    Rgb2Rgb,
}

impl Direction {
    pub const ALL: &'static [Direction] = &[
        Direction::Yuv2Yuv,
        Direction::Yuv2Rgb,
        Direction::Rgb2Yuv,
        Direction::Rgb2Rgb,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Direction::Yuv2Yuv => "yuv2yuv",
            Direction::Yuv2Rgb => "yuv2rgb",
            Direction::Rgb2Yuv => "rgb2yuv",
            Direction::Rgb2Rgb => "rgb2rgb",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|d| d.name() == name)
    }

    /// Infer the direction from the source and destination formats
    ///
    /// An explicitly requested direction always wins, even when it does not
    /// match the formats. This mirrors the looseness of the command line
    /// interface, where forcing e.g. `rgb2yuv` onto YUV buffers is allowed.
    pub fn resolve(src: PixelFormat, dst: PixelFormat, explicit: Option<Direction>) -> Direction {
        if let Some(direction) = explicit {
            return direction;
        }

        match (src.is_yuv(), dst.is_yuv()) {
            (true, true) => Direction::Yuv2Yuv,
            (true, false) => Direction::Yuv2Rgb,
            (false, true) => Direction::Rgb2Yuv,
            (false, false) => Direction::Rgb2Rgb,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Direction {
    type Err = crate::ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| crate::ConvertError::UnknownDirection(s.to_owned()))
    }
}
