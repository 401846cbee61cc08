use crate::{Conversion, Direction, PixelFormat};

/// Error returned by the frame conversion entry points
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    #[error("unknown pixel format {0:?}")]
    UnknownPixelFormat(String),

    #[error("unknown conversion {0:?}")]
    UnknownConversion(String),

    #[error("unknown direction {0:?}")]
    UnknownDirection(String),

    #[error("conversion {conversion} has no {direction} function")]
    UnsupportedDirection {
        conversion: Conversion,
        direction: Direction,
    },

    #[error("width and height must not be zero")]
    InvalidDimensions,

    #[error("{format} requires dimensions divisible by its subsampling, got {width}x{height}")]
    OddDimensions {
        format: PixelFormat,
        width: usize,
        height: usize,
    },

    #[error("{format} frame of {width}x{height} needs {expected} bytes, buffer has {got}")]
    InvalidBufferSize {
        format: PixelFormat,
        width: usize,
        height: usize,
        expected: usize,
        got: usize,
    },

    #[error("overflow: {conversion} {direction} of ({a}, {b}, {c}) leaves the 8 bit sample range")]
    Overflow {
        conversion: Conversion,
        direction: Direction,
        a: i32,
        b: i32,
        c: i32,
    },
}
