//! Convert raw video frames between YUV and RGB pixel formats and color
//! spaces
//!
//! Frames are flat byte buffers in one of the [`PixelFormat`] layouts.
//! [`convert_frame`] reformats between layouts and, when crossing between
//! the YUV and RGB families, applies one of the named [`Conversion`]
//! transforms, from the classic BT.601/BT.709 matrix sets to the
//! parameterized ITU-T H.273 family.
//!
//! ```
//! use yuvconv::{convert_frame, Conversion, ConversionSpec, PixelFormat};
//!
//! let (width, height) = (16, 4);
//! let nv12 = vec![128; PixelFormat::Nv12.buffer_size(width, height)];
//!
//! let rgba = convert_frame(
//!     &nv12,
//!     width,
//!     height,
//!     PixelFormat::Nv12,
//!     None,
//!     Some(ConversionSpec::new(Conversion::SdtvComputer)),
//!     PixelFormat::Rgba,
//! )
//! .unwrap();
//!
//! assert_eq!(rgba.len(), PixelFormat::Rgba.buffer_size(width, height));
//! ```

mod color;
mod convert;
mod direction;
mod error;
pub mod frame_io;
#[cfg(feature = "multi-thread")]
mod multi_thread;
mod pixel_format;

pub use color::{ColorRange, Conversion, ConversionSpec, MatrixCoefficients};
pub use convert::convert_frame;
pub use direction::Direction;
pub use error::ConvertError;
#[cfg(feature = "multi-thread")]
pub use multi_thread::convert_frame_multi_thread;
pub use pixel_format::PixelFormat;
