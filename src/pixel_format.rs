use std::fmt;

/// Description of how a plane's dimensions relate to the frame dimensions
#[derive(Debug, Clone, Copy)]
pub(crate) struct PlaneDesc {
    pub(crate) width_op: Op,
    pub(crate) height_op: Op,
}

#[derive(Debug, Clone, Copy)]
pub(crate) enum Op {
    Mul(usize),
    Div(usize),
    Identity,
}

impl Op {
    pub(crate) fn op(self, lhs: usize) -> usize {
        match self {
            Op::Mul(rhs) => lhs * rhs,
            Op::Div(rhs) => lhs / rhs,
            Op::Identity => lhs,
        }
    }

    fn divisor(self) -> usize {
        match self {
            Op::Div(rhs) => rhs,
            _ => 1,
        }
    }
}

/// Byte layout of a single plane inside a flat frame buffer
#[derive(Debug, Clone, Copy)]
pub(crate) struct PlaneLayout {
    /// Offset of the plane's first byte
    pub(crate) base: usize,
    /// Bytes per plane row
    pub(crate) stride: usize,
    /// Frame rows per plane row (vertical subsampling factor)
    pub(crate) vsub: usize,
}

/// Supported raw frame pixel formats
///
/// All formats store 8 bit samples. Planar and semi-planar formats lay their
/// planes out back to back in a single buffer, packed formats interleave the
/// samples per pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PixelFormat {
    /// Three planes, Y then U then V. U and V are subsampled 2x2.
    ///
    /// 1.5 bytes per pixel
    Yuv420p,

    /// Two planes, Y then interleaved UV pairs. UV is subsampled 2x2.
    ///
    /// 1.5 bytes per pixel
    Nv12,

    /// Three planes, Y then U then V, no subsampling.
    ///
    /// 3 bytes per pixel
    Yuv444p,

    /// Single plane of packed `Y0 U Y1 V` groups. U and V are shared by
    /// two horizontally adjacent pixels.
    ///
    /// 2 bytes per pixel
    Yuyv422,

    /// Single plane of packed `R G B A` samples.
    ///
    /// 4 bytes per pixel
    Rgba,
}

impl PixelFormat {
    pub const ALL: &'static [PixelFormat] = &[
        PixelFormat::Yuv420p,
        PixelFormat::Nv12,
        PixelFormat::Yuv444p,
        PixelFormat::Yuyv422,
        PixelFormat::Rgba,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            PixelFormat::Yuv420p => "yuv420p",
            PixelFormat::Nv12 => "nv12",
            PixelFormat::Yuv444p => "yuv444p",
            PixelFormat::Yuyv422 => "yuyv422",
            PixelFormat::Rgba => "rgba",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|fmt| fmt.name() == name)
    }

    /// Returns true if this format carries YUV samples, false for RGB
    pub const fn is_yuv(self) -> bool {
        !matches!(self, PixelFormat::Rgba)
    }

    /// Horizontal and vertical chroma subsampling factors
    pub const fn chroma_subsampling(self) -> (usize, usize) {
        match self {
            PixelFormat::Yuv420p | PixelFormat::Nv12 => (2, 2),
            PixelFormat::Yuyv422 => (2, 1),
            PixelFormat::Yuv444p | PixelFormat::Rgba => (1, 1),
        }
    }

    pub(crate) fn plane_desc(self) -> &'static [PlaneDesc] {
        match self {
            PixelFormat::Yuv420p => &[
                PlaneDesc {
                    width_op: Op::Identity,
                    height_op: Op::Identity,
                },
                PlaneDesc {
                    width_op: Op::Div(2),
                    height_op: Op::Div(2),
                },
                PlaneDesc {
                    width_op: Op::Div(2),
                    height_op: Op::Div(2),
                },
            ],
            PixelFormat::Nv12 => &[
                PlaneDesc {
                    width_op: Op::Identity,
                    height_op: Op::Identity,
                },
                PlaneDesc {
                    width_op: Op::Identity,
                    height_op: Op::Div(2),
                },
            ],
            PixelFormat::Yuv444p => &[
                PlaneDesc {
                    width_op: Op::Identity,
                    height_op: Op::Identity,
                },
                PlaneDesc {
                    width_op: Op::Identity,
                    height_op: Op::Identity,
                },
                PlaneDesc {
                    width_op: Op::Identity,
                    height_op: Op::Identity,
                },
            ],
            PixelFormat::Yuyv422 => &[PlaneDesc {
                width_op: Op::Mul(2),
                height_op: Op::Identity,
            }],
            PixelFormat::Rgba => &[PlaneDesc {
                width_op: Op::Mul(4),
                height_op: Op::Identity,
            }],
        }
    }

    /// Calculate the required buffer size for a frame
    pub fn buffer_size(self, width: usize, height: usize) -> usize {
        self.plane_desc()
            .iter()
            .map(|plane| plane.width_op.op(width) * plane.height_op.op(height))
            .sum()
    }

    pub(crate) fn plane_layout(self, width: usize, height: usize) -> Vec<PlaneLayout> {
        let mut base = 0;

        self.plane_desc()
            .iter()
            .map(|plane| {
                let stride = plane.width_op.op(width);
                let layout = PlaneLayout {
                    base,
                    stride,
                    vsub: plane.height_op.divisor(),
                };
                base += stride * plane.height_op.op(height);
                layout
            })
            .collect()
    }

    /// Byte offsets of the three color components of the pixel at (x, y)
    /// inside a flat frame buffer
    ///
    /// The component order is (Y, U, V) for YUV formats and (R, G, B) for
    /// RGB formats. For subsampled formats multiple pixels map to the same
    /// chroma offsets.
    pub fn component_offsets(
        self,
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    ) -> (usize, usize, usize) {
        match self {
            PixelFormat::Yuv420p => {
                let luma = y * width + x;
                let chroma_size = (width / 2) * (height / 2);
                let u = width * height + (y / 2) * (width / 2) + x / 2;
                (luma, u, u + chroma_size)
            }
            PixelFormat::Nv12 => {
                let luma = y * width + x;
                let u = width * height + (y / 2) * width + (x / 2) * 2;
                (luma, u, u + 1)
            }
            PixelFormat::Yuv444p => {
                let plane_size = width * height;
                let luma = y * width + x;
                (luma, plane_size + luma, 2 * plane_size + luma)
            }
            PixelFormat::Yuyv422 => {
                let base = (y * width + (x / 2) * 2) * 2;
                (base + (x % 2) * 2, base + 1, base + 3)
            }
            PixelFormat::Rgba => {
                let base = (y * width + x) * 4;
                (base, base + 1, base + 2)
            }
        }
    }
}

impl fmt::Display for PixelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for PixelFormat {
    type Err = crate::ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| crate::ConvertError::UnknownPixelFormat(s.to_owned()))
    }
}
