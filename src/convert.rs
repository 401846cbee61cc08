use crate::color::TransformFn;
use crate::{Conversion, ConversionSpec, ConvertError, Direction, PixelFormat};

/// Convert a single raw frame into another pixel format and/or color space
///
/// The output buffer is freshly allocated and prefilled with 255, so bytes
/// no component maps to (e.g. the alpha channel of rgba) come out opaque.
/// Pixels are visited row-major and written in place, which makes the
/// output bytes deterministic: for subsampled destinations the last pixel
/// of each chroma block wins.
///
/// On overflow the whole conversion is abandoned, there is no per-pixel
/// recovery.
pub fn convert_frame(
    src: &[u8],
    width: usize,
    height: usize,
    src_format: PixelFormat,
    direction: Option<Direction>,
    conversion: Option<ConversionSpec>,
    dst_format: PixelFormat,
) -> Result<Vec<u8>, ConvertError> {
    let (direction, spec, transform) = prepare(
        src, width, height, src_format, direction, conversion, dst_format,
    )?;

    let mut dst = vec![255; dst_format.buffer_size(width, height)];

    let cuts = [(0, height)];
    let mut bands = split_bands(&mut dst, dst_format, width, height, &cuts);
    convert_band(
        src,
        width,
        height,
        src_format,
        dst_format,
        direction,
        &spec,
        transform,
        &mut bands[0],
    )?;
    drop(bands);

    Ok(dst)
}

/// Validate dimensions and buffers and resolve what to run
pub(crate) fn prepare(
    src: &[u8],
    width: usize,
    height: usize,
    src_format: PixelFormat,
    direction: Option<Direction>,
    conversion: Option<ConversionSpec>,
    dst_format: PixelFormat,
) -> Result<(Direction, ConversionSpec, TransformFn), ConvertError> {
    if width == 0 || height == 0 {
        return Err(ConvertError::InvalidDimensions);
    }

    for format in [src_format, dst_format] {
        let (hsub, vsub) = format.chroma_subsampling();
        if width % hsub != 0 || height % vsub != 0 {
            return Err(ConvertError::OddDimensions {
                format,
                width,
                height,
            });
        }
    }

    let expected = src_format.buffer_size(width, height);
    if src.len() != expected {
        return Err(ConvertError::InvalidBufferSize {
            format: src_format,
            width,
            height,
            expected,
            got: src.len(),
        });
    }

    let direction = Direction::resolve(src_format, dst_format, direction);
    let spec =
        conversion.unwrap_or_else(|| ConversionSpec::new(Conversion::default_for(direction)));

    let transform =
        spec.conversion
            .function(direction)
            .ok_or(ConvertError::UnsupportedDirection {
                conversion: spec.conversion,
                direction,
            })?;

    tracing::debug!(
        %direction,
        conversion = %spec.conversion,
        %src_format,
        %dst_format,
        width,
        height,
        "resolved frame conversion"
    );

    Ok((direction, spec, transform))
}

/// A horizontal slice of the output frame, holding the matching byte
/// ranges of every destination plane
pub(crate) struct Band<'a> {
    /// Frame rows `[start, end)` covered by this band
    pub(crate) rows: (usize, usize),
    planes: Vec<PlaneSlice<'a>>,
}

struct PlaneSlice<'a> {
    /// Frame buffer offset of the first byte of `bytes`
    start: usize,
    bytes: &'a mut [u8],
}

impl Band<'_> {
    fn write(&mut self, offset: usize, value: u8) {
        for plane in &mut self.planes {
            if offset >= plane.start && offset - plane.start < plane.bytes.len() {
                plane.bytes[offset - plane.start] = value;
                return;
            }
        }

        unreachable!("destination offset outside the band");
    }
}

/// Partition `0..height` into even-aligned row ranges, at most one per job
///
/// Cuts are aligned to two rows so vertically subsampled planes split on
/// plane row boundaries.
pub(crate) fn band_cuts(height: usize, jobs: usize) -> Vec<(usize, usize)> {
    let step = (height.div_ceil(jobs.max(1)) + 1) & !1;
    let step = step.max(2);

    let mut cuts = Vec::new();
    let mut row = 0;

    while row < height {
        let end = (row + step).min(height);
        cuts.push((row, end));
        row = end;
    }

    cuts
}

/// Split a destination buffer into per-band mutable plane slices
///
/// The slices of all bands tile the buffer exactly, so this is a chain of
/// `split_at_mut` calls walking the planes in layout order.
pub(crate) fn split_bands<'a>(
    buf: &'a mut [u8],
    format: PixelFormat,
    width: usize,
    height: usize,
    cuts: &[(usize, usize)],
) -> Vec<Band<'a>> {
    let layout = format.plane_layout(width, height);

    let mut bands: Vec<Band<'a>> = cuts
        .iter()
        .map(|&rows| Band {
            rows,
            planes: Vec::with_capacity(layout.len()),
        })
        .collect();

    let mut rest = buf;

    for plane in &layout {
        for (band, &(row_start, row_end)) in bands.iter_mut().zip(cuts) {
            let start = plane.base + (row_start / plane.vsub) * plane.stride;
            let end = plane.base + (row_end / plane.vsub) * plane.stride;

            let (bytes, tail) = std::mem::take(&mut rest).split_at_mut(end - start);
            rest = tail;

            band.planes.push(PlaneSlice { start, bytes });
        }
    }

    bands
}

#[allow(clippy::too_many_arguments)]
pub(crate) fn convert_band(
    src: &[u8],
    width: usize,
    height: usize,
    src_format: PixelFormat,
    dst_format: PixelFormat,
    direction: Direction,
    spec: &ConversionSpec,
    transform: TransformFn,
    band: &mut Band<'_>,
) -> Result<(), ConvertError> {
    let (row_start, row_end) = band.rows;

    for y in row_start..row_end {
        for x in 0..width {
            let (a, b, c) = src_format.component_offsets(x, y, width, height);
            let (sa, sb, sc) = (src[a] as i32, src[b] as i32, src[c] as i32);

            let (ta, tb, tc) = transform(spec, sa, sb, sc);

            let overflow = || ConvertError::Overflow {
                conversion: spec.conversion,
                direction,
                a: sa,
                b: sb,
                c: sc,
            };

            let (da, db, dc) = dst_format.component_offsets(x, y, width, height);
            band.write(da, to_sample(ta).ok_or_else(overflow)?);
            band.write(db, to_sample(tb).ok_or_else(overflow)?);
            band.write(dc, to_sample(tc).ok_or_else(overflow)?);
        }
    }

    Ok(())
}

/// Truncate toward zero and reject anything a `u8` cannot hold
fn to_sample(v: f64) -> Option<u8> {
    if !v.is_finite() {
        return None;
    }

    let t = v.trunc();

    if (0.0..=255.0).contains(&t) {
        Some(t as u8)
    } else {
        None
    }
}
