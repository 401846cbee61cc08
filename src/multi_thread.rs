use crate::convert::{band_cuts, convert_band, prepare, split_bands};
use crate::{ConversionSpec, ConvertError, Direction, PixelFormat};
use rayon::iter::{IntoParallelIterator, ParallelIterator};

/// Multi threaded version of [`convert_frame`](crate::convert_frame)
///
/// The destination frame is split into horizontal bands which are
/// converted in parallel. Band boundaries are aligned to chroma rows and
/// every worker writes the same bytes the single threaded path would, so
/// the output is byte for byte identical. An overflow in any band fails
/// the whole conversion.
pub fn convert_frame_multi_thread(
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

    let jobs = num_cpus::get().min(height / 2).max(1);

    if jobs == 1 {
        return crate::convert_frame(
            src,
            width,
            height,
            src_format,
            Some(direction),
            Some(spec),
            dst_format,
        );
    }

    let mut dst = vec![255; dst_format.buffer_size(width, height)];

    let cuts = band_cuts(height, jobs);
    let bands = split_bands(&mut dst, dst_format, width, height, &cuts);

    bands.into_par_iter().try_for_each(|mut band| {
        convert_band(
            src, width, height, src_format, dst_format, direction, &spec, transform, &mut band,
        )
    })?;

    Ok(dst)
}
