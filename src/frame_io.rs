//! Reading and writing raw, headerless frame files
//!
//! Frames carry no container or metadata, dimensions and pixel format
//! must be known out of band. `-` as a path selects stdin or stdout.

use crate::PixelFormat;
use std::fs::File;
use std::io::{self, Read, Write};

/// Open a frame source, `-` meaning standard input
pub fn open_input(path: &str) -> io::Result<Box<dyn Read>> {
    if path == "-" {
        Ok(Box::new(io::stdin()))
    } else {
        Ok(Box::new(File::open(path)?))
    }
}

/// Open a frame sink, `-` meaning standard output
pub fn open_output(path: &str) -> io::Result<Box<dyn Write>> {
    if path == "-" {
        Ok(Box::new(io::stdout()))
    } else {
        Ok(Box::new(File::create(path)?))
    }
}

/// Read the frame at `frame_number` (zero based) from a raw frame stream
///
/// Earlier frames are skipped by reading, which works on unseekable
/// sources like pipes. Running past the end of the stream reports
/// [`io::ErrorKind::UnexpectedEof`].
pub fn read_frame<R: Read>(
    mut reader: R,
    width: usize,
    height: usize,
    format: PixelFormat,
    frame_number: usize,
) -> io::Result<Vec<u8>> {
    let frame_size = format.buffer_size(width, height);

    if frame_number > 0 {
        let skip = frame_size as u64 * frame_number as u64;
        let skipped = io::copy(&mut reader.by_ref().take(skip), &mut io::sink())?;

        if skipped < skip {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!("input ended before frame {frame_number}"),
            ));
        }
    }

    tracing::debug!(frame_size, frame_number, %format, "reading frame");

    let mut buf = vec![0; frame_size];
    reader.read_exact(&mut buf)?;

    Ok(buf)
}

/// Write one raw frame
pub fn write_frame<W: Write>(mut writer: W, frame: &[u8]) -> io::Result<()> {
    writer.write_all(frame)?;
    writer.flush()
}
