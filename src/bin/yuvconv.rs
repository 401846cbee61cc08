use clap::{ArgAction, Parser};
use std::process::ExitCode;
use yuvconv::frame_io;
use yuvconv::{
    ColorRange, Conversion, ConversionSpec, Direction, MatrixCoefficients, PixelFormat,
};

/// Convert raw video frames between pixel formats and color spaces
#[derive(Parser)]
#[command(name = "yuvconv", version)]
struct Args {
    /// Increase verbosity (use multiple times for more)
    #[arg(short = 'd', long = "debug", action = ArgAction::Count)]
    debug: u8,

    /// Zero verbosity
    #[arg(long)]
    quiet: bool,

    /// Frame width
    #[arg(long, default_value_t = 1280)]
    width: usize,

    /// Frame height
    #[arg(long, default_value_t = 720)]
    height: usize,

    /// Use <width>x<height>
    #[arg(long = "video_size", value_parser = parse_video_size)]
    video_size: Option<(usize, usize)>,

    /// Input pixel format
    #[arg(long = "ipix_fmt", default_value = "yuv420p")]
    ipix_fmt: PixelFormat,

    /// Output pixel format
    #[arg(long = "opix_fmt", default_value = "rgba")]
    opix_fmt: PixelFormat,

    /// Conversion type (default depends on the direction)
    #[arg(long)]
    conversion: Option<Conversion>,

    /// Conversion direction (default derived from the pixel formats)
    #[arg(long)]
    direction: Option<Direction>,

    /// H.273 MatrixCoefficients index for the h273 conversions
    #[arg(long = "matrix_coefficients", value_parser = parse_matrix_coefficients)]
    matrix_coefficients: Option<MatrixCoefficients>,

    /// Quantization range of the YUV side for the h273 conversions
    #[arg(long = "color_range_yuv", value_parser = parse_color_range)]
    color_range_yuv: Option<ColorRange>,

    /// Quantization range of the RGB side for the h273 conversions
    #[arg(long = "color_range_rgb", value_parser = parse_color_range)]
    color_range_rgb: Option<ColorRange>,

    /// Frame number (zero based)
    #[arg(short = 'n', long = "frame_number", default_value_t = 0)]
    frame_number: usize,

    /// Input file, `-` for stdin
    #[arg(short = 'i', long, default_value = "-")]
    infile: String,

    /// Output file, `-` for stdout
    #[arg(short = 'o', long, default_value = "-")]
    outfile: String,
}

fn parse_video_size(s: &str) -> Result<(usize, usize), String> {
    let (width, height) = s
        .split_once('x')
        .ok_or_else(|| format!("expected <width>x<height>, got {s:?}"))?;

    Ok((
        width.parse().map_err(|e| format!("bad width: {e}"))?,
        height.parse().map_err(|e| format!("bad height: {e}"))?,
    ))
}

fn parse_matrix_coefficients(s: &str) -> Result<MatrixCoefficients, String> {
    let index: u8 = s.parse().map_err(|e| format!("bad index: {e}"))?;

    MatrixCoefficients::from_index(index)
        .ok_or_else(|| format!("unsupported matrix coefficients index {index}"))
}

fn parse_color_range(s: &str) -> Result<ColorRange, String> {
    ColorRange::from_name(s).ok_or_else(|| format!("unknown color range {s:?} (full, limited)"))
}

fn init_logging(args: &Args) {
    let level = if args.quiet {
        tracing::Level::ERROR
    } else {
        match args.debug {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        }
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let (width, height) = args.video_size.unwrap_or((args.width, args.height));

    let conversion = args.conversion.map(|conversion| {
        let mut spec = ConversionSpec::new(conversion);

        if let Some(mc) = args.matrix_coefficients {
            spec.matrix_coefficients = mc;
        }
        if let Some(range) = args.color_range_yuv {
            spec.yuv_range = range;
        }
        if let Some(range) = args.color_range_rgb {
            spec.rgb_range = range;
        }

        spec
    });

    let input = frame_io::open_input(&args.infile)?;
    let frame = frame_io::read_frame(input, width, height, args.ipix_fmt, args.frame_number)?;

    #[cfg(feature = "multi-thread")]
    let converted = yuvconv::convert_frame_multi_thread(
        &frame,
        width,
        height,
        args.ipix_fmt,
        args.direction,
        conversion,
        args.opix_fmt,
    )?;

    #[cfg(not(feature = "multi-thread"))]
    let converted = yuvconv::convert_frame(
        &frame,
        width,
        height,
        args.ipix_fmt,
        args.direction,
        conversion,
        args.opix_fmt,
    )?;

    let output = frame_io::open_output(&args.outfile)?;
    frame_io::write_frame(output, &converted)?;

    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    init_logging(&args);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
