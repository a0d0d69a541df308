//! bmpkit - command-line raster editor for uncompressed 24-bit BMP images.
//!
//! Decodes the input file, applies exactly one operation (annular circle,
//! divider grid, channel override, or a header report), and re-encodes the
//! result. Each failure category exits with its own status code so callers
//! can tell them apart.

mod ops;
mod parse;

use std::path::PathBuf;
use std::process;

use bmpkit_codec::{CodecError, Image, decode, encode};
use bmpkit_raster::{ArgumentError, Canvas, circle, filter, grid};
use clap::Parser;
use clap::error::ErrorKind;
use owo_colors::OwoColorize;
use thiserror::Error;

use ops::Operation;

/// Process exit codes, one per failure category.
mod exit_code {
    /// The input or output file could not be accessed.
    pub const FILE: i32 = 41;
    /// Unknown option, or no single operation selected.
    pub const OPTION: i32 = 42;
    /// An operation parameter was missing or outside its domain.
    pub const ARGUMENT: i32 = 43;
    /// The pixel buffer could not be allocated.
    pub const RESOURCE: i32 = 44;
    /// The input is not an uncompressed 24-bit BMP v3.
    pub const FORMAT: i32 = 45;
}

/// Edit uncompressed 24-bit BMP images: draw an annular circle, split the
/// frame with divider lines, or override one color channel.
#[derive(Parser, Debug)]
#[allow(clippy::struct_excessive_bools)]
#[command(name = "bmpkit")]
#[command(after_help = r#"EXAMPLES:
    # Print the decoded header fields
    bmpkit --info input.bmp

    # Draw a red circle of radius 50 and thickness 3 centered at (100, 50)
    bmpkit -I input.bmp -o output.bmp -c --center 100.50 --radius 50 --thickness 3 --color 255.0.0

    # Set every pixel's green component to 128
    bmpkit -I input.bmp -o output.bmp -f --component_name green --component_value 128

    # Split the image into 4x3 parts with black lines of thickness 10
    bmpkit -I input.bmp -o output.bmp -s --number_x 4 --number_y 3 --thickness 10 --color 0.0.0
"#)]
pub struct Cli {
    /// Print the decoded header fields and exit
    #[arg(short = 'i', long)]
    info: bool,

    /// Input BMP file
    #[arg(short = 'I', long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Input BMP file, as a trailing argument
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Output BMP file
    #[arg(short = 'o', long, value_name = "FILE", default_value = "output.bmp")]
    output: PathBuf,

    /// Draw an annular circle
    #[arg(short = 'c', long)]
    circle: bool,

    /// Circle center as X.Y, origin at the bottom left
    #[arg(short = 'O', long, value_name = "X.Y")]
    center: Option<String>,

    /// Circle radius in pixels
    #[arg(short = 'r', long, value_name = "N")]
    radius: Option<i32>,

    /// Line thickness, for --circle and --split
    #[arg(short = 'T', long, value_name = "N")]
    thickness: Option<i32>,

    /// Line color as R.G.B, for --circle and --split
    #[arg(short = 'C', long, value_name = "R.G.B")]
    color: Option<String>,

    /// Fill the circle interior
    #[arg(short = 'F', long)]
    fill: bool,

    /// Fill color as R.G.B
    #[arg(short = 'P', long = "fill_color", value_name = "R.G.B")]
    fill_color: Option<String>,

    /// Overwrite one color channel image-wide
    #[arg(short = 'f', long)]
    rgbfilter: bool,

    /// Channel to overwrite: red, green, or blue
    #[arg(short = 'N', long = "component_name", value_name = "NAME")]
    component_name: Option<String>,

    /// Value to store in the channel (0-255)
    #[arg(short = 'V', long = "component_value", value_name = "N")]
    component_value: Option<i32>,

    /// Split the image into parts with divider lines
    #[arg(short = 's', long)]
    split: bool,

    /// Number of horizontal parts
    #[arg(short = 'x', long = "number_x", value_name = "N")]
    number_x: Option<i32>,

    /// Number of vertical parts
    #[arg(short = 'y', long = "number_y", value_name = "N")]
    number_y: Option<i32>,
}

/// Everything that can abort a command, tagged by exit-code category.
#[derive(Debug, Error)]
pub enum CliError {
    /// Decode or encode failure (file, format, or resource).
    #[error(transparent)]
    Codec(#[from] CodecError),

    /// Drawing-parameter domain violation reported by the raster layer.
    #[error(transparent)]
    Argument(#[from] ArgumentError),

    /// Option-level misuse: no operation selected, or more than one.
    #[error("{0}")]
    Usage(String),

    /// Missing companion parameter or malformed literal.
    #[error("{0}")]
    BadValue(String),
}

impl CliError {
    /// The process exit code for this failure's category.
    const fn exit_code(&self) -> i32 {
        match self {
            Self::Codec(CodecError::File { .. }) => exit_code::FILE,
            Self::Codec(CodecError::Format(_)) => exit_code::FORMAT,
            Self::Codec(CodecError::Resource(_)) => exit_code::RESOURCE,
            Self::Argument(_) | Self::BadValue(_) => exit_code::ARGUMENT,
            Self::Usage(_) => exit_code::OPTION,
        }
    }
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                err.exit();
            }
            eprint!("{err}");
            process::exit(exit_code::OPTION);
        }
    };

    if let Err(err) = run(&cli) {
        eprintln!("{} {err}", "Error:".red());
        process::exit(err.exit_code());
    }
}

/// Decode, apply the selected operation, re-encode.
///
/// `Info` short-circuits after decode and writes nothing; every other path
/// only reaches the output file once its parameters validated.
fn run(cli: &Cli) -> Result<(), CliError> {
    let operation = Operation::from_cli(cli)?;
    let input = cli
        .input
        .as_deref()
        .or(cli.file.as_deref())
        .ok_or_else(|| CliError::Usage("no input file given".into()))?;
    let mut image = decode(input)?;

    match operation {
        Operation::Info => {
            print_info(&image);
            return Ok(());
        }
        Operation::Circle {
            center,
            radius,
            thickness,
            color,
            fill,
        } => {
            let mut canvas = Canvas::new(&mut image);
            // The user's center has its origin at the bottom left; rows
            // count from the top, so flip before drawing.
            let (cx, cy) = (center.0, canvas.height() - center.1);
            circle::draw_annulus(&mut canvas, cx, cy, radius, thickness, color, fill)?;
        }
        Operation::Divide {
            count_x,
            count_y,
            thickness,
            color,
        } => {
            let mut canvas = Canvas::new(&mut image);
            grid::divide(&mut canvas, count_x, count_y, thickness, color)?;
        }
        Operation::Filter { channel, value } => {
            let mut canvas = Canvas::new(&mut image);
            filter::apply(&mut canvas, channel, value)?;
        }
    }

    Ok(encode(&cli.output, &image)?)
}

/// Print every decoded header field as `name:\thex (decimal)`.
fn print_info(image: &Image) {
    let fh = image.file_header();
    let ih = image.info_header();
    println!("signature:\t{:x} ({})", fh.signature, fh.signature);
    println!("file_size:\t{:x} ({})", fh.file_size, fh.file_size);
    println!("reserved1:\t{:x} ({})", fh.reserved1, fh.reserved1);
    println!("reserved2:\t{:x} ({})", fh.reserved2, fh.reserved2);
    println!("pixel_offset:\t{:x} ({})", fh.pixel_offset, fh.pixel_offset);
    println!("header_size:\t{:x} ({})", ih.header_size, ih.header_size);
    println!("width:\t\t{:x} ({})", ih.width, ih.width);
    println!("height:\t\t{:x} ({})", ih.height, ih.height);
    println!("planes:\t\t{:x} ({})", ih.planes, ih.planes);
    println!(
        "bits_per_pixel:\t{:x} ({})",
        ih.bits_per_pixel, ih.bits_per_pixel
    );
    println!("compression:\t{:x} ({})", ih.compression, ih.compression);
    println!("image_size:\t{:x} ({})", ih.image_size, ih.image_size);
    println!(
        "x_pixels_per_meter:\t{:x} ({})",
        ih.x_pixels_per_meter, ih.x_pixels_per_meter
    );
    println!(
        "y_pixels_per_meter:\t{:x} ({})",
        ih.y_pixels_per_meter, ih.y_pixels_per_meter
    );
    println!("colors_used:\t{:x} ({})", ih.colors_used, ih.colors_used);
    println!(
        "important_colors:\t{:x} ({})",
        ih.important_colors, ih.important_colors
    );
}
