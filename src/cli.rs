//! Command-line argument parsing.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;

use crate::error::Error;

/// Bytes per RGBA8 pixel
const BYTES_PER_PIXEL: usize = 4;

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "randimage", version)]
#[command(about = "Generate a PNG filled with per-channel coherent noise", long_about = None)]
pub struct Args {
    /// Image width in pixels
    #[arg(
        value_name = "WIDTH",
        allow_negative_numbers = true,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub width: u32,

    /// Image height in pixels (defaults to width)
    #[arg(
        value_name = "HEIGHT",
        allow_negative_numbers = true,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub height: Option<u32>,

    /// Output file path (defaults to ./randomImage-<width>-<height>.png)
    #[arg(value_name = "OUTPUT_FILE", allow_hyphen_values = true)]
    pub output: Option<PathBuf>,
}

/// Validated generation settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub width: u32,
    pub height: u32,
    pub output: PathBuf,
}

impl Args {
    /// Resolve defaults and check that the image fits in memory
    pub fn into_config(self) -> Result<Config, Error> {
        let width = self.width;
        let height = self.height.unwrap_or(width);

        let fits = (width as usize)
            .checked_mul(height as usize)
            .and_then(|pixels| pixels.checked_mul(BYTES_PER_PIXEL))
            .is_some();
        if !fits {
            return Err(Error::usage(format!(
                "image of {}x{} pixels is too large",
                width, height
            )));
        }

        let output = self
            .output
            .unwrap_or_else(|| default_output_path(width, height));

        Ok(Config {
            width,
            height,
            output,
        })
    }
}

/// Parse a full argument list (program name first) into a config
///
/// `--help` and `--version` are returned as the clap error so the caller can
/// print them and exit successfully; every other failure is a usage error.
pub fn parse_config<I, T>(args: I) -> Result<Result<Config, Error>, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Args::try_parse_from(args) {
        Ok(args) => Ok(args.into_config()),
        Err(err) if is_informational(&err) => Err(err),
        Err(err) => Ok(Err(err.into())),
    }
}

/// `--help` and `--version` come back from clap as errors but end the run successfully
pub fn is_informational(err: &clap::Error) -> bool {
    matches!(
        err.kind(),
        clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion
    )
}

/// Default output file in the current directory
pub fn default_output_path(width: u32, height: u32) -> PathBuf {
    PathBuf::from(format!("./randomImage-{}-{}.png", width, height))
}

/// Usage text shown for invalid arguments
pub fn usage(program_name: &str, reason: &str) -> String {
    format!(
        "Invalid arguments: {}\n {} <width> <height> [outputFile]",
        reason, program_name
    )
}
