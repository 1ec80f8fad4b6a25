//! randimage - fills a PNG with per-channel OpenSimplex noise
//!
//! Usage: randimage <width> <height> [outputFile]

use std::process::ExitCode;

use log::error;

use randimage::cli::{parse_config, usage};
use randimage::generator::{generate, random_source};
use randimage::params::SynthesisParams;

fn main() -> ExitCode {
    pretty_env_logger::init();

    let program_name = std::env::args_os()
        .next()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "randimage".to_string());

    let config = match parse_config(std::env::args_os()) {
        Ok(config) => config,
        Err(info) => info.exit(),
    };

    let config = match config {
        Ok(config) => config,
        Err(err) => {
            println!("{}", usage(&program_name, &err.to_string()));
            return ExitCode::from(1);
        }
    };

    let mut rng = random_source(None);
    if let Err(err) = generate(&config, &SynthesisParams::default(), &mut rng) {
        error!("{}", err);
        return ExitCode::from(1);
    }

    ExitCode::SUCCESS
}
