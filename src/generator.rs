//! End-to-end generation: output file, synthesis, encoding.

use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::cli::Config;
use crate::encode::{create_output, finish_output, write_png};
use crate::error::Error;
use crate::params::SynthesisParams;
use crate::synthesis::synthesize;

/// Random source for a run: seeded when asked, OS entropy otherwise
pub fn random_source(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Generate the image described by `config` and write it to its output path
///
/// The output file is opened before any pixel work and closed once the
/// encoded bytes are flushed. Invalid `params` fail before the file is touched.
pub fn generate<R: Rng + ?Sized>(
    config: &Config,
    params: &SynthesisParams,
    rng: &mut R,
) -> Result<(), Error> {
    params.mapping.validate().map_err(Error::Params)?;
    let mut writer = create_output(&config.output)?;

    let img = synthesize(config.width, config.height, params, rng);
    write_png(&img, &mut writer)?;
    finish_output(writer)?;

    info!(
        "Wrote {}x{} image to {}",
        config.width,
        config.height,
        config.output.display()
    );
    Ok(())
}
