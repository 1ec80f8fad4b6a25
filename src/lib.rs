//! randimage library - coherent-noise PNG generation

pub mod cli;
pub mod encode;
pub mod error;
pub mod generator;
pub mod noise;
pub mod params;
pub mod synthesis;
