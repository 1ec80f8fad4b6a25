//! Error type shared by argument parsing and image generation.

use std::path::PathBuf;

use image::ImageError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{reason}")]
    Usage { reason: String },

    #[error("invalid synthesis parameters: {0}")]
    Params(String),

    #[error("cannot create output file {}: {source}", path.display())]
    CreateOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("png encoding failed: {0}")]
    Encode(#[from] ImageError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn usage(reason: impl Into<String>) -> Self {
        Self::Usage {
            reason: reason.into(),
        }
    }

    /// Invalid or missing arguments, as opposed to a failure while producing the image
    pub fn is_usage(&self) -> bool {
        matches!(self, Self::Usage { .. })
    }
}

impl From<clap::Error> for Error {
    fn from(err: clap::Error) -> Self {
        // clap renders "error: <reason>" followed by its own usage block
        let rendered = err.to_string();
        let reason = rendered
            .lines()
            .next()
            .unwrap_or_default()
            .trim_start_matches("error: ")
            .to_string();
        Self::usage(reason)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_classes() {
        assert!(Error::usage("width must be > 0").is_usage());

        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        assert!(!Error::from(io).is_usage());
    }

    #[test]
    fn test_create_output_message_names_path() {
        let err = Error::CreateOutput {
            path: PathBuf::from("/nowhere/out.png"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        let message = err.to_string();
        assert!(message.contains("/nowhere/out.png"));
        assert!(message.contains("missing"));
    }
}
