//! PNG encoding and output file handling.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, RgbaImage};

use crate::error::Error;

/// Encode `img` as an 8-bit RGBA PNG into `target`
pub fn write_png<W: Write>(img: &RgbaImage, target: W) -> Result<(), Error> {
    let encoder = PngEncoder::new(target);
    encoder.write_image(
        img.as_raw(),
        img.width(),
        img.height(),
        ExtendedColorType::Rgba8,
    )?;
    Ok(())
}

/// Create (or truncate) the output file
pub fn create_output(path: &Path) -> Result<BufWriter<File>, Error> {
    let file = File::create(path).map_err(|source| Error::CreateOutput {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufWriter::new(file))
}

/// Flush buffered bytes and close the file, surfacing any late write error
pub fn finish_output(writer: BufWriter<File>) -> Result<(), Error> {
    let file = writer.into_inner().map_err(|err| err.into_error())?;
    drop(file);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    fn checkerboard() -> RgbaImage {
        RgbaImage::from_fn(7, 5, |x, y| {
            if (x + y) % 2 == 0 {
                Rgba([255, 10, 20, 191])
            } else {
                Rgba([0, 128, 255, 255])
            }
        })
    }

    #[test]
    fn test_png_signature() {
        let mut bytes = Vec::new();
        write_png(&checkerboard(), &mut bytes).unwrap();
        assert_eq!(bytes[..8], PNG_SIGNATURE);
    }

    #[test]
    fn test_encoding_is_lossless_rgba8() {
        let img = checkerboard();
        let mut bytes = Vec::new();
        write_png(&img, &mut bytes).unwrap();

        let decoded = image::load_from_memory(&bytes).unwrap();
        assert_eq!(decoded.color(), image::ColorType::Rgba8);
        assert_eq!(decoded.to_rgba8(), img);
    }

    #[test]
    fn test_failing_sink_reports_error() {
        struct Broken;

        impl Write for Broken {
            fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::new(std::io::ErrorKind::Other, "disk full"))
            }

            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let err = write_png(&checkerboard(), Broken).unwrap_err();
        assert!(!err.is_usage());
    }

    #[test]
    fn test_create_output_in_missing_directory() {
        let path = std::env::temp_dir()
            .join(format!("randimage-missing-{}", std::process::id()))
            .join("out.png");
        let err = create_output(&path).unwrap_err();
        assert!(matches!(err, Error::CreateOutput { .. }));
    }
}
