use std::path::Path;

use image::{ImageError, ImageReader};

use crate::{error::CropError, image::SourceImage, mime::MimeType, wc_err, wc_try};

/// Decodes an image from disk, guessing the format from the file contents.
/// Only the formats listed in [MimeType] are accepted.
pub fn decode(path: &Path) -> Result<SourceImage, CropError> {
    let reader = ImageReader::open(path).map_err(|error| {
        wc_err!(
            DecodeFailure,
            "could not load image `{}': {error}",
            path.display()
        )
    })?;
    let reader = wc_try!(DecodeFailure, reader.with_guessed_format());
    let format = reader.format().ok_or_else(|| {
        wc_err!(
            UnsupportedFormat,
            "could not detect the format of image `{}'",
            path.display()
        )
    })?;
    let mime = MimeType::from_image_format(format)?;
    let pixels = reader.decode().map_err(|error| match error {
        // the format was recognized, but support for it is not compiled in
        ImageError::Unsupported(_) => wc_err!(UnsupportedFormat, "{error}"),
        _ => wc_err!(
            DecodeFailure,
            "could not decode image `{}': {error}",
            path.display()
        ),
    })?;
    Ok(SourceImage { mime, pixels })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use std::io::Write;

    #[test]
    fn test_unrecognized_content() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"definitely not an image").unwrap();
        let err = decode(file.path()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnsupportedFormat);
    }

    #[test]
    fn test_format_outside_accepted_set() {
        // BMP magic bytes are recognized by `image` but not accepted here
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"BM\0\0\0\0\0\0\0\0").unwrap();
        let err = decode(file.path()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnsupportedFormat);
    }

    #[cfg(feature = "png")]
    #[test]
    fn test_truncated_png() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"\x89PNG\r\n\x1a\n\0\0").unwrap();
        let err = decode(file.path()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DecodeFailure);
    }

    #[cfg(feature = "png")]
    #[test]
    fn test_decodes_png() {
        let file = tempfile::Builder::new().suffix(".png").tempfile().unwrap();
        image::RgbImage::new(6, 4)
            .save_with_format(file.path(), image::ImageFormat::Png)
            .unwrap();
        let decoded = decode(file.path()).unwrap();
        assert_eq!(decoded.mime, MimeType::Png);
        assert_eq!(decoded.dimensions().width, 6);
        assert_eq!(decoded.dimensions().height, 4);
    }
}
