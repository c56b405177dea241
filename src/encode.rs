use std::{io::Write, path::Path};

use image::{DynamicImage, ImageFormat};
use tempfile::NamedTempFile;

#[allow(unused_imports)] // every arm using it can be compiled out
use crate::encoders;
use crate::{error::CropError, mime::MimeType, options::Quality, wc_err, wc_try};

/// Encodes the pixels into an in-memory file of the given type.
/// `quality` only applies to JPEG.
pub fn encode(
    pixels: &DynamicImage,
    mime: MimeType,
    quality: Quality,
) -> Result<Vec<u8>, CropError> {
    if !mime.uses_quality() && quality != Quality::default() {
        tracing::debug!(%mime, %quality, "quality does not apply to this format, ignoring it");
    }
    let mut buffer = Vec::new();
    match mime.image_format() {
        #[cfg(feature = "jpeg")]
        ImageFormat::Jpeg => encoders::jpeg::encode(pixels, &mut buffer, quality)?,
        #[cfg(feature = "png")]
        ImageFormat::Png => encoders::png::encode(pixels, &mut buffer)?,
        #[cfg(feature = "gif")]
        ImageFormat::Gif => encoders::gif::encode(pixels, &mut buffer)?,
        _ => {
            let _ = (pixels, quality);
            return Err(wc_err!(
                UnsupportedFormat,
                "no encode delegate for this image format `{mime}'"
            ));
        }
    }
    Ok(buffer)
}

/// Writes `bytes` to `path` so that `path` either ends up with the complete file or is left untouched.
///
/// The data goes to a temporary file in the same directory first,
/// which is then renamed over the destination.
pub fn write_atomically(bytes: &[u8], path: &Path) -> Result<(), CropError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut file = NamedTempFile::new_in(dir).map_err(|error| {
        wc_err!(
            EncodeFailure,
            "unable to open image '{}': {error}",
            path.display()
        )
    })?;
    wc_try!(EncodeFailure, file.write_all(bytes));
    wc_try!(EncodeFailure, file.flush());
    // `File::create` semantics: an existing destination is overwritten
    file.persist(path).map_err(|error| {
        wc_err!(
            EncodeFailure,
            "unable to write image '{}': {}",
            path.display(),
            error.error
        )
    })?;
    Ok(())
}
