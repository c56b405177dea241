use std::ffi::OsStr;

use image::ImageFormat;

use crate::{error::CropError, wc_err};

/// The image types accepted both as sources and as destinations.
#[derive(
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::IntoStaticStr,
    strum::VariantArray,
)]
#[strum(ascii_case_insensitive)]
pub enum MimeType {
    #[strum(serialize = "image/jpeg")]
    Jpeg,
    /// Progressive JPEG as reported by some browsers. Encoded as a regular JPEG.
    #[strum(serialize = "image/pjpeg")]
    Pjpeg,
    #[strum(serialize = "image/png")]
    Png,
    #[strum(serialize = "image/gif")]
    Gif,
}

impl MimeType {
    pub fn image_format(&self) -> ImageFormat {
        match self {
            MimeType::Jpeg | MimeType::Pjpeg => ImageFormat::Jpeg,
            MimeType::Png => ImageFormat::Png,
            MimeType::Gif => ImageFormat::Gif,
        }
    }

    /// Maps a detected format back to a MIME type, rejecting anything outside of the accepted set.
    pub fn from_image_format(format: ImageFormat) -> Result<Self, CropError> {
        match format {
            ImageFormat::Jpeg => Ok(MimeType::Jpeg),
            ImageFormat::Png => Ok(MimeType::Png),
            ImageFormat::Gif => Ok(MimeType::Gif),
            other => Err(wc_err!(
                UnsupportedFormat,
                "image MIME type {} not supported",
                other.to_mime_type()
            )),
        }
    }

    /// Quality only affects lossy formats.
    pub fn uses_quality(&self) -> bool {
        matches!(self, MimeType::Jpeg | MimeType::Pjpeg)
    }
}

impl TryFrom<&OsStr> for MimeType {
    type Error = CropError;

    fn try_from(s: &OsStr) -> Result<Self, Self::Error> {
        if let Some(s_utf8) = s.to_str() {
            if let Ok(known_mime) = Self::try_from(s_utf8.trim()) {
                return Ok(known_mime);
            }
        }
        Err(wc_err!(
            UnsupportedFormat,
            "the mime type `{}' is not one of the supported types",
            s.to_string_lossy()
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use std::str::FromStr;

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!(MimeType::from_str("image/jpeg"), Ok(MimeType::Jpeg));
        assert_eq!(MimeType::from_str("IMAGE/PJPEG"), Ok(MimeType::Pjpeg));
        assert_eq!(
            MimeType::try_from(OsStr::new("Image/Gif")).unwrap(),
            MimeType::Gif
        );
    }

    #[test]
    fn test_unsupported() {
        let err = MimeType::try_from(OsStr::new("image/webp")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnsupportedFormat);
        assert!(MimeType::from_str("png").is_err());

        let err = MimeType::from_image_format(ImageFormat::Bmp).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnsupportedFormat);
        assert!(err.message().contains("image/bmp"));
    }

    #[test]
    fn test_display_matches_mime() {
        assert_eq!(MimeType::Pjpeg.to_string(), "image/pjpeg");
        assert_eq!(MimeType::Png.image_format(), ImageFormat::Png);
        assert_eq!(MimeType::Pjpeg.image_format(), ImageFormat::Jpeg);
        assert!(MimeType::Pjpeg.uses_quality());
        assert!(!MimeType::Gif.uses_quality());
    }
}
