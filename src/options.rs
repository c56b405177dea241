//! Settings that apply to a whole crop operation, as opposed to the geometry of a single plan.

use std::{ffi::OsStr, fmt::Display, str::FromStr};

use crate::{error::CropError, mime::MimeType, planner::BoundsPolicy, wc_err};

/// JPEG quality in `1..=100`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Quality(u8);

impl Quality {
    pub const DEFAULT: Quality = Quality(80);

    pub fn new(quality: u8) -> Result<Self, CropError> {
        match quality {
            1..=100 => Ok(Self(quality)),
            _ => Err(wc_err!(
                InvalidArgument,
                "jpeg quality must be in range 1..=100, got {quality}"
            )),
        }
    }

    pub fn get(&self) -> u8 {
        self.0
    }
}

impl Default for Quality {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl Display for Quality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Quality {
    type Err = CropError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .trim()
            .parse::<u8>()
            .map_err(|_| wc_err!(InvalidArgument, "invalid jpeg quality `{s}'"))?;
        Self::new(value)
    }
}

impl TryFrom<&OsStr> for Quality {
    type Error = CropError;

    fn try_from(s: &OsStr) -> Result<Self, Self::Error> {
        match s.to_str() {
            Some(s_utf8) => s_utf8.parse(),
            None => Err(wc_err!(
                InvalidArgument,
                "invalid jpeg quality `{}'",
                s.to_string_lossy()
            )),
        }
    }
}

#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct CropOptions {
    pub quality: Quality,
    /// Format of the written file. Defaults to the format of the source.
    pub output_mime: Option<MimeType>,
    pub bounds: BoundsPolicy,
}

impl CropOptions {
    /// The format to encode to when the source was decoded from `source_mime`.
    pub fn output_mime_for(&self, source_mime: MimeType) -> MimeType {
        self.output_mime.unwrap_or(source_mime)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_quality_bounds() {
        assert_eq!(Quality::default().get(), 80);
        assert_eq!(Quality::new(1).unwrap().get(), 1);
        assert_eq!(Quality::new(100).unwrap().get(), 100);
        assert_eq!(
            Quality::new(0).unwrap_err().kind(),
            ErrorKind::InvalidArgument
        );
        assert!(Quality::new(101).is_err());
    }

    #[test]
    fn test_quality_parsing() {
        assert_eq!(Quality::from_str(" 95 ").unwrap().get(), 95);
        assert!(Quality::from_str("-5").is_err());
        assert!(Quality::from_str("300").is_err());
        assert!(Quality::try_from(OsStr::new("ninety")).is_err());
    }

    #[test]
    fn test_output_mime_defaults_to_source() {
        let options = CropOptions::default();
        assert_eq!(options.output_mime_for(MimeType::Gif), MimeType::Gif);
        let options = CropOptions {
            output_mime: Some(MimeType::Png),
            ..Default::default()
        };
        assert_eq!(options.output_mime_for(MimeType::Gif), MimeType::Png);
        assert_eq!(options.bounds, BoundsPolicy::Clamp);
    }
}
