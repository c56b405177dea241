use std::ffi::OsStr;

use crate::{error::CropError, wc_err};

#[cfg(test)]
use quickcheck::Arbitrary;
#[cfg(test)]
use strum::VariantArray;

/// Which edge of the source to keep when the crop is smaller than the source along one axis.
#[derive(
    Debug,
    Copy,
    Clone,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::IntoStaticStr,
    strum::VariantArray,
)]
#[strum(ascii_case_insensitive)]
pub enum Anchor {
    Top,
    Bottom,
    Left,
    Right,
    #[default]
    Center,
}

impl Anchor {
    /// Anchors that position a crop vertically, applied to tall sources.
    pub fn is_vertical(&self) -> bool {
        matches!(self, Anchor::Top | Anchor::Bottom | Anchor::Center)
    }

    /// Anchors that position a crop horizontally, applied to wide and square sources.
    pub fn is_horizontal(&self) -> bool {
        matches!(self, Anchor::Left | Anchor::Right | Anchor::Center)
    }

    /// Offset of a crop of length `crop` along an axis of length `space`.
    /// Saturates at 0 when the crop is longer than the axis.
    pub(crate) fn offset(&self, space: u32, crop: u32) -> u32 {
        let slack = space.saturating_sub(crop);
        match self {
            Anchor::Top | Anchor::Left => 0,
            Anchor::Bottom | Anchor::Right => slack,
            Anchor::Center => slack / 2,
        }
    }
}

impl TryFrom<&OsStr> for Anchor {
    type Error = CropError;

    fn try_from(s: &OsStr) -> Result<Self, Self::Error> {
        if let Some(s_utf8) = s.to_str() {
            if let Ok(known_anchor) = Self::try_from(s_utf8) {
                return Ok(known_anchor);
            }
        }
        Err(wc_err!(
            InvalidArgument,
            "unrecognized anchor `{}'",
            s.to_string_lossy()
        ))
    }
}

#[cfg(test)]
impl Arbitrary for Anchor {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        *g.choose(Anchor::VARIANTS).unwrap()
    }
}
