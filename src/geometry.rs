use std::fmt::Display;

use crate::{error::CropError, wc_err};

#[cfg(test)]
use crate::utils::arbitrary;
#[cfg(test)]
use quickcheck::Arbitrary;

/// Pixel size of a source image or of a thumbnail.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    /// Both sides must be non-zero.
    pub fn new(width: u32, height: u32) -> Result<Self, CropError> {
        let dims = Self { width, height };
        dims.validate()?;
        Ok(dims)
    }

    pub(crate) fn validate(&self) -> Result<(), CropError> {
        if self.width == 0 || self.height == 0 {
            return Err(wc_err!(
                InvalidArgument,
                "width and height must be greater than 0, got {self}"
            ));
        }
        Ok(())
    }

    /// `width < height`. Square images count as wide.
    pub fn is_tall(&self) -> bool {
        self.width < self.height
    }
}

impl Display for Dimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

#[cfg(test)]
impl Arbitrary for Dimensions {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        Self {
            width: arbitrary::positive_side(g),
            height: arbitrary::positive_side(g),
        }
    }
}

/// A region within a canvas, addressed by its upper left corner.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    /// Width and height must be non-zero. Whether the rect fits a canvas is checked separately.
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Result<Self, CropError> {
        let rect = Self {
            x,
            y,
            width,
            height,
        };
        rect.size().validate()?;
        Ok(rect)
    }

    pub fn size(&self) -> Dimensions {
        Dimensions {
            width: self.width,
            height: self.height,
        }
    }

    /// Checks `x + width <= canvas.width` and `y + height <= canvas.height` without overflowing.
    pub fn fits_within(&self, canvas: Dimensions) -> bool {
        let right = self.x.checked_add(self.width);
        let bottom = self.y.checked_add(self.height);
        matches!((right, bottom), (Some(r), Some(b)) if r <= canvas.width && b <= canvas.height)
    }
}

impl Display for Rect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}+{}+{}", self.width, self.height, self.x, self.y)
    }
}
