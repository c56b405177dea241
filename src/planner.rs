//! Computes which rectangle of the source to crop and what size to resample it to.
//!
//! Everything here is a pure function of its inputs: no pixels are touched,
//! and a [RegionPlanner] is a `Copy` bag of settings rather than mutable state.

use crate::{
    anchor::Anchor,
    error::CropError,
    geometry::{Dimensions, Rect},
    wc_err,
};

/// What to do when the size derived from the requested ratio does not fit the source.
///
/// Sizing a crop of ratio > 1 always takes the full source width, and ratio < 1
/// always takes the full source height, regardless of the orientation of the source.
/// That can yield a crop that is taller (or wider) than the source itself.
#[derive(
    Debug,
    Copy,
    Clone,
    Default,
    PartialEq,
    Eq,
    strum::Display,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
pub enum BoundsPolicy {
    /// Shrink the overflowing axis to the source and recompute the other one from the ratio,
    /// which yields the largest in-bounds rectangle of the requested ratio.
    #[default]
    Clamp,
    /// Keep the overflowing size as is. Negative offsets saturate to 0.
    /// The resulting plan may not fit the source, see [CropPlan::fits_within];
    /// executing such a plan fails.
    Unbounded,
}

/// The source rectangle to extract and the size it is resampled to.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct CropPlan {
    source: Rect,
    dest_size: Dimensions,
    dest_offset: (u32, u32),
}

impl CropPlan {
    /// A plan that copies `source` at its own size.
    pub fn covering(source: Rect) -> Self {
        Self {
            source,
            dest_size: source.size(),
            dest_offset: (0, 0),
        }
    }

    pub fn source(&self) -> Rect {
        self.source
    }

    pub fn dest_size(&self) -> Dimensions {
        self.dest_size
    }

    /// Upper left corner inside the destination canvas where the resampled crop is pasted.
    pub fn dest_offset(&self) -> (u32, u32) {
        self.dest_offset
    }

    /// Resample the crop to an explicit size instead of its own.
    pub fn with_dest_size(self, dest_size: Dimensions) -> Result<Self, CropError> {
        dest_size.validate()?;
        Ok(Self { dest_size, ..self })
    }

    /// Resample the crop to `percentage` percent of its own size, e.g. 50 for half, 200 for double.
    pub fn with_relative_size(self, percentage: f64) -> Result<Self, CropError> {
        if !percentage.is_finite() || percentage <= 0.0 {
            return Err(wc_err!(
                InvalidArgument,
                "percentage must be greater than 0, got {percentage}"
            ));
        }
        let scale = |side: u32| (side as f64 * percentage / 100.0).round() as u32;
        let dest_size = Dimensions::new(scale(self.source.width), scale(self.source.height))
            .map_err(|_| {
                wc_err!(
                    InvalidArgument,
                    "{percentage}% of a {} crop is empty",
                    self.source.size()
                )
            })?;
        Ok(Self { dest_size, ..self })
    }

    /// Paste the resampled crop at `(x, y)` inside the destination canvas.
    /// Anything falling outside of the canvas is clipped.
    pub fn with_dest_offset(self, x: u32, y: u32) -> Self {
        Self {
            dest_offset: (x, y),
            ..self
        }
    }

    /// Whether the source rectangle lies entirely within `canvas`.
    pub fn fits_within(&self, canvas: Dimensions) -> bool {
        self.source.fits_within(canvas)
    }
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct RegionPlanner {
    pub bounds: BoundsPolicy,
}

impl RegionPlanner {
    pub fn new(bounds: BoundsPolicy) -> Self {
        Self { bounds }
    }

    /// Plans the largest rectangle of `ratio` (width / height) that the source can provide.
    ///
    /// `anchor_tall` positions the crop vertically on tall sources and must be one of
    /// `Top`, `Bottom` or `Center`. `anchor_wide` positions it horizontally on wide and
    /// square sources and must be one of `Left`, `Right` or `Center`.
    /// Both are validated whichever one ends up being used.
    pub fn largest_area(
        &self,
        source: Dimensions,
        ratio: f64,
        anchor_tall: Anchor,
        anchor_wide: Anchor,
    ) -> Result<CropPlan, CropError> {
        source.validate()?;
        if !ratio.is_finite() || ratio <= 0.0 {
            return Err(wc_err!(
                InvalidArgument,
                "ratio must be greater than 0, got {ratio}"
            ));
        }
        if !anchor_tall.is_vertical() {
            return Err(wc_err!(
                InvalidArgument,
                "anchor `{anchor_tall}' cannot position a crop on a tall source"
            ));
        }
        if !anchor_wide.is_horizontal() {
            return Err(wc_err!(
                InvalidArgument,
                "anchor `{anchor_wide}' cannot position a crop on a wide source"
            ));
        }

        let (mut width, mut height) = size_for_ratio(source, ratio);
        if self.bounds == BoundsPolicy::Clamp {
            (width, height) = clamp_to_source(source, ratio, width, height);
        }
        tracing::trace!(%source, ratio, width, height, bounds = %self.bounds, "sized crop");
        if width == 0 || height == 0 {
            return Err(wc_err!(
                InvalidArgument,
                "ratio {ratio} leaves an empty crop region on a {source} source"
            ));
        }

        let (x, y) = if source.is_tall() {
            (0, anchor_tall.offset(source.height, height))
        } else {
            (anchor_wide.offset(source.width, width), 0)
        };
        let rect = Rect {
            x,
            y,
            width,
            height,
        };
        tracing::debug!(%source, ratio, %rect, "planned largest area");
        Ok(CropPlan::covering(rect))
    }

    /// [RegionPlanner::largest_area] with a ratio of 1.
    pub fn largest_square(
        &self,
        source: Dimensions,
        anchor_tall: Anchor,
        anchor_wide: Anchor,
    ) -> Result<CropPlan, CropError> {
        self.largest_area(source, 1.0, anchor_tall, anchor_wide)
    }

    /// Plans an explicitly given rectangle.
    /// Under [BoundsPolicy::Clamp] the rectangle must lie within the source.
    pub fn region(&self, source: Dimensions, rect: Rect) -> Result<CropPlan, CropError> {
        source.validate()?;
        rect.size().validate()?;
        if self.bounds == BoundsPolicy::Clamp && !rect.fits_within(source) {
            return Err(wc_err!(
                InvalidArgument,
                "crop region {rect} does not fit a {source} source"
            ));
        }
        Ok(CropPlan::covering(rect))
    }
}

/// [RegionPlanner::largest_area] with [BoundsPolicy::Clamp].
pub fn plan_largest_area(
    source: Dimensions,
    ratio: f64,
    anchor_tall: Anchor,
    anchor_wide: Anchor,
) -> Result<CropPlan, CropError> {
    RegionPlanner::default().largest_area(source, ratio, anchor_tall, anchor_wide)
}

/// [RegionPlanner::largest_square] with [BoundsPolicy::Clamp].
pub fn plan_largest_square(
    source: Dimensions,
    anchor_tall: Anchor,
    anchor_wide: Anchor,
) -> Result<CropPlan, CropError> {
    RegionPlanner::default().largest_square(source, anchor_tall, anchor_wide)
}

fn size_for_ratio(source: Dimensions, ratio: f64) -> (u32, u32) {
    if ratio == 1.0 {
        let side = source.width.min(source.height);
        (side, side)
    } else if ratio > 1.0 {
        (source.width, to_pixels(source.width as f64 / ratio))
    } else {
        (to_pixels(source.height as f64 * ratio), source.height)
    }
}

fn clamp_to_source(source: Dimensions, ratio: f64, width: u32, height: u32) -> (u32, u32) {
    if height > source.height {
        let height = source.height;
        (to_pixels(height as f64 * ratio).min(source.width), height)
    } else if width > source.width {
        let width = source.width;
        (width, to_pixels(width as f64 / ratio).min(source.height))
    } else {
        (width, height)
    }
}

/// Fractional pixels are truncated.
fn to_pixels(length: f64) -> u32 {
    length as u32
}
