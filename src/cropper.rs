use std::path::Path;

use crate::{
    anchor::Anchor,
    codec::{ImageCodec, RasterCodec},
    encode,
    error::CropError,
    fetch::{self, Source, SourceFetcher},
    geometry::{Dimensions, Rect},
    mime::MimeType,
    options::CropOptions,
    planner::{CropPlan, RegionPlanner},
};

/// Which part of the source to crop.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Region {
    /// A rectangle given in source pixels.
    Explicit(Rect),
    /// The largest rectangle of `ratio` (width / height) the source can provide,
    /// see [RegionPlanner::largest_area].
    LargestArea {
        ratio: f64,
        anchor_tall: Anchor,
        anchor_wide: Anchor,
    },
}

impl Region {
    pub fn largest_square(anchor_tall: Anchor, anchor_wide: Anchor) -> Self {
        Region::LargestArea {
            ratio: 1.0,
            anchor_tall,
            anchor_wide,
        }
    }
}

/// Size of the written image.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub enum DestSize {
    /// Same size as the cropped region.
    #[default]
    Crop,
    Exact(Dimensions),
    /// Percentage of the cropped region, e.g. 50 for half.
    Relative(f64),
}

/// Everything needed to plan a crop once the source dimensions are known.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CropRequest {
    pub region: Region,
    pub dest_size: DestSize,
    /// Where the crop is pasted inside the destination canvas
    pub dest_offset: (u32, u32),
}

impl CropRequest {
    pub fn new(region: Region) -> Self {
        Self {
            region,
            dest_size: DestSize::default(),
            dest_offset: (0, 0),
        }
    }

    pub fn dest_size(self, dest_size: DestSize) -> Self {
        Self { dest_size, ..self }
    }

    pub fn dest_offset(self, x: u32, y: u32) -> Self {
        Self {
            dest_offset: (x, y),
            ..self
        }
    }

    pub fn plan(&self, source: Dimensions, planner: RegionPlanner) -> Result<CropPlan, CropError> {
        let plan = match self.region {
            Region::Explicit(rect) => planner.region(source, rect)?,
            Region::LargestArea {
                ratio,
                anchor_tall,
                anchor_wide,
            } => planner.largest_area(source, ratio, anchor_tall, anchor_wide)?,
        };
        let plan = match self.dest_size {
            DestSize::Crop => plan,
            DestSize::Exact(size) => plan.with_dest_size(size)?,
            DestSize::Relative(percentage) => plan.with_relative_size(percentage)?,
        };
        let (x, y) = self.dest_offset;
        Ok(plan.with_dest_offset(x, y))
    }
}

/// The result of a crop that was kept in memory.
#[derive(Debug, Clone)]
pub struct Cropped {
    pub plan: CropPlan,
    pub mime: MimeType,
    pub bytes: Vec<u8>,
}

/// Runs crop requests end to end: resolve the source, decode it, plan, resample, encode.
///
/// Any failure aborts the whole operation. Nothing is retried.
pub struct Cropper<C = RasterCodec> {
    codec: C,
    fetcher: Option<Box<dyn SourceFetcher>>,
    pub options: CropOptions,
}

impl Cropper<RasterCodec> {
    /// A cropper backed by the `image` crate that only accepts local sources.
    pub fn new(options: CropOptions) -> Self {
        Self::with_codec(RasterCodec, options)
    }

    /// Like [Cropper::new], but also downloads `http(s)://` sources.
    #[cfg(feature = "fetch")]
    pub fn with_http(options: CropOptions) -> Result<Self, CropError> {
        Ok(Self::new(options).fetcher(fetch::HttpFetcher::new()?))
    }
}

impl<C: ImageCodec> Cropper<C> {
    pub fn with_codec(codec: C, options: CropOptions) -> Self {
        Self {
            codec,
            fetcher: None,
            options,
        }
    }

    pub fn fetcher(self, fetcher: impl SourceFetcher + 'static) -> Self {
        Self {
            fetcher: Some(Box::new(fetcher)),
            ..self
        }
    }

    /// Crops `source` and returns the encoded image without writing it anywhere.
    pub fn crop_to_bytes(
        &self,
        source: &Source,
        request: &CropRequest,
    ) -> Result<Cropped, CropError> {
        // keeps a downloaded source alive until decoding is done
        let resolved = fetch::resolve(source, self.fetcher.as_deref())?;
        tracing::trace!(
            path = %resolved.path().display(),
            downloaded = resolved.is_download(),
            "resolved source"
        );
        let decoded = self.codec.decode(resolved.path())?;
        drop(resolved);

        let plan = request.plan(decoded.dimensions, RegionPlanner::new(self.options.bounds))?;
        let resampled = self.codec.resample(&decoded.image, &plan)?;
        let mime = self.options.output_mime_for(decoded.mime);
        drop(decoded);

        let bytes = self.codec.encode(&resampled, mime, self.options.quality)?;
        Ok(Cropped { plan, mime, bytes })
    }

    /// Crops `source` and writes the result to `dest`.
    /// `dest` is only created or replaced once encoding has succeeded.
    pub fn crop(
        &self,
        source: &Source,
        request: &CropRequest,
        dest: &Path,
    ) -> Result<CropPlan, CropError> {
        let cropped = self.crop_to_bytes(source, request)?;
        encode::write_atomically(&cropped.bytes, dest)?;
        tracing::debug!(
            source = ?source,
            crop = %cropped.plan.source(),
            dest_size = %cropped.plan.dest_size(),
            mime = %cropped.mime,
            dest = %dest.display(),
            "wrote crop"
        );
        Ok(cropped.plan)
    }
}
