//! The seam between planning a crop and touching pixels.
//!
//! [Cropper](crate::cropper::Cropper) only talks to an [ImageCodec], so the raster work
//! can be swapped out (or faked in tests) without touching the planning logic.

use std::path::Path;

use crate::{
    decode, encode,
    error::CropError,
    geometry::Dimensions,
    image::SourceImage,
    mime::MimeType,
    operations,
    options::Quality,
    planner::CropPlan,
};

/// An image decoded by a codec, with the facts about it the planner needs.
#[derive(Debug, Clone)]
pub struct Decoded<I> {
    pub dimensions: Dimensions,
    pub mime: MimeType,
    pub image: I,
}

pub trait ImageCodec {
    type Image;

    /// Fails with `UnsupportedFormat` for types outside of [MimeType], `DecodeFailure` for corrupt data.
    fn decode(&self, path: &Path) -> Result<Decoded<Self::Image>, CropError>;

    /// Extracts `plan.source()` and resamples it into a new image of `plan.dest_size()`.
    /// Fails with `InvalidArgument` if the plan does not fit the image
    /// or the destination is too large to allocate.
    fn resample(&self, src: &Self::Image, plan: &CropPlan) -> Result<Self::Image, CropError>;

    fn encode(&self, image: &Self::Image, mime: MimeType, quality: Quality)
        -> Result<Vec<u8>, CropError>;
}

/// [ImageCodec] backed by the `image` crate.
#[derive(Debug, Default, Copy, Clone)]
pub struct RasterCodec;

impl ImageCodec for RasterCodec {
    type Image = SourceImage;

    fn decode(&self, path: &Path) -> Result<Decoded<SourceImage>, CropError> {
        let image = decode::decode(path)?;
        Ok(Decoded {
            dimensions: image.dimensions(),
            mime: image.mime,
            image,
        })
    }

    fn resample(&self, src: &SourceImage, plan: &CropPlan) -> Result<SourceImage, CropError> {
        let cropped = operations::crop(src, plan.source())?;
        Ok(SourceImage {
            mime: src.mime,
            pixels: operations::resample(cropped, plan)?,
        })
    }

    fn encode(
        &self,
        image: &SourceImage,
        mime: MimeType,
        quality: Quality,
    ) -> Result<Vec<u8>, CropError> {
        encode::encode(&image.pixels, mime, quality)
    }
}
