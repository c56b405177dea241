use image::{imageops::FilterType, ColorType, DynamicImage, Limits};

use crate::{error::CropError, planner::CropPlan, wc_err};

/// Resamples an already cropped image to the destination size of `plan`
/// and pastes it at the destination offset.
///
/// Fails with `InvalidArgument` if the buffers for the destination size would exceed
/// the allocation limit `image` applies when decoding.
pub fn resample(cropped: DynamicImage, plan: &CropPlan) -> Result<DynamicImage, CropError> {
    let dest = plan.dest_size();
    let mut limits = Limits::default();
    let reserve = |limits: &mut Limits, width: u32, height: u32, color: ColorType| {
        limits.reserve_buffer(width, height, color).map_err(|error| {
            wc_err!(
                InvalidArgument,
                "destination size {dest} is too large: {error}"
            )
        })
    };

    let resized = if cropped.width() == dest.width && cropped.height() == dest.height {
        cropped
    } else {
        // resize_exact goes through a floating point RGBA buffer of the source width
        reserve(&mut limits, cropped.width(), dest.height, ColorType::Rgba32F)?;
        reserve(&mut limits, dest.width, dest.height, cropped.color())?;
        cropped.resize_exact(dest.width, dest.height, FilterType::CatmullRom)
    };

    match plan.dest_offset() {
        (0, 0) => Ok(resized),
        (x, y) => {
            reserve(&mut limits, dest.width, dest.height, resized.color())?;
            // the canvas keeps the destination size, so the pasted crop is clipped
            let mut canvas = DynamicImage::new(dest.width, dest.height, resized.color());
            image::imageops::overlay(&mut canvas, &resized, x as i64, y as i64);
            Ok(canvas)
        }
    }
}
