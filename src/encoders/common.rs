//! Helpers shared between all encoders

use std::borrow::Cow;

use image::DynamicImage;

/// Converts the input image to Rgb8, or keeps it as Luma8 if it already is.
/// For formats that cannot store transparency or high bit depth.
pub(crate) fn to_8bit_opaque(pixels: &DynamicImage) -> Cow<'_, DynamicImage> {
    use image::DynamicImage::*;
    match pixels {
        ImageRgb8(_) | ImageLuma8(_) => Cow::Borrowed(pixels),
        _ => Cow::Owned(ImageRgb8(pixels.to_rgb8())),
    }
}

/// Converts the input image to Rgba8 or Rgb8, depending on whether its pixel format has an alpha channel.
pub(crate) fn to_8bit_rgb_maybe_a(pixels: &DynamicImage) -> Cow<'_, DynamicImage> {
    use image::DynamicImage::*;
    match pixels {
        ImageRgb8(_) | ImageRgba8(_) => Cow::Borrowed(pixels),
        _ if pixels.color().has_alpha() => Cow::Owned(ImageRgba8(pixels.to_rgba8())),
        _ => Cow::Owned(ImageRgb8(pixels.to_rgb8())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::ColorType;

    #[test]
    fn test_conversions() {
        let rgba16 = DynamicImage::new(2, 2, ColorType::Rgba16);
        assert_eq!(to_8bit_opaque(&rgba16).color(), ColorType::Rgb8);
        assert_eq!(to_8bit_rgb_maybe_a(&rgba16).color(), ColorType::Rgba8);

        let luma = DynamicImage::new(2, 2, ColorType::L8);
        assert!(matches!(to_8bit_opaque(&luma), Cow::Borrowed(_)));
        assert_eq!(to_8bit_rgb_maybe_a(&luma).color(), ColorType::Rgb8);
    }
}
