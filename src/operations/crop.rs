use image::DynamicImage;

use crate::{error::CropError, geometry::Rect, image::SourceImage, wc_err};

pub fn crop(image: &SourceImage, rect: Rect) -> Result<DynamicImage, CropError> {
    // `crop_imm` silently shrinks out-of-bounds regions instead of failing,
    // so a plan that does not fit has to be caught here
    let canvas = image.dimensions();
    if !rect.fits_within(canvas) {
        return Err(wc_err!(
            InvalidArgument,
            "crop region {rect} exceeds the {canvas} source"
        ));
    }
    Ok(image
        .pixels
        .crop_imm(rect.x, rect.y, rect.width, rect.height))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::ErrorKind, mime::MimeType};
    use image::{GenericImageView, Rgb, RgbImage};

    fn gradient(width: u32, height: u32) -> SourceImage {
        let pixels = RgbImage::from_fn(width, height, |x, y| Rgb([x as u8, y as u8, 0]));
        SourceImage {
            mime: MimeType::Png,
            pixels: DynamicImage::ImageRgb8(pixels),
        }
    }

    #[test]
    fn test_crop_takes_the_requested_pixels() {
        let image = gradient(40, 60);
        let cropped = crop(&image, Rect::new(5, 10, 20, 30).unwrap()).unwrap();
        assert_eq!(cropped.dimensions(), (20, 30));
        assert_eq!(cropped.to_rgb8().get_pixel(0, 0), &Rgb([5, 10, 0]));
        assert_eq!(cropped.to_rgb8().get_pixel(19, 29), &Rgb([24, 39, 0]));
    }

    #[test]
    fn test_out_of_bounds_is_rejected() {
        let image = gradient(40, 60);
        let err = crop(&image, Rect::new(0, 0, 40, 61).unwrap()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert!(crop(&image, Rect::new(21, 0, 20, 20).unwrap()).is_err());
    }
}
