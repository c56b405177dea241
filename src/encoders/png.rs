use std::borrow::Cow;
use std::io::Write;

use image::codecs::png::PngEncoder;
use image::DynamicImage;

use crate::{encoders::common::to_8bit_rgb_maybe_a, error::CropError, wc_try};

pub fn encode<W: Write>(pixels: &DynamicImage, writer: &mut W) -> Result<(), CropError> {
    let encoder = PngEncoder::new(writer);
    // PNG stores up to 16 bits per channel, only floating-point images need converting
    let pixels = match pixels {
        DynamicImage::ImageRgb32F(_) | DynamicImage::ImageRgba32F(_) => {
            to_8bit_rgb_maybe_a(pixels)
        }
        _ => Cow::Borrowed(pixels),
    };
    Ok(wc_try!(EncodeFailure, pixels.write_with_encoder(encoder)))
}
