use std::io::Write;

use image::codecs::gif::GifEncoder;
use image::{DynamicImage, ExtendedColorType};

use crate::{encoders::common::to_8bit_rgb_maybe_a, error::CropError, wc_try};

pub fn encode<W: Write>(pixels: &DynamicImage, writer: &mut W) -> Result<(), CropError> {
    let mut encoder = GifEncoder::new_with_speed(writer, 10);
    let width = pixels.width();
    let height = pixels.height();

    let converted = to_8bit_rgb_maybe_a(pixels);
    match converted.as_ref() {
        DynamicImage::ImageRgb8(data) => {
            wc_try!(
                EncodeFailure,
                encoder.encode(data.as_raw(), width, height, ExtendedColorType::Rgb8)
            )
        }
        DynamicImage::ImageRgba8(data) => {
            wc_try!(
                EncodeFailure,
                encoder.encode(data.as_raw(), width, height, ExtendedColorType::Rgba8)
            )
        }
        _ => unreachable!(), // we've just converted it to RGB(A)
    };
    // the GIF trailer is written when the encoder is dropped
    drop(encoder);
    Ok(())
}
