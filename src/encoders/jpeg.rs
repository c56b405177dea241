use std::io::Write;

use image::codecs::jpeg::JpegEncoder;
use image::DynamicImage;

use crate::{encoders::common::to_8bit_opaque, error::CropError, options::Quality, wc_try};

pub fn encode<W: Write>(
    pixels: &DynamicImage,
    writer: &mut W,
    quality: Quality,
) -> Result<(), CropError> {
    let encoder = JpegEncoder::new_with_quality(writer, quality.get());
    // JPEG has no alpha channel, and the encoder rejects anything but 8-bit RGB and grayscale
    let pixels = to_8bit_opaque(pixels);
    Ok(wc_try!(EncodeFailure, pixels.write_with_encoder(encoder)))
}
