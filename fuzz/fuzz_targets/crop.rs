#![no_main]

use std::num::NonZeroU8;

use arbitrary::Arbitrary;
use image::{GenericImageView, ImageFormat, RgbImage};
use libfuzzer_sys::fuzz_target;
use wondercrop::{
    Anchor, CropOptions, CropRequest, Cropper, DestSize, Dimensions, Region, Source,
};

#[derive(Debug, Arbitrary)]
struct Input {
    width: NonZeroU8,
    height: NonZeroU8,
    ratio: f64,
    dest_width: NonZeroU8,
    dest_height: NonZeroU8,
}

fuzz_target!(|input: Input| {
    let temp_directory = tempfile::tempdir().expect("failed to create temporary directory");
    let input_path = temp_directory.path().join("input_image.png");
    let output_path = temp_directory.path().join("output_image.png");
    RgbImage::new(input.width.get() as u32, input.height.get() as u32)
        .save_with_format(&input_path, ImageFormat::Png)
        .expect("failed to save image as PNG");

    let dest = Dimensions::new(input.dest_width.get() as u32, input.dest_height.get() as u32)
        .expect("non-zero by construction");
    let request = CropRequest::new(Region::LargestArea {
        ratio: input.ratio,
        anchor_tall: Anchor::Center,
        anchor_wide: Anchor::Center,
    })
    .dest_size(DestSize::Exact(dest));

    let result = Cropper::new(CropOptions::default()).crop(
        &Source::from(input_path.as_path()),
        &request,
        &output_path,
    );
    match result {
        Ok(_) => {
            let written = image::open(&output_path).expect("could not open the output file");
            assert_eq!(written.dimensions(), (dest.width, dest.height));
        }
        Err(_) => assert!(!output_path.exists()),
    }
});
