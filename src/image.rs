use image::DynamicImage;

use crate::{geometry::Dimensions, mime::MimeType};

#[derive(Debug, Clone)]
pub struct SourceImage {
    /// Format the pixels were decoded from
    pub mime: MimeType,
    pub pixels: DynamicImage,
}

impl SourceImage {
    pub fn dimensions(&self) -> Dimensions {
        Dimensions {
            width: self.pixels.width(),
            height: self.pixels.height(),
        }
    }
}
