//! `wondercrop` extracts a rectangular region from an image and writes it out as a resized thumbnail.
//!
//! The region is either given explicitly or computed as the largest rectangle of some aspect ratio
//! that the source can provide, anchored to one of its edges:
//!
//! ```
//! use wondercrop::{plan_largest_square, Anchor, Dimensions, Rect};
//!
//! let source = Dimensions::new(400, 600).unwrap();
//! let plan = plan_largest_square(source, Anchor::Center, Anchor::Left).unwrap();
//! assert_eq!(plan.source(), Rect::new(0, 100, 400, 400).unwrap());
//! ```
//!
//! [Cropper] runs the whole thing against a file or URL.

#![forbid(unsafe_code)]

pub mod anchor;
pub mod codec;
pub mod cropper;
mod decode;
mod encode;
mod encoders;
pub mod error;
pub mod fetch;
pub mod geometry;
pub mod image;
pub mod mime;
mod operations;
pub mod options;
pub mod planner;
#[cfg(test)]
mod utils;

pub use anchor::Anchor;
pub use codec::{ImageCodec, RasterCodec};
pub use cropper::{CropRequest, Cropper, DestSize, Region};
pub use error::{CropError, ErrorKind};
pub use fetch::Source;
pub use geometry::{Dimensions, Rect};
pub use mime::MimeType;
pub use options::{CropOptions, Quality};
pub use planner::{plan_largest_area, plan_largest_square, BoundsPolicy, CropPlan, RegionPlanner};
