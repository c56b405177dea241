//! Pixel operations applied to a decoded image while executing a [CropPlan](crate::planner::CropPlan)

mod crop;
mod resize;

pub(crate) use crop::crop;
pub(crate) use resize::resample;
