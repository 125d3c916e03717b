mod crs;
mod frame;

pub use crs::Crs;
pub use frame::GeoFrame;
