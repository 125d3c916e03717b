mod join;

pub use join::{JoinMode, spatial_join, spatial_join_with};
