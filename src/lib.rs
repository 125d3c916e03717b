#![doc = "Geoframe public API"]
mod error;
mod frame;
mod geom;
mod join;
mod overlay;
mod table;

#[doc(inline)]
pub use error::{Error, Result, Side};

#[doc(inline)]
pub use frame::{Crs, GeoFrame};

#[doc(inline)]
pub use geom::{Predicate, SetOp, SpatialIndex};

#[doc(inline)]
pub use join::{JoinMode, spatial_join, spatial_join_with};

#[doc(inline)]
pub use overlay::{OverlayMode, overlay, overlay_with};

#[doc(inline)]
pub use table::SuffixPolicy;
