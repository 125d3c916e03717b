mod bbox;
mod boolean;
mod index;
mod predicate;

use bbox::BoundingBox;
pub use boolean::SetOp;
pub use index::SpatialIndex;
pub use predicate::Predicate;
