use geo::MultiPolygon;
use polars::prelude::IdxSize;

/// One piece of overlay output: a derived geometry plus the source row on
/// each side it came from. A missing side marks a leftover region that only
/// the other input covers.
#[derive(Debug, Clone)]
pub(super) struct Fragment {
    pub geom: MultiPolygon<f64>,
    pub left: Option<IdxSize>,
    pub right: Option<IdxSize>,
}
