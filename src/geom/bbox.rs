use geo::Rect;
use rstar::{AABB, RTreeObject};

/// An axis-aligned bounding box in the R-tree, tagged with the row index of
/// the geometry it was derived from.
#[derive(Debug, Clone)]
pub(super) struct BoundingBox {
    row: usize,
    rect: Rect<f64>,
}

impl BoundingBox {
    pub(super) fn new(row: usize, rect: Rect<f64>) -> Self {
        Self { row, rect }
    }

    /// Get the row index of the corresponding geometry.
    #[inline] pub(super) fn row(&self) -> usize { self.row }
}

impl RTreeObject for BoundingBox {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners(self.rect.min().into(), self.rect.max().into())
    }
}
