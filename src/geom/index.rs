use geo::{BoundingRect, Rect};
use rstar::{AABB, RTree};

use super::BoundingBox;

/// Bulk-loaded R-tree over the bounding boxes of one geometry collection.
///
/// Queries are a conservative pre-filter: they may return rows whose exact
/// geometry does not satisfy a predicate, but never miss a row that does.
/// Rows with an empty geometry carry no bounding box and are left out of the
/// tree, which is sound because an empty geometry matches nothing. Immutable
/// once built.
#[derive(Debug, Clone)]
pub struct SpatialIndex {
    rtree: RTree<BoundingBox>,
}

impl SpatialIndex {
    /// Bulk-load an index over a slice of geometries. Rows are identified by
    /// their position in the slice.
    pub fn build<G>(geoms: &[G]) -> Self
    where
        G: BoundingRect<f64, Output = Option<Rect<f64>>>,
    {
        Self {
            rtree: RTree::bulk_load(
                geoms.iter().enumerate()
                    .filter_map(|(row, geom)| Some(BoundingBox::new(row, geom.bounding_rect()?)))
                    .collect(),
            ),
        }
    }

    /// Row indices whose bounding box intersects `rect`, in ascending row
    /// order so downstream output is deterministic.
    pub fn query(&self, rect: &Rect<f64>) -> Vec<usize> {
        let envelope = AABB::from_corners(rect.min().into(), rect.max().into());
        let mut rows: Vec<usize> = self.rtree
            .locate_in_envelope_intersecting(&envelope)
            .map(|bbox| bbox.row())
            .collect();
        rows.sort_unstable();
        rows
    }
}

#[cfg(test)]
mod tests {
    use geo::{Geometry, MultiPolygon, Rect, point};

    use super::SpatialIndex;

    #[test]
    fn query_returns_sorted_candidates() {
        let geoms = vec![
            Geometry::Point(point!(x: 0.0, y: 0.0)),
            Geometry::Point(point!(x: 5.0, y: 5.0)),
            Geometry::Point(point!(x: 0.5, y: 0.5)),
        ];
        let index = SpatialIndex::build(&geoms);
        let rows = index.query(&Rect::new((-1.0, -1.0), (1.0, 1.0)));
        assert_eq!(rows, vec![0, 2]);
    }

    #[test]
    fn empty_collection_yields_empty_queries() {
        let index = SpatialIndex::build(&Vec::<Geometry<f64>>::new());
        assert!(index.query(&Rect::new((0.0, 0.0), (10.0, 10.0))).is_empty());
    }

    #[test]
    fn empty_geometries_are_left_out() {
        let geoms = vec![
            Geometry::MultiPolygon(MultiPolygon::<f64>::new(vec![])),
            Geometry::Point(point!(x: 0.0, y: 0.0)),
        ];
        let index = SpatialIndex::build(&geoms);
        assert_eq!(index.query(&Rect::new((-1.0, -1.0), (1.0, 1.0))), vec![1]);
    }

    #[test]
    fn degenerate_point_boxes_still_match() {
        let geoms = vec![Geometry::Point(point!(x: 1.0, y: 1.0))];
        let index = SpatialIndex::build(&geoms);
        // Query box whose corner only touches the point's zero-area box.
        assert_eq!(index.query(&Rect::new((1.0, 1.0), (2.0, 2.0))), vec![0]);
    }
}
