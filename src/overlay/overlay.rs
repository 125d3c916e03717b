use std::str::FromStr;

use geo::{Area, BoundingRect, Geometry, Intersects, MultiPolygon, Validation};
use polars::prelude::IdxSize;

use super::Fragment;
use crate::{
    error::{Error, Result, Side},
    frame::GeoFrame,
    geom::{SetOp, SpatialIndex},
    table::{SuffixPolicy, merge_tables},
};

/// Which regions of two polygonal layers an overlay keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayMode {
    /// Regions covered by both inputs.
    Intersection,
    /// Every region of both inputs, exactly once.
    Union,
    /// The full extent of the left input, split where the right overlaps.
    Identity,
    /// Regions covered by exactly one input.
    SymmetricDifference,
    /// Regions of the left input the right does not cover.
    Difference,
}

impl FromStr for OverlayMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "intersection" => Ok(OverlayMode::Intersection),
            "union" => Ok(OverlayMode::Union),
            "identity" => Ok(OverlayMode::Identity),
            "symmetric_difference" => Ok(OverlayMode::SymmetricDifference),
            "difference" => Ok(OverlayMode::Difference),
            _ => Err(Error::InvalidOverlayMode(s.to_string())),
        }
    }
}

impl GeoFrame {
    /// Overlay against `other` with the default suffix policy.
    pub fn overlay(&self, other: &GeoFrame, how: OverlayMode) -> Result<GeoFrame> {
        overlay(self, other, how)
    }
}

/// Overlay two polygonal frames, deriving new geometries per `how`.
pub fn overlay(left: &GeoFrame, right: &GeoFrame, how: OverlayMode) -> Result<GeoFrame> {
    overlay_with(left, right, how, &SuffixPolicy::default())
}

/// Overlay two polygonal frames with an explicit column-collision suffix
/// policy.
///
/// All preconditions are checked before any boolean geometry work: the CRS
/// identifiers must match, every row of both frames must be polygonal, and
/// every polygon must be topologically valid. A violation aborts the whole
/// call with the offending side and row id; no partial output is produced.
///
/// Fragments appear in construction order: intersection fragments first
/// (by left row, then right row), then left leftovers, then right
/// leftovers, per the mode's definition. Fragments that collapse to zero
/// area are excluded.
pub fn overlay_with(
    left: &GeoFrame,
    right: &GeoFrame,
    how: OverlayMode,
    policy: &SuffixPolicy,
) -> Result<GeoFrame> {
    left.check_crs(right)?;

    let a = polygonal(left, Side::Left)?;
    let b = polygonal(right, Side::Right)?;

    let fragments = match how {
        OverlayMode::Intersection => intersection_fragments(&a, &b),
        OverlayMode::Difference => difference_fragments(&a, &b, Side::Left),
        OverlayMode::SymmetricDifference => {
            let mut fragments = difference_fragments(&a, &b, Side::Left);
            fragments.extend(difference_fragments(&b, &a, Side::Right));
            fragments
        }
        OverlayMode::Union => {
            let mut fragments = intersection_fragments(&a, &b);
            fragments.extend(difference_fragments(&a, &b, Side::Left));
            fragments.extend(difference_fragments(&b, &a, Side::Right));
            fragments
        }
        OverlayMode::Identity => {
            let mut fragments = intersection_fragments(&a, &b);
            fragments.extend(difference_fragments(&a, &b, Side::Left));
            fragments
        }
    };

    let mut geoms = Vec::with_capacity(fragments.len());
    let mut left_rows = Vec::with_capacity(fragments.len());
    let mut right_rows = Vec::with_capacity(fragments.len());
    for fragment in fragments {
        geoms.push(Geometry::MultiPolygon(fragment.geom));
        left_rows.push(fragment.left);
        right_rows.push(fragment.right);
    }

    let table = merge_tables(left.table(), &left_rows, right.table(), &right_rows, policy)?;
    GeoFrame::new(geoms, table, left.crs().clone())
}

/// Convert every row to a multipolygon, rejecting non-polygonal rows and
/// invalid polygons with the offending row id before any clipping happens.
fn polygonal(frame: &GeoFrame, side: Side) -> Result<Vec<MultiPolygon<f64>>> {
    frame.geometries().iter().enumerate()
        .map(|(row, geom)| {
            let shape = match geom {
                Geometry::Polygon(poly) => MultiPolygon::new(vec![poly.clone()]),
                Geometry::MultiPolygon(multi) => multi.clone(),
                Geometry::Rect(rect) => MultiPolygon::new(vec![rect.to_polygon()]),
                Geometry::Triangle(tri) => MultiPolygon::new(vec![tri.to_polygon()]),
                other => {
                    return Err(Error::UnsupportedGeometryType {
                        side,
                        row,
                        found: kind_of(other),
                    });
                }
            };
            shape.check_validation().map_err(|source| Error::InvalidGeometry {
                side,
                row,
                reason: source.to_string(),
            })?;
            Ok(shape)
        })
        .collect()
}

fn kind_of(geom: &Geometry<f64>) -> &'static str {
    match geom {
        Geometry::Point(_) => "a point",
        Geometry::Line(_) => "a line",
        Geometry::LineString(_) => "a linestring",
        Geometry::MultiPoint(_) => "a multipoint",
        Geometry::MultiLineString(_) => "a multilinestring",
        Geometry::GeometryCollection(_) => "a geometry collection",
        Geometry::Polygon(_) => "a polygon",
        Geometry::MultiPolygon(_) => "a multipolygon",
        Geometry::Rect(_) => "a rectangle",
        Geometry::Triangle(_) => "a triangle",
    }
}

/// Pairwise intersections of `a` rows against `b` rows, pruned by an R-tree
/// over `b`. One fragment per pair with shared interior area, carrying both
/// source rows.
fn intersection_fragments(a: &[MultiPolygon<f64>], b: &[MultiPolygon<f64>]) -> Vec<Fragment> {
    let index = SpatialIndex::build(b);
    let mut fragments = Vec::new();

    for (i, shape_a) in a.iter().enumerate() {
        let Some(rect) = shape_a.bounding_rect() else { continue };
        for j in index.query(&rect) {
            let shape_b = &b[j];
            if !shape_a.intersects(shape_b) {
                continue;
            }
            let geom = SetOp::Intersection.combine(shape_a, shape_b);
            if geom.0.is_empty() || geom.unsigned_area() == 0.0 {
                continue;
            }
            fragments.push(Fragment {
                geom,
                left: Some(i as IdxSize),
                right: Some(j as IdxSize),
            });
        }
    }

    fragments
}

/// What remains of each `a` row once every intersecting `b` row is carved
/// out: the union of the intersecting shapes is accumulated first so each
/// row is clipped exactly once. Fully covered rows drop out. `side` says
/// which frame `a` is, so provenance lands on the correct side for modes
/// that also take the difference in the other direction.
fn difference_fragments(
    a: &[MultiPolygon<f64>],
    b: &[MultiPolygon<f64>],
    side: Side,
) -> Vec<Fragment> {
    let index = SpatialIndex::build(b);
    let mut fragments = Vec::new();

    for (i, shape_a) in a.iter().enumerate() {
        let Some(rect) = shape_a.bounding_rect() else { continue };

        let mut carved: Option<MultiPolygon<f64>> = None;
        for j in index.query(&rect) {
            let shape_b = &b[j];
            if shape_a.intersects(shape_b) {
                carved = Some(match carved {
                    Some(acc) => SetOp::Union.combine(&acc, shape_b),
                    None => shape_b.clone(),
                });
            }
        }

        let geom = match carved {
            Some(carved) => SetOp::Difference.combine(shape_a, &carved),
            None => shape_a.clone(),
        };
        if geom.0.is_empty() || geom.unsigned_area() == 0.0 {
            continue;
        }

        let row = Some(i as IdxSize);
        fragments.push(match side {
            Side::Left => Fragment { geom, left: row, right: None },
            Side::Right => Fragment { geom, left: None, right: row },
        });
    }

    fragments
}
