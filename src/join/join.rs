use std::str::FromStr;

use geo::BoundingRect;
use polars::prelude::IdxSize;
use smallvec::SmallVec;

use crate::{
    error::{Error, Result},
    frame::GeoFrame,
    geom::{Predicate, SpatialIndex},
    table::{SuffixPolicy, merge_tables},
};

/// Which side's rows survive a join unmatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinMode {
    /// Keep every left row; unmatched ones get a null right side.
    Left,
    /// Keep every right row; unmatched ones get a null left side.
    Right,
    /// Keep matched pairs only.
    Inner,
}

impl FromStr for JoinMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "left" => Ok(JoinMode::Left),
            "right" => Ok(JoinMode::Right),
            "inner" => Ok(JoinMode::Inner),
            _ => Err(Error::InvalidJoinMode(s.to_string())),
        }
    }
}

impl GeoFrame {
    /// Spatial join against `other` with the default suffix policy.
    pub fn join(&self, other: &GeoFrame, predicate: Predicate, how: JoinMode) -> Result<GeoFrame> {
        spatial_join(self, other, predicate, how)
    }
}

/// Pair rows of two frames by a spatial predicate.
pub fn spatial_join(
    left: &GeoFrame,
    right: &GeoFrame,
    predicate: Predicate,
    how: JoinMode,
) -> Result<GeoFrame> {
    spatial_join_with(left, right, predicate, how, &SuffixPolicy::default())
}

/// Pair rows of two frames by a spatial predicate, with an explicit
/// column-collision suffix policy.
///
/// An R-tree over the non-driving side prunes candidate pairs by bounding
/// box; every candidate is then re-checked with the exact predicate, so the
/// pre-filter never changes the result. A driving row with several matches
/// emits one output row per match. The output keeps the driving side's
/// geometry and row order; matches within one driving row follow the other
/// side's row order. The predicate always sees its arguments as
/// (left geometry, right geometry), whichever side drives.
pub fn spatial_join_with(
    left: &GeoFrame,
    right: &GeoFrame,
    predicate: Predicate,
    how: JoinMode,
    policy: &SuffixPolicy,
) -> Result<GeoFrame> {
    left.check_crs(right)?;

    let (driving, other) = match how {
        JoinMode::Left | JoinMode::Inner => (left, right),
        JoinMode::Right => (right, left),
    };

    let pairs = match_rows(
        driving,
        other,
        predicate,
        how == JoinMode::Right,
        how != JoinMode::Inner,
    );

    let geoms = pairs.iter()
        .map(|&(row, _)| driving.geometries()[row as usize].clone())
        .collect();
    let driving_rows: Vec<Option<IdxSize>> = pairs.iter().map(|&(row, _)| Some(row)).collect();
    let other_rows: Vec<Option<IdxSize>> = pairs.iter().map(|&(_, row)| row).collect();

    // Attribute blocks stay in (left, right) order regardless of which side
    // drove the scan.
    let table = match how {
        JoinMode::Right => merge_tables(other.table(), &other_rows, driving.table(), &driving_rows, policy)?,
        _ => merge_tables(driving.table(), &driving_rows, other.table(), &other_rows, policy)?,
    };

    GeoFrame::new(geoms, table, driving.crs().clone())
}

/// Scan the driving side against an index over the other side, producing one
/// pair per exact-predicate match, plus an unmatched pair per driving row
/// with no matches when `keep_unmatched` holds.
fn match_rows(
    driving: &GeoFrame,
    other: &GeoFrame,
    predicate: Predicate,
    swapped: bool,
    keep_unmatched: bool,
) -> Vec<(IdxSize, Option<IdxSize>)> {
    let index = SpatialIndex::build(other.geometries());
    let mut pairs = Vec::new();

    for (row, geom) in driving.geometries().iter().enumerate() {
        let mut matches: SmallVec<[usize; 8]> = SmallVec::new();
        if let Some(rect) = geom.bounding_rect() {
            for candidate in index.query(&rect) {
                let other_geom = &other.geometries()[candidate];
                let hit = if swapped {
                    predicate.evaluate(other_geom, geom)
                } else {
                    predicate.evaluate(geom, other_geom)
                };
                if hit {
                    matches.push(candidate);
                }
            }
        }

        if matches.is_empty() {
            if keep_unmatched {
                pairs.push((row as IdxSize, None));
            }
        } else {
            pairs.extend(matches.iter().map(|&m| (row as IdxSize, Some(m as IdxSize))));
        }
    }

    pairs
}
