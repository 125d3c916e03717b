use thiserror::Error;

use crate::frame::Crs;

/// Which input frame a per-row error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Left => f.write_str("left"),
            Side::Right => f.write_str("right"),
        }
    }
}

/// Errors produced by frame construction, spatial joins, and overlays.
///
/// Preconditions (CRS equality, mode/predicate names, geometry types) are
/// checked before any geometric work; a fatal error means no partial output
/// was produced. Zero matches for a row is not an error.
#[derive(Debug, Error)]
pub enum Error {
    #[error("CRS mismatch: left frame is {left}, right frame is {right}")]
    CrsMismatch { left: Crs, right: Crs },

    #[error("invalid join mode {0:?}, expected one of: left, right, inner")]
    InvalidJoinMode(String),

    #[error(
        "invalid overlay mode {0:?}, expected one of: intersection, union, identity, symmetric_difference, difference"
    )]
    InvalidOverlayMode(String),

    #[error(
        "unsupported predicate {0:?}, expected one of: intersects, within, contains, crosses, touches, overlaps"
    )]
    UnsupportedPredicate(String),

    #[error("row {row} of the {side} frame is {found}; overlay requires polygonal geometries")]
    UnsupportedGeometryType {
        side: Side,
        row: usize,
        found: &'static str,
    },

    #[error("row {row} of the {side} frame has an invalid geometry: {reason}")]
    InvalidGeometry {
        side: Side,
        row: usize,
        reason: String,
    },

    #[error("frame has {geoms} geometries but its table has {rows} rows")]
    LengthMismatch { geoms: usize, rows: usize },

    #[error(transparent)]
    Table(#[from] polars::error::PolarsError),
}

pub type Result<T> = std::result::Result<T, Error>;
