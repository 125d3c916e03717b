use geo::Geometry;
use polars::frame::DataFrame;

use super::Crs;
use crate::error::{Error, Result};

/// An ordered collection of geometries with one attribute row per geometry,
/// all expressed in a single coordinate reference system.
///
/// Row ids are positional: the geometry at index `i` owns table row `i`.
/// They are assigned at construction and never change afterwards. A row's
/// geometry may be empty (e.g. an empty `MultiPolygon`); empty geometries
/// satisfy no predicate and contribute nothing to an overlay.
#[derive(Debug, Clone)]
pub struct GeoFrame {
    geoms: Vec<Geometry<f64>>,
    table: DataFrame,
    crs: Crs,
}

impl GeoFrame {
    /// Bind geometries to an attribute table. Fails if the table height does
    /// not match the number of geometries.
    pub fn new(geoms: Vec<Geometry<f64>>, table: DataFrame, crs: Crs) -> Result<Self> {
        if table.height() != geoms.len() {
            return Err(Error::LengthMismatch { geoms: geoms.len(), rows: table.height() });
        }
        Ok(Self { geoms, table, crs })
    }

    /// Get the number of rows.
    #[inline] pub fn len(&self) -> usize { self.geoms.len() }

    /// Check if there are no rows.
    #[inline] pub fn is_empty(&self) -> bool { self.geoms.is_empty() }

    /// Get a reference to the list of geometries, in row order.
    #[inline] pub fn geometries(&self) -> &[Geometry<f64>] { &self.geoms }

    /// Get the geometry of a single row.
    #[inline] pub fn geometry(&self, row: usize) -> Option<&Geometry<f64>> { self.geoms.get(row) }

    /// Get a reference to the attribute table.
    #[inline] pub fn table(&self) -> &DataFrame { &self.table }

    /// Get the coordinate reference system identifier.
    #[inline] pub fn crs(&self) -> &Crs { &self.crs }

    /// Verify both frames share one CRS before any geometric comparison.
    pub(crate) fn check_crs(&self, other: &GeoFrame) -> Result<()> {
        if self.crs != other.crs {
            return Err(Error::CrsMismatch {
                left: self.crs.clone(),
                right: other.crs.clone(),
            });
        }
        Ok(())
    }
}
