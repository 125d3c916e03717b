use std::{fmt, sync::Arc};

/// Identifier of the coordinate reference system a frame's coordinates are
/// expressed in. Compared by value only; no reprojection is ever attempted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Crs(Arc<str>);

impl Crs {
    /// Build a CRS identifier from an EPSG code.
    pub fn epsg(code: u32) -> Self {
        Self(format!("EPSG:{code}").into())
    }

    #[inline] pub fn as_str(&self) -> &str { &self.0 }
}

impl From<&str> for Crs {
    fn from(s: &str) -> Self { Self(s.into()) }
}

impl fmt::Display for Crs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.0) }
}

#[cfg(test)]
mod tests {
    use super::Crs;

    #[test]
    fn epsg_codes_compare_by_value() {
        assert_eq!(Crs::epsg(4326), Crs::from("EPSG:4326"));
        assert_ne!(Crs::epsg(4326), Crs::epsg(3857));
        assert_eq!(Crs::epsg(4269).as_str(), "EPSG:4269");
    }
}
