use std::str::FromStr;

use geo::{Contains, Geometry, HasDimensions, Intersects, Relate, Within};

use crate::error::Error;

/// Binary spatial predicate relating an ordered pair of geometries.
///
/// A closed set: callers holding a predicate name go through `FromStr`,
/// which rejects anything outside the set before geometric work starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Predicate {
    Intersects,
    Within,
    Contains,
    Crosses,
    Touches,
    Overlaps,
}

impl Predicate {
    /// Evaluate the predicate for an ordered pair of geometries. Pure.
    ///
    /// Empty geometries relate to nothing: any predicate with an empty
    /// operand evaluates false.
    pub fn evaluate(self, a: &Geometry<f64>, b: &Geometry<f64>) -> bool {
        if a.is_empty() || b.is_empty() {
            return false;
        }
        match self {
            Predicate::Intersects => a.intersects(b),
            Predicate::Within => a.is_within(b),
            Predicate::Contains => a.contains(b),
            // The remaining predicates have no direct algorithm in the
            // kernel; one relate() call gives the full DE-9IM.
            Predicate::Crosses => a.relate(b).is_crosses(),
            Predicate::Touches => a.relate(b).is_touches(),
            Predicate::Overlaps => a.relate(b).is_overlaps(),
        }
    }
}

impl FromStr for Predicate {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "intersects" => Ok(Predicate::Intersects),
            "within" => Ok(Predicate::Within),
            "contains" => Ok(Predicate::Contains),
            "crosses" => Ok(Predicate::Crosses),
            "touches" => Ok(Predicate::Touches),
            "overlaps" => Ok(Predicate::Overlaps),
            _ => Err(Error::UnsupportedPredicate(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use geo::{Geometry, MultiPolygon, line_string, point, polygon};

    use super::Predicate;
    use crate::error::Error;

    fn square(x0: f64, y0: f64, x1: f64, y1: f64) -> Geometry<f64> {
        Geometry::Polygon(polygon![
            (x: x0, y: y0), (x: x1, y: y0), (x: x1, y: y1), (x: x0, y: y1),
        ])
    }

    #[test]
    fn point_in_polygon() {
        let poly = square(0.0, 0.0, 4.0, 4.0);
        let inside = Geometry::Point(point!(x: 2.0, y: 2.0));
        let outside = Geometry::Point(point!(x: 9.0, y: 9.0));

        assert!(Predicate::Intersects.evaluate(&poly, &inside));
        assert!(Predicate::Contains.evaluate(&poly, &inside));
        assert!(Predicate::Within.evaluate(&inside, &poly));
        assert!(!Predicate::Within.evaluate(&poly, &inside));
        assert!(!Predicate::Intersects.evaluate(&poly, &outside));
    }

    #[test]
    fn touching_squares_touch_but_do_not_overlap() {
        let a = square(0.0, 0.0, 1.0, 1.0);
        let b = square(1.0, 0.0, 2.0, 1.0);
        assert!(Predicate::Touches.evaluate(&a, &b));
        assert!(Predicate::Intersects.evaluate(&a, &b));
        assert!(!Predicate::Overlaps.evaluate(&a, &b));
    }

    #[test]
    fn partially_overlapping_squares_overlap() {
        let a = square(0.0, 0.0, 2.0, 2.0);
        let b = square(1.0, 1.0, 3.0, 3.0);
        assert!(Predicate::Overlaps.evaluate(&a, &b));
        assert!(!Predicate::Touches.evaluate(&a, &b));
    }

    #[test]
    fn line_crosses_polygon() {
        let poly = square(0.0, 0.0, 2.0, 2.0);
        let line = Geometry::LineString(line_string![
            (x: -1.0, y: 1.0), (x: 3.0, y: 1.0),
        ]);
        assert!(Predicate::Crosses.evaluate(&line, &poly));
    }

    #[test]
    fn empty_geometry_satisfies_nothing() {
        let empty = Geometry::MultiPolygon(MultiPolygon::<f64>::new(vec![]));
        let poly = square(0.0, 0.0, 1.0, 1.0);
        assert!(!Predicate::Intersects.evaluate(&empty, &poly));
        assert!(!Predicate::Intersects.evaluate(&poly, &empty));
        assert!(!Predicate::Intersects.evaluate(&empty, &empty));
    }

    #[test]
    fn unknown_names_are_rejected_at_parse() {
        assert_eq!("within".parse::<Predicate>().unwrap(), Predicate::Within);
        let err = "dwithin".parse::<Predicate>().unwrap_err();
        assert!(matches!(err, Error::UnsupportedPredicate(name) if name == "dwithin"));
    }
}
