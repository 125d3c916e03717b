use geo::{BooleanOps, MultiPolygon};

/// Boolean set operation over an ordered pair of polygonal geometries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SetOp {
    Intersection,
    Union,
    Difference,
    SymmetricDifference,
}

impl SetOp {
    /// Combine an ordered pair of multipolygons. Pure; the result may be
    /// empty. `Difference` and `SymmetricDifference` are not commutative,
    /// so operand order is significant and preserved.
    ///
    /// Empty operands short-circuit with set semantics instead of calling
    /// into the clipper: union and symmetric difference return the other
    /// operand, intersection returns empty, `a - empty` is `a`, and
    /// `empty - b` is empty.
    pub fn combine(self, a: &MultiPolygon<f64>, b: &MultiPolygon<f64>) -> MultiPolygon<f64> {
        if a.0.is_empty() || b.0.is_empty() {
            return match self {
                SetOp::Intersection => MultiPolygon::new(vec![]),
                SetOp::Union | SetOp::SymmetricDifference => {
                    if a.0.is_empty() { b.clone() } else { a.clone() }
                }
                SetOp::Difference => {
                    if a.0.is_empty() { MultiPolygon::new(vec![]) } else { a.clone() }
                }
            };
        }
        match self {
            SetOp::Intersection => a.intersection(b),
            SetOp::Union => a.union(b),
            SetOp::Difference => a.difference(b),
            SetOp::SymmetricDifference => a.xor(b),
        }
    }
}
