use ahash::AHashSet;
use polars::prelude::*;

/// Name of the provenance column holding each output row's left source row.
const ROW_ID_LEFT: &str = "row_id_left";
/// Name of the provenance column holding each output row's right source row.
const ROW_ID_RIGHT: &str = "row_id_right";

/// How to rename attribute columns whose names appear in both inputs.
///
/// Renaming applies to colliding names only; unique names pass through
/// untouched. Resolution is deterministic and independent of any geometry.
#[derive(Debug, Clone)]
pub struct SuffixPolicy {
    pub left: &'static str,
    pub right: &'static str,
}

impl Default for SuffixPolicy {
    fn default() -> Self {
        Self { left: "_left", right: "_right" }
    }
}

impl SuffixPolicy {
    /// Resolve the output name of every column from both inputs. Returns
    /// one output name per input column, per side, in input column order.
    pub fn resolve(&self, left: &[&str], right: &[&str]) -> (Vec<String>, Vec<String>) {
        let left_set: AHashSet<&str> = left.iter().copied().collect();
        let right_set: AHashSet<&str> = right.iter().copied().collect();

        fn rename(names: &[&str], other: &AHashSet<&str>, suffix: &str) -> Vec<String> {
            names.iter()
                .map(|&name| {
                    if other.contains(name) {
                        format!("{name}{suffix}")
                    } else {
                        name.to_string()
                    }
                })
                .collect()
        }

        (
            rename(left, &right_set, self.left),
            rename(right, &left_set, self.right),
        )
    }
}

/// Gather one output row per (left, right) source pairing and glue the two
/// attribute blocks side by side.
///
/// `left_rows` and `right_rows` run in output-row order; a `None` on either
/// side yields nulls across that side's columns and a null provenance id.
/// Colliding column names are suffixed per `policy`; `row_id_left` and
/// `row_id_right` are appended for traceability. A name that still collides
/// after suffixing surfaces as a polars duplicate-column error.
pub(crate) fn merge_tables(
    left: &DataFrame,
    left_rows: &[Option<IdxSize>],
    right: &DataFrame,
    right_rows: &[Option<IdxSize>],
    policy: &SuffixPolicy,
) -> PolarsResult<DataFrame> {
    debug_assert_eq!(left_rows.len(), right_rows.len());

    let left_names = left.get_column_names_str();
    let right_names = right.get_column_names_str();
    let (left_out, right_out) = policy.resolve(&left_names, &right_names);

    let left_idx = IdxCa::from_iter_options(ROW_ID_LEFT.into(), left_rows.iter().copied());
    let right_idx = IdxCa::from_iter_options(ROW_ID_RIGHT.into(), right_rows.iter().copied());

    let mut columns = Vec::with_capacity(left_names.len() + right_names.len() + 2);
    columns.extend(gather_side(left, &left_idx, &left_out)?);
    columns.extend(gather_side(right, &right_idx, &right_out)?);
    columns.push(left_idx.into_series().into());
    columns.push(right_idx.into_series().into());

    DataFrame::new(columns)
}

/// Gather one side's attribute rows, renamed to their resolved output names.
/// A side with no matches at all is materialized as full-null columns, which
/// also covers gathering from a zero-row table.
fn gather_side(df: &DataFrame, idx: &IdxCa, names: &[String]) -> PolarsResult<Vec<Column>> {
    if idx.null_count() == idx.len() {
        return Ok(df.get_columns().iter()
            .zip(names)
            .map(|(col, name)| {
                Series::full_null(name.as_str().into(), idx.len(), col.dtype()).into()
            })
            .collect());
    }

    let mut columns = df.take(idx)?.get_columns().to_vec();
    for (col, name) in columns.iter_mut().zip(names) {
        col.rename(name.as_str().into());
    }
    Ok(columns)
}

#[cfg(test)]
mod tests {
    use polars::prelude::*;

    use super::{SuffixPolicy, merge_tables};

    #[test]
    fn collisions_are_suffixed_and_unique_names_pass_through() {
        let policy = SuffixPolicy::default();
        let (left, right) = policy.resolve(&["id", "pop"], &["id", "name"]);
        assert_eq!(left, vec!["id_left".to_string(), "pop".to_string()]);
        assert_eq!(right, vec!["id_right".to_string(), "name".to_string()]);
    }

    #[test]
    fn custom_suffixes_apply() {
        let policy = SuffixPolicy { left: "_a", right: "_b" };
        let (left, right) = policy.resolve(&["zone"], &["zone"]);
        assert_eq!(left, vec!["zone_a".to_string()]);
        assert_eq!(right, vec!["zone_b".to_string()]);
    }

    #[test]
    fn gathers_rows_and_nulls_unmatched_sides() {
        let left = df!("pop" => &[10i64, 20]).unwrap();
        let right = df!("name" => &["a", "b"]).unwrap();

        let out = merge_tables(
            &left,
            &[Some(0), Some(1)],
            &right,
            &[Some(1), None],
            &SuffixPolicy::default(),
        )
        .unwrap();

        assert_eq!(out.height(), 2);
        assert_eq!(out.column("pop").unwrap().i64().unwrap().get(1), Some(20));
        assert_eq!(out.column("name").unwrap().str().unwrap().get(0), Some("b"));
        assert!(out.column("name").unwrap().str().unwrap().get(1).is_none());
        assert_eq!(out.column("row_id_left").unwrap().u32().unwrap().get(1), Some(1));
        assert!(out.column("row_id_right").unwrap().u32().unwrap().get(1).is_none());
    }

    #[test]
    fn duplicated_source_rows_are_gathered_repeatedly() {
        let left = df!("pop" => &[10i64]).unwrap();
        let right = df!("zone" => &[1i64, 2]).unwrap();

        let out = merge_tables(
            &left,
            &[Some(0), Some(0)],
            &right,
            &[Some(0), Some(1)],
            &SuffixPolicy::default(),
        )
        .unwrap();

        assert_eq!(out.height(), 2);
        assert_eq!(out.column("pop").unwrap().i64().unwrap().get(0), Some(10));
        assert_eq!(out.column("pop").unwrap().i64().unwrap().get(1), Some(10));
        assert_eq!(out.column("zone").unwrap().i64().unwrap().get(1), Some(2));
    }

    #[test]
    fn fully_unmatched_side_handles_empty_tables() {
        let left = df!("pop" => &[1i64, 2]).unwrap();
        let right = df!("name" => &Vec::<String>::new()).unwrap();

        let out = merge_tables(
            &left,
            &[Some(0), Some(1)],
            &right,
            &[None, None],
            &SuffixPolicy::default(),
        )
        .unwrap();

        assert_eq!(out.height(), 2);
        assert_eq!(out.column("name").unwrap().null_count(), 2);
        assert_eq!(out.column("row_id_right").unwrap().null_count(), 2);
    }
}
