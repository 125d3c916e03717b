mod merge;

pub use merge::SuffixPolicy;
pub(crate) use merge::merge_tables;
