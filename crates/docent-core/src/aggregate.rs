//! Partition aggregation.
//!
//! Authored content is split across partition files; each partition is an
//! ordered list of categories. Aggregation concatenates them in partition
//! order. Nothing is reordered, deduplicated, or validated here: colliding
//! category ids survive into the output and are reported by `docent-lint`.

use crate::entities::DocCategory;

/// Concatenate partitions in the order given.
///
/// The result length is the sum of the partition lengths, and the element
/// order is every category of the first partition, then the second, and so on.
pub fn aggregate_partitions<I>(partitions: I) -> Vec<DocCategory>
where
    I: IntoIterator<Item = Vec<DocCategory>>,
{
    partitions.into_iter().flatten().collect()
}
