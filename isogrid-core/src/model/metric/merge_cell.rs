/// folds one accumulated cell value into another. for the accumulating metrics
/// in this crate this is associative and commutative, so grids built over
/// disjoint shards of samples can be merged in any order.
pub trait MergeCell {
    fn merge_cell(&mut self, other: &Self);
}
