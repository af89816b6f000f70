use crate::model::grid::SparseGrid;

/// combines weighted sample contributions into per-cell values of a sparse grid.
///
/// the sampler decides which cells a sample reaches; an implementation of this
/// trait decides how much a sample weighs at some distance and how that
/// contribution folds into a cell.
pub trait AccumulativeMetric {
    /// base value carried by a sample point before any off-road propagation
    type Seed;
    /// accumulated value stored in each grid cell
    type Value;

    /// the value of a cell before any contribution has been accumulated.
    fn empty(&self) -> Self::Value;

    /// weight of `seed` at `distance` meters from its sample point, for an
    /// off-road radius of `radius` meters. a zero weight means the sample does
    /// not reach the cell at all.
    fn contribution_weight(&self, seed: &Self::Seed, distance: f64, radius: f64) -> f64;

    /// accumulates one weighted contribution of `seed` into `cell`.
    ///
    /// # Arguments
    ///
    /// * `cell` - current cell value, updated in place
    /// * `seed` - base value of the sample
    /// * `distance` - off-road distance in meters from the sample to the cell
    /// * `off_road_speed` - walking speed in meters per second used to cover `distance`
    /// * `weight` - weight of this contribution, see [`AccumulativeMetric::contribution_weight`]
    fn cumulate(
        &self,
        cell: &mut Self::Value,
        seed: &Self::Seed,
        distance: f64,
        off_road_speed: f64,
        weight: f64,
    );

    /// finalization pass run once after the last sample has been added.
    fn close(&self, _grid: &mut SparseGrid<Self::Value>) {}
}
