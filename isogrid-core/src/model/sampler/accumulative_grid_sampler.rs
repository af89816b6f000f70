use crate::model::{grid::SparseGrid, metric::AccumulativeMetric, SampleGridError};
use crate::util::geo_utils;
use geo::Coord;

/// spreads sample points over the cells of a sparse grid.
///
/// each sample reaches every cell whose anchor lies strictly within the
/// off-road radius; the metric weighs the contribution by distance and folds it
/// into the cell. the sampler owns the grid while sampling, and [`close`]
/// hands it back once the metric's finalization pass has run.
///
/// [`close`]: AccumulativeGridSampler::close
pub struct AccumulativeGridSampler<M: AccumulativeMetric> {
    grid: SparseGrid<M::Value>,
    metric: M,
    off_road_radius: f64,
}

impl<M: AccumulativeMetric> AccumulativeGridSampler<M> {
    pub fn new(
        grid: SparseGrid<M::Value>,
        metric: M,
        off_road_radius: f64,
    ) -> Result<AccumulativeGridSampler<M>, SampleGridError> {
        if !off_road_radius.is_finite() || off_road_radius <= 0.0 {
            return Err(SampleGridError::ConfigurationError(format!(
                "off-road radius must be strictly positive, found {off_road_radius} meters"
            )));
        }
        Ok(AccumulativeGridSampler {
            grid,
            metric,
            off_road_radius,
        })
    }

    pub fn off_road_radius(&self) -> f64 {
        self.off_road_radius
    }

    /// the grid as sampled so far
    pub fn grid(&self) -> &SparseGrid<M::Value> {
        &self.grid
    }

    /// adds one sample point to the grid.
    ///
    /// # Arguments
    ///
    /// * `coordinate` - WGS84 position of the sample
    /// * `seed` - base value of the sample
    /// * `off_road_speed` - speed in meters per second for walking from the sample to a cell
    ///
    /// # Returns
    ///
    /// * an error if the coordinate is not finite or the speed is not strictly positive
    pub fn add_sampling_point(
        &mut self,
        coordinate: Coord<f64>,
        seed: &M::Seed,
        off_road_speed: f64,
    ) -> Result<(), SampleGridError> {
        if !geo_utils::is_finite(&coordinate) {
            return Err(SampleGridError::InvalidCoordinate {
                x: coordinate.x,
                y: coordinate.y,
            });
        }
        if !off_road_speed.is_finite() || off_road_speed <= 0.0 {
            return Err(SampleGridError::ConfigurationError(format!(
                "off-road walk speed must be strictly positive, found {off_road_speed} m/s"
            )));
        }
        let addressing = *self.grid.addressing();
        for key in addressing.keys_within(&coordinate, self.off_road_radius) {
            let anchor = addressing.cell_anchor(&key);
            let distance = addressing.distance(&coordinate, &anchor);
            if distance >= self.off_road_radius {
                continue;
            }
            let weight = self
                .metric
                .contribution_weight(seed, distance, self.off_road_radius);
            if weight <= 0.0 {
                continue;
            }
            let metric = &self.metric;
            self.grid.upsert(
                key,
                || metric.empty(),
                |cell| metric.cumulate(cell, seed, distance, off_road_speed, weight),
            );
        }
        Ok(())
    }

    /// runs the metric's finalization pass and releases the finished grid.
    pub fn close(mut self) -> SparseGrid<M::Value> {
        self.metric.close(&mut self.grid);
        log::debug!("closed sample grid with {} cells", self.grid.len());
        self.grid
    }
}
