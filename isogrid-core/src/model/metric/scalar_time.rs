use super::{linear_decay_weight, AccumulativeMetric, MergeCell, Sample};

/// a lighter cell value carrying only a weighted travel time.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct ScalarTime {
    pub w: f64,
    pub w_time: f64,
}

impl ScalarTime {
    pub fn time(&self) -> f64 {
        self.w_time / self.w
    }
}

impl MergeCell for ScalarTime {
    fn merge_cell(&mut self, other: &Self) {
        self.w += other.w;
        self.w_time += other.w_time;
    }
}

/// accumulates only travel time, ignoring boardings and walk distance.
#[derive(Debug, Default, Clone, Copy)]
pub struct ScalarTimeMetric;

impl AccumulativeMetric for ScalarTimeMetric {
    type Seed = Sample;
    type Value = ScalarTime;

    fn empty(&self) -> ScalarTime {
        ScalarTime::default()
    }

    fn contribution_weight(&self, seed: &Sample, distance: f64, radius: f64) -> f64 {
        linear_decay_weight(seed.weight, distance, radius)
    }

    fn cumulate(
        &self,
        cell: &mut ScalarTime,
        seed: &Sample,
        distance: f64,
        off_road_speed: f64,
        weight: f64,
    ) {
        cell.w += weight;
        cell.w_time += weight * (seed.time + distance / off_road_speed);
    }
}

#[cfg(test)]
mod tests {
    use super::{ScalarTime, ScalarTimeMetric};
    use crate::model::metric::{AccumulativeMetric, Sample, Wtwd, WtwdMetric};

    #[test]
    fn test_agrees_with_wtwd_time() {
        let samples = [(Sample::at_time(300.0), 15.0), (Sample::at_time(420.0), 90.0)];
        let mut scalar = ScalarTime::default();
        let mut wtwd = Wtwd::default();
        for (sample, distance) in samples.iter() {
            let w = ScalarTimeMetric.contribution_weight(sample, *distance, 240.0);
            ScalarTimeMetric.cumulate(&mut scalar, sample, *distance, 1.3, w);
            let w = WtwdMetric.contribution_weight(sample, *distance, 240.0);
            WtwdMetric.cumulate(&mut wtwd, sample, *distance, 1.3, w);
        }
        assert!((scalar.time() - wtwd.time()).abs() < 1e-9);
    }
}
