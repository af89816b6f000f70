use super::{linear_decay_weight, AccumulativeMetric, MergeCell, Sample};

/// weighted time / weighted distance: the running sums of one grid cell.
///
/// every field except `d` is a sum of contributions multiplied by their
/// weight; divide by `w` (see the accessor methods) to read the blended value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wtwd {
    /// total weight of all contributions
    pub w: f64,
    /// smallest off-road distance of any contribution, in meters
    pub d: f64,
    pub w_time: f64,
    pub w_boardings: f64,
    pub w_walk_dist: f64,
}

impl Default for Wtwd {
    fn default() -> Self {
        Wtwd {
            w: 0.0,
            d: f64::INFINITY,
            w_time: 0.0,
            w_boardings: 0.0,
            w_walk_dist: 0.0,
        }
    }
}

impl Wtwd {
    /// weighted average travel time in seconds
    pub fn time(&self) -> f64 {
        self.w_time / self.w
    }

    pub fn boardings(&self) -> f64 {
        self.w_boardings / self.w
    }

    /// weighted average walk distance in meters, including the off-road leg
    pub fn walk_distance(&self) -> f64 {
        self.w_walk_dist / self.w
    }
}

impl MergeCell for Wtwd {
    fn merge_cell(&mut self, other: &Self) {
        self.w += other.w;
        self.w_time += other.w_time;
        self.w_boardings += other.w_boardings;
        self.w_walk_dist += other.w_walk_dist;
        self.d = self.d.min(other.d);
    }
}

/// accumulates [`Sample`]s into [`Wtwd`] cells. the off-road leg from the
/// sample to a cell is walked at the given speed and added to the sample time;
/// contributions decay linearly to zero weight at the off-road radius.
#[derive(Debug, Default, Clone, Copy)]
pub struct WtwdMetric;

impl AccumulativeMetric for WtwdMetric {
    type Seed = Sample;
    type Value = Wtwd;

    fn empty(&self) -> Wtwd {
        Wtwd::default()
    }

    fn contribution_weight(&self, seed: &Sample, distance: f64, radius: f64) -> f64 {
        linear_decay_weight(seed.weight, distance, radius)
    }

    fn cumulate(
        &self,
        cell: &mut Wtwd,
        seed: &Sample,
        distance: f64,
        off_road_speed: f64,
        weight: f64,
    ) {
        let extra_time = distance / off_road_speed;
        cell.w += weight;
        cell.w_time += weight * (seed.time + extra_time);
        cell.w_boardings += weight * seed.boardings;
        cell.w_walk_dist += weight * (seed.walk_distance + distance);
        if distance < cell.d {
            cell.d = distance;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Wtwd, WtwdMetric};
    use crate::model::metric::{AccumulativeMetric, MergeCell, Sample};

    fn contribute(cell: &mut Wtwd, sample: &Sample, distance: f64) {
        let metric = WtwdMetric;
        let weight = metric.contribution_weight(sample, distance, 210.0);
        metric.cumulate(cell, sample, distance, 1.0, weight);
    }

    #[test]
    fn test_empty_cell() {
        let cell = WtwdMetric.empty();
        assert_eq!(cell.w, 0.0);
        assert_eq!(cell.d, f64::INFINITY);
        assert_eq!(cell.w_time, 0.0);
    }

    #[test]
    fn test_single_contribution_adds_walk_time() {
        let mut cell = Wtwd::default();
        let sample = Sample {
            time: 600.0,
            weight: 1.0,
            boardings: 2.0,
            walk_distance: 40.0,
        };
        contribute(&mut cell, &sample, 100.0);
        assert!((cell.time() - 700.0).abs() < 1e-9);
        assert!((cell.boardings() - 2.0).abs() < 1e-9);
        assert!((cell.walk_distance() - 140.0).abs() < 1e-9);
        assert_eq!(cell.d, 100.0);
    }

    #[test]
    fn test_accumulation_is_commutative() {
        let a = Sample::at_time(600.0);
        let b = Sample::at_time(620.0);
        let mut ab = Wtwd::default();
        contribute(&mut ab, &a, 30.0);
        contribute(&mut ab, &b, 80.0);
        let mut ba = Wtwd::default();
        contribute(&mut ba, &b, 80.0);
        contribute(&mut ba, &a, 30.0);
        assert_eq!(ab, ba);
    }

    #[test]
    fn test_repeated_sample_keeps_effective_time() {
        let sample = Sample::at_time(600.0);
        let mut once = Wtwd::default();
        contribute(&mut once, &sample, 50.0);
        let mut twice = once;
        contribute(&mut twice, &sample, 50.0);
        assert_eq!(twice.w, 2.0 * once.w);
        assert!((twice.time() - once.time()).abs() < 1e-9);
        assert_eq!(twice.d, once.d);
    }

    #[test]
    fn test_closer_sample_dominates_blend() {
        let mut cell = Wtwd::default();
        contribute(&mut cell, &Sample::at_time(600.0), 10.0);
        contribute(&mut cell, &Sample::at_time(900.0), 200.0);
        let t = cell.time();
        assert!(t > 610.0 && t < 750.0, "blended time {t} should lean toward the near sample");
        assert_eq!(cell.d, 10.0);
    }

    #[test]
    fn test_merge_cell_matches_sequential_accumulation() {
        let a = Sample::at_time(600.0);
        let b = Sample::at_time(640.0);
        let mut sequential = Wtwd::default();
        contribute(&mut sequential, &a, 20.0);
        contribute(&mut sequential, &b, 60.0);
        let mut left = Wtwd::default();
        contribute(&mut left, &a, 20.0);
        let mut right = Wtwd::default();
        contribute(&mut right, &b, 60.0);
        left.merge_cell(&right);
        assert!((left.w - sequential.w).abs() < 1e-12);
        assert!((left.time() - sequential.time()).abs() < 1e-9);
        assert_eq!(left.d, sequential.d);
    }
}
