mod accumulative_metric;
mod merge_cell;
mod sample;
mod scalar_time;
mod wtwd;

pub use accumulative_metric::AccumulativeMetric;
pub use merge_cell::MergeCell;
pub use sample::Sample;
pub use scalar_time::{ScalarTime, ScalarTimeMetric};
pub use wtwd::{Wtwd, WtwdMetric};

/// weight of a single contribution at `distance` meters from its sample when
/// influence is spread over `radius` meters. decays linearly from the sample's
/// base weight down to zero at the radius; anything at or beyond the radius
/// contributes nothing.
pub fn linear_decay_weight(base_weight: f64, distance: f64, radius: f64) -> f64 {
    if distance >= radius || base_weight <= 0.0 {
        0.0
    } else {
        base_weight * (1.0 - distance / radius)
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_linear_decay_weight() {
        assert_eq!(super::linear_decay_weight(1.0, 0.0, 210.0), 1.0);
        assert_eq!(super::linear_decay_weight(1.0, 105.0, 210.0), 0.5);
        assert_eq!(super::linear_decay_weight(1.0, 210.0, 210.0), 0.0);
        assert_eq!(super::linear_decay_weight(1.0, 500.0, 210.0), 0.0);
        assert_eq!(super::linear_decay_weight(0.0, 10.0, 210.0), 0.0);
    }
}
