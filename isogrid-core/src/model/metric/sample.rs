use serde::{Deserialize, Serialize};

/// base values of one reachable network vertex, before spreading off-road.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// arrival time in seconds
    pub time: f64,
    pub weight: f64,
    pub boardings: f64,
    /// walk distance in meters already spent on the network
    pub walk_distance: f64,
}

impl Sample {
    /// a unit-weight sample with no boardings or prior walking
    pub fn at_time(time: f64) -> Sample {
        Sample {
            time,
            weight: 1.0,
            boardings: 0.0,
            walk_distance: 0.0,
        }
    }
}
