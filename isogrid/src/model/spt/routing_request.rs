use geo::Coord;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// the parameters of the query that produced a shortest path tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutingRequest {
    /// query origin (x = longitude, y = latitude)
    pub from: Coord<f64>,
    /// max walk distance in meters
    pub max_walk_distance: f64,
    /// walk speed in meters per second
    pub walk_speed: f64,
    /// departure time as seconds since the unix epoch
    pub date_time: i64,
    pub router_id: Option<String>,
    /// query parameters as sent by the user, kept for reference only
    #[serde(default)]
    pub parameters: HashMap<String, String>,
}
