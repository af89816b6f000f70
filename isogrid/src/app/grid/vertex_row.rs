use geo::{coord, Coord};
use serde::{Deserialize, Serialize};

/// one reachable vertex in a vertex times CSV file
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct VertexRow {
    pub vertex_id: String,
    pub longitude: f64,
    pub latitude: f64,
    /// arrival time in seconds
    pub time: i64,
}

impl VertexRow {
    pub fn coordinate(&self) -> Coord<f64> {
        coord! { x: self.longitude, y: self.latitude }
    }
}
