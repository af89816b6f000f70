use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VertexKind {
    Street,
    TransitStop,
    /// internal routing vertices such as transit hops or boarding states
    Other,
}

impl VertexKind {
    /// street and transit stop vertices are real places on the map; other
    /// vertices are routing artifacts that would pollute a travel time grid.
    pub fn is_sampled(&self) -> bool {
        matches!(self, VertexKind::Street | VertexKind::TransitStop)
    }
}
