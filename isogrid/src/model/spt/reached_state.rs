use super::VertexKind;
use geo::Coord;

/// one state of a shortest path tree: a vertex reached at some time.
/// the same vertex may appear in several states reached along different paths.
#[derive(Debug, Clone)]
pub struct ReachedState<V> {
    pub vertex: V,
    pub coordinate: Coord<f64>,
    /// active travel time in seconds since departure
    pub time: i64,
    pub kind: VertexKind,
}
