use geo::Coord;
use std::{collections::HashMap, hash::Hash};

/// lookup of the WGS84 position of a network vertex.
pub trait VertexCoordinates<V> {
    fn coordinate(&self, vertex: &V) -> Option<Coord<f64>>;
}

impl<V: Eq + Hash> VertexCoordinates<V> for HashMap<V, Coord<f64>> {
    fn coordinate(&self, vertex: &V) -> Option<Coord<f64>> {
        self.get(vertex).copied()
    }
}
