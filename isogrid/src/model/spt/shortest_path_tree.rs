use super::{ReachedState, RoutingRequest};
use std::hash::Hash;

/// read access to the result of a one-to-many search.
pub trait ShortestPathTree {
    type Vertex: Clone + Eq + Hash;

    /// every state in the tree. vertices reached by more than one path appear
    /// once per state.
    fn all_states(&self) -> Box<dyn Iterator<Item = ReachedState<Self::Vertex>> + '_>;

    fn vertex_count(&self) -> usize;

    fn request(&self) -> &RoutingRequest;
}
