mod reached_state;
mod routing_request;
mod shortest_path_tree;
pub mod spt_ops;
mod vertex_coordinates;
mod vertex_kind;

pub use reached_state::ReachedState;
pub use routing_request::RoutingRequest;
pub use shortest_path_tree::ShortestPathTree;
pub use vertex_coordinates::VertexCoordinates;
pub use vertex_kind::VertexKind;

#[cfg(test)]
pub mod test_tree;
