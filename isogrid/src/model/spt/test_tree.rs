use super::{ReachedState, RoutingRequest, ShortestPathTree, VertexKind};
use geo::Coord;
use std::collections::{HashMap, HashSet};

/// in-memory shortest path tree over integer vertex ids
pub struct TestTree {
    pub states: Vec<ReachedState<u64>>,
    pub request: RoutingRequest,
}

impl TestTree {
    pub fn new(from: Coord<f64>) -> TestTree {
        TestTree {
            states: vec![],
            request: RoutingRequest {
                from,
                max_walk_distance: 800.0,
                walk_speed: 1.33,
                date_time: 1_700_000_000,
                router_id: None,
                parameters: HashMap::new(),
            },
        }
    }

    pub fn with_state(mut self, vertex: u64, coordinate: Coord<f64>, time: i64, kind: VertexKind) -> TestTree {
        self.states.push(ReachedState {
            vertex,
            coordinate,
            time,
            kind,
        });
        self
    }
}

impl ShortestPathTree for TestTree {
    type Vertex = u64;

    fn all_states(&self) -> Box<dyn Iterator<Item = ReachedState<u64>> + '_> {
        Box::new(self.states.iter().cloned())
    }

    fn vertex_count(&self) -> usize {
        self.states.iter().map(|s| s.vertex).collect::<HashSet<_>>().len()
    }

    fn request(&self) -> &RoutingRequest {
        &self.request
    }
}
