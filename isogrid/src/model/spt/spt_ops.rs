use super::ShortestPathTree;
use geo::Coord;
use std::collections::HashMap;

/// collects the earliest arrival time of every street and transit stop vertex
/// in a shortest path tree, in the order vertices are first reached.
///
/// # Arguments
///
/// * `spt` - the tree to read from
///
/// # Returns
///
/// * one `(vertex, coordinate, time)` entry per sampled vertex
pub fn earliest_arrivals<T: ShortestPathTree>(spt: &T) -> Vec<(T::Vertex, Coord<f64>, i64)> {
    let mut index: HashMap<T::Vertex, usize> = HashMap::new();
    let mut result: Vec<(T::Vertex, Coord<f64>, i64)> = Vec::new();
    for state in spt.all_states().filter(|s| s.kind.is_sampled()) {
        match index.get(&state.vertex) {
            Some(idx) => {
                let entry = &mut result[*idx];
                if state.time < entry.2 {
                    entry.2 = state.time;
                }
            }
            None => {
                index.insert(state.vertex.clone(), result.len());
                result.push((state.vertex, state.coordinate, state.time));
            }
        }
    }
    result
}
