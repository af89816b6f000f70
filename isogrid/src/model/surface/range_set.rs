use super::TimeSurface;

/// min, average and max time surfaces returned together for one profile query.
#[derive(Debug)]
pub struct RangeSet<V> {
    pub min: TimeSurface<V>,
    pub avg: TimeSurface<V>,
    pub max: TimeSurface<V>,
}
