use super::{AnalystContext, RangeSet, TimeRange};
use crate::model::{
    builder::{self, SampleGridConfig},
    spt::{spt_ops, RoutingRequest, ShortestPathTree, VertexCoordinates},
    TimeSurfaceError,
};
use chrono::{DateTime, Utc};
use geo::{coord, Coord};
use isogrid_core::model::{grid::SparseGrid, metric::Wtwd};
use std::{collections::HashMap, fmt::Debug, hash::Hash, time::Instant};

pub const DEFAULT_CUTOFF_MINUTES: u32 = 90;
pub const DEFAULT_ROUTER_ID: &str = "default";
/// meters per second
pub const DEFAULT_WALK_SPEED: f64 = 1.33;
/// meters walked on the street network before boarding, between transfers and after alighting
pub const DEFAULT_MAX_WALK_DISTANCE: f64 = 800.0;

/// a travel time surface: the earliest arrival time at each reachable vertex
/// of a one-to-many search, plus optionally the same times sampled onto a
/// regular grid for isoline extraction.
///
/// a surface is immutable once built, apart from attaching its sample grid,
/// which may happen at most once.
#[derive(Debug)]
pub struct TimeSurface<V> {
    id: u64,
    router_id: String,
    times: HashMap<V, i64>,
    lat: f64,
    lon: f64,
    cutoff_minutes: u32,
    date_time: i64,
    generated_at: DateTime<Utc>,
    params: HashMap<String, String>,
    walk_speed: f64,
    max_walk_distance: Option<f64>,
    description: Option<String>,
    sample_grid: Option<SparseGrid<Wtwd>>,
}

impl<V: Clone + Eq + Hash + Debug> TimeSurface<V> {
    /// creates a time surface from the street and transit stop vertices of a
    /// shortest path tree, keeping the earliest arrival at each vertex.
    ///
    /// # Arguments
    ///
    /// * `spt` - search result to read arrival times from
    /// * `context` - shared id generator and sample grid configuration
    /// * `make_sample_grid` - if true, also sample the tree onto a grid
    ///
    /// # Returns
    ///
    /// * the surface, or an error if the sample grid could not be built
    pub fn from_spt<T>(
        spt: &T,
        context: &AnalystContext,
        make_sample_grid: bool,
    ) -> Result<TimeSurface<V>, TimeSurfaceError>
    where
        T: ShortestPathTree<Vertex = V>,
    {
        let start = Instant::now();
        let mut surface = Self::from_request(spt.request(), context);
        surface.times = spt_ops::earliest_arrivals(spt)
            .into_iter()
            .map(|(vertex, _, time)| (vertex, time))
            .collect();
        log::info!(
            "made time surface {} with {} vertices from shortest path tree in {} msec",
            surface.id,
            surface.times.len(),
            start.elapsed().as_millis()
        );
        if make_sample_grid {
            let grid = builder::make_sample_grid(spt, context.sample_grid_config())?;
            surface.sample_grid = Some(grid);
        }
        Ok(surface)
    }

    /// creates an empty time surface with no request behind it, for times
    /// filled from other sources. the walk speed is the default one and the
    /// walk distance is unlimited.
    pub fn new(
        origin: Coord<f64>,
        router_id: Option<&str>,
        date_time: i64,
        context: &AnalystContext,
    ) -> TimeSurface<V> {
        TimeSurface {
            id: context.next_surface_id(),
            router_id: normalize_router_id(router_id),
            times: HashMap::new(),
            lat: origin.y,
            lon: origin.x,
            cutoff_minutes: DEFAULT_CUTOFF_MINUTES,
            date_time,
            generated_at: Utc::now(),
            params: HashMap::new(),
            walk_speed: DEFAULT_WALK_SPEED,
            max_walk_distance: None,
            description: None,
            sample_grid: None,
        }
    }

    /// creates an empty time surface for the origin, time and router of a request.
    pub fn from_request(request: &RoutingRequest, context: &AnalystContext) -> TimeSurface<V> {
        let mut surface = Self::new(
            request.from,
            request.router_id.as_deref(),
            request.date_time,
            context,
        );
        surface.params = request.parameters.clone();
        surface.walk_speed = request.walk_speed;
        surface.max_walk_distance = Some(request.max_walk_distance);
        surface
    }

    /// records an arrival time, keeping the earlier one if the vertex is already present.
    pub fn insert_time(&mut self, vertex: V, time: i64) {
        let entry = self.times.entry(vertex).or_insert(time);
        if time < *entry {
            *entry = time;
        }
    }

    /// creates a time surface from precomputed arrival times.
    pub fn from_times(
        request: &RoutingRequest,
        times: HashMap<V, i64>,
        cutoff_minutes: u32,
        context: &AnalystContext,
    ) -> TimeSurface<V> {
        let mut surface = Self::from_request(request, context);
        surface.times = times;
        surface.cutoff_minutes = cutoff_minutes;
        surface
    }

    /// splits the propagated time ranges of a profile search into best case,
    /// expected and worst case surfaces.
    pub fn range_set(
        request: &RoutingRequest,
        propagated_times: &HashMap<V, TimeRange>,
        cutoff_minutes: u32,
        context: &AnalystContext,
    ) -> RangeSet<V> {
        let mut min = Self::from_times(request, HashMap::new(), cutoff_minutes, context);
        let mut avg = Self::from_times(request, HashMap::new(), cutoff_minutes, context);
        let mut max = Self::from_times(request, HashMap::new(), cutoff_minutes, context);
        for (vertex, range) in propagated_times.iter() {
            min.times.insert(vertex.clone(), range.min);
            avg.times.insert(vertex.clone(), range.avg);
            max.times.insert(vertex.clone(), range.max);
        }
        min.description =
            Some(String::from("Travel times assuming best luck (never waiting for a transfer)."));
        avg.description =
            Some(String::from("Expected travel times (average wait for every transfer)."));
        max.description = Some(String::from(
            "Travel times assuming worst luck (maximum wait for every transfer).",
        ));
        RangeSet { min, avg, max }
    }

    /// samples the vertex times already in this surface onto a grid anchored
    /// at the surface origin. this covers network intersections only, so it is
    /// coarser than the grid built alongside [`TimeSurface::from_spt`].
    ///
    /// # Arguments
    ///
    /// * `coordinates` - position lookup for every vertex of the surface
    /// * `config` - sample grid parameters
    ///
    /// # Returns
    ///
    /// * an error if the surface already has a grid or a vertex has no position
    pub fn make_sample_grid_without_spt<C: VertexCoordinates<V>>(
        &mut self,
        coordinates: &C,
        config: &SampleGridConfig,
    ) -> Result<(), TimeSurfaceError> {
        if self.sample_grid.is_some() {
            return Err(TimeSurfaceError::SampleGridAlreadyBuilt(self.id));
        }
        let grid =
            builder::make_sample_grid_without_spt(&self.times, coordinates, self.origin(), config)?;
        self.sample_grid = Some(grid);
        Ok(())
    }
}

impl<V: Eq + Hash> TimeSurface<V> {
    /// arrival time in seconds, or None if the vertex was not reached
    pub fn get_time(&self, vertex: &V) -> Option<i64> {
        self.times.get(vertex).copied()
    }

    pub fn times(&self) -> &HashMap<V, i64> {
        &self.times
    }
}

impl<V> TimeSurface<V> {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn router_id(&self) -> &str {
        &self.router_id
    }

    /// surface origin (x = longitude, y = latitude)
    pub fn origin(&self) -> Coord<f64> {
        coord! { x: self.lon, y: self.lat }
    }

    pub fn cutoff_minutes(&self) -> u32 {
        self.cutoff_minutes
    }

    /// departure time as seconds since the unix epoch
    pub fn date_time(&self) -> i64 {
        self.date_time
    }

    pub fn generated_at(&self) -> &DateTime<Utc> {
        &self.generated_at
    }

    pub fn params(&self) -> &HashMap<String, String> {
        &self.params
    }

    pub fn walk_speed(&self) -> f64 {
        self.walk_speed
    }

    /// network walk limit in meters of the request behind this surface, or
    /// None when the surface was not built from a request
    pub fn max_walk_distance(&self) -> Option<f64> {
        self.max_walk_distance
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn sample_grid(&self) -> Option<&SparseGrid<Wtwd>> {
        self.sample_grid.as_ref()
    }

    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }
}

/// an empty router id, or any casing of "default", refers to the default router
fn normalize_router_id(router_id: Option<&str>) -> String {
    match router_id {
        Some(id) if !id.is_empty() && !id.eq_ignore_ascii_case(DEFAULT_ROUTER_ID) => id.to_string(),
        _ => String::from(DEFAULT_ROUTER_ID),
    }
}
