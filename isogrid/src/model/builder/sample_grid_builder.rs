use super::SampleGridConfig;
use crate::model::{
    spt::{spt_ops, ShortestPathTree, VertexCoordinates},
    TimeSurfaceError,
};
use geo::Coord;
use isogrid_core::model::{
    grid::{GridAddressing, SparseGrid},
    metric::{Sample, Wtwd, WtwdMetric},
    sampler::AccumulativeGridSampler,
    SampleGridError,
};
use itertools::Itertools;
use std::{collections::HashMap, fmt::Debug, hash::Hash, time::Instant};

/// spreads samples over a new WTWD grid anchored at `origin`.
///
/// samples are added in a canonical order (by position, then time) so that
/// the floating point sums in each cell do not depend on the order of the input.
///
/// # Arguments
///
/// * `samples` - sample positions and their base values
/// * `capacity` - expected number of cells, used to pre-size the grid
/// * `origin` - grid origin; its latitude fixes the longitude cell size
/// * `config` - cell size and off-road walk speed
/// * `off_road_radius` - radius in meters over which each sample spreads
///
/// # Returns
///
/// * the closed grid, empty if there were no samples
pub fn build_sample_grid<I>(
    samples: I,
    capacity: usize,
    origin: Coord<f64>,
    config: &SampleGridConfig,
    off_road_radius: f64,
) -> Result<SparseGrid<Wtwd>, SampleGridError>
where
    I: IntoIterator<Item = (Coord<f64>, Sample)>,
{
    let addressing = GridAddressing::new(origin, config.cell_size_meters)?;
    log::debug!(
        "sampling grid with origin ({}, {}), cell size {:?}, off-road radius {off_road_radius}m",
        origin.x,
        origin.y,
        addressing.cell_size()
    );
    let grid = SparseGrid::with_capacity(addressing, capacity);
    let mut sampler = AccumulativeGridSampler::new(grid, WtwdMetric, off_road_radius)?;
    let ordered = samples.into_iter().sorted_by(|(a, sa), (b, sb)| {
        a.x.total_cmp(&b.x)
            .then(a.y.total_cmp(&b.y))
            .then(sa.time.total_cmp(&sb.time))
    });
    for (coordinate, sample) in ordered {
        sampler.add_sampling_point(coordinate, &sample, config.off_road_walk_speed)?;
    }
    Ok(sampler.close())
}

/// builds a sample grid from every street and transit stop vertex of a
/// shortest path tree, anchored at the query origin.
pub fn make_sample_grid<T: ShortestPathTree>(
    spt: &T,
    config: &SampleGridConfig,
) -> Result<SparseGrid<Wtwd>, TimeSurfaceError> {
    let start = Instant::now();
    config.validate()?;
    let samples = spt_ops::earliest_arrivals(spt)
        .into_iter()
        .map(|(_, coordinate, time)| (coordinate, Sample::at_time(time as f64)));
    let grid = build_sample_grid(
        samples,
        spt.vertex_count(),
        spt.request().from,
        config,
        config.spt_off_road_radius(),
    )?;
    log::info!(
        "made sample grid with {} cells from shortest path tree in {} msec",
        grid.len(),
        start.elapsed().as_millis()
    );
    Ok(grid)
}

/// builds a sample grid from vertex/time pairs alone, for when the shortest
/// path tree is no longer available. only network intersections contribute,
/// with no points along street geometries, so the result is coarser than
/// [`make_sample_grid`]; a looser off-road radius partly compensates.
///
/// # Arguments
///
/// * `times` - arrival time in seconds per vertex
/// * `coordinates` - position lookup for every vertex in `times`
/// * `origin` - grid origin
/// * `config` - sample grid parameters
///
/// # Returns
///
/// * the grid, or an error if a vertex has no known position
pub fn make_sample_grid_without_spt<V, C>(
    times: &HashMap<V, i64>,
    coordinates: &C,
    origin: Coord<f64>,
    config: &SampleGridConfig,
) -> Result<SparseGrid<Wtwd>, TimeSurfaceError>
where
    V: Eq + Hash + Debug,
    C: VertexCoordinates<V>,
{
    let start = Instant::now();
    config.validate()?;
    let samples = times
        .iter()
        .map(|(vertex, time)| {
            coordinates
                .coordinate(vertex)
                .map(|coordinate| (coordinate, Sample::at_time(*time as f64)))
                .ok_or_else(|| TimeSurfaceError::MissingVertexCoordinate(format!("{vertex:?}")))
        })
        .collect::<Result<Vec<_>, TimeSurfaceError>>()?;
    let grid = build_sample_grid(
        samples,
        times.len(),
        origin,
        config,
        config.map_off_road_radius(),
    )?;
    log::info!(
        "made scalar sample grid with {} cells from {} vertex times in {} msec",
        grid.len(),
        times.len(),
        start.elapsed().as_millis()
    );
    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::SampleGridConfig;
    use crate::model::spt::{test_tree::TestTree, VertexKind};
    use crate::model::TimeSurfaceError;
    use geo::{coord, Coord};
    use isogrid_core::util::geo_utils;
    use itertools::Itertools;
    use std::collections::HashMap;

    fn meters_east(origin: Coord<f64>, meters: f64) -> Coord<f64> {
        let cos_lat = origin.y.to_radians().cos();
        coord! { x: origin.x + geo_utils::meters_to_degrees_latitude(meters) / cos_lat, y: origin.y }
    }

    #[test]
    fn test_grid_from_tree_ignores_internal_vertices() {
        let origin = coord! { x: -105.0, y: 39.7 };
        let tree = TestTree::new(origin)
            .with_state(1, origin, 0, VertexKind::Street)
            .with_state(2, meters_east(origin, 5_000.0), 60, VertexKind::Other);
        let grid = super::make_sample_grid(&tree, &SampleGridConfig::default()).unwrap();
        let addressing = *grid.addressing();
        assert!(!grid.is_empty());
        for (key, cell) in grid.iter() {
            let d = addressing.distance(&origin, &addressing.cell_anchor(key));
            assert!(d < 210.0, "cell {key} at {d}m is outside the off-road radius");
            assert!(cell.time() < 210.0);
        }
    }

    #[test]
    fn test_grid_from_tree_uses_earliest_arrival() {
        let origin = coord! { x: 0.0, y: 0.0 };
        let position = coord! { x: 0.0027, y: 0.0 };
        let tree = TestTree::new(origin)
            .with_state(7, position, 900, VertexKind::Street)
            .with_state(7, position, 600, VertexKind::Street);
        let grid = super::make_sample_grid(&tree, &SampleGridConfig::default()).unwrap();
        let key = grid.addressing().cell_key_for(&position);
        let cell = grid.get(&key).unwrap();
        assert!((cell.time() - 600.0).abs() < 1.0, "found {}", cell.time());
        assert_eq!(cell.w, grid.iter().map(|(_, c)| c.w).fold(0.0, f64::max));
    }

    #[test]
    fn test_map_path_uses_looser_radius() {
        let origin = coord! { x: 0.0, y: 0.0 };
        let config = SampleGridConfig::default();
        let position = coord! { x: 0.0100, y: 0.0100 };
        let times = HashMap::from([(1_u64, 600_i64)]);
        let coordinates = HashMap::from([(1_u64, position)]);
        let from_map =
            super::make_sample_grid_without_spt(&times, &coordinates, origin, &config).unwrap();
        let tree = TestTree::new(origin).with_state(1, position, 600, VertexKind::Street);
        let from_tree = super::make_sample_grid(&tree, &config).unwrap();

        let addressing = *from_map.addressing();
        let max_map = from_map
            .keys()
            .map(|k| addressing.distance(&position, &addressing.cell_anchor(k)))
            .fold(0.0, f64::max);
        assert!(max_map < config.map_off_road_radius());
        assert!(from_map.len() >= from_tree.len());
        for key in from_tree.keys() {
            assert!(from_map.get(key).is_some());
        }
    }

    #[test]
    fn test_map_path_is_independent_of_map_order() {
        let origin = coord! { x: 0.0, y: 0.0 };
        let config = SampleGridConfig::default();
        let times = (0..50_u64).map(|v| (v, 600 + 7 * v as i64)).collect::<HashMap<_, _>>();
        let coordinates = (0..50_u64)
            .map(|v| (v, coord! { x: 0.01 + 0.0003 * (v % 7) as f64, y: 0.01 + 0.0004 * (v / 7) as f64 }))
            .collect::<HashMap<_, _>>();
        let a = super::make_sample_grid_without_spt(&times, &coordinates, origin, &config).unwrap();
        let rebuilt_times = times
            .iter()
            .map(|(k, v)| (*k, *v))
            .sorted_by_key(|(k, _)| std::cmp::Reverse(*k))
            .collect::<HashMap<_, _>>();
        let b = super::make_sample_grid_without_spt(&rebuilt_times, &coordinates, origin, &config)
            .unwrap();
        let a = a.iter().map(|(k, v)| (*k, *v)).collect_vec();
        let b = b.iter().map(|(k, v)| (*k, *v)).collect_vec();
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_map_gives_empty_grid() {
        let times: HashMap<u64, i64> = HashMap::new();
        let coordinates: HashMap<u64, Coord<f64>> = HashMap::new();
        let grid = super::make_sample_grid_without_spt(
            &times,
            &coordinates,
            coord! { x: 0.0, y: 0.0 },
            &SampleGridConfig::default(),
        )
        .unwrap();
        assert!(grid.is_empty());
        assert_eq!(grid.iter().count(), 0);
    }

    #[test]
    fn test_missing_coordinate_is_an_error() {
        let times = HashMap::from([(1_u64, 600_i64), (2_u64, 700_i64)]);
        let coordinates = HashMap::from([(1_u64, coord! { x: 0.0, y: 0.0 })]);
        let result = super::make_sample_grid_without_spt(
            &times,
            &coordinates,
            coord! { x: 0.0, y: 0.0 },
            &SampleGridConfig::default(),
        );
        match result {
            Err(TimeSurfaceError::MissingVertexCoordinate(v)) => assert_eq!(v, "2"),
            other => panic!("expected missing coordinate error, found {other:?}"),
        }
    }

    #[test]
    fn test_polar_origin_is_a_configuration_error() {
        let tree = TestTree::new(coord! { x: 0.0, y: 90.0 })
            .with_state(1, coord! { x: 0.0, y: 89.999 }, 0, VertexKind::Street);
        let result = super::make_sample_grid(&tree, &SampleGridConfig::default());
        assert!(matches!(result, Err(TimeSurfaceError::SampleGridError(_))));
    }
}
