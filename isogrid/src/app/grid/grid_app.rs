use super::{GridRow, VertexRow};
use crate::model::{
    builder::SampleGridConfig,
    spt::RoutingRequest,
    surface::{AnalystContext, TimeSurface, DEFAULT_CUTOFF_MINUTES, DEFAULT_WALK_SPEED},
    TimeSurfaceError,
};
use geo::{coord, Coord};
use isogrid_core::model::{grid::SparseGrid, metric::Wtwd};
use std::{collections::HashMap, path::Path};

/// vertex arrival times and positions read from a vertex times file
pub type VertexTimes = (HashMap<String, i64>, HashMap<String, Coord<f64>>);

/// samples the vertex times in `vertex_file` onto a grid and writes the grid
/// cells to `output_file` in key order.
///
/// # Arguments
///
/// * `vertex_file` - CSV with `vertex_id,longitude,latitude,time` rows
/// * `output_file` - destination CSV
/// * `origin` - grid origin; defaults to the earliest reached vertex
/// * `max_walk_distance` - network walk limit in meters of the search that produced the times
/// * `config` - sample grid parameters
pub fn run(
    vertex_file: &Path,
    output_file: &Path,
    origin: Option<Coord<f64>>,
    max_walk_distance: f64,
    config: SampleGridConfig,
) -> Result<(), TimeSurfaceError> {
    let (times, coordinates) = read_vertex_times(vertex_file)?;
    log::info!(
        "read {} vertex times from {}",
        times.len(),
        vertex_file.display()
    );
    let origin = origin
        .or_else(|| earliest_vertex(&times, &coordinates))
        .unwrap_or(coord! { x: 0.0, y: 0.0 });
    let request = RoutingRequest {
        from: origin,
        max_walk_distance,
        walk_speed: DEFAULT_WALK_SPEED,
        date_time: chrono::Utc::now().timestamp(),
        router_id: None,
        parameters: HashMap::from([(
            String::from("vertex_file"),
            vertex_file.display().to_string(),
        )]),
    };
    let context = AnalystContext::new(config);
    let mut surface = TimeSurface::from_times(&request, times, DEFAULT_CUTOFF_MINUTES, &context);
    surface.make_sample_grid_without_spt(&coordinates, context.sample_grid_config())?;
    match surface.sample_grid() {
        Some(grid) => write_grid(grid, output_file),
        None => Err(TimeSurfaceError::ConfigurationError(format!(
            "time surface {} has no sample grid",
            surface.id()
        ))),
    }
}

/// reads a vertex times CSV. a vertex listed more than once keeps its
/// earliest time, along with the position given on that same row.
pub fn read_vertex_times(vertex_file: &Path) -> Result<VertexTimes, TimeSurfaceError> {
    let mut reader =
        csv::Reader::from_path(vertex_file).map_err(|e| TimeSurfaceError::CsvError {
            msg: format!("failure opening {}", vertex_file.display()),
            source: e,
        })?;
    let mut times: HashMap<String, i64> = HashMap::new();
    let mut coordinates: HashMap<String, Coord<f64>> = HashMap::new();
    for record in reader.deserialize::<VertexRow>() {
        let row = record.map_err(|e| TimeSurfaceError::CsvError {
            msg: format!("failure reading row of {}", vertex_file.display()),
            source: e,
        })?;
        let earlier = times
            .get(&row.vertex_id)
            .is_some_and(|time| *time <= row.time);
        if !earlier {
            coordinates.insert(row.vertex_id.clone(), row.coordinate());
            times.insert(row.vertex_id, row.time);
        }
    }
    Ok((times, coordinates))
}

/// writes every cell of a grid as a [`GridRow`], in key order
pub fn write_grid(grid: &SparseGrid<Wtwd>, output_file: &Path) -> Result<(), TimeSurfaceError> {
    if let Some(parent) = output_file.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| TimeSurfaceError::IoError {
            msg: format!("failure creating output directory {}", parent.display()),
            source: e,
        })?;
    }
    let mut writer =
        csv::Writer::from_path(output_file).map_err(|e| TimeSurfaceError::CsvError {
            msg: format!("failure creating {}", output_file.display()),
            source: e,
        })?;
    for (key, cell) in grid.iter() {
        let row = GridRow::new(key, cell, grid.addressing());
        writer
            .serialize(&row)
            .map_err(|e| TimeSurfaceError::CsvError {
                msg: format!("failure writing cell {key} to {}", output_file.display()),
                source: e,
            })?;
    }
    writer.flush().map_err(|e| TimeSurfaceError::IoError {
        msg: format!("failure flushing {}", output_file.display()),
        source: e,
    })?;
    log::info!("wrote {} grid cells to {}", grid.len(), output_file.display());
    Ok(())
}

fn earliest_vertex(
    times: &HashMap<String, i64>,
    coordinates: &HashMap<String, Coord<f64>>,
) -> Option<Coord<f64>> {
    times
        .iter()
        .min_by(|(va, ta), (vb, tb)| ta.cmp(tb).then(va.cmp(vb)))
        .and_then(|(vertex, _)| coordinates.get(vertex).copied())
}
