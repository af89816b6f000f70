use super::{CellKey, CellSize};
use crate::{model::SampleGridError, util::geo_utils};
use geo::{coord, Coord};
use itertools::Itertools;

/// maps WGS84 coordinates onto the cells of a regular grid anchored at an origin.
///
/// a cell with key (col, row) is represented by its anchor node at
/// `origin + (col * dx, row * dy)`; all coordinates in
/// `[anchor, anchor + (dx, dy))` share that key. distances to a cell are
/// measured to its anchor, using an equirectangular projection around the
/// origin latitude so that one column step and one row step both span the
/// configured cell size in meters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridAddressing {
    origin: Coord<f64>,
    cell_size: CellSize,
    cos_lat: f64,
}

impl GridAddressing {
    pub fn new(origin: Coord<f64>, cell_size_meters: f64) -> Result<GridAddressing, SampleGridError> {
        if !geo_utils::is_finite(&origin) {
            return Err(SampleGridError::ConfigurationError(format!(
                "grid origin ({}, {}) is not a finite position",
                origin.x, origin.y
            )));
        }
        let cell_size = CellSize::from_meters(cell_size_meters, origin.y)?;
        let cos_lat = origin.y.to_radians().cos();
        Ok(GridAddressing {
            origin,
            cell_size,
            cos_lat,
        })
    }

    pub fn origin(&self) -> Coord<f64> {
        self.origin
    }

    pub fn cell_size(&self) -> &CellSize {
        &self.cell_size
    }

    pub fn cos_lat(&self) -> f64 {
        self.cos_lat
    }

    pub fn cell_key_for(&self, coord: &Coord<f64>) -> CellKey {
        let col = ((coord.x - self.origin.x) / self.cell_size.dx).floor() as i32;
        let row = ((coord.y - self.origin.y) / self.cell_size.dy).floor() as i32;
        CellKey::new(col, row)
    }

    pub fn cell_anchor(&self, key: &CellKey) -> Coord<f64> {
        coord! {
            x: self.origin.x + key.col as f64 * self.cell_size.dx,
            y: self.origin.y + key.row as f64 * self.cell_size.dy,
        }
    }

    /// distance in meters between two coordinates in this grid's local projection
    pub fn distance(&self, a: &Coord<f64>, b: &Coord<f64>) -> f64 {
        geo_utils::fast_distance(a, b, self.cos_lat)
    }

    /// all cell keys whose anchors fall in the bounding box of a circle
    /// around `center`. the window spans at most `ceil(radius / cell size) + 1`
    /// cells on each side of the center's own cell; callers filter by distance.
    pub fn keys_within(&self, center: &Coord<f64>, radius_meters: f64) -> Vec<CellKey> {
        let radius_dy = geo_utils::meters_to_degrees_latitude(radius_meters);
        let radius_dx = radius_dy / self.cos_lat;
        let col_min = ((center.x - radius_dx - self.origin.x) / self.cell_size.dx).floor() as i32;
        let col_max = ((center.x + radius_dx - self.origin.x) / self.cell_size.dx).ceil() as i32;
        let row_min = ((center.y - radius_dy - self.origin.y) / self.cell_size.dy).floor() as i32;
        let row_max = ((center.y + radius_dy - self.origin.y) / self.cell_size.dy).ceil() as i32;
        (row_min..=row_max)
            .cartesian_product(col_min..=col_max)
            .map(|(row, col)| CellKey::new(col, row))
            .collect_vec()
    }
}
