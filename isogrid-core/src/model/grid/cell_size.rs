use crate::{model::SampleGridError, util::geo_utils};
use serde::{Deserialize, Serialize};

/// size of a grid cell in degrees along each axis, derived from a size in meters.
/// a degree of latitude is a constant distance, while a degree of longitude
/// shrinks with the cosine of the latitude, so `dx = dy / cos(lat)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CellSize {
    pub dx: f64,
    pub dy: f64,
    pub meters: f64,
}

impl CellSize {
    /// computes the cell size in degrees at some reference latitude.
    ///
    /// # Arguments
    ///
    /// * `meters` - target cell size in meters, strictly positive
    /// * `latitude` - reference latitude in degrees, strictly between -90 and 90
    ///
    /// # Returns
    ///
    /// * the cell size, or a configuration error if the inputs would produce
    ///   a degenerate grid
    pub fn from_meters(meters: f64, latitude: f64) -> Result<CellSize, SampleGridError> {
        if !meters.is_finite() || meters <= 0.0 {
            return Err(SampleGridError::ConfigurationError(format!(
                "cell size must be strictly positive, found {meters} meters"
            )));
        }
        if !latitude.is_finite() || latitude.abs() >= 90.0 {
            return Err(SampleGridError::ConfigurationError(format!(
                "grid origin latitude must be within (-90, 90), found {latitude}"
            )));
        }
        let cos_lat = latitude.to_radians().cos();
        let dy = geo_utils::meters_to_degrees_latitude(meters);
        let dx = dy / cos_lat;
        if !dx.is_finite() || dx <= 0.0 {
            return Err(SampleGridError::ConfigurationError(format!(
                "grid origin latitude {latitude} is too close to a pole to size grid cells"
            )));
        }
        Ok(CellSize { dx, dy, meters })
    }
}
