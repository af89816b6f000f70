use geo::Coord;

/// mean radius of the earth in meters, used for all degree/meter conversions
pub const EARTH_RADIUS_METERS: f64 = 6_371_008.8;

/// converts a north-south distance in meters into degrees of latitude.
/// the result is independent of latitude.
pub fn meters_to_degrees_latitude(meters: f64) -> f64 {
    (meters / EARTH_RADIUS_METERS).to_degrees()
}

/// approximates the distance in meters between two WGS84 coordinates by
/// flattening the earth around a reference latitude (equirectangular projection).
///
/// the approximation is good within a few kilometers of the reference latitude,
/// which covers the off-road walking distances used when sampling a grid.
///
/// # Arguments
///
/// * `a` - first coordinate (x = longitude, y = latitude)
/// * `b` - second coordinate
/// * `cos_lat` - cosine of the reference latitude
///
/// # Returns
///
/// * the distance in meters
pub fn fast_distance(a: &Coord<f64>, b: &Coord<f64>, cos_lat: f64) -> f64 {
    let dx = (b.x - a.x) * cos_lat;
    let dy = b.y - a.y;
    dx.hypot(dy).to_radians() * EARTH_RADIUS_METERS
}

/// true if both ordinates of the coordinate are finite numbers
pub fn is_finite(coord: &Coord<f64>) -> bool {
    coord.x.is_finite() && coord.y.is_finite()
}
