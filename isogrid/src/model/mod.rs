pub mod builder;
pub mod spt;
pub mod surface;
mod time_surface_error;

pub use time_surface_error::TimeSurfaceError;
