mod analyst_context;
mod range_set;
mod surface_id_generator;
mod time_range;
mod time_surface;

pub use analyst_context::AnalystContext;
pub use range_set::RangeSet;
pub use surface_id_generator::SurfaceIdGenerator;
pub use time_range::TimeRange;
pub use time_surface::{
    TimeSurface, DEFAULT_CUTOFF_MINUTES, DEFAULT_MAX_WALK_DISTANCE, DEFAULT_ROUTER_ID,
    DEFAULT_WALK_SPEED,
};
