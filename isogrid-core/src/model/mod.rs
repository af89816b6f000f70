pub mod grid;
pub mod metric;
mod sample_grid_error;
pub mod sampler;

pub use sample_grid_error::SampleGridError;
