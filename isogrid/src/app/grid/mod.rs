mod grid_app;
mod grid_row;
mod vertex_row;

pub use grid_app::{read_vertex_times, run, write_grid};
pub use grid_row::GridRow;
pub use vertex_row::VertexRow;
