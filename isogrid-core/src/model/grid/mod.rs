mod cell_key;
mod cell_size;
mod grid_addressing;
mod sparse_grid;

pub use cell_key::CellKey;
pub use cell_size::CellSize;
pub use grid_addressing::GridAddressing;
pub use sparse_grid::SparseGrid;
