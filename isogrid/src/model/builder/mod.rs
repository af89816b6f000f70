mod sample_grid_builder;
mod sample_grid_config;

pub use sample_grid_builder::{build_sample_grid, make_sample_grid, make_sample_grid_without_spt};
pub use sample_grid_config::{
    SampleGridConfig, DEFAULT_CELL_SIZE_METERS, DEFAULT_OFF_ROAD_WALK_SPEED,
    MAP_OFF_ROAD_RADIUS_FACTOR, SPT_OFF_ROAD_RADIUS_FACTOR,
};
