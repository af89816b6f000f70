mod accumulative_grid_sampler;

pub use accumulative_grid_sampler::AccumulativeGridSampler;
