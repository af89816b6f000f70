use super::SurfaceIdGenerator;
use crate::model::builder::SampleGridConfig;

/// state shared by all time surfaces built in one process, typically wrapped
/// in an `Arc` and handed to each request.
#[derive(Debug, Default)]
pub struct AnalystContext {
    surface_ids: SurfaceIdGenerator,
    sample_grid_config: SampleGridConfig,
}

impl AnalystContext {
    pub fn new(sample_grid_config: SampleGridConfig) -> AnalystContext {
        AnalystContext {
            surface_ids: SurfaceIdGenerator::new(),
            sample_grid_config,
        }
    }

    pub fn next_surface_id(&self) -> u64 {
        self.surface_ids.next_id()
    }

    /// number of time surfaces created with this context
    pub fn surfaces_created(&self) -> u64 {
        self.surface_ids.issued()
    }

    pub fn sample_grid_config(&self) -> &SampleGridConfig {
        &self.sample_grid_config
    }
}
