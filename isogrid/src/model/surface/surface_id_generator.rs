use std::sync::atomic::{AtomicU64, Ordering};

/// hands out unique, increasing time surface ids. shared by every request
/// served by one process; ids start at zero and are never reset.
#[derive(Debug, Default)]
pub struct SurfaceIdGenerator {
    next_id: AtomicU64,
}

impl SurfaceIdGenerator {
    pub fn new() -> SurfaceIdGenerator {
        SurfaceIdGenerator::default()
    }

    pub fn next_id(&self) -> u64 {
        self.next_id.fetch_add(1, Ordering::Relaxed)
    }

    /// number of ids handed out so far
    pub fn issued(&self) -> u64 {
        self.next_id.load(Ordering::Relaxed)
    }
}
