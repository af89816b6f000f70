use serde::{Deserialize, Serialize};

/// best, expected and worst travel times in seconds to one vertex over a
/// range of departure times.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    pub min: i64,
    pub avg: i64,
    pub max: i64,
}
