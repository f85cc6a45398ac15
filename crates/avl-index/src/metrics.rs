//! Operation counters kept by each tree instance.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Snapshot of a tree's counters.
///
/// Every counter only grows over the lifetime of the tree. None of them
/// influence tree behavior.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(into = "MetricsReport")]
pub struct Metrics {
    /// Payload comparisons made while descending during `insert`.
    pub insert_comparisons: u64,
    /// Recursive search steps made by `find`, absent positions included.
    pub search_comparisons: u64,
    /// Single rotations, including the two inside every double rotation.
    pub single_rotations: u64,
    pub double_rotations: u64,
    pub insertion_time: Duration,
    pub search_time: Duration,
    /// Largest root height seen after an insertion (0 until then).
    pub max_height: i32,
}

impl Metrics {
    pub fn total_comparisons(&self) -> u64 {
        self.insert_comparisons + self.search_comparisons
    }

    pub fn insertion_time_ms(&self) -> u64 {
        millis(self.insertion_time)
    }

    pub fn search_time_ms(&self) -> u64 {
        millis(self.search_time)
    }

    /// Flat, serializable form of the snapshot with times in milliseconds.
    pub fn report(&self) -> MetricsReport {
        MetricsReport::from(*self)
    }
}

fn millis(d: Duration) -> u64 {
    u64::try_from(d.as_millis()).unwrap_or(u64::MAX)
}

impl fmt::Display for Metrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total comparisons: {}", self.total_comparisons())?;
        writeln!(f, "Search comparisons: {}", self.search_comparisons)?;
        writeln!(f, "Insert comparisons: {}", self.insert_comparisons)?;
        writeln!(f, "Single rotations: {}", self.single_rotations)?;
        writeln!(f, "Double rotations: {}", self.double_rotations)?;
        writeln!(f, "Total insertion time (ms): {}", self.insertion_time_ms())?;
        writeln!(f, "Total search time (ms): {}", self.search_time_ms())?;
        write!(f, "Max tree height: {}", self.max_height)
    }
}

/// Serialized shape of [`Metrics`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricsReport {
    pub total_comparisons: u64,
    pub search_comparisons: u64,
    pub insert_comparisons: u64,
    pub single_rotations: u64,
    pub double_rotations: u64,
    pub insertion_time_ms: u64,
    pub search_time_ms: u64,
    pub max_height: i32,
}

impl From<Metrics> for MetricsReport {
    fn from(m: Metrics) -> Self {
        Self {
            total_comparisons: m.total_comparisons(),
            search_comparisons: m.search_comparisons,
            insert_comparisons: m.insert_comparisons,
            single_rotations: m.single_rotations,
            double_rotations: m.double_rotations,
            insertion_time_ms: m.insertion_time_ms(),
            search_time_ms: m.search_time_ms(),
            max_height: m.max_height,
        }
    }
}
