//! Read-only summaries of a [ProbingSet](crate::ProbingSet)'s probe counters.

use core::fmt;

use crate::ProbeStats;

/// A snapshot of a probing set's size and probe counters.
///
/// The counters cover the probes made since the set was created or last grew. The element count
/// and capacity are current as of the snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatsReport {
    pub len: usize,
    pub capacity: usize,
    pub collisions: u64,
    pub total_probe_length: u64,
    pub longest_probe_chain: u64,
}

impl StatsReport {
    pub(crate) fn new(len: usize, capacity: usize, probes: ProbeStats) -> Self {
        Self {
            len,
            capacity,
            collisions: probes.collisions,
            total_probe_length: probes.total_probe_length,
            longest_probe_chain: probes.longest_probe_chain,
        }
    }

    /// Fraction of slots holding active elements.
    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.capacity as f64
    }

    /// The total probe chain length divided by the number of elements.
    ///
    /// This is undefined for an empty set. Rather than inventing a value the caller has to decide
    /// what to show.
    pub fn average_probe_chain(&self) -> Result<f64, EmptySetError> {
        if self.len == 0 {
            return Err(EmptySetError);
        }

        Ok(self.total_probe_length as f64 / self.len as f64)
    }
}

/// The average probe chain of a set without elements was requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptySetError;

impl fmt::Display for EmptySetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("the average probe chain is undefined for an empty set")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for EmptySetError {}
