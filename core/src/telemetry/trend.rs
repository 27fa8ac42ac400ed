use serde::{Deserialize, Serialize};

/// Per-iteration history of interfering-hotspot counts.
///
/// One entry per optimizer iteration, recorded before any reassignment in
/// that iteration. Diagnostics only; the optimizer never reads it back.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterferenceTrend {
    counts: Vec<usize>,
}

impl InterferenceTrend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, count: usize) {
        self.counts.push(count);
    }

    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn last(&self) -> Option<usize> {
        self.counts.last().copied()
    }

    /// True when the final recorded count reached zero.
    pub fn converged(&self) -> bool {
        self.last() == Some(0)
    }
}
