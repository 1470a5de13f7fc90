//! Per-level ordinals for numbered lists.

use std::collections::HashMap;

/// Independent counters, one per nesting level.
///
/// Each level starts at 1 the first time it is seen and keeps counting for the
/// lifetime of the value. Visiting a deeper level never resets a shallower one
/// and returning to a shallower level does not reset the deeper one: levels
/// `[0, 1, 0, 1]` number as `1, 1, 2, 2`. A fresh value is used per list.
#[derive(Debug, Default)]
pub struct LevelCounters {
    counters: HashMap<usize, u32>,
}

impl LevelCounters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the current ordinal for `level` and advance it.
    pub fn next(&mut self, level: usize) -> u32 {
        let counter = self.counters.entry(level).or_insert(1);
        let ordinal = *counter;
        *counter += 1;
        ordinal
    }
}
