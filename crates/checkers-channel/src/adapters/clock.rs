//! # Manual Block Clock
//!
//! A settable `BlockClock` for tests and local tooling; production binds
//! the ledger's block context.

use crate::ports::outbound::BlockClock;

/// Manually advanced block clock.
#[derive(Clone, Copy, Debug)]
pub struct ManualClock {
    height: u64,
    timestamp: u64,
}

impl ManualClock {
    /// Create a clock at the given height and timestamp.
    pub fn new(height: u64, timestamp: u64) -> Self {
        Self { height, timestamp }
    }

    /// Set the height.
    pub fn set_height(&mut self, height: u64) {
        self.height = height;
    }

    /// Advance the height by `blocks`, and the timestamp by ten seconds
    /// per block.
    pub fn advance(&mut self, blocks: u64) {
        self.height += blocks;
        self.timestamp += blocks * 10;
    }

    /// Set the timestamp.
    pub fn set_timestamp(&mut self, timestamp: u64) {
        self.timestamp = timestamp;
    }
}

impl BlockClock for ManualClock {
    fn height(&self) -> u64 {
        self.height
    }

    fn timestamp(&self) -> u64 {
        self.timestamp
    }
}
