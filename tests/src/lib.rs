//! # Checkers-Chain Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/      # Two-chain choreography
//!     ├── harness.rs        # Chain pair + relay helpers
//!     ├── handshake_flow.rs # Four-step handshake, crossing hellos, close
//!     ├── packet_flow.rs    # Send/recv/ack/timeout end to end
//!     └── genesis_flow.rs   # Snapshot export/import round trips
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p checkers-tests
//!
//! # By category
//! cargo test -p checkers-tests integration::
//! ```

#![allow(unused_imports)]
#![allow(dead_code)]

pub mod integration;
