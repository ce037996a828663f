//! Roadtrip CLI library.
//!
//! Holds the interactive prompt loop and output formatting so both can be
//! exercised without spawning the binary.

pub mod interactive;
pub mod output;
