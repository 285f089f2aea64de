//! People Search (psearch)
//!
//! TUI client that searches a remote people-search API by name and falls
//! back to a local dataset when the remote call fails.
//!
//! Follows a Pure Core / Impure Shell split: `model`, `parser` and `state`
//! hold no I/O; `source` talks to the network and filesystem; `view` owns the
//! terminal and the async runtime handle.

pub mod config;
pub mod logging;
pub mod model;
pub mod parser;
pub mod source;
pub mod state;
pub mod view;

#[cfg(test)]
mod test_harness;

#[cfg(test)]
mod tests;
