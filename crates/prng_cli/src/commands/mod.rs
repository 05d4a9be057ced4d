//! CLI command implementations
//!
//! Each submodule implements a specific CLI command. Commands write their
//! results to the supplied writer; progress goes through `tracing`.

pub mod analyse;
pub mod demo;
pub mod sequence;
