//! CLI command implementations.
//!
//! Each submodule handles one command with its configuration and
//! execution logic. Commands wire the pipeline modules together; the
//! analysis itself lives in the library crates they call.

pub mod analyze;
