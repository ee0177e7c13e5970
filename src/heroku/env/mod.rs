//! Config variable reports

mod commands;

pub use commands::{run_contains, run_value_of};
