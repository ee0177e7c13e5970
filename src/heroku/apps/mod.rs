//! App-level reports

mod commands;

pub use commands::{run_access, run_addon, run_domains, run_formation};
