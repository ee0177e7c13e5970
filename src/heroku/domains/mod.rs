//! Custom domain reports

mod commands;

pub use commands::run_matches;
