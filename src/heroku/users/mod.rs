//! User reports

mod commands;

pub use commands::run_access;
