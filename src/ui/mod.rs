//! Terminal UI utilities

mod progress;

pub use progress::{finish_progress, progress_bar};
