//! Logging utilities for output and progress tracking
//!
//! This module provides utilities for logging, console output, and progress tracking.

pub mod console;
pub mod log;
pub mod progress;

// Re-export commonly used functions for convenience
pub use console::{print_filtered_records, print_match_count};
pub use self::log::{log_fetch_complete, log_fetch_error, log_fetch_start, log_warning};
pub use progress::{create_main_progress_bar, create_spinner, finish_progress_bar};
