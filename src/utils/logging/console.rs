//! Console output utilities
//!
//! This module provides utilities for formatted console output.

use crate::models::FilteredRecord;

/// Print the filtered records as pretty JSON on stdout
pub fn print_filtered_records(records: &[FilteredRecord]) -> serde_json::Result<()> {
    println!("\n--- Final, Filtered Data Structure ---");
    println!("{}", serde_json::to_string_pretty(records)?);
    Ok(())
}

/// Print the trailing summary line
pub fn print_match_count(count: usize) {
    println!("\nFound {count} municipalities matching the criteria.");
}
