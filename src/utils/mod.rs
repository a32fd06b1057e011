//! Utility functions shared by the fetcher and the binary

pub mod logging;
