//! Error types for the calendar generator

use thiserror::Error;

/// Result type alias for generator operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while generating the calendar
#[derive(Error, Debug)]
pub enum Error {
    /// Transport-level failure reaching the upstream host (DNS, connect, read)
    #[error("Network error: {0}")]
    Network(String),

    /// The contributions page responded with a non-success status
    #[error("Failed to fetch contributions page: {status}")]
    Fetch { status: u16 },

    /// No day records were recognized in the fetched markup by any strategy
    #[error("Could not parse contribution rects from the fetched page")]
    Extraction,

    /// Failed to create the output directory or write the output file
    #[error("Failed to write output: {0}")]
    Write(String),
}
