//! Presentation layer for chorus
//!
//! Progress bars and console summaries. Everything here is observational:
//! removing this layer changes nothing about what a campaign produces.

pub mod output;
pub mod progress;

// Re-export commonly used types
pub use output::ConsoleFormatter;
pub use progress::{ProgressReporter, SimpleProgress};
