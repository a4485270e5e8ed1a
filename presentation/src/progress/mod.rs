//! Progress reporting

mod reporter;

pub use reporter::{ProgressReporter, SimpleProgress};
