pub mod documents;
pub mod setup;

// Re-export main utilities for use by test files
pub use documents::StatsDocumentBuilder;
#[allow(unused_imports)]
pub use setup::{player, TestSetup};
