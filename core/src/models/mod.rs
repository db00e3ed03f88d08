//! Domain types for the assessment simulation

pub mod results;
pub mod tier;

pub use results::ResultsTable;
pub use tier::Tier;
