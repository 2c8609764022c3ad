pub mod csv;
pub mod json;

pub use csv::{write_footprints, write_footprints_file};
pub use json::{write_summary, write_summary_file, PassSummary};
