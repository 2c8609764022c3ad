pub mod extractor;

pub use extractor::{Footprint, FootprintExtractor, Projection};
