pub mod content;
pub mod corpus;
pub mod error;
pub mod preprocess;
pub mod selection;
pub mod stats;

#[cfg(test)]
mod tests;

pub use content::ContentSource;
pub use corpus::{CorpusIndex, FrequencyBand};
pub use error::{FetchError, LoadError, StoreError};
