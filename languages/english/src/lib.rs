pub mod grounding;
pub mod loader;
pub mod markup;
pub mod parser;
pub mod resolver;
pub mod samples;
pub mod source;

#[cfg(test)]
mod tests;

pub use grounding::GroundingBuilder;
pub use loader::CorpusLoader;
pub use parser::parse;
pub use resolver::ContentResolver;
pub use source::{DirSource, HttpSource, source_from_config};
