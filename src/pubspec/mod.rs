pub mod model;
pub mod parser;

pub use model::{DependencySection, Manifest};
pub use parser::PubspecParser;
