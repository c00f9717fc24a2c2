pub mod manifest_writer;
pub mod project_scanner;
pub mod update;
pub mod update_checker;

pub use manifest_writer::ManifestWriter;
pub use project_scanner::ProjectScannerAgent;
pub use update::{ResolutionConfig, UpdateResult};
pub use update_checker::UpdateChecker;
