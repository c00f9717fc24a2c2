// Update resolution: decides which SDK constraints and dependencies are
// outdated, given a parsed manifest and fresh registry data.
//
// - context: ResolutionConfig and the UpdateResult records
// - filter: include/exclude evaluation and conflict detection
// - handlers: SDK and dependency resolvers
pub mod context;
pub mod filter;
pub mod handlers;

pub use context::{DependencyUpdate, EnvironmentUpdate, ResolutionConfig, UpdateResult};
pub use filter::FilterEvaluator;
