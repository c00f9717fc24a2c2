// Resolution steps of an update check.
//
// Each handler turns the parsed manifest plus registry data into part of the
// UpdateResult; neither touches the network or the manifest file.

pub mod dependency_handler;
pub mod sdk_handler;

pub use dependency_handler::DependencyHandler;
pub use sdk_handler::SdkHandler;
