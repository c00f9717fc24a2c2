pub mod path_validator;
pub mod version;
