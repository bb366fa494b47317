//! Configuration and path management

pub mod paths;
pub mod settings;

pub use paths::AhorrPaths;
pub use settings::Settings;
