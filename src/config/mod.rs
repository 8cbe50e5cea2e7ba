//! Configuration and path management

pub mod paths;
pub mod settings;

pub use paths::SejourPaths;
pub use settings::Settings;
