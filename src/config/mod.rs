mod filesystem;
mod ignore_list;
mod loader;
mod model;
mod validation;

pub use filesystem::{FileSystem, RealFileSystem};
pub use loader::{ConfigLoader, FileConfigLoader, LOCAL_CONFIG_NAME};
pub use model::{
    CONFIG_VERSION, Config, ContentConfig, ContentRule, DEFAULT_UNWANTED, PackageConfig,
};
pub use validation::validate_config;
