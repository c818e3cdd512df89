mod backend;
mod paths;

pub use backend::{ConfigBackend, TomlConfigBackend};
pub use paths::{ConfigError, MusitecaPaths};

use once_cell::sync::Lazy;

// Singleton de paths, resuelto una vez por proceso
pub static PATHS: Lazy<MusitecaPaths> = Lazy::new(|| MusitecaPaths::detect().expect("failed to init MusitecaPaths"));

// Singleton del backend de config
pub static CONFIG_BACKEND: Lazy<TomlConfigBackend> = Lazy::new(|| TomlConfigBackend::new(PATHS.clone()));
