use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Variable de entorno que redirige todos los directorios a una base propia.
pub const BASE_DIR_ENV: &str = "MUSITECA_BASE_DIR";

#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("io error: {0}")]
  Io(#[from] std::io::Error),
  #[error("toml error: {0}")]
  Toml(#[from] toml::de::Error),
  #[error("directories error: could not determine home directory")]
  Directories,
  #[error("other: {0}")]
  Other(String),
}

#[derive(Debug, Clone)]
pub struct MusitecaPaths {
  pub base_dir: PathBuf,
  pub config_dir: PathBuf,
  pub data_dir: PathBuf,
}

impl MusitecaPaths {
  pub fn new() -> Result<Self, ConfigError> {
    let paths = match std::env::var(BASE_DIR_ENV) {
      Ok(env_base) => Self::layout_under(PathBuf::from(env_base)),
      Err(_) => {
        let proj_dirs = ProjectDirs::from("com", "musiteca", "musiteca").ok_or(ConfigError::Directories)?;
        Self {
          base_dir: proj_dirs.config_dir().to_path_buf(),
          config_dir: proj_dirs.config_dir().to_path_buf(),
          data_dir: proj_dirs.data_dir().to_path_buf(),
        }
      }
    };

    paths.ensure_dirs()?;
    debug!(data_dir = %paths.data_dir.display(), "resolved app directories");
    Ok(paths)
  }

  pub fn detect() -> Result<Self, ConfigError> {
    Self::new()
  }

  /// Layout `config/` y `data/` bajo una base explícita.
  pub fn under(base: impl AsRef<Path>) -> Result<Self, ConfigError> {
    let paths = Self::layout_under(base.as_ref().to_path_buf());
    paths.ensure_dirs()?;
    Ok(paths)
  }

  pub fn config_file(&self) -> PathBuf {
    self.config_dir.join("musiteca.toml")
  }

  fn layout_under(base: PathBuf) -> Self {
    Self {
      config_dir: base.join("config"),
      data_dir: base.join("data"),
      base_dir: base,
    }
  }

  fn ensure_dirs(&self) -> Result<(), ConfigError> {
    std::fs::create_dir_all(&self.config_dir)?;
    std::fs::create_dir_all(&self.data_dir)?;
    Ok(())
  }
}
