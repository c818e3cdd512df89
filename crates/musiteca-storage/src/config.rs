use musiteca_config::{CONFIG_BACKEND, ConfigBackend, ConfigError, MusitecaPaths, TomlConfigBackend};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const SECTION: &str = "storage";

/// Nombre del documento del catálogo dentro de `data_dir`.
pub const CATALOG_FILE_NAME: &str = "music.json";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct StorageConfig {
  /// Ruta del documento JSON del catálogo.
  pub catalog_path: PathBuf,

  /// JSON indentado en vez de compacto.
  #[serde(default)]
  pub pretty: bool,
}

impl StorageConfig {
  pub fn in_data_dir(paths: &MusitecaPaths) -> Self {
    StorageConfig { catalog_path: paths.data_dir.join(CATALOG_FILE_NAME), pretty: false }
  }

  /// Carga `[storage]` y la vuelve a escribir con los valores efectivos.
  pub fn load() -> Result<Self, ConfigError> {
    Self::load_from(&CONFIG_BACKEND)
  }

  /// Variante para tests: inyectar un backend distinto.
  pub fn load_from(backend: &TomlConfigBackend) -> Result<Self, ConfigError> {
    let cfg = backend.load_section_or(SECTION, || StorageConfig::in_data_dir(backend.paths()))?;
    backend.save_section(SECTION, &cfg)?;
    Ok(cfg)
  }
}
