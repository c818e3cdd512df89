use crate::paths::{ConfigError, MusitecaPaths};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use tracing::debug;

/// Escritura con toml_edit para preservar comentarios del usuario
use toml_edit::{DocumentMut, Item};

pub trait ConfigBackend {
  fn load_section<T: DeserializeOwned>(&self, section: &str) -> Result<T, ConfigError>;
  fn save_section<T: Serialize>(&self, section: &str, value: &T) -> Result<(), ConfigError>;
}

pub struct TomlConfigBackend {
  paths: MusitecaPaths,
}

impl TomlConfigBackend {
  pub fn new(paths: MusitecaPaths) -> Self {
    Self { paths }
  }

  pub fn paths(&self) -> &MusitecaPaths {
    &self.paths
  }

  /// Igual que `load_section`, pero un archivo o sección ausentes dan `T::default()`.
  pub fn load_section_with_default<T>(&self, section: &str) -> Result<T, ConfigError>
  where
    T: DeserializeOwned + Default,
  {
    self.load_section_or(section, T::default)
  }

  /// Variante con valor por defecto explícito, para defaults que dependen de `paths()`.
  pub fn load_section_or<T, F>(&self, section: &str, fallback: F) -> Result<T, ConfigError>
  where
    T: DeserializeOwned,
    F: FnOnce() -> T,
  {
    let path = self.paths.config_file();
    let Some(content) = musiteca_fs::read_to_string_if_exists(&path)? else {
      return Ok(fallback());
    };

    let toml_val: toml::Value = toml::from_str(&content)?;

    let Some(table) = toml_val.get(section) else {
      return Ok(fallback());
    };

    decode_section(section, table)
  }
}

fn decode_section<T: DeserializeOwned>(section: &str, table: &toml::Value) -> Result<T, ConfigError> {
  table.clone().try_into().map_err(|e| ConfigError::Other(format!("decode section [{section}]: {e}")))
}

impl ConfigBackend for TomlConfigBackend {
  fn load_section<T: DeserializeOwned>(&self, section: &str) -> Result<T, ConfigError> {
    let path = self.paths.config_file();
    let content = fs::read_to_string(&path)?;
    let toml_val: toml::Value = toml::from_str(&content)?;

    let table = toml_val
      .get(section)
      .ok_or_else(|| ConfigError::Other(format!("missing section [{section}] in {:?}", path)))?;

    decode_section(section, table)
  }

  fn save_section<T: Serialize>(&self, section: &str, value: &T) -> Result<(), ConfigError> {
    let path = self.paths.config_file();

    // 1) Documento actual, o uno vacío si todavía no hay archivo.
    let mut doc: DocumentMut = match musiteca_fs::read_to_string_if_exists(&path)? {
      Some(content) => content
        .parse::<DocumentMut>()
        .map_err(|e| ConfigError::Other(format!("parse toml_edit doc: {e}")))?,
      None => DocumentMut::new(),
    };

    // 2) La sección serializada sale sin cabecera ("foo = 1\nbar = 2\n").
    let section_str = toml::to_string(value)
      .map_err(|e| ConfigError::Other(format!("encode section [{section}]: {e}")))?;

    let section_doc = section_str
      .parse::<DocumentMut>()
      .map_err(|e| ConfigError::Other(format!("parse section as doc: {e}")))?;

    // 3) Reemplazar solo esa sección; el resto del documento queda intacto.
    doc[section] = Item::Table(section_doc.as_table().clone());

    musiteca_fs::atomic_write_str(&path, &doc.to_string())?;
    debug!(section, path = %path.display(), "config section saved");

    Ok(())
  }
}
