pub mod config;
pub mod json_repository;

pub use config::StorageConfig;
pub use json_repository::JsonCatalogRepository;

use musiteca_config::ConfigError;
use musiteca_core::CatalogStore;

/// Abre el catálogo en la ubicación configurada (`[storage]` de musiteca.toml).
///
/// Solo falla si no se puede resolver la configuración; los fallos del
/// documento en sí quedan en `CatalogStore::last_error`.
pub fn open_default_store() -> Result<CatalogStore<JsonCatalogRepository>, ConfigError> {
  let cfg = StorageConfig::load()?;
  Ok(CatalogStore::new(JsonCatalogRepository::from_config(&cfg)))
}
