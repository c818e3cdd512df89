use crate::domain::Catalog;
use crate::errors::CatalogError;

/// Port de persistencia del catálogo.
///
/// Siempre trabaja con el documento completo: `save` sobrescribe todo,
/// nunca aplica parches incrementales.
pub trait CatalogRepository {
  /// Lee el documento persistido.
  ///
  /// `Ok(None)` significa que no hay documento todavía (no es un error).
  fn load(&self) -> Result<Option<Catalog>, CatalogError>;

  fn save(&self, catalog: &Catalog) -> Result<(), CatalogError>;
}
