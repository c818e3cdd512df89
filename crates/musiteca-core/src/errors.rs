// crates/musiteca-core/src/errors.rs
use thiserror::Error;

/// Fallos que el `CatalogStore` registra en `last_error`.
///
/// Nunca salen del store: la capa de presentación los lee y los muestra.
/// Los payloads son `String` para poder clonarlos y guardarlos.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
  /// El documento existe pero no se pudo leer (permisos, I/O).
  #[error("read error: {0}")]
  Read(String),

  /// El contenido no respeta el formato del catálogo.
  #[error("decode error: {0}")]
  Decode(String),

  #[error("encode error: {0}")]
  Encode(String),

  /// No se pudo escribir el documento en disco.
  #[error("write error: {0}")]
  Write(String),
}

/// Clasificación gruesa de `CatalogError`, útil para la UI y los tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogErrorKind {
  Read,
  Decode,
  Write,
}

impl CatalogError {
  pub fn kind(&self) -> CatalogErrorKind {
    match self {
      CatalogError::Read(_) => CatalogErrorKind::Read,
      CatalogError::Decode(_) => CatalogErrorKind::Decode,
      CatalogError::Encode(_) | CatalogError::Write(_) => CatalogErrorKind::Write,
    }
  }
}
