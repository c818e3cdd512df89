use crate::errors::CatalogError;

/// Cambios que el store anuncia a sus suscriptores.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogEvent {
  /// Carga exitosa; `artists` es la cantidad de artistas en memoria.
  Loaded { artists: usize },
  AlbumAdded { artist_name: String, title: String },
  AlbumDeleted { artist_name: String, title: String, removed: usize },
  ArtistDeleted { name: String },
  /// Se registró un error nuevo en `last_error`.
  Failed(CatalogError),
}

// La UI implementará esto para refrescar la lista o mostrar el error.
pub trait CatalogObserver {
  fn on_event(&self, event: &CatalogEvent);
}

impl<F> CatalogObserver for F
where
  F: Fn(&CatalogEvent),
{
  fn on_event(&self, event: &CatalogEvent) {
    self(event)
  }
}
