use tracing::{debug, warn};

use crate::domain::{Album, Artist, Catalog};
use crate::errors::CatalogError;
use crate::ports::{CatalogEvent, CatalogObserver, CatalogRepository};

/// Catálogo en memoria respaldado por un único documento.
///
/// - Carga el documento completo al crearse.
/// - Cada mutación se aplica en memoria y luego se guarda el documento completo.
/// - Los fallos de carga/guardado no se propagan: quedan en `last_error`
///   hasta la siguiente operación exitosa, que lo limpia.
///
/// Es síncrono y de un solo dueño; no hay bloqueo porque no hay escritores
/// concurrentes.
pub struct CatalogStore<R>
where
  R: CatalogRepository,
{
  repo: R,
  artists: Catalog,
  last_error: Option<CatalogError>,
  observers: Vec<Box<dyn CatalogObserver>>,
}

impl<R> CatalogStore<R>
where
  R: CatalogRepository,
{
  /// Crea el store y carga el documento persistido (si existe).
  ///
  /// Nadie está suscrito todavía durante esta primera carga: su resultado
  /// solo se ve en `last_error()`. Usar `with_observers` para recibir los eventos.
  pub fn new(repo: R) -> Self {
    Self::with_observers(repo, Vec::new())
  }

  /// Registra los observadores antes de la primera carga, así reciben
  /// `Loaded` o `Failed` de esa carga.
  pub fn with_observers(repo: R, observers: Vec<Box<dyn CatalogObserver>>) -> Self {
    let mut store = Self { repo, artists: Catalog::new(), last_error: None, observers };
    store.load();
    store
  }

  pub fn subscribe<O>(&mut self, observer: O)
  where
    O: CatalogObserver + 'static,
  {
    self.observers.push(Box::new(observer));
  }

  // -------- PERSISTENCIA --------

  /// Lee el documento completo.
  ///
  /// Sin documento el catálogo queda como está. Si la lectura o el
  /// decodificado fallan, el catálogo tampoco cambia y el error queda en
  /// `last_error`.
  pub fn load(&mut self) {
    match self.repo.load() {
      Ok(None) => {
        debug!("no catalog document yet, starting empty");
        self.last_error = None;
        self.notify(&CatalogEvent::Loaded { artists: self.artists.len() });
      }
      Ok(Some(catalog)) => {
        self.artists = catalog;
        self.last_error = None;
        self.dump();
        self.notify(&CatalogEvent::Loaded { artists: self.artists.len() });
      }
      Err(e) => self.record_error(e),
    }
  }

  /// Sobrescribe el documento con el catálogo completo.
  ///
  /// Un fallo no deshace la mutación ya aplicada en memoria.
  pub fn save(&mut self) {
    match self.repo.save(&self.artists) {
      Ok(()) => {
        debug!(artists = self.artists.len(), "catalog saved");
        self.last_error = None;
      }
      Err(e) => self.record_error(e),
    }
  }

  // -------- COMANDOS (escritura) --------

  /// Agrega un álbum, creando el artista si no existe.
  ///
  /// Un título repetido para el mismo artista se ignora (solo se loguea).
  /// No valida cadenas vacías: eso lo hace la capa de UI.
  pub fn add_album(&mut self, artist_name: &str, title: &str) {
    let artist = self.artists.entry(artist_name.to_owned()).or_insert_with(|| Artist::new(artist_name));

    if artist.has_album(title) {
      warn!(artist = artist_name, title, "album already exists");
      return;
    }

    artist.albums.push(Album::new(artist_name, title));

    self.dump();
    self.save();
    self.notify(&CatalogEvent::AlbumAdded { artist_name: artist_name.to_owned(), title: title.to_owned() });
  }

  /// Borra por título (no por identidad) todos los álbumes coincidentes.
  pub fn delete_album(&mut self, album: &Album) {
    let Some(artist) = self.artists.get_mut(&album.artist_name) else {
      return;
    };

    let removed = artist.remove_albums_titled(&album.title);
    self.save();

    if removed > 0 {
      self.notify(&CatalogEvent::AlbumDeleted {
        artist_name: album.artist_name.clone(),
        title: album.title.clone(),
        removed,
      });
    }
  }

  /// Borra el artista junto con todos sus álbumes.
  pub fn delete_artist(&mut self, artist: &Artist) {
    let existed = self.artists.remove(&artist.name).is_some();
    self.save();

    if existed {
      self.notify(&CatalogEvent::ArtistDeleted { name: artist.name.clone() });
    }
  }

  // -------- QUERY (lectura) --------

  /// Nombres de artistas en orden lexicográfico ascendente.
  pub fn artist_names(&self) -> Vec<String> {
    // BTreeMap ya itera en orden de clave.
    self.artists.keys().cloned().collect()
  }

  pub fn artist(&self, name: &str) -> Option<&Artist> {
    self.artists.get(name)
  }

  pub fn artists(&self) -> &Catalog {
    &self.artists
  }

  /// Artista preseleccionado en el formulario: el primero por nombre.
  ///
  /// `None` indica que la UI debe empezar pidiendo un artista nuevo.
  pub fn default_artist_name(&self) -> Option<&str> {
    self.artists.keys().next().map(String::as_str)
  }

  pub fn last_error(&self) -> Option<&CatalogError> {
    self.last_error.as_ref()
  }

  /// Vuelca el catálogo al log en nivel `debug`.
  pub fn dump(&self) {
    for artist in self.artists.values() {
      debug!("artist: {}", artist.name);
      for album in &artist.albums {
        debug!("  title: {}", album.title);
      }
    }
  }

  fn record_error(&mut self, error: CatalogError) {
    warn!(%error, "catalog persistence failed");
    self.last_error = Some(error.clone());
    self.notify(&CatalogEvent::Failed(error));
  }

  fn notify(&self, event: &CatalogEvent) {
    for observer in &self.observers {
      observer.on_event(event);
    }
  }
}
