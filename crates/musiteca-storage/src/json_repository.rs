use std::path::{Path, PathBuf};

use musiteca_core::ports::CatalogRepository;
use musiteca_core::{Catalog, CatalogError};
use tracing::{debug, info};

use crate::config::StorageConfig;

/// Persiste el catálogo completo como un único documento JSON.
///
/// Formato: objeto cuyas claves son nombres de artista y cuyos valores son
/// `{"name": ..., "albums": [{"artistName": ..., "title": ...}]}`.
///
/// Cada `save` reescribe el archivo entero en el sitio (sin archivo temporal
/// ni rename), así que un crash a mitad de escritura puede dejarlo corrupto.
#[derive(Debug, Clone)]
pub struct JsonCatalogRepository {
  path: PathBuf,
  pretty: bool,
}

impl JsonCatalogRepository {
  pub fn new(path: impl Into<PathBuf>) -> Self {
    Self { path: path.into(), pretty: false }
  }

  pub fn from_config(cfg: &StorageConfig) -> Self {
    info!(path = %cfg.catalog_path.display(), "catalog document location");
    Self { path: cfg.catalog_path.clone(), pretty: cfg.pretty }
  }

  pub fn pretty(mut self, pretty: bool) -> Self {
    self.pretty = pretty;
    self
  }

  pub fn path(&self) -> &Path {
    &self.path
  }
}

/// Decodifica el documento y comprueba que cada clave coincida con `name`.
///
/// Bytes que no son UTF-8 válido también son un error de decodificación.
pub fn decode_catalog(content: &[u8]) -> Result<Catalog, CatalogError> {
  let catalog: Catalog = serde_json::from_slice(content).map_err(|e| CatalogError::Decode(e.to_string()))?;

  if let Some((key, artist)) = catalog.iter().find(|(key, artist)| **key != artist.name) {
    return Err(CatalogError::Decode(format!("artist key {key:?} does not match name {:?}", artist.name)));
  }

  Ok(catalog)
}

pub fn encode_catalog(catalog: &Catalog, pretty: bool) -> Result<String, CatalogError> {
  let encoded = if pretty { serde_json::to_string_pretty(catalog) } else { serde_json::to_string(catalog) };
  encoded.map_err(|e| CatalogError::Encode(e.to_string()))
}

impl CatalogRepository for JsonCatalogRepository {
  fn load(&self) -> Result<Option<Catalog>, CatalogError> {
    let content = musiteca_fs::read_if_exists(&self.path)
      .map_err(|e| CatalogError::Read(format!("{}: {e}", self.path.display())))?;

    let Some(content) = content else {
      debug!(path = %self.path.display(), "catalog document not found");
      return Ok(None);
    };

    let catalog = decode_catalog(&content)?;
    debug!(artists = catalog.len(), "catalog document loaded");
    Ok(Some(catalog))
  }

  fn save(&self, catalog: &Catalog) -> Result<(), CatalogError> {
    let encoded = encode_catalog(catalog, self.pretty)?;

    musiteca_fs::overwrite_str(&self.path, &encoded)
      .map_err(|e| CatalogError::Write(format!("{}: {e}", self.path.display())))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use musiteca_core::{Album, Artist, CatalogErrorKind, CatalogStore};
  use std::fs;
  use tempfile::tempdir;

  fn sample_catalog() -> Catalog {
    let mut radiohead = Artist::new("Radiohead");
    radiohead.albums.push(Album::new("Radiohead", "OK Computer"));
    radiohead.albums.push(Album::new("Radiohead", "Kid A"));

    let mut pixies = Artist::new("Pixies");
    pixies.albums.push(Album::new("Pixies", "Surfer Rosa"));
    pixies.albums.push(Album::new("Pixies", "Doolittle"));

    let mut catalog = Catalog::new();
    catalog.insert("Radiohead".into(), radiohead);
    catalog.insert("Pixies".into(), pixies);
    catalog.insert("Empty".into(), Artist::new("Empty"));
    catalog
  }

  #[test]
  fn save_then_load_reproduces_catalog() {
    let tmp = tempdir().unwrap();
    let repo = JsonCatalogRepository::new(tmp.path().join("music.json"));
    let catalog = sample_catalog();

    repo.save(&catalog).unwrap();

    assert_eq!(repo.load().unwrap(), Some(catalog));
  }

  #[test]
  fn pretty_output_loads_the_same() {
    let tmp = tempdir().unwrap();
    let repo = JsonCatalogRepository::new(tmp.path().join("music.json")).pretty(true);

    repo.save(&sample_catalog()).unwrap();

    assert!(fs::read_to_string(repo.path()).unwrap().contains('\n'));
    assert_eq!(repo.load().unwrap(), Some(sample_catalog()));
  }

  #[test]
  fn reads_documented_wire_format() {
    let json = r#"{
      "Radiohead": {
        "name": "Radiohead",
        "albums": [
          {"artistName": "Radiohead", "title": "OK Computer"},
          {"artistName": "Radiohead", "title": "Kid A"}
        ]
      }
    }"#;

    let catalog = decode_catalog(json.as_bytes()).unwrap();

    let titles: Vec<_> = catalog["Radiohead"].albums.iter().map(|a| a.title.as_str()).collect();
    assert_eq!(titles, vec!["OK Computer", "Kid A"]);
    assert_eq!(catalog["Radiohead"].albums[1].artist_name, "Radiohead");
  }

  #[test]
  fn key_name_mismatch_is_a_decode_error() {
    let json = r#"{"Blur": {"name": "Oasis", "albums": []}}"#;

    assert_eq!(decode_catalog(json.as_bytes()).unwrap_err().kind(), CatalogErrorKind::Decode);
  }

  #[test]
  fn wrong_schema_is_a_decode_error() {
    assert_eq!(decode_catalog(br#"["Radiohead"]"#).unwrap_err().kind(), CatalogErrorKind::Decode);
    assert_eq!(decode_catalog(br#"{"A": {"name": "A"}}"#).unwrap_err().kind(), CatalogErrorKind::Decode);
  }

  #[test]
  fn unreadable_path_is_a_read_error() {
    let tmp = tempdir().unwrap();
    // Un directorio existe pero no se puede leer como archivo.
    let repo = JsonCatalogRepository::new(tmp.path());

    assert_eq!(repo.load().unwrap_err().kind(), CatalogErrorKind::Read);
  }

  #[test]
  fn unwritable_path_is_a_write_error() {
    let tmp = tempdir().unwrap();
    let repo = JsonCatalogRepository::new(tmp.path());

    assert_eq!(repo.save(&Catalog::new()).unwrap_err().kind(), CatalogErrorKind::Write);
  }

  // -------- CatalogStore sobre archivos reales --------

  #[test]
  fn store_starts_empty_when_file_is_missing() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("music.json");

    let store = CatalogStore::new(JsonCatalogRepository::new(&path));

    assert!(store.artists().is_empty());
    assert!(store.last_error().is_none());
    assert!(!path.exists());
  }

  #[test]
  fn store_records_decode_failure_for_corrupt_file() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("music.json");
    fs::write(&path, "{ not json").unwrap();

    let store = CatalogStore::new(JsonCatalogRepository::new(&path));

    assert!(store.artists().is_empty());
    assert_eq!(store.last_error().map(CatalogError::kind), Some(CatalogErrorKind::Decode));
  }

  #[test]
  fn store_records_decode_failure_for_invalid_utf8() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("music.json");
    fs::write(&path, [0xff, 0xfe, 0x7b, 0x00]).unwrap();

    let store = CatalogStore::new(JsonCatalogRepository::new(&path));

    assert!(store.artists().is_empty());
    assert_eq!(store.last_error().map(CatalogError::kind), Some(CatalogErrorKind::Decode));
  }

  #[test]
  fn mutations_survive_a_restart() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("music.json");

    {
      let mut store = CatalogStore::new(JsonCatalogRepository::new(&path));
      store.add_album("Zed", "Z1");
      store.add_album("Abba", "Arrival");
      store.add_album("Abba", "Waterloo");
      store.add_album("Mno", "M1");
      store.delete_album(&Album::new("Abba", "Arrival"));
    }

    let reopened = CatalogStore::new(JsonCatalogRepository::new(&path));

    assert!(reopened.last_error().is_none());
    assert_eq!(reopened.artist_names(), vec!["Abba", "Mno", "Zed"]);
    assert_eq!(reopened.artist("Abba").unwrap().albums, vec![Album::new("Abba", "Waterloo")]);
  }

  #[test]
  fn deleted_artist_leaves_no_trace_on_disk() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("music.json");
    let mut store = CatalogStore::new(JsonCatalogRepository::new(&path));
    store.add_album("A", "X");
    store.add_album("A", "Y");
    store.add_album("B", "Z");

    store.delete_artist(&Artist::new("A"));

    let on_disk = fs::read_to_string(&path).unwrap();
    assert!(!on_disk.contains("\"A\""));
    let reopened = CatalogStore::new(JsonCatalogRepository::new(&path));
    assert_eq!(reopened.artist_names(), vec!["B"]);
  }
}
