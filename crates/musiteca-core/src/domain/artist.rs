use serde::{Deserialize, Serialize};

use super::album::Album;

/// Representa a un artista y sus álbumes.
///
/// El nombre es a la vez identificador y nombre visible, así que renombrar
/// un artista implica borrarlo y volver a crearlo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artist {
  pub name: String,

  /// Álbumes en orden de inserción.
  pub albums: Vec<Album>,
}

impl Artist {
  pub fn new(name: impl Into<String>) -> Self {
    Self { name: name.into(), albums: Vec::new() }
  }

  pub fn id(&self) -> &str {
    &self.name
  }

  /// Busca un álbum por título exacto (sensible a mayúsculas, sin recortar espacios).
  pub fn find_album(&self, title: &str) -> Option<&Album> {
    self.albums.iter().find(|album| album.title == title)
  }

  pub fn has_album(&self, title: &str) -> bool {
    self.find_album(title).is_some()
  }

  /// Quita todos los álbumes con ese título y devuelve cuántos se quitaron.
  pub fn remove_albums_titled(&mut self, title: &str) -> usize {
    let before = self.albums.len();
    self.albums.retain(|album| album.title != title);
    before - self.albums.len()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn album_lookup_is_exact_match() {
    let mut artist = Artist::new("Radiohead");
    artist.albums.push(Album::new("Radiohead", "Kid A"));

    assert!(artist.has_album("Kid A"));
    assert!(!artist.has_album("kid a"));
    assert!(!artist.has_album("Kid A "));
  }

  #[test]
  fn remove_albums_titled_removes_every_match() {
    let mut artist = Artist::new("A");
    artist.albums.push(Album::new("A", "X"));
    artist.albums.push(Album::new("A", "Y"));
    artist.albums.push(Album::new("A", "X"));

    assert_eq!(artist.remove_albums_titled("X"), 2);
    assert_eq!(artist.albums, vec![Album::new("A", "Y")]);
    assert_eq!(artist.remove_albums_titled("missing"), 0);
  }

  #[test]
  fn wire_format_uses_camel_case_artist_name() {
    let mut artist = Artist::new("Radiohead");
    artist.albums.push(Album::new("Radiohead", "OK Computer"));

    let json = serde_json::to_value(&artist).unwrap();

    assert_eq!(
      json,
      serde_json::json!({
        "name": "Radiohead",
        "albums": [{ "artistName": "Radiohead", "title": "OK Computer" }]
      })
    );
  }

  #[test]
  fn album_id_joins_artist_and_title() {
    assert_eq!(Album::new("Pixies", "Doolittle").id(), "Pixies-Doolittle");
  }
}
