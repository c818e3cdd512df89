use serde::{Deserialize, Serialize};

/// Un álbum dentro del catálogo.
///
/// `artist_name` es una referencia desnormalizada al artista dueño, no un
/// puntero de propiedad: el álbum vive dentro de `Artist::albums`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Album {
  /// Nombre del artista al que pertenece.
  pub artist_name: String,

  /// Título tal como lo escribió el usuario (sin normalizar).
  pub title: String,
}

impl Album {
  pub fn new(artist_name: impl Into<String>, title: impl Into<String>) -> Self {
    Self { artist_name: artist_name.into(), title: title.into() }
  }

  /// Identidad estable para listas: `"<artista>-<título>"`.
  pub fn id(&self) -> String {
    format!("{}-{}", self.artist_name, self.title)
  }
}
