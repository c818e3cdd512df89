pub mod album;
pub mod artist;

use std::collections::BTreeMap;

pub use album::Album;
pub use artist::Artist;

/// Catálogo completo: nombre de artista -> registro del artista.
///
/// La clave es siempre igual a `Artist::name`.
pub type Catalog = BTreeMap<String, Artist>;
