pub mod domain;
pub mod errors;
pub mod ports;
pub mod services;

pub use domain::{Album, Artist, Catalog};
pub use errors::{CatalogError, CatalogErrorKind};
pub use services::CatalogStore;
