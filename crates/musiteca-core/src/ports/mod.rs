pub mod observer;
pub mod repository;

pub use observer::{CatalogEvent, CatalogObserver};
pub use repository::CatalogRepository;
