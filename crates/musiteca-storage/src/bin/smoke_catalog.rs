use musiteca_core::ports::CatalogEvent;
use musiteca_storage::open_default_store;
use tracing_subscriber::EnvFilter;

fn main() {
  // RUST_LOG=debug para ver el volcado del catálogo
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .with_target(false)
    .compact()
    .init();

  let mut store = open_default_store().expect("failed to resolve storage config");
  store.subscribe(|event: &CatalogEvent| println!("event: {event:?}"));

  store.add_album("Radiohead", "OK Computer");
  store.add_album("Radiohead", "Kid A");
  store.add_album("Pixies", "Doolittle");

  println!("------------------------------------------------");
  for name in store.artist_names() {
    let Some(artist) = store.artist(&name) else { continue };
    println!("{}", artist.name);
    for album in &artist.albums {
      println!("\t{}", album.title);
    }
  }
  if let Some(error) = store.last_error() {
    println!("último error: {error}");
  }
  println!("------------------------------------------------");
}
