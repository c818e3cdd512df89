pub mod io;

pub use io::{atomic_write_str, overwrite_str, read_if_exists, read_to_string_if_exists};
