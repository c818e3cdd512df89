use std::fs;
use std::io::{self, ErrorKind, Write};
use std::path::Path;

/// Lee el archivo completo; `Ok(None)` si no existe.
pub fn read_to_string_if_exists(path: &Path) -> io::Result<Option<String>> {
  match fs::read_to_string(path) {
    Ok(content) => Ok(Some(content)),
    Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
    Err(e) => Err(e),
  }
}

/// Lee los bytes crudos; `Ok(None)` si no existe.
///
/// No valida UTF-8: eso le toca a quien decodifique el contenido.
pub fn read_if_exists(path: &Path) -> io::Result<Option<Vec<u8>>> {
  match fs::read(path) {
    Ok(bytes) => Ok(Some(bytes)),
    Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
    Err(e) => Err(e),
  }
}

/// Sobrescribe el archivo entero, creando el directorio padre si falta.
///
/// No es atómico: un crash a mitad de escritura puede dejar el archivo truncado.
pub fn overwrite_str(path: &Path, contents: &str) -> io::Result<()> {
  if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
    fs::create_dir_all(parent)?;
  }
  fs::write(path, contents)
}

/// Escribe a `<path>.tmp` y renombra encima del destino.
pub fn atomic_write_str(path: &Path, contents: &str) -> io::Result<()> {
  let tmp_path = path.with_extension("tmp");

  {
    let mut tmp_file = fs::File::create(&tmp_path)?;
    tmp_file.write_all(contents.as_bytes())?;
    tmp_file.sync_all()?;
  }

  fs::rename(&tmp_path, path)?;
  Ok(())
}
