use std::{io, path::Path};

use crate::FileSystem;

#[derive(Debug, Clone, Copy, Default)]
pub struct OsFileSystem;

impl FileSystem for OsFileSystem {
  fn read_dir(&self, path: &Path) -> io::Result<Vec<String>> {
    std::fs::read_dir(path)?
      .map(|entry| entry.map(|entry| entry.file_name().to_string_lossy().into_owned()))
      .collect()
  }
}

#[test]
fn test_read_dir_lists_entry_names() {
  let dir = std::env::temp_dir().join("packrig-fs-os-read-dir");
  let _ = std::fs::remove_dir_all(&dir);
  std::fs::create_dir_all(&dir).unwrap();
  std::fs::write(dir.join("index.pug"), "").unwrap();
  std::fs::write(dir.join("style.css"), "").unwrap();

  let mut names = OsFileSystem.read_dir(&dir).unwrap();
  names.sort();
  assert_eq!(names, ["index.pug", "style.css"]);

  assert!(OsFileSystem.read_dir(&dir.join("missing")).is_err());
}
