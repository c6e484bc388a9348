use std::{
  io::{self, Write},
  path::{Component, Path},
};

use vfs::{MemoryFS, VfsPath};

use crate::FileSystem;

/// In-memory tree for tests, backed by the `vfs` crate.
#[derive(Debug)]
pub struct MemoryFileSystem {
  root: VfsPath,
}

impl Default for MemoryFileSystem {
  fn default() -> Self {
    Self { root: MemoryFS::new().into() }
  }
}

impl MemoryFileSystem {
  /// Builds a tree from `(path, content)` pairs, creating parent
  /// directories along the way.
  pub fn new(files: &[(&str, &str)]) -> Self {
    let fs = Self::default();
    for (path, content) in files {
      fs.add_file(Path::new(path), content);
    }
    fs
  }

  pub fn add_file(&self, path: &Path, content: &str) {
    let file = self.vfs_path(path).expect("memory fs path");
    file.parent().create_dir_all().expect("memory fs create_dir_all");
    let mut handle = file.create_file().expect("memory fs create_file");
    handle.write_all(content.as_bytes()).expect("memory fs write");
  }

  pub fn add_dir(&self, path: &Path) {
    self.vfs_path(path).and_then(|dir| dir.create_dir_all()).expect("memory fs create_dir_all");
  }

  /// `VfsPath` joins relative slash segments only, so platform roots and
  /// prefixes are stripped here.
  fn vfs_path(&self, path: &Path) -> vfs::VfsResult<VfsPath> {
    let segments = path
      .components()
      .filter_map(|component| match component {
        Component::Normal(segment) => Some(segment.to_string_lossy()),
        _ => None,
      })
      .collect::<Vec<_>>()
      .join("/");
    self.root.join(segments)
  }
}

impl FileSystem for MemoryFileSystem {
  fn read_dir(&self, path: &Path) -> io::Result<Vec<String>> {
    let dir = self.vfs_path(path).map_err(io::Error::other)?;
    if !dir.exists().map_err(io::Error::other)? {
      return Err(io::Error::new(
        io::ErrorKind::NotFound,
        format!("No such directory: {}", path.display()),
      ));
    }
    let entries = dir.read_dir().map_err(io::Error::other)?;
    Ok(entries.map(|entry| entry.filename()).collect())
  }
}
