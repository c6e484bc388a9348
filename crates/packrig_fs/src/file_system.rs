use std::{io, path::Path};

/// The one file-system capability the configuration resolver needs: listing
/// a directory. Injected so page discovery is testable without touching the
/// real disk.
pub trait FileSystem {
  /// Returns the entry names directly inside `path`. Order is unspecified;
  /// callers that need determinism sort the result.
  fn read_dir(&self, path: &Path) -> io::Result<Vec<String>>;
}
