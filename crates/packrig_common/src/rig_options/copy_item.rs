use std::path::PathBuf;

/// A static directory copied verbatim into the output tree. Relative paths
/// are resolved against the working directory during normalization.
#[derive(Debug, Clone)]
pub struct CopyItem {
  pub from: PathBuf,
  pub to: PathBuf,
}
