use std::path::PathBuf;

use crate::{CopyItem, EntryItem, Mode};

#[derive(Debug)]
pub struct NormalizedRigOptions {
  // --- Environment
  pub mode: Mode,
  pub cwd: PathBuf,

  // --- Layout
  pub src_dir: PathBuf,
  pub out_dir: PathBuf,
  pub pages_dir: PathBuf,
  pub template_ext: String,

  // --- Build surface
  pub entry: Vec<EntryItem>,
  pub copy: Vec<CopyItem>,
  pub dev_port: u16,
}
