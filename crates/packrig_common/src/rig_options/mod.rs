pub mod copy_item;
pub mod entry_item;
pub mod mode;
pub mod normalized_rig_options;

use std::path::PathBuf;

use crate::{CopyItem, EntryItem, Mode};

#[derive(Default, Debug, Clone)]
pub struct RigOptions {
  // --- Environment
  pub mode: Option<Mode>,
  pub cwd: Option<PathBuf>,

  // --- Layout
  pub src_dir: Option<String>,
  pub out_dir: Option<String>,
  pub pages_dir: Option<String>,
  pub template_ext: Option<String>,

  // --- Build surface
  pub entry: Option<Vec<EntryItem>>,
  pub copy: Option<Vec<CopyItem>>,
  pub dev_port: Option<u16>,
}
