use std::path::PathBuf;

use clap::Args;

use crate::types::mode::Mode;

#[derive(Args)]
pub struct InputArgs {
  #[clap(long)]
  pub cwd: Option<PathBuf>,

  /// Falls back to `NODE_ENV` when absent; anything but `development`
  /// means production.
  #[clap(long, short = 'm')]
  pub mode: Option<Mode>,

  #[clap(long)]
  pub src: Option<String>,

  #[clap(long)]
  pub pages: Option<String>,

  #[clap(long)]
  pub template_ext: Option<String>,
}

#[derive(Args)]
pub struct OutputArgs {
  #[clap(long, short = 'd')]
  pub dir: Option<String>,

  /// Write the descriptor to this file instead of stdout.
  #[clap(long, short = 'o')]
  pub file: Option<PathBuf>,

  #[clap(long)]
  pub compact: bool,
}

#[derive(Args)]
pub struct EnhanceArgs {
  #[clap(long)]
  pub port: Option<u16>,

  #[clap(long, short = 's')]
  pub silent: bool,
}
