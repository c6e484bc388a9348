use std::path::{Path, PathBuf};

use packrig_common::{CopyItem, EntryItem, NormalizedRigOptions, RigOptions};
use sugar_path::SugarPath;

/// Fills every unset field with its documented default and anchors every
/// path at `cwd`, so the rest of the pipeline never touches the process
/// environment again.
pub fn normalize_options(raw_options: RigOptions) -> NormalizedRigOptions {
  let mode = raw_options.mode.unwrap_or_default();

  let cwd = raw_options
    .cwd
    .unwrap_or_else(|| std::env::current_dir().expect("Failed to get current dir"));

  let src_dir = absolutize(raw_options.src_dir.as_deref().unwrap_or("src"), &cwd);
  let out_dir = absolutize(raw_options.out_dir.as_deref().unwrap_or("dist"), &cwd);

  let pages_dir = match raw_options.pages_dir {
    Some(dir) => absolutize(&dir, &cwd),
    None => src_dir.join("pug").join("pages"),
  };

  let template_ext = raw_options.template_ext.unwrap_or_else(|| "pug".to_string());

  let entry = raw_options.entry.unwrap_or_else(|| {
    vec![EntryItem {
      name: Some("main".to_string()),
      imports: vec!["@babel/polyfill".to_string(), "./index.js".to_string()],
    }]
  });

  let copy = match raw_options.copy {
    Some(items) => items
      .into_iter()
      .map(|item| CopyItem {
        from: item.from.absolutize_with(&cwd),
        to: item.to.absolutize_with(&cwd),
      })
      .collect(),
    None => vec![CopyItem { from: src_dir.join("image"), to: out_dir.join("image") }],
  };

  NormalizedRigOptions {
    mode,
    cwd,
    src_dir,
    out_dir,
    pages_dir,
    template_ext,
    entry,
    copy,
    dev_port: raw_options.dev_port.unwrap_or(4200),
  }
}

fn absolutize(path: &str, cwd: &Path) -> PathBuf {
  Path::new(path).absolutize_with(cwd)
}
