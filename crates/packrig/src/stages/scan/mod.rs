use anyhow::Context;
use itertools::Itertools;
use packrig_common::PageDescriptor;
use packrig_error::BuildResult;
use packrig_fs::FileSystem;
use packrig_utils::path_ext::PathExt;

use crate::types::SharedOptions;

pub type ScanStageOutput = Vec<PageDescriptor>;

/// Discovers template pages. This is the only stage that touches the file
/// system.
pub struct ScanStage<'a, Fs: FileSystem> {
  fs: &'a Fs,
  options: SharedOptions,
}

impl<'a, Fs: FileSystem> ScanStage<'a, Fs> {
  pub fn new(fs: &'a Fs, options: SharedOptions) -> Self {
    Self { fs, options }
  }

  /// Every template file in the pages directory becomes one page
  /// descriptor. Entries are sorted by name so the outcome does not depend
  /// on platform directory order. A missing or unreadable directory is
  /// fatal.
  pub fn scan(&self) -> BuildResult<ScanStageOutput> {
    let pages_dir = &self.options.pages_dir;

    let entries = self
      .fs
      .read_dir(pages_dir)
      .with_context(|| format!("Failed to read template directory {}", pages_dir.display()))?;

    let suffix = format!(".{}", self.options.template_ext);
    let pages_root = pages_dir.expect_to_slash();

    let pages = entries
      .into_iter()
      .filter(|name| name.ends_with(suffix.as_str()))
      .sorted_unstable()
      .map(|name| {
        let template = format!("{pages_root}/{name}");
        PageDescriptor::new(name.as_str(), template, &self.options.template_ext)
      })
      .collect();

    Ok(pages)
  }
}

#[cfg(test)]
mod tests {
  use std::sync::Arc;

  use packrig_common::RigOptions;
  use packrig_fs::MemoryFileSystem;

  use super::ScanStage;
  use crate::{types::SharedOptions, utils::normalize_options::normalize_options};

  fn options() -> SharedOptions {
    Arc::new(normalize_options(RigOptions {
      cwd: Some("/app".into()),
      ..RigOptions::default()
    }))
  }

  #[test]
  fn discovers_one_page_per_template() {
    let fs = MemoryFileSystem::new(&[
      ("/app/src/pug/pages/sign-up.pug", "div"),
      ("/app/src/pug/pages/index.pug", "div"),
      ("/app/src/pug/pages/mixins.js", "export {}"),
    ]);

    let pages = ScanStage::new(&fs, options()).scan().unwrap();

    assert_eq!(pages.len(), 2);
    assert_eq!(pages[0].name, "index");
    assert_eq!(pages[0].template, "/app/src/pug/pages/index.pug");
    assert_eq!(pages[0].output, "pages/index.html");
    assert_eq!(pages[1].name, "sign-up");
    assert_eq!(pages[1].output, "pages/sign-up.html");
  }

  #[test]
  fn page_order_is_sorted_by_name() {
    let fs = MemoryFileSystem::new(&[
      ("/app/src/pug/pages/z.pug", ""),
      ("/app/src/pug/pages/a.pug", ""),
      ("/app/src/pug/pages/m.pug", ""),
    ]);

    let pages = ScanStage::new(&fs, options()).scan().unwrap();
    let names = pages.iter().map(|page| page.name.as_str()).collect::<Vec<_>>();

    assert_eq!(names, ["a", "m", "z"]);
  }

  #[test]
  fn empty_pages_directory_yields_no_pages() {
    let fs = MemoryFileSystem::default();
    fs.add_dir(std::path::Path::new("/app/src/pug/pages"));

    let pages = ScanStage::new(&fs, options()).scan().unwrap();

    assert!(pages.is_empty());
  }

  #[test]
  fn missing_pages_directory_is_an_error_naming_the_path() {
    let fs = MemoryFileSystem::default();

    let errors = ScanStage::new(&fs, options()).scan().unwrap_err();

    assert!(errors[0].to_string().contains("/app/src/pug/pages"));
  }
}
