use std::sync::Arc;

use packrig_common::RigOptions;
use packrig_error::BuildResult;
use packrig_fs::{FileSystem, OsFileSystem};

use crate::{
  stages::{assemble::AssembleStage, scan::ScanStage},
  types::{SharedOptions, rig_output::RigOutput},
  utils::normalize_options::normalize_options,
};

pub struct Rigger<Fs: FileSystem = OsFileSystem> {
  fs: Fs,
  options: SharedOptions,
}

impl Rigger<OsFileSystem> {
  pub fn new(options: RigOptions) -> Self {
    Self::with_file_system(options, OsFileSystem)
  }
}

impl<Fs: FileSystem> Rigger<Fs> {
  /// Injectable file-system variant, mostly for tests.
  pub fn with_file_system(options: RigOptions, fs: Fs) -> Self {
    Self { fs, options: Arc::new(normalize_options(options)) }
  }

  /// Resolves the full bundler descriptor: one directory scan, then pure
  /// assembly from the normalized options.
  pub fn resolve(&self) -> BuildResult<RigOutput> {
    let pages = ScanStage::new(&self.fs, Arc::clone(&self.options)).scan()?;

    let warnings = if pages.is_empty() {
      vec![anyhow::anyhow!(
        "No `.{}` templates found in {}",
        self.options.template_ext,
        self.options.pages_dir.display()
      )]
    } else {
      Vec::new()
    };

    let config = AssembleStage::new(Arc::clone(&self.options)).assemble(&pages);

    Ok(RigOutput { config, warnings })
  }
}

#[cfg(test)]
mod tests {
  use packrig_common::{Mode, PluginDirective, RigOptions};
  use packrig_fs::MemoryFileSystem;

  use super::Rigger;

  fn fs() -> MemoryFileSystem {
    MemoryFileSystem::new(&[
      ("/app/src/pug/pages/index.pug", "div"),
      ("/app/src/pug/pages/sign-up.pug", "div"),
    ])
  }

  fn options(mode: Mode) -> RigOptions {
    RigOptions { mode: Some(mode), cwd: Some("/app".into()), ..RigOptions::default() }
  }

  #[test]
  fn resolving_twice_yields_identical_descriptors() {
    let rigger = Rigger::with_file_system(options(Mode::Production), fs());

    let first = rigger.resolve().unwrap();
    let second = rigger.resolve().unwrap();

    assert_eq!(first.config.to_json(), second.config.to_json());
    assert!(first.warnings.is_empty());
  }

  #[test]
  fn mode_is_an_explicit_parameter_not_ambient_state() {
    let development =
      Rigger::with_file_system(options(Mode::Development), fs()).resolve().unwrap();
    let production = Rigger::with_file_system(options(Mode::Production), fs()).resolve().unwrap();

    assert_eq!(development.config.mode, Mode::Development);
    assert_eq!(production.config.mode, Mode::Production);
    assert_ne!(development.config.to_json(), production.config.to_json());
  }

  #[test]
  fn missing_pages_directory_fails_resolution() {
    let rigger =
      Rigger::with_file_system(options(Mode::Production), MemoryFileSystem::default());

    let errors = rigger.resolve().unwrap_err();

    assert_eq!(errors.len(), 1);
    assert!(errors[0].to_string().contains("/app/src/pug/pages"));
  }

  #[test]
  fn empty_pages_directory_warns_but_resolves() {
    let fs = MemoryFileSystem::default();
    fs.add_dir(std::path::Path::new("/app/src/pug/pages"));

    let output = Rigger::with_file_system(options(Mode::Production), fs).resolve().unwrap();

    assert_eq!(output.warnings.len(), 1);
    assert!(output.warnings[0].to_string().contains(".pug"));
    assert!(!output.config.plugins.iter().any(|directive| {
      matches!(directive, PluginDirective::HtmlEmit { .. })
    }));
  }
}
