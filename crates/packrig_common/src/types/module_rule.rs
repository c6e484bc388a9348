use arcstr::ArcStr;
use serde::Serialize;

use crate::Loader;

/// Binds an extension pattern to the loader chain that handles it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModuleRule {
  pub test: FileTest,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub exclude: Option<ArcStr>,
  #[serde(rename = "use")]
  pub loaders: Vec<Loader>,
}

impl ModuleRule {
  pub fn new(test: FileTest, loaders: Vec<Loader>) -> Self {
    Self { test, exclude: None, loaders }
  }

  pub fn with_exclude(test: FileTest, exclude: &str, loaders: Vec<Loader>) -> Self {
    Self { test, exclude: Some(exclude.into()), loaders }
  }
}

/// The set of file extensions a rule matches on.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FileTest {
  pub extensions: Vec<ArcStr>,
}

impl FileTest {
  pub fn new(extensions: &[&str]) -> Self {
    Self { extensions: extensions.iter().map(|ext| ArcStr::from(*ext)).collect() }
  }

  pub fn matches(&self, file_name: &str) -> bool {
    std::path::Path::new(file_name)
      .extension()
      .and_then(|ext| ext.to_str())
      .is_some_and(|ext| self.extensions.iter().any(|candidate| candidate.as_str() == ext))
  }
}

#[test]
fn test_file_test_matches_on_extension() {
  let test = FileTest::new(&["sass", "scss"]);
  assert!(test.matches("theme.scss"));
  assert!(test.matches("nested/dir/theme.sass"));
  assert!(!test.matches("theme.css"));
  assert!(!test.matches("scss"));
}
