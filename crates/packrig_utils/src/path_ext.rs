use sugar_path::SugarPath;

pub trait PathExt {
  fn expect_to_slash(&self) -> String;
}

impl PathExt for std::path::Path {
  /// Renders the path with forward slashes regardless of platform, so the
  /// emitted descriptor is byte-stable across operating systems.
  fn expect_to_slash(&self) -> String {
    self
      .to_slash()
      .unwrap_or_else(|| panic!("Failed to convert {:?} to slash str", self.display()))
      .into_owned()
  }
}

#[test]
fn test_expect_to_slash() {
  use std::path::Path;

  let path = Path::new("project").join("src").join("pug").join("pages");
  assert_eq!(path.expect_to_slash(), "project/src/pug/pages");
}
