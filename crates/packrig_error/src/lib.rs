use std::ops::{Deref, DerefMut};

/// Aggregate of every failure hit while resolving a configuration. The
/// resolver has a single fatal error class (an unreadable template-page
/// directory), but callers still receive a collection so the CLI can report
/// uniformly.
#[derive(Debug)]
pub struct BuildError(pub Vec<anyhow::Error>);

impl Deref for BuildError {
  type Target = Vec<anyhow::Error>;

  fn deref(&self) -> &Self::Target {
    &self.0
  }
}

impl DerefMut for BuildError {
  fn deref_mut(&mut self) -> &mut Self::Target {
    &mut self.0
  }
}

impl From<anyhow::Error> for BuildError {
  fn from(error: anyhow::Error) -> Self {
    Self(vec![error])
  }
}

impl From<Vec<anyhow::Error>> for BuildError {
  fn from(errors: Vec<anyhow::Error>) -> Self {
    Self(errors)
  }
}

pub type BuildResult<T> = anyhow::Result<T, BuildError>;

#[test]
fn test_aggregates_keep_the_diagnostic() {
  let error =
    BuildError::from(anyhow::anyhow!("Failed to read template directory `src/pug/pages`"));
  assert_eq!(error.len(), 1);
  assert!(error[0].to_string().contains("src/pug/pages"));
}
