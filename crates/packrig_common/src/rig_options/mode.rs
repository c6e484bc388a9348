use std::{fmt::Display, str::FromStr};

use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
  Development,
  #[default]
  Production,
}

impl Mode {
  /// Maps the raw environment value the caller read once. Anything but the
  /// exact string `development` means production, including an unset
  /// variable.
  pub fn from_node_env(value: Option<&str>) -> Self {
    match value {
      Some("development") => Self::Development,
      _ => Self::Production,
    }
  }

  #[inline]
  pub fn is_dev(&self) -> bool {
    matches!(self, Self::Development)
  }

  #[inline]
  pub fn is_prod(&self) -> bool {
    !self.is_dev()
  }

  /// Filename scheme for emitted assets: stable names in development,
  /// content-hashed names in production. `[name]` and `[hash]` are tokens
  /// the engine substitutes at emit time.
  pub fn asset_filename(&self, ext: &str) -> String {
    match self {
      Self::Development => format!("{ext}/[name].{ext}"),
      Self::Production => format!("{ext}/[name].[hash].{ext}"),
    }
  }
}

impl FromStr for Mode {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "development" => Ok(Self::Development),
      "production" => Ok(Self::Production),
      _ => Err(format!("Invalid mode \"{s}\".")),
    }
  }
}

impl Display for Mode {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Development => write!(f, "development"),
      Self::Production => write!(f, "production"),
    }
  }
}

#[test]
fn test_unset_environment_means_production() {
  assert_eq!(Mode::from_node_env(None), Mode::Production);
  assert_eq!(Mode::from_node_env(Some("development")), Mode::Development);
  // Unknown values fall back to production, same as an unset variable.
  assert_eq!(Mode::from_node_env(Some("staging")), Mode::Production);
  assert_eq!(Mode::default(), Mode::Production);
}

#[test]
fn test_mode_parses_strictly() {
  assert_eq!("development".parse(), Ok(Mode::Development));
  assert_eq!("production".parse(), Ok(Mode::Production));
  assert!("staging".parse::<Mode>().is_err());
}

#[test]
fn test_asset_filename_scheme() {
  assert_eq!(Mode::Development.asset_filename("js"), "js/[name].js");
  assert_eq!(Mode::Production.asset_filename("js"), "js/[name].[hash].js");
  assert_eq!(Mode::Production.asset_filename("css"), "css/[name].[hash].css");
  // Pure: repeated calls agree.
  assert_eq!(Mode::Production.asset_filename("js"), Mode::Production.asset_filename("js"));
}
