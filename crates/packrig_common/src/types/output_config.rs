use arcstr::ArcStr;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutputConfig {
  /// Script asset name template, per the mode's filename scheme.
  pub filename: String,
  /// Absolute slash-rendered output directory.
  pub path: ArcStr,
}
