use serde::Serialize;

/// Source-map emission policy. Absent means no source maps, which is the
/// production behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Devtool {
  SourceMap,
}
