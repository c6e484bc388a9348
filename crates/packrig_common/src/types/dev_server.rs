use arcstr::ArcStr;
use serde::Serialize;

/// Parameters for the external dev server: a fixed port serving the output
/// directory, with hot reload only in development.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DevServerConfig {
  pub port: u16,
  pub content_base: ArcStr,
  pub hot: bool,
}
