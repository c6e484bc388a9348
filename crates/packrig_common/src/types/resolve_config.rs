use arcstr::ArcStr;
use packrig_utils::indexmap::FxIndexMap;
use serde::Serialize;

/// Import-resolution surface exposed to the engine: probe extensions plus
/// the symbolic path aliases scripts may import through.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolveConfig {
  pub extensions: Vec<ArcStr>,
  pub alias: FxIndexMap<ArcStr, ArcStr>,
}
