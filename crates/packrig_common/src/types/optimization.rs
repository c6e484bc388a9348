use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationPolicy {
  pub split_chunks: SplitChunksPolicy,
  /// Empty in development; stylesheet and script minimizers in production.
  #[serde(rename = "minimizer")]
  pub minimizers: Vec<Minimizer>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SplitChunksPolicy {
  pub chunks: ChunkScope,
}

/// Which chunks the engine may split into shared loadable units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChunkScope {
  All,
  Initial,
  Async,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Minimizer {
  CssMinimizer,
  ScriptMinimizer,
}
