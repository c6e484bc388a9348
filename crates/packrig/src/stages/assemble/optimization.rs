use packrig_common::{ChunkScope, Minimizer, Mode, OptimizationPolicy, SplitChunksPolicy};

/// Chunk splitting is always on; minimizers exist only in production.
pub fn optimization(mode: Mode) -> OptimizationPolicy {
  OptimizationPolicy {
    split_chunks: SplitChunksPolicy { chunks: ChunkScope::All },
    minimizers: if mode.is_prod() {
      vec![Minimizer::CssMinimizer, Minimizer::ScriptMinimizer]
    } else {
      vec![]
    },
  }
}
