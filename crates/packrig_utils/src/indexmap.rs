use std::hash::BuildHasherDefault;

use indexmap::IndexMap;
use rustc_hash::FxHasher;

/// Insertion-ordered map used for descriptor sections (entry, alias) where
/// the serialized key order must be stable across runs.
pub type FxIndexMap<K, V> = IndexMap<K, V, BuildHasherDefault<FxHasher>>;
