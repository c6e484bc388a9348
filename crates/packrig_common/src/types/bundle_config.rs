use arcstr::ArcStr;
use packrig_utils::indexmap::FxIndexMap;
use serde::Serialize;

use crate::{
  DevServerConfig, Devtool, Mode, ModuleRule, OptimizationPolicy, OutputConfig, PluginDirective,
  ResolveConfig, execution_order,
};

/// The complete declarative descriptor consumed by the bundling engine.
/// Built once per resolution; immutable afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BundleConfig {
  pub context: ArcStr,
  pub mode: Mode,
  pub entry: FxIndexMap<ArcStr, Vec<ArcStr>>,
  pub output: OutputConfig,
  pub resolve: ResolveConfig,
  pub optimization: OptimizationPolicy,
  pub dev_server: DevServerConfig,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub devtool: Option<Devtool>,
  pub plugins: Vec<PluginDirective>,
  pub module: ModuleSection,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModuleSection {
  pub rules: Vec<ModuleRule>,
}

impl BundleConfig {
  /// Directives in the order the engine must run them; see
  /// [`execution_order`].
  pub fn execution_plan(&self) -> Vec<&PluginDirective> {
    execution_order(&self.plugins)
  }

  pub fn to_json(&self) -> String {
    serde_json::to_string(self).expect("Failed to serialize bundle config")
  }

  pub fn to_json_pretty(&self) -> String {
    serde_json::to_string_pretty(self).expect("Failed to serialize bundle config")
  }
}
