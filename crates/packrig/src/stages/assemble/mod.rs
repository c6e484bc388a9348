pub mod loaders;
pub mod optimization;
pub mod plugins;
pub mod rules;

use arcstr::ArcStr;
use packrig_common::{
  BundleConfig, DevServerConfig, Devtool, ModuleSection, OutputConfig, PageDescriptor,
  ResolveConfig,
};
use packrig_utils::{indexmap::FxIndexMap, path_ext::PathExt};

use crate::types::SharedOptions;

/// Folds normalized options and discovered pages into the final descriptor.
/// Pure construction: no file-system access, no environment reads.
pub struct AssembleStage {
  options: SharedOptions,
}

impl AssembleStage {
  pub fn new(options: SharedOptions) -> Self {
    Self { options }
  }

  pub fn assemble(&self, pages: &[PageDescriptor]) -> BundleConfig {
    let options = &self.options;
    let mode = options.mode;
    let src = options.src_dir.expect_to_slash();
    let out = options.out_dir.expect_to_slash();

    let entry = options
      .entry
      .iter()
      .map(|item| {
        let name = ArcStr::from(item.name.as_deref().unwrap_or("main"));
        let imports =
          item.imports.iter().map(|import| ArcStr::from(import.as_str())).collect::<Vec<_>>();
        (name, imports)
      })
      .collect::<FxIndexMap<_, _>>();

    let alias = [
      (arcstr::literal!("@models"), ArcStr::from(format!("{src}/models"))),
      (arcstr::literal!("@"), ArcStr::from(src.clone())),
    ]
    .into_iter()
    .collect();

    BundleConfig {
      context: ArcStr::from(src),
      mode,
      entry,
      output: OutputConfig {
        filename: mode.asset_filename("js"),
        path: ArcStr::from(out.clone()),
      },
      resolve: ResolveConfig {
        extensions: vec![
          arcstr::literal!(".js"),
          arcstr::literal!(".json"),
          arcstr::literal!(".png"),
        ],
        alias,
      },
      optimization: optimization::optimization(mode),
      dev_server: DevServerConfig {
        port: options.dev_port,
        content_base: ArcStr::from(out),
        hot: mode.is_dev(),
      },
      devtool: mode.is_dev().then_some(Devtool::SourceMap),
      plugins: plugins::plugins(options, pages),
      module: ModuleSection { rules: rules::module_rules(mode) },
    }
  }
}

#[cfg(test)]
mod tests {
  use std::sync::Arc;

  use arcstr::ArcStr;
  use packrig_common::{Devtool, Mode, PageDescriptor, PluginDirective, PluginPhase, RigOptions};

  use super::AssembleStage;
  use crate::utils::normalize_options::normalize_options;

  fn stage(mode: Mode) -> AssembleStage {
    AssembleStage::new(Arc::new(normalize_options(RigOptions {
      mode: Some(mode),
      cwd: Some("/app".into()),
      ..RigOptions::default()
    })))
  }

  fn pages() -> Vec<PageDescriptor> {
    vec![PageDescriptor::new("index.pug", "/app/src/pug/pages/index.pug", "pug")]
  }

  #[test]
  fn development_descriptor_keeps_dev_only_surfaces() {
    let config = stage(Mode::Development).assemble(&pages());

    assert_eq!(config.output.filename, "js/[name].js");
    assert_eq!(config.devtool, Some(Devtool::SourceMap));
    assert!(config.dev_server.hot);
  }

  #[test]
  fn production_descriptor_hashes_and_drops_source_maps() {
    let config = stage(Mode::Production).assemble(&pages());

    assert_eq!(config.output.filename, "js/[name].[hash].js");
    assert_eq!(config.devtool, None);
    assert!(!config.dev_server.hot);
  }

  #[test]
  fn layout_paths_land_in_the_descriptor() {
    let config = stage(Mode::Development).assemble(&pages());

    assert_eq!(config.context, "/app/src");
    assert_eq!(config.output.path, "/app/dist");
    assert_eq!(config.dev_server.content_base, "/app/dist");
    assert_eq!(config.dev_server.port, 4200);
  }

  #[test]
  fn resolve_surface_matches_the_source_layout() {
    let config = stage(Mode::Production).assemble(&pages());

    assert_eq!(config.resolve.extensions, [".js", ".json", ".png"]);
    assert_eq!(config.resolve.alias.get("@models").map(ArcStr::as_str), Some("/app/src/models"));
    assert_eq!(config.resolve.alias.get("@").map(ArcStr::as_str), Some("/app/src"));
  }

  #[test]
  fn entry_names_and_imports_survive_assembly() {
    let config = stage(Mode::Production).assemble(&pages());

    assert_eq!(config.entry.len(), 1);
    assert_eq!(config.entry["main"], ["@babel/polyfill", "./index.js"]);
  }

  #[test]
  fn execution_plan_runs_cleanup_before_any_emission() {
    let config = stage(Mode::Production).assemble(&pages());
    let plan = config.execution_plan();

    assert_eq!(plan.len(), config.plugins.len());
    assert_eq!(*plan[0], PluginDirective::CleanOutput);
    assert!(plan[1..].iter().all(|directive| directive.phase() == PluginPhase::Emit));

    // Nothing to prepare in development: the plan is the declared order.
    let config = stage(Mode::Development).assemble(&pages());
    assert_eq!(config.execution_plan(), config.plugins.iter().collect::<Vec<_>>());
  }

  #[test]
  fn descriptor_serializes_with_engine_facing_keys() {
    let config = stage(Mode::Production).assemble(&pages());
    let value = serde_json::to_value(&config).unwrap();

    assert_eq!(value["mode"], "production");
    assert_eq!(value["entry"]["main"][0], "@babel/polyfill");
    assert_eq!(value["output"]["filename"], "js/[name].[hash].js");
    assert_eq!(value["devServer"]["contentBase"], "/app/dist");
    assert!(value.get("devtool").is_none());
    assert_eq!(value["optimization"]["splitChunks"]["chunks"], "all");
    assert_eq!(value["optimization"]["minimizer"][0], "css-minimizer");
    assert_eq!(value["plugins"][0]["name"], "html-emit");
    assert_eq!(value["plugins"][0]["collapseWhitespace"], true);
    assert_eq!(value["module"]["rules"][0]["use"][0]["loader"], "pug-loader");
    assert_eq!(value["module"]["rules"][5]["exclude"], "node_modules");
  }

  #[test]
  fn development_descriptor_serializes_its_source_map_choice() {
    let config = stage(Mode::Development).assemble(&pages());
    let value = serde_json::to_value(&config).unwrap();

    assert_eq!(value["devtool"], "source-map");
    assert_eq!(value["output"]["filename"], "js/[name].js");
  }
}
