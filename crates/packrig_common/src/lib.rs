mod rig_options;
mod types;

pub use crate::rig_options::{
  RigOptions, copy_item::CopyItem, entry_item::EntryItem, mode::Mode,
  normalized_rig_options::NormalizedRigOptions,
};

pub use crate::types::{
  bundle_config::{BundleConfig, ModuleSection},
  dev_server::DevServerConfig,
  devtool::Devtool,
  loader::{
    CSS_EXTRACT_LOADER, CSS_LOADER, CssExtractOptions, FILE_LOADER, FileOutputOptions, LINT_LOADER,
    Loader, LoaderOptions, SASS_LOADER, TEMPLATE_LOADER, TRANSPILE_LOADER, TemplateOptions,
    TranspileOptions,
  },
  module_rule::{FileTest, ModuleRule},
  optimization::{ChunkScope, Minimizer, OptimizationPolicy, SplitChunksPolicy},
  output_config::OutputConfig,
  page_descriptor::PageDescriptor,
  plugin_directive::{PluginDirective, PluginPhase, execution_order},
  resolve_config::ResolveConfig,
};
