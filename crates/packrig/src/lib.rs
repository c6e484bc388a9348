mod rigger;
mod stages;
mod types;
mod utils;

pub use crate::{
  rigger::Rigger,
  stages::assemble::{
    loaders::{script_loaders, stylesheet_loaders, transpile_options},
    optimization::optimization,
    plugins::plugins,
    rules::module_rules,
  },
  types::rig_output::RigOutput,
};
pub use packrig_common::*;
