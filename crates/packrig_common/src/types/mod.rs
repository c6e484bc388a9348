pub mod bundle_config;
pub mod dev_server;
pub mod devtool;
pub mod loader;
pub mod module_rule;
pub mod optimization;
pub mod output_config;
pub mod page_descriptor;
pub mod plugin_directive;
pub mod resolve_config;
