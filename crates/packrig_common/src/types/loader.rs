use arcstr::ArcStr;
use serde::Serialize;

pub const TEMPLATE_LOADER: &str = "pug-loader";
pub const CSS_EXTRACT_LOADER: &str = "css-extract-loader";
pub const CSS_LOADER: &str = "css-loader";
pub const SASS_LOADER: &str = "sass-loader";
pub const FILE_LOADER: &str = "file-loader";
pub const TRANSPILE_LOADER: &str = "babel-loader";
pub const LINT_LOADER: &str = "eslint-loader";

/// One processing step in a loader chain. The engine applies a chain
/// last-to-first; this side only fixes the order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Loader {
  #[serde(rename = "loader")]
  pub name: ArcStr,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub options: Option<LoaderOptions>,
}

impl Loader {
  pub fn bare(name: &str) -> Self {
    Self { name: name.into(), options: None }
  }

  pub fn with_options(name: &str, options: LoaderOptions) -> Self {
    Self { name: name.into(), options: Some(options) }
  }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum LoaderOptions {
  Template(TemplateOptions),
  CssExtract(CssExtractOptions),
  Transpile(TranspileOptions),
  FileOutput(FileOutputOptions),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemplateOptions {
  pub pretty: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CssExtractOptions {
  pub hmr: bool,
  pub reload_all: bool,
  pub public_path: ArcStr,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TranspileOptions {
  pub presets: Vec<ArcStr>,
  pub plugins: Vec<ArcStr>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileOutputOptions {
  pub output_path: ArcStr,
}
