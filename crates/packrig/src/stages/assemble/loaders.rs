use arcstr::ArcStr;
use packrig_common::{
  CSS_EXTRACT_LOADER, CSS_LOADER, CssExtractOptions, LINT_LOADER, Loader, LoaderOptions, Mode,
  TRANSPILE_LOADER, TranspileOptions,
};

/// Base transpile configuration, with room for one extra preset when a rule
/// needs it.
pub fn transpile_options(extra_preset: Option<&str>) -> TranspileOptions {
  let presets =
    ["@babel/preset-env"].into_iter().chain(extra_preset).map(ArcStr::from).collect();

  TranspileOptions {
    presets,
    plugins: vec![arcstr::literal!("@babel/plugin-proposal-class-properties")],
  }
}

/// Extraction first, then the base stylesheet transform, then the optional
/// pre-processor step.
pub fn stylesheet_loaders(mode: Mode, extra: Option<Loader>) -> Vec<Loader> {
  let extract = Loader::with_options(
    CSS_EXTRACT_LOADER,
    LoaderOptions::CssExtract(CssExtractOptions {
      hmr: mode.is_dev(),
      reload_all: true,
      public_path: arcstr::literal!("../"),
    }),
  );

  [extract, Loader::bare(CSS_LOADER)].into_iter().chain(extra).collect()
}

/// Transpilation always; the lint pass only in development.
pub fn script_loaders(mode: Mode) -> Vec<Loader> {
  let transpile =
    Loader::with_options(TRANSPILE_LOADER, LoaderOptions::Transpile(transpile_options(None)));

  [transpile].into_iter().chain(mode.is_dev().then(|| Loader::bare(LINT_LOADER))).collect()
}
