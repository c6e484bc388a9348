use packrig_common::{NormalizedRigOptions, PageDescriptor, PluginDirective};
use packrig_utils::path_ext::PathExt;

/// Declared directive order: one page emission per discovered page, the
/// static-asset copies, stylesheet extraction, and in production the output
/// cleanup appended last. Execution order is a separate contract; see
/// [`packrig_common::execution_order`].
pub fn plugins(options: &NormalizedRigOptions, pages: &[PageDescriptor]) -> Vec<PluginDirective> {
  let html = pages.iter().map(|page| PluginDirective::HtmlEmit {
    template: page.template.clone(),
    filename: page.output.clone(),
    collapse_whitespace: options.mode.is_prod(),
  });

  let copy = options.copy.iter().map(|item| PluginDirective::CopyAssets {
    from: item.from.expect_to_slash().into(),
    to: item.to.expect_to_slash().into(),
  });

  let extract = PluginDirective::CssExtract { filename: arcstr::literal!("css/style.css") };

  html
    .chain(copy)
    .chain([extract])
    .chain(options.mode.is_prod().then_some(PluginDirective::CleanOutput))
    .collect()
}
