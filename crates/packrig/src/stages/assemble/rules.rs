use packrig_common::{
  FILE_LOADER, FileOutputOptions, FileTest, Loader, LoaderOptions, Mode, ModuleRule, SASS_LOADER,
  TEMPLATE_LOADER, TemplateOptions,
};

use super::loaders::{script_loaders, stylesheet_loaders};

/// The fixed file-type handling table, in declaration order. `svg` appears
/// in both the image rule and the font rule; first-match semantics are the
/// engine's business.
pub fn module_rules(mode: Mode) -> Vec<ModuleRule> {
  vec![
    ModuleRule::new(
      FileTest::new(&["pug"]),
      vec![Loader::with_options(
        TEMPLATE_LOADER,
        LoaderOptions::Template(TemplateOptions { pretty: true }),
      )],
    ),
    ModuleRule::new(FileTest::new(&["css"]), stylesheet_loaders(mode, None)),
    ModuleRule::new(
      FileTest::new(&["sass", "scss"]),
      stylesheet_loaders(mode, Some(Loader::bare(SASS_LOADER))),
    ),
    ModuleRule::new(FileTest::new(&["png", "jpg", "svg", "gif"]), vec![Loader::bare(FILE_LOADER)]),
    ModuleRule::new(
      FileTest::new(&["ttf", "woff", "woff2", "eot", "svg"]),
      vec![Loader::with_options(
        FILE_LOADER,
        LoaderOptions::FileOutput(FileOutputOptions { output_path: arcstr::literal!("fonts") }),
      )],
    ),
    ModuleRule::with_exclude(FileTest::new(&["js"]), "node_modules", script_loaders(mode)),
  ]
}
