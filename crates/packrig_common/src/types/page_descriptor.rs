use arcstr::ArcStr;

/// Pairs a discovered template file with its generated output path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageDescriptor {
  /// Page name: the template file name with its extension stripped.
  pub name: ArcStr,
  /// Absolute slash-rendered path to the template file.
  pub template: ArcStr,
  /// Output path relative to the output directory, e.g. `pages/index.html`.
  pub output: ArcStr,
}

impl PageDescriptor {
  /// The output name is the page name emitted under `pages/` with an
  /// `html` extension. Only a trailing template extension is stripped from
  /// `file_name`.
  pub fn new(file_name: &str, template: impl Into<ArcStr>, template_ext: &str) -> Self {
    let suffix = format!(".{template_ext}");
    let stem = file_name.strip_suffix(suffix.as_str()).unwrap_or(file_name);
    Self {
      name: stem.into(),
      template: template.into(),
      output: arcstr::format!("pages/{stem}.html"),
    }
  }
}

#[test]
fn test_output_name_replaces_template_extension() {
  let page = PageDescriptor::new("index.pug", "/app/src/pug/pages/index.pug", "pug");
  assert_eq!(page.name, "index");
  assert_eq!(page.output, "pages/index.html");

  let page = PageDescriptor::new("sign-up.pug", "/app/src/pug/pages/sign-up.pug", "pug");
  assert_eq!(page.output, "pages/sign-up.html");

  // Only the trailing extension goes.
  let page = PageDescriptor::new("pug.map.pug", "/app/src/pug/pages/pug.map.pug", "pug");
  assert_eq!(page.name, "pug.map");
  assert_eq!(page.output, "pages/pug.map.html");
}
