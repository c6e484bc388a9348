/// One named entry point with its ordered import list, e.g.
/// `main: ["@babel/polyfill", "./index.js"]`.
#[derive(Debug, Default, Clone)]
pub struct EntryItem {
  pub name: Option<String>,
  pub imports: Vec<String>,
}

impl From<&str> for EntryItem {
  fn from(value: &str) -> Self {
    Self { name: None, imports: vec![value.to_string()] }
  }
}

#[test]
fn test_unnamed_entry_from_a_single_import() {
  let entry = EntryItem::from("./index.js");
  assert_eq!(entry.name, None);
  assert_eq!(entry.imports, ["./index.js"]);
}
