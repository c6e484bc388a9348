use arcstr::ArcStr;
use serde::Serialize;

/// Output-producing directives handed to the engine. The serialized list
/// keeps declared order; execution order is the explicit contract of
/// [`execution_order`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "name", rename_all = "kebab-case", rename_all_fields = "camelCase")]
pub enum PluginDirective {
  /// Emit one HTML page from a template file.
  HtmlEmit { template: ArcStr, filename: ArcStr, collapse_whitespace: bool },
  /// Copy a static directory into the output tree.
  CopyAssets { from: ArcStr, to: ArcStr },
  /// Extract stylesheets into a standalone asset.
  CssExtract { filename: ArcStr },
  /// Delete stale output from a previous build.
  CleanOutput,
}

impl PluginDirective {
  pub fn phase(&self) -> PluginPhase {
    match self {
      Self::CleanOutput => PluginPhase::Prepare,
      Self::HtmlEmit { .. } | Self::CopyAssets { .. } | Self::CssExtract { .. } => {
        PluginPhase::Emit
      }
    }
  }
}

/// Execution class of a directive. The engine must run every `Prepare`
/// directive before any `Emit` directive, whatever the declared list order
/// says; cleanup deleting freshly emitted output is the failure this rules
/// out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PluginPhase {
  Prepare,
  Emit,
}

/// Directives in the order the engine must execute them: phases ascending,
/// relative order within a phase preserved.
pub fn execution_order(plugins: &[PluginDirective]) -> Vec<&PluginDirective> {
  let (prepare, emit): (Vec<_>, Vec<_>) =
    plugins.iter().partition(|directive| directive.phase() == PluginPhase::Prepare);
  prepare.into_iter().chain(emit).collect()
}

#[cfg(test)]
mod tests {
  use super::*;

  fn html(filename: &str) -> PluginDirective {
    PluginDirective::HtmlEmit {
      template: arcstr::format!("/src/pug/pages/{filename}.pug"),
      filename: arcstr::format!("pages/{filename}.html"),
      collapse_whitespace: true,
    }
  }

  #[test]
  fn cleanup_is_the_only_prepare_directive() {
    assert_eq!(PluginDirective::CleanOutput.phase(), PluginPhase::Prepare);
    assert_eq!(html("index").phase(), PluginPhase::Emit);
    assert_eq!(
      PluginDirective::CssExtract { filename: "css/style.css".into() }.phase(),
      PluginPhase::Emit
    );
  }

  #[test]
  fn execution_order_moves_cleanup_ahead_of_emission() {
    let declared = vec![
      html("index"),
      html("about"),
      PluginDirective::CssExtract { filename: "css/style.css".into() },
      PluginDirective::CleanOutput,
    ];

    let plan = execution_order(&declared);
    assert_eq!(plan.len(), declared.len());
    assert_eq!(*plan[0], PluginDirective::CleanOutput);
    // Emission keeps its relative order.
    assert_eq!(*plan[1], declared[0]);
    assert_eq!(*plan[2], declared[1]);
    assert_eq!(*plan[3], declared[2]);
  }
}
