use packrig_common::BundleConfig;

#[derive(Debug)]
pub struct RigOutput {
  pub config: BundleConfig,
  pub warnings: Vec<anyhow::Error>,
}
