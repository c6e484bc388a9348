pub mod rig_output;

use std::sync::Arc;

use packrig_common::NormalizedRigOptions;

pub type SharedOptions = Arc<NormalizedRigOptions>;
