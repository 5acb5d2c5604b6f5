use crate::config::OBFConfig;
use discpack::io::ext_repr::{ExtBPInstance, ExtBPSolution};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct BPOutput {
    #[serde(flatten)]
    pub instance: ExtBPInstance,
    pub solution: ExtBPSolution,
    pub config: OBFConfig,
}
