use optimalbins::io::ext_repr::{ExtInstance, ExtSolution};
use serde::{Deserialize, Serialize};

use crate::config::CliConfig;

/// Contents of a solution file: the instance, its solution and the configuration used
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Output {
    #[serde(flatten)]
    pub instance: ExtInstance,
    pub solution: ExtSolution,
    pub config: CliConfig,
}
