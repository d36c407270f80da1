use optimalbins::config::PackConfig;
use optimalbins::io::svg::SvgDrawOptions;
use serde::{Deserialize, Serialize};

/// Configuration file of the command-line tool
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct CliConfig {
    /// Options of the packing run itself
    #[serde(flatten)]
    pub pack_config: PackConfig,
    /// Optional SVG drawing options
    #[serde(default)]
    pub svg_draw_options: SvgDrawOptions,
}
