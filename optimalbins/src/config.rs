use serde::{Deserialize, Serialize};

use crate::error::{PackError, Result};
use crate::heuristics::normalize_name;

/// Configuration of a packing run
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct PackConfig {
    /// Either "2D" or "3D". Only 2D packing is supported
    pub dimension: String,
    /// Placement algorithm: "first_fit", "bottom_left", "guillotine" or "max_rects"
    pub algorithm: String,
    /// Variant of the algorithm. If undefined, the algorithm's default variant is used
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heuristic: Option<String>,
    /// Enables overlap checks in First-Fit and rejects items larger than an overflow bin
    pub strict: bool,
    /// Number of decimals kept for coordinates in exported solutions
    pub number_of_decimals: u32,
}

impl PackConfig {
    /// Rejects every dimension other than "2D", including "3D".
    pub fn check_dimension(&self) -> Result<()> {
        match normalize_name(&self.dimension).as_str() {
            "2d" => Ok(()),
            _ => Err(PackError::UnsupportedDimension(self.dimension.clone())),
        }
    }
}

impl Default for PackConfig {
    fn default() -> Self {
        Self {
            dimension: "2D".to_string(),
            algorithm: "bottom_left".to_string(),
            heuristic: None,
            strict: false,
            number_of_decimals: 3,
        }
    }
}
