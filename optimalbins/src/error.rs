use thiserror::Error;

/// Result type alias for packing operations.
pub type Result<T> = std::result::Result<T, PackError>;

/// Errors that can occur while configuring or running a packing run.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PackError {
    /// The requested placement algorithm does not exist.
    #[error("unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    /// The requested heuristic does not exist for the selected algorithm.
    #[error("unknown heuristic for {algorithm}: {name}")]
    UnknownHeuristic { algorithm: String, name: String },

    /// The requested dimension is not supported by the engine.
    #[error("unsupported dimension: {0}")]
    UnsupportedDimension(String),

    /// An overflow bin was needed but there was no bin to clone it from.
    #[error("no base bin to clone")]
    NoBaseBin,

    /// An item that exceeds the template bin was sent to an overflow bin.
    #[error(
        "item {item_id} ({item_width}x{item_height}) does not fit in bin {bin_id} ({bin_width}x{bin_height})"
    )]
    ItemTooLarge {
        item_id: String,
        item_width: f32,
        item_height: f32,
        bin_id: String,
        bin_width: f32,
        bin_height: f32,
    },

    /// An item or bin was constructed with a non-positive or non-finite size.
    #[error("invalid dimensions for {id}: {reason}")]
    InvalidDimensions { id: String, reason: String },
}

impl PackError {
    /// Configuration errors are raised before any item is processed.
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            PackError::UnknownAlgorithm(_)
                | PackError::UnknownHeuristic { .. }
                | PackError::UnsupportedDimension(_)
        )
    }
}
