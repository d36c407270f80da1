use itertools::Itertools;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::error::{PackError, Result};

/// Item to be packed. Immutable during a packing run, its placement is recorded in a [`PlacedItem`](crate::entities::PlacedItem).
#[derive(Clone, Debug, PartialEq)]
pub struct Item {
    pub id: String,
    pub width: f32,
    pub height: f32,
    /// Present if the item has a third dimension
    pub depth: Option<f32>,
    pub weight: Option<f32>,
    /// Whether the item may be placed in an orientation other than [`Orientation::Whd`]
    pub rotations_allowed: bool,
}

impl Item {
    pub fn new(id: impl Into<String>, width: f32, height: f32) -> Result<Self> {
        let id = id.into();
        check_dimension(&id, "width", width)?;
        check_dimension(&id, "height", height)?;
        Ok(Item {
            id,
            width,
            height,
            depth: None,
            weight: None,
            rotations_allowed: true,
        })
    }

    pub fn with_depth(mut self, depth: f32) -> Result<Self> {
        check_dimension(&self.id, "depth", depth)?;
        self.depth = Some(depth);
        Ok(self)
    }

    pub fn with_weight(mut self, weight: f32) -> Self {
        self.weight = Some(weight);
        self
    }

    pub fn with_rotations(mut self, rotations_allowed: bool) -> Self {
        self.rotations_allowed = rotations_allowed;
        self
    }

    pub fn is_3d(&self) -> bool {
        self.depth.is_some()
    }

    pub fn area(&self) -> f32 {
        self.width * self.height
    }

    /// Area for 2D items, volume for 3D items.
    pub fn volume(&self) -> f32 {
        self.area() * self.depth.unwrap_or(1.0)
    }

    /// Size of the item along the (x, y, z) axes in the given orientation.
    /// The depth of a 2D item is reported as 0.
    pub fn dimensions(&self, orientation: Orientation) -> [f32; 3] {
        let (w, h, d) = (self.width, self.height, self.depth.unwrap_or(0.0));
        match orientation {
            Orientation::Whd => [w, h, d],
            Orientation::Hwd => [h, w, d],
            Orientation::Hdw => [h, d, w],
            Orientation::Dhw => [d, h, w],
            Orientation::Dwh => [d, w, h],
            Orientation::Wdh => [w, d, h],
        }
    }

    /// All distinct orientations of the item, together with the resulting dimensions.
    ///
    /// Orientations yielding the same dimensions (because two sides are equal) are reported once.
    /// A 2D item, or one that may not rotate, only has [`Orientation::Whd`].
    /// Every call returns a fresh iterator.
    pub fn orientations(&self) -> impl Iterator<Item = (Orientation, [f32; 3])> + '_ {
        let allowed: &[Orientation] = match (self.depth, self.rotations_allowed) {
            (Some(_), true) => &Orientation::ALL,
            _ => &[Orientation::Whd],
        };
        allowed
            .iter()
            .map(move |&o| (o, self.dimensions(o)))
            .unique_by(|(_, dims)| dims.map(OrderedFloat))
    }
}

pub(crate) fn check_dimension(id: &str, name: &str, value: f32) -> Result<()> {
    match value.is_finite() && value > 0.0 {
        true => Ok(()),
        false => Err(PackError::InvalidDimensions {
            id: id.to_string(),
            reason: format!("{name} must be positive and finite, got {value}"),
        }),
    }
}

/// Permutation of the item's (width, height, depth) along the (x, y, z) axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Orientation {
    #[default]
    Whd,
    Hwd,
    Hdw,
    Dhw,
    Dwh,
    Wdh,
}

impl Orientation {
    pub const ALL: [Orientation; 6] = [
        Orientation::Whd,
        Orientation::Hwd,
        Orientation::Hdw,
        Orientation::Dhw,
        Orientation::Dwh,
        Orientation::Wdh,
    ];
}
