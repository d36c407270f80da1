use serde::{Deserialize, Serialize};

use crate::entities::{Item, Orientation};
use crate::geometry::Rect;

/// Bottom-left corner of a placed item within its bin.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub z: Option<f32>,
}

impl Position {
    pub const ORIGIN: Position = Position {
        x: 0.0,
        y: 0.0,
        z: None,
    };

    pub fn new(x: f32, y: f32) -> Self {
        Position { x, y, z: None }
    }
}

/// Represents an [`Item`] that has been placed in a [`Bin`](crate::entities::Bin)
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedItem {
    pub item: Item,
    pub position: Position,
    pub orientation: Orientation,
}

impl PlacedItem {
    pub fn new(item: Item, position: Position) -> Self {
        // 3D items carry a z coordinate, even though only the xy-plane is packed
        let position = match item.depth {
            Some(_) => Position {
                z: Some(position.z.unwrap_or(0.0)),
                ..position
            },
            None => position,
        };
        PlacedItem {
            item,
            position,
            orientation: Orientation::Whd,
        }
    }

    pub fn item_id(&self) -> &str {
        &self.item.id
    }

    /// Footprint of the item in the xy-plane of its bin.
    pub fn rect(&self) -> Rect {
        let [w, h, _] = self.item.dimensions(self.orientation);
        Rect::from_xywh(self.position.x, self.position.y, w, h)
    }
}
