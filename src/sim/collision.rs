//! Axis-aligned collision checks
//!
//! Boxes that merely share an edge count as overlapping.

use serde::{Deserialize, Serialize};

use super::sprite::{BoundingBox, Sprite};

/// What the player ran into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Collision {
    /// One of the pieces of the obstacle pair with this id
    Obstacle { pair_id: u32 },
    /// Top or bottom edge of the play area
    Boundary,
}

/// True unless the boxes are separated on some axis
#[inline]
pub fn boxes_overlap(a: &BoundingBox, b: &BoundingBox) -> bool {
    !(a.right < b.left || a.left > b.right || a.bottom < b.top || a.top > b.bottom)
}

/// Box overlap between two sprites; hidden sprites never touch anything
pub fn sprites_touch(a: &Sprite, b: &Sprite) -> bool {
    if !a.visible || !b.visible {
        return false;
    }
    boxes_overlap(&a.bounding_box(), &b.bounding_box())
}

/// Check if the sprite reached the top or bottom of the play area
pub fn hits_boundary(sprite: &Sprite, play_height: f32) -> bool {
    sprite.pos.y >= play_height - sprite.size.y || sprite.pos.y <= 0.0
}
