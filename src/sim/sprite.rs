//! Positioned, movable visual entities
//!
//! A sprite is pure data. Drawing it is the renderer's business; the
//! simulation only moves it and asks for its bounding box.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::assets::ImageKey;

/// Axis-aligned bounds in play-area units (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl BoundingBox {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self {
            left: pos.x,
            right: pos.x + size.x,
            top: pos.y,
            bottom: pos.y + size.y,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sprite {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Units per tick
    pub vel: Vec2,
    /// Rotation in degrees, about the sprite center
    pub angle: f32,
    pub flip_h: bool,
    pub flip_v: bool,
    pub visible: bool,
    pub image: Option<ImageKey>,
}

impl Sprite {
    pub fn new(image: Option<ImageKey>, pos: Vec2, size: Vec2) -> Self {
        Self {
            pos,
            size,
            vel: Vec2::ZERO,
            angle: 0.0,
            flip_h: false,
            flip_v: false,
            visible: true,
            image,
        }
    }

    /// Move by one tick of velocity
    #[inline]
    pub fn advance(&mut self) {
        self.pos += self.vel;
    }

    #[inline]
    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::new(self.pos, self.size)
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_applies_velocity_once() {
        let mut sprite = Sprite::new(None, Vec2::new(10.0, 20.0), Vec2::new(5.0, 5.0));
        sprite.vel = Vec2::new(-2.0, 3.0);
        sprite.advance();
        assert_eq!(sprite.pos, Vec2::new(8.0, 23.0));
        sprite.advance();
        assert_eq!(sprite.pos, Vec2::new(6.0, 26.0));
    }

    #[test]
    fn test_bounding_box() {
        let sprite = Sprite::new(Some(ImageKey::Pipe), Vec2::new(100.0, -200.0), Vec2::new(50.0, 300.0));
        let bb = sprite.bounding_box();
        assert_eq!(bb.left, 100.0);
        assert_eq!(bb.right, 150.0);
        assert_eq!(bb.top, -200.0);
        assert_eq!(bb.bottom, 100.0);
        assert_eq!(sprite.right(), 150.0);
        assert_eq!(sprite.center(), Vec2::new(125.0, -50.0));
    }
}
