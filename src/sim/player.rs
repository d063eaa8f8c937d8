//! The player-controlled sprite

use glam::Vec2;

use super::sprite::Sprite;
use crate::assets::ImageKey;
use crate::tuning::Tuning;

/// Angle snapped to whenever the player is rising
pub const TILT_RISING: f32 = -15.0;
/// Nose-down limit while falling
pub const TILT_MAX: f32 = 70.0;
/// Degrees added per falling tick
pub const TILT_STEP: f32 = 4.0;

/// Accelerate a vertical velocity toward `max_fall_speed`.
///
/// Only checks the limit before adding, so the result can overshoot by one
/// `accel` at the boundary tick.
#[inline]
pub fn apply_gravity(vy: f32, max_fall_speed: f32, accel: f32) -> f32 {
    if vy < max_fall_speed { vy + accel } else { vy }
}

/// Next tilt angle given the current angle and vertical velocity
#[inline]
pub fn tilt_angle(angle: f32, vy: f32) -> f32 {
    if vy < 0.0 {
        TILT_RISING
    } else if angle < TILT_MAX {
        angle + TILT_STEP
    } else {
        angle
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub sprite: Sprite,
}

impl Player {
    pub fn new(tuning: &Tuning, image: Option<ImageKey>) -> Self {
        let size = Vec2::splat(tuning.player_size);
        let pos = Vec2::new(tuning.player_x(), tuning.player_start_y());
        Self {
            sprite: Sprite::new(image, pos, size),
        }
    }

    pub fn vy(&self) -> f32 {
        self.sprite.vel.y
    }

    pub fn y(&self) -> f32 {
        self.sprite.pos.y
    }

    /// Upward impulse; replaces the current vertical velocity
    pub fn jump(&mut self, jump_velocity: f32) {
        self.sprite.vel.y = jump_velocity;
    }

    pub fn apply_gravity(&mut self, max_fall_speed: f32, accel: f32) {
        self.sprite.vel.y = apply_gravity(self.sprite.vel.y, max_fall_speed, accel);
    }

    pub fn tilt(&mut self) {
        self.sprite.angle = tilt_angle(self.sprite.angle, self.sprite.vel.y);
    }

    /// Put the player back at height `y`, motionless and level
    pub fn respawn(&mut self, y: f32) {
        self.sprite.pos.y = y;
        self.sprite.vel = Vec2::ZERO;
        self.sprite.angle = 0.0;
    }

    pub fn set_image(&mut self, image: ImageKey) {
        self.sprite.image = Some(image);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use proptest::prelude::*;

    #[test]
    fn test_gravity_accelerates_until_max() {
        let mut vy = JUMP_VELOCITY;
        for _ in 0..40 {
            vy = apply_gravity(vy, MAX_FALL_SPEED, GRAVITY);
        }
        assert_eq!(vy, MAX_FALL_SPEED);
    }

    #[test]
    fn test_gravity_overshoots_by_one_step_at_boundary() {
        // 9.5 < 10 so one more increment lands past the limit
        let vy = apply_gravity(9.5, 10.0, 1.0);
        assert_eq!(vy, 10.5);
        // Once past, gravity stops adding
        assert_eq!(apply_gravity(vy, 10.0, 1.0), 10.5);
    }

    #[test]
    fn test_tilt_snaps_when_rising() {
        assert_eq!(tilt_angle(60.0, -3.0), TILT_RISING);
        assert_eq!(tilt_angle(-15.0, -10.0), TILT_RISING);
    }

    #[test]
    fn test_tilt_rises_to_limit_while_falling() {
        let mut angle = TILT_RISING;
        let mut last = angle;
        for _ in 0..50 {
            angle = tilt_angle(angle, 2.0);
            assert!(angle >= last);
            last = angle;
        }
        // -15 + 4k first reaches >= 70 at 73
        assert_eq!(angle, 73.0);
        assert_eq!(tilt_angle(angle, 5.0), angle);
    }

    #[test]
    fn test_respawn_resets_motion() {
        let tuning = Tuning::default();
        let mut player = Player::new(&tuning, Some(ImageKey::Dragon));
        player.jump(tuning.jump_velocity);
        player.tilt();
        player.sprite.advance();
        player.respawn(tuning.player_start_y());
        assert_eq!(player.y(), PLAY_HEIGHT / 2.0);
        assert_eq!(player.vy(), 0.0);
        assert_eq!(player.sprite.angle, 0.0);
        assert_eq!(player.sprite.pos.x, PLAY_WIDTH / 3.0);
    }

    proptest! {
        #[test]
        fn prop_gravity_never_exceeds_limit_plus_one_step(
            vy in -20.0f32..10.0,
            accel in 0.1f32..3.0,
        ) {
            let next = apply_gravity(vy, 10.0, accel);
            prop_assert!(next <= 10.0 + accel);
            prop_assert!(next >= vy);
        }

        #[test]
        fn prop_tilt_stays_in_range(start in -15.0f32..70.0, vys in proptest::collection::vec(-10.0f32..10.0, 1..100)) {
            let mut angle = start;
            for vy in vys {
                angle = tilt_angle(angle, vy);
                prop_assert!(angle >= TILT_RISING);
                prop_assert!(angle < TILT_MAX + TILT_STEP);
            }
        }
    }
}
