//! Data-driven game balance
//!
//! Every gameplay number the simulation reads lives here so a JSON file can
//! override it. Missing fields fall back to [`crate::consts`].

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::TuningError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Fixed tick rate
    pub fps: u32,
    pub play_width: f32,
    pub play_height: f32,
    pub player_size: f32,

    // === Player physics (per tick) ===
    pub jump_velocity: f32,
    pub max_fall_speed: f32,
    pub gravity: f32,

    // === Obstacles ===
    pub pipe_speed: f32,
    pub pipe_width: f32,
    pub pipe_height: f32,
    pub gap_height: f32,

    // === Timers (ms) ===
    pub spawn_interval_ms: f64,
    pub collision_pause_ms: f64,
    pub start_delay_ms: f64,
    pub restart_cooldown_ms: f64,

    pub initial_lives: u8,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            fps: FPS,
            play_width: PLAY_WIDTH,
            play_height: PLAY_HEIGHT,
            player_size: PLAYER_SIZE,

            jump_velocity: JUMP_VELOCITY,
            max_fall_speed: MAX_FALL_SPEED,
            gravity: GRAVITY,

            pipe_speed: PIPE_SPEED,
            pipe_width: PIPE_WIDTH,
            pipe_height: PIPE_HEIGHT,
            gap_height: GAP_HEIGHT,

            spawn_interval_ms: SPAWN_INTERVAL_MS,
            collision_pause_ms: COLLISION_PAUSE_MS,
            start_delay_ms: START_DELAY_MS,
            restart_cooldown_ms: RESTART_COOLDOWN_MS,

            initial_lives: INITIAL_LIVES,
        }
    }
}

impl Tuning {
    /// Parse and validate a (possibly partial) JSON document
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Reject configurations the simulation cannot run
    pub fn validate(&self) -> Result<(), TuningError> {
        if self.fps == 0 {
            return Err(TuningError::Invalid("fps must be positive".into()));
        }
        if self.play_width <= 0.0 || self.play_height <= 0.0 {
            return Err(TuningError::Invalid("play area must be non-empty".into()));
        }
        if self.gap_height <= 0.0 || self.gap_height >= self.play_height {
            return Err(TuningError::Invalid(format!(
                "gap_height {} must be inside (0, {})",
                self.gap_height, self.play_height
            )));
        }
        if self.player_size <= 0.0 || self.player_size >= self.play_height {
            return Err(TuningError::Invalid("player_size out of range".into()));
        }
        if self.pipe_speed >= 0.0 {
            return Err(TuningError::Invalid("pipe_speed must scroll left".into()));
        }
        if self.initial_lives == 0 {
            return Err(TuningError::Invalid("initial_lives must be at least 1".into()));
        }
        Ok(())
    }

    /// Interval between ticks
    pub fn frame_period_ms(&self) -> u32 {
        (1000 / self.fps.max(1)).max(1)
    }

    /// Fixed horizontal position of the player
    pub fn player_x(&self) -> f32 {
        self.play_width / 3.0
    }

    /// Vertical position used on start and respawn
    pub fn player_start_y(&self) -> f32 {
        self.play_height / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let tuning = Tuning::default();
        assert!(tuning.validate().is_ok());
        assert_eq!(tuning.frame_period_ms(), 25);
        assert_eq!(tuning.player_start_y(), PLAY_HEIGHT / 2.0);
    }

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let tuning = Tuning::from_json(r#"{ "gap_height": 120.0, "initial_lives": 5 }"#)
            .expect("partial tuning should parse");
        assert_eq!(tuning.gap_height, 120.0);
        assert_eq!(tuning.initial_lives, 5);
        assert_eq!(tuning.pipe_speed, PIPE_SPEED);
        assert_eq!(tuning.fps, FPS);
    }

    #[test]
    fn test_rejects_gap_taller_than_play_area() {
        let err = Tuning::from_json(r#"{ "gap_height": 900.0 }"#).unwrap_err();
        assert!(matches!(err, TuningError::Invalid(_)));
    }

    #[test]
    fn test_rejects_zero_fps_and_bad_json() {
        assert!(matches!(
            Tuning::from_json(r#"{ "fps": 0 }"#),
            Err(TuningError::Invalid(_))
        ));
        assert!(matches!(
            Tuning::from_json("{ not json"),
            Err(TuningError::Parse(_))
        ));
    }
}
