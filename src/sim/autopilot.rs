//! Idle/demo mode controller
//!
//! Aims the player at the middle of the next gap. Used for the attract
//! screen and the native headless demo; not meant to be unbeatable.

use super::state::{GameMode, GameState};

/// How far below the target the player may sink before flapping
const SLACK: f32 = 12.0;

/// Vertical point the player should hover around
pub fn target_y(state: &GameState) -> f32 {
    let player_left = state.player.sprite.pos.x;
    state
        .field
        .pairs()
        .iter()
        .filter(|p| !p.passed && p.right() >= player_left)
        .min_by(|a, b| a.x().total_cmp(&b.x()))
        .map(|p| p.gap_top + p.gap_height / 2.0)
        .unwrap_or(state.tuning.play_height / 2.0)
}

/// Whether the autopilot would press the button this frame
pub fn should_activate(state: &GameState) -> bool {
    match state.mode {
        GameMode::Prestart => true,
        GameMode::Running => {
            if state.pending_jump || state.is_collision_paused() {
                return false;
            }
            let center = state.player.sprite.center().y;
            state.player.vy() >= 0.0 && center > target_y(state) + SLACK
        }
        GameMode::Waiting | GameMode::Over => false,
    }
}
