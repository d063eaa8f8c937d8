//! Game state and mode types
//!
//! Everything a session mutates per tick lives in [`GameState`]; nothing in
//! the simulation reaches for globals or a clock of its own.

use serde::{Deserialize, Serialize};

use super::collision::Collision;
use super::obstacle::{ObstacleField, SpawnPolicy};
use super::player::Player;
use super::stats::GameStats;
use crate::assets::ImageKey;
use crate::tuning::Tuning;

/// Current mode of play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameMode {
    /// Intro prompt shown, waiting for the first input
    Prestart,
    /// Input received; counting down before play begins
    Waiting,
    /// Active gameplay
    Running,
    /// Lives exhausted
    Over,
}

impl GameMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameMode::Prestart => "prestart",
            GameMode::Waiting => "waiting",
            GameMode::Running => "running",
            GameMode::Over => "over",
        }
    }
}

/// Things that happened during input handling or a tick, oldest first
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Started,
    Running,
    Jumped,
    Spawned { id: u32 },
    Collided(Collision),
    LifeLost { remaining: u8 },
    Scored { score: u32 },
    Resumed,
    CourseComplete,
    GameOver { score: u32 },
    Restarted,
}

/// Complete simulation state for one session
#[derive(Debug, Clone)]
pub struct GameState {
    pub tuning: Tuning,
    pub mode: GameMode,
    pub player: Player,
    pub field: ObstacleField,
    pub stats: GameStats,
    /// Jump requested by input, applied on the next running tick
    pub pending_jump: bool,
    /// Collision-pause deadline (ms); input and ticking are suspended until then
    pub collision_pause_until: Option<f64>,
    /// Countdown deadline while in `Waiting`
    pub waiting_until: Option<f64>,
    /// When the game entered `Over`
    pub over_at: Option<f64>,
    /// Horizontal scroll of the ground strip
    pub ground_offset: f32,
    pub events: Vec<GameEvent>,
}

impl GameState {
    pub fn new(tuning: Tuning, policy: SpawnPolicy, seed: u64, image: Option<ImageKey>) -> Self {
        let player = Player::new(&tuning, image);
        let field = ObstacleField::new(policy, seed, &tuning);
        let stats = GameStats::new(tuning.initial_lives);
        Self {
            tuning,
            mode: GameMode::Prestart,
            player,
            field,
            stats,
            pending_jump: false,
            collision_pause_until: None,
            waiting_until: None,
            over_at: None,
            ground_offset: 0.0,
            events: Vec::new(),
        }
    }

    pub fn is_collision_paused(&self) -> bool {
        self.collision_pause_until.is_some()
    }

    /// Full restart: stats, player, obstacles and timers
    pub fn reset(&mut self) {
        self.stats.reset();
        self.player.respawn(self.tuning.player_start_y());
        self.field.reset(&self.tuning);
        self.mode = GameMode::Prestart;
        self.pending_jump = false;
        self.collision_pause_until = None;
        self.waiting_until = None;
        self.over_at = None;
        self.ground_offset = 0.0;
    }

    /// Hand accumulated events to the caller
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_starts_in_prestart() {
        let state = GameState::new(Tuning::default(), SpawnPolicy::Timed, 1, None);
        assert_eq!(state.mode, GameMode::Prestart);
        assert_eq!(state.stats.lives, 3);
        assert_eq!(state.player.y(), state.tuning.play_height / 2.0);
        assert!(state.field.pairs().is_empty());
        assert!(!state.is_collision_paused());
    }

    #[test]
    fn test_reset_clears_progress() {
        let mut state = GameState::new(Tuning::default(), SpawnPolicy::Timed, 1, None);
        state.mode = GameMode::Over;
        state.over_at = Some(10.0);
        state.stats.lose_life();
        state.stats.add_point();
        state.player.sprite.pos.y = 12.0;
        state.field.spawn_random(&state.tuning);

        state.reset();
        assert_eq!(state.mode, GameMode::Prestart);
        assert_eq!(state.stats.lives, 3);
        assert_eq!(state.stats.score, 0);
        assert_eq!(state.player.y(), 300.0);
        assert!(state.field.pairs().is_empty());
        assert_eq!(state.over_at, None);
    }
}
