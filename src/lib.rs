//! Flappy Canvas - A side-scrolling arcade game on a 2D canvas
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game modes)
//! - `renderer`: Scene composition and canvas drawing
//! - `platform`: Clock and repeating-task abstraction
//! - `session`: Ties simulation, renderer and ticker together
//! - `tuning`: Data-driven game balance

pub mod assets;
pub mod error;
pub mod platform;
pub mod renderer;
pub mod session;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use assets::{Character, ImageKey};
pub use error::{SessionError, TuningError};
pub use session::Session;
pub use settings::Settings;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Frame rate of the fixed-rate tick
    pub const FPS: u32 = 40;

    /// Play area dimensions
    pub const PLAY_WIDTH: f32 = 500.0;
    pub const PLAY_HEIGHT: f32 = 600.0;

    /// Player sprite size (square)
    pub const PLAYER_SIZE: f32 = 50.0;

    /// Upward velocity applied on jump (units/tick)
    pub const JUMP_VELOCITY: f32 = -10.0;
    /// Gravity stops accelerating once this fall speed is reached
    pub const MAX_FALL_SPEED: f32 = 10.0;
    /// Gravity acceleration (units/tick²)
    pub const GRAVITY: f32 = 1.0;

    /// Horizontal obstacle velocity (units/tick)
    pub const PIPE_SPEED: f32 = -2.0;
    pub const PIPE_WIDTH: f32 = 50.0;
    pub const PIPE_HEIGHT: f32 = 300.0;
    /// Vertical opening between a top and bottom piece
    pub const GAP_HEIGHT: f32 = 150.0;

    /// Finish line marker for the scripted course
    pub const FINISH_LINE_X: f32 = 3900.0;
    pub const FINISH_LINE_WIDTH: f32 = 40.0;

    /// Ground strip along the bottom edge (cosmetic)
    pub const GROUND_HEIGHT: f32 = 24.0;
    /// Ground scroll offset wraps back to zero past this distance
    pub const GROUND_WRAP: f32 = 23.0;

    /// Timers (milliseconds)
    pub const SPAWN_INTERVAL_MS: f64 = 2000.0;
    pub const COLLISION_PAUSE_MS: f64 = 500.0;
    pub const START_DELAY_MS: f64 = 3000.0;
    pub const RESTART_COOLDOWN_MS: f64 = 1000.0;

    pub const INITIAL_LIVES: u8 = 3;
}
