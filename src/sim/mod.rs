//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time only enters as the `now` argument (milliseconds)
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod obstacle;
pub mod player;
pub mod sprite;
pub mod state;
pub mod stats;
pub mod tick;

pub use collision::{Collision, boxes_overlap, hits_boundary, sprites_touch};
pub use obstacle::{COURSE, CourseEntry, ObstacleField, ObstaclePair, SpawnPolicy};
pub use player::{Player, apply_gravity, tilt_angle};
pub use sprite::{BoundingBox, Sprite};
pub use state::{GameEvent, GameMode, GameState};
pub use stats::GameStats;
pub use tick::{InputOutcome, TickOutcome, detect_collision, handle_input, tick};
