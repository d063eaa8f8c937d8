//! Fixed-rate simulation tick and input dispatch
//!
//! Running tick order:
//! 1. jump impulse or gravity, then tilt
//! 2. timed spawn
//! 3. collision checks against the positions drawn last frame
//! 4. scoring
//! 5. advance every sprite and reap what left the screen
//!
//! The caller renders after `tick` returns, so the frame shows post-advance
//! positions and the next tick collides against exactly what was drawn.

use super::collision::{Collision, hits_boundary, sprites_touch};
use super::state::{GameEvent, GameMode, GameState};
use crate::consts::GROUND_WRAP;

/// What the driver should do after a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Frame processed; render and keep ticking
    Continue,
    /// Collision-pause in effect; nothing moved
    Paused,
    /// Game over; stop the ticker
    Halt,
}

/// How an activate event was interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    Ignored,
    /// Left the intro screen
    Started,
    /// Jump queued for the next tick
    Jump,
    /// Game reset back to the intro screen
    Restarted,
}

/// Dispatch one activate event (pointer, touch or key) at time `now` (ms)
pub fn handle_input(state: &mut GameState, now: f64) -> InputOutcome {
    if state.is_collision_paused() {
        return InputOutcome::Ignored;
    }

    match state.mode {
        GameMode::Prestart => {
            state.events.push(GameEvent::Started);
            if state.tuning.start_delay_ms <= 0.0 {
                enter_running(state);
            } else {
                state.mode = GameMode::Waiting;
                state.waiting_until = Some(now + state.tuning.start_delay_ms);
            }
            InputOutcome::Started
        }
        GameMode::Waiting => InputOutcome::Ignored,
        GameMode::Running => {
            state.pending_jump = true;
            InputOutcome::Jump
        }
        GameMode::Over => {
            let elapsed = state.over_at.map_or(f64::INFINITY, |t| now - t);
            if elapsed > state.tuning.restart_cooldown_ms {
                state.reset();
                state.events.push(GameEvent::Restarted);
                InputOutcome::Restarted
            } else {
                InputOutcome::Ignored
            }
        }
    }
}

/// Advance the game by one frame at time `now` (ms)
pub fn tick(state: &mut GameState, now: f64) -> TickOutcome {
    if let Some(until) = state.collision_pause_until {
        if now < until {
            return TickOutcome::Paused;
        }
        resume_after_collision(state);
        return TickOutcome::Continue;
    }

    match state.mode {
        GameMode::Prestart => TickOutcome::Continue,
        GameMode::Waiting => {
            if state.waiting_until.is_none_or(|t| now >= t) {
                enter_running(state);
            }
            TickOutcome::Continue
        }
        GameMode::Running => tick_running(state, now),
        GameMode::Over => TickOutcome::Halt,
    }
}

fn enter_running(state: &mut GameState) {
    state.mode = GameMode::Running;
    state.waiting_until = None;
    state.events.push(GameEvent::Running);
}

fn tick_running(state: &mut GameState, now: f64) -> TickOutcome {
    if std::mem::take(&mut state.pending_jump) {
        state.player.jump(state.tuning.jump_velocity);
        state.events.push(GameEvent::Jumped);
    } else {
        state
            .player
            .apply_gravity(state.tuning.max_fall_speed, state.tuning.gravity);
    }
    state.player.tilt();

    if let Some(id) = state.field.spawn_due(now, &state.tuning) {
        state.events.push(GameEvent::Spawned { id });
    }

    if let Some(collision) = detect_collision(state) {
        return on_collision(state, collision, now);
    }

    let player_left = state.player.sprite.pos.x;
    for _ in 0..state.field.collect_passed(player_left) {
        let score = state.stats.add_point();
        state.events.push(GameEvent::Scored { score });
    }
    if state.field.check_finish(player_left) {
        state.events.push(GameEvent::CourseComplete);
    }

    state.player.sprite.advance();
    state.field.advance();
    state.field.reap();

    if state.ground_offset < -GROUND_WRAP {
        state.ground_offset = 0.0;
    }
    state.ground_offset += state.tuning.pipe_speed;

    TickOutcome::Continue
}

/// First thing the player is touching, obstacles before the boundary
pub fn detect_collision(state: &GameState) -> Option<Collision> {
    let player = &state.player.sprite;
    for pair in state.field.pairs() {
        if pair.sprites().iter().any(|piece| sprites_touch(player, piece)) {
            return Some(Collision::Obstacle { pair_id: pair.id });
        }
    }
    if hits_boundary(player, state.tuning.play_height) {
        return Some(Collision::Boundary);
    }
    None
}

/// One life per collision tick; pause or end the game
fn on_collision(state: &mut GameState, collision: Collision, now: f64) -> TickOutcome {
    state.events.push(GameEvent::Collided(collision));
    state.pending_jump = false;

    let remaining = state.stats.lose_life();
    state.events.push(GameEvent::LifeLost { remaining });

    if !state.stats.is_exhausted() {
        state.collision_pause_until = Some(now + state.tuning.collision_pause_ms);
        TickOutcome::Paused
    } else {
        state.mode = GameMode::Over;
        state.over_at = Some(now);
        state.events.push(GameEvent::GameOver {
            score: state.stats.score,
        });
        TickOutcome::Halt
    }
}

/// Respawn at mid-height and put the obstacles back to their starting layout
fn resume_after_collision(state: &mut GameState) {
    state.collision_pause_until = None;
    state.pending_jump = false;
    state.player.respawn(state.tuning.player_start_y());
    state.field.rewind(&state.tuning);
    state.events.push(GameEvent::Resumed);
}
