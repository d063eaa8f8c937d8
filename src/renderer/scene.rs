//! Per-mode frame composition

use glam::Vec2;

use super::{Renderer, TextStyle};
use crate::assets::ImageKey;
use crate::consts::{GROUND_HEIGHT, GROUND_WRAP};
use crate::sim::{GameMode, GameState, Sprite};

/// Scrolling strip along the bottom edge
fn ground_sprite(state: &GameState) -> Sprite {
    let t = &state.tuning;
    Sprite::new(
        Some(ImageKey::Ground),
        Vec2::new(state.ground_offset, t.play_height - GROUND_HEIGHT),
        Vec2::new(t.play_width + GROUND_WRAP + 2.0, GROUND_HEIGHT),
    )
}

/// Draw the current state. `now` (ms) drives the start countdown.
pub fn draw_frame(state: &GameState, renderer: &mut impl Renderer, now: f64) {
    let t = &state.tuning;
    let ground = ground_sprite(state);

    let mut sprites: Vec<&Sprite> = state.field.sprites().collect();
    sprites.push(&ground);
    sprites.push(&state.player.sprite);
    renderer.clear_and_draw(&sprites);
    renderer.draw_lives_hud(state.stats.lives);

    let cx = t.play_width / 2.0;
    match state.mode {
        GameMode::Prestart => {
            renderer.draw_text(
                "Press, touch or click to start",
                cx,
                t.play_height / 4.0,
                &TextStyle::PROMPT,
            );
        }
        GameMode::Waiting => {
            let remaining = state.waiting_until.map_or(0.0, |until| (until - now).max(0.0));
            let secs = (remaining / 1000.0).ceil() as u32;
            renderer.draw_text(
                &format!("Get ready... {}", secs.max(1)),
                cx,
                t.play_height / 4.0,
                &TextStyle::PROMPT,
            );
        }
        GameMode::Running => {
            renderer.draw_text(
                &format!("Score: {}", state.stats.score),
                t.play_width - 10.0,
                30.0,
                &TextStyle::HUD,
            );
            if state.field.is_course_complete() {
                renderer.draw_text("Finish!", cx, t.play_height / 4.0, &TextStyle::TITLE);
            }
        }
        GameMode::Over => {
            renderer.draw_game_over(state.stats.score, t.play_width, t.play_height);
        }
    }
}

/// Shown before a character has been picked
pub fn draw_character_prompt(renderer: &mut impl Renderer, width: f32, height: f32) {
    renderer.clear_and_draw(&[]);
    renderer.draw_text("Choose a character", width / 2.0, height / 3.0, &TextStyle::TITLE);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{DrawCall, HeadlessRenderer};
    use crate::sim::{SpawnPolicy, handle_input};
    use crate::tuning::Tuning;

    #[test]
    fn test_prestart_shows_prompt_and_hud() {
        let state = GameState::new(Tuning::default(), SpawnPolicy::Timed, 1, Some(ImageKey::Dragon));
        let mut r = HeadlessRenderer::default();
        draw_frame(&state, &mut r, 0.0);

        assert!(matches!(r.calls[0], DrawCall::Frame { .. }));
        assert_eq!(r.calls[1], DrawCall::Lives(3));
        assert!(r.texts().iter().any(|t| t.contains("Press, touch or click")));
        // Player is drawn last, on top of everything else
        let frame = r.last_frame().expect("frame drawn");
        assert_eq!(frame.last().and_then(|s| s.image), Some(ImageKey::Dragon));
    }

    #[test]
    fn test_waiting_counts_down() {
        let mut state = GameState::new(Tuning::default(), SpawnPolicy::Timed, 1, None);
        handle_input(&mut state, 0.0);
        let mut r = HeadlessRenderer::default();
        draw_frame(&state, &mut r, 500.0);
        assert!(r.texts().contains(&"Get ready... 3".to_string()));
        r.calls.clear();
        draw_frame(&state, &mut r, 2500.0);
        assert!(r.texts().contains(&"Get ready... 1".to_string()));
    }

    #[test]
    fn test_over_draws_final_score() {
        let mut state = GameState::new(Tuning::default(), SpawnPolicy::Timed, 1, None);
        state.mode = GameMode::Over;
        state.stats.score = 7;
        let mut r = HeadlessRenderer::default();
        draw_frame(&state, &mut r, 0.0);
        let texts = r.texts();
        assert!(texts.contains(&"Game Over".to_string()));
        assert!(texts.contains(&"Score: 7".to_string()));
    }

    #[test]
    fn test_course_frame_includes_every_sprite() {
        let state = GameState::new(Tuning::default(), SpawnPolicy::Course, 1, None);
        let mut r = HeadlessRenderer::default();
        draw_frame(&state, &mut r, 0.0);
        // 13 pairs, finish, ground, player
        assert_eq!(r.last_frame().map(|f| f.len()), Some(13 * 2 + 3));
    }
}
