//! Recording renderer for tests and the native demo

use super::{Renderer, TextStyle};
use crate::sim::Sprite;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Frame { sprites: Vec<Sprite> },
    Text { text: String, x: f32, y: f32, style: TextStyle },
    Lives(u8),
    Notice(String),
}

/// Keeps every draw call in order instead of putting pixels anywhere
#[derive(Debug, Default)]
pub struct HeadlessRenderer {
    pub calls: Vec<DrawCall>,
    pub frames: u64,
}

impl HeadlessRenderer {
    /// Sprites handed to the most recent `clear_and_draw`
    pub fn last_frame(&self) -> Option<&[Sprite]> {
        self.calls.iter().rev().find_map(|c| match c {
            DrawCall::Frame { sprites } => Some(sprites.as_slice()),
            _ => None,
        })
    }

    pub fn texts(&self) -> Vec<String> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::Text { text, .. } => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn notices(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::Notice(msg) => Some(msg.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Renderer for HeadlessRenderer {
    fn clear_and_draw(&mut self, sprites: &[&Sprite]) {
        // Only the latest frame matters; drop history to keep long demos flat
        self.calls.clear();
        self.frames += 1;
        self.calls.push(DrawCall::Frame {
            sprites: sprites.iter().map(|s| (*s).clone()).collect(),
        });
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, style: &TextStyle) {
        self.calls.push(DrawCall::Text {
            text: text.to_string(),
            x,
            y,
            style: *style,
        });
    }

    fn draw_lives_hud(&mut self, lives: u8) {
        self.calls.push(DrawCall::Lives(lives));
    }

    fn notify(&mut self, message: &str) {
        log::warn!("{}", message);
        self.calls.push(DrawCall::Notice(message.to_string()));
    }
}
