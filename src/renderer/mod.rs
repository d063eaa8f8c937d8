//! Rendering module
//!
//! The simulation hands sprites and text to a [`Renderer`]; backends decide
//! how they reach the screen. `scene` decides what gets drawn per mode.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod headless;
pub mod scene;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;
pub use headless::{DrawCall, HeadlessRenderer};
pub use scene::{draw_character_prompt, draw_frame};

use crate::sim::Sprite;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

impl TextAlign {
    /// Canvas `textAlign` value
    pub fn as_str(&self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextStyle {
    pub size_px: u32,
    /// CSS color
    pub color: &'static str,
    pub align: TextAlign,
}

impl TextStyle {
    pub const PROMPT: TextStyle = TextStyle {
        size_px: 25,
        color: "red",
        align: TextAlign::Center,
    };
    pub const TITLE: TextStyle = TextStyle {
        size_px: 30,
        color: "red",
        align: TextAlign::Center,
    };
    pub const HINT: TextStyle = TextStyle {
        size_px: 20,
        color: "red",
        align: TextAlign::Center,
    };
    pub const HUD: TextStyle = TextStyle {
        size_px: 20,
        color: "white",
        align: TextAlign::Right,
    };
}

/// Drawing surface the game talks to
pub trait Renderer {
    /// Wipe the surface and draw `sprites` back to front
    fn clear_and_draw(&mut self, sprites: &[&Sprite]);

    fn draw_text(&mut self, text: &str, x: f32, y: f32, style: &TextStyle);

    /// One heart per remaining life along the top-left corner
    fn draw_lives_hud(&mut self, lives: u8);

    /// Blocking, user-visible notice (an alert on the web)
    fn notify(&mut self, message: &str);

    fn draw_game_over(&mut self, score: u32, width: f32, height: f32) {
        let cx = width / 2.0;
        let cy = height / 2.0;
        self.draw_text("Game Over", cx, cy, &TextStyle::TITLE);
        self.draw_text(&format!("Score: {}", score), cx, cy + 50.0, &TextStyle::TITLE);
        self.draw_text(
            "Click, touch, or press to play again",
            cx,
            cy + 100.0,
            &TextStyle::HINT,
        );
    }
}
