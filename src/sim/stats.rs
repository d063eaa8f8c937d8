//! Lives and score

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStats {
    pub lives: u8,
    pub score: u32,
    initial_lives: u8,
}

impl GameStats {
    pub fn new(initial_lives: u8) -> Self {
        Self {
            lives: initial_lives,
            score: 0,
            initial_lives,
        }
    }

    /// Remove one life (never below zero) and return what is left
    pub fn lose_life(&mut self) -> u8 {
        self.lives = self.lives.saturating_sub(1);
        self.lives
    }

    pub fn add_point(&mut self) -> u32 {
        self.score += 1;
        self.score
    }

    pub fn is_exhausted(&self) -> bool {
        self.lives == 0
    }

    pub fn reset(&mut self) {
        self.lives = self.initial_lives;
        self.score = 0;
    }
}
