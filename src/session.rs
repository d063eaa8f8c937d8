//! Session: one player's game wired to a renderer and a ticker
//!
//! Owns everything the UI shell touches. The shell forwards button clicks,
//! activate events and ticker fires; the session decides what they mean.

use crate::assets::Character;
use crate::error::SessionError;
use crate::platform::Ticker;
use crate::renderer::{Renderer, draw_character_prompt, draw_frame};
use crate::sim::autopilot;
use crate::sim::{GameEvent, GameState, InputOutcome, SpawnPolicy, TickOutcome, handle_input, tick};
use crate::tuning::Tuning;

pub struct Session<R: Renderer, T: Ticker> {
    state: GameState,
    renderer: R,
    ticker: T,
    character: Option<Character>,
    /// Autopilot presses the button instead of the player
    idle_mode: bool,
    started: bool,
}

impl<R: Renderer, T: Ticker> Session<R, T> {
    pub fn new(tuning: Tuning, policy: SpawnPolicy, seed: u64, renderer: R, ticker: T) -> Self {
        log::info!("New session: policy={}, seed={}", policy.as_str(), seed);
        let mut session = Self {
            state: GameState::new(tuning, policy, seed, None),
            renderer,
            ticker,
            character: None,
            idle_mode: false,
            started: false,
        };
        let (w, h) = (session.state.tuning.play_width, session.state.tuning.play_height);
        draw_character_prompt(&mut session.renderer, w, h);
        session
    }

    /// Pick the player's character and start the game with it at `now` ms.
    /// Mid-game this only swaps the player's image.
    pub fn select_character(&mut self, character: Character, now: f64) -> Result<(), SessionError> {
        self.preselect(character);
        self.start(now)
    }

    /// Remember a character without starting, so the start button works
    pub fn preselect(&mut self, character: Character) {
        log::info!("Character selected: {}", character.as_str());
        self.character = Some(character);
        self.state.player.set_image(character.image());
    }

    /// Arm the frame ticker at `now` ms. Without a character the user is told
    /// to pick one and nothing is scheduled; once started, further calls do
    /// nothing.
    pub fn start(&mut self, now: f64) -> Result<(), SessionError> {
        if self.character.is_none() {
            let err = SessionError::NoCharacterSelected;
            log::warn!("Start refused: {}", err);
            self.renderer.notify(&err.to_string());
            return Err(err);
        }
        if self.started {
            return Ok(());
        }

        self.started = true;
        self.ticker.arm(self.state.tuning.frame_period_ms());
        draw_frame(&self.state, &mut self.renderer, now);
        Ok(())
    }

    /// An activate event (pointer, touch or key) at `now` ms
    pub fn on_input(&mut self, now: f64) -> InputOutcome {
        if !self.started {
            return InputOutcome::Ignored;
        }
        let outcome = handle_input(&mut self.state, now);
        if outcome == InputOutcome::Restarted {
            self.ticker.arm(self.state.tuning.frame_period_ms());
            draw_frame(&self.state, &mut self.renderer, now);
        }
        self.log_events();
        outcome
    }

    /// One ticker fire at `now` ms
    pub fn on_frame(&mut self, now: f64) -> TickOutcome {
        if self.idle_mode && autopilot::should_activate(&self.state) {
            handle_input(&mut self.state, now);
        }

        let outcome = tick(&mut self.state, now);
        draw_frame(&self.state, &mut self.renderer, now);
        if outcome == TickOutcome::Halt {
            self.ticker.cancel();
        }
        self.log_events();
        outcome
    }

    pub fn toggle_idle_mode(&mut self) -> bool {
        self.idle_mode = !self.idle_mode;
        log::info!("Idle mode: {}", self.idle_mode);
        self.idle_mode
    }

    pub fn character(&self) -> Option<Character> {
        self.character
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn ticker(&self) -> &T {
        &self.ticker
    }

    pub fn ticker_mut(&mut self) -> &mut T {
        &mut self.ticker
    }

    fn log_events(&mut self) {
        for event in self.state.drain_events() {
            match event {
                GameEvent::Jumped | GameEvent::Spawned { .. } | GameEvent::Scored { .. } => {
                    log::debug!("{:?}", event)
                }
                GameEvent::Collided(c) => log::info!("Collision: {:?}", c),
                GameEvent::LifeLost { remaining } => log::info!("Life lost, {} left", remaining),
                GameEvent::GameOver { score } => log::info!("Game over, score {}", score),
                other => log::info!("{:?} (mode {})", other, self.state.mode.as_str()),
            }
        }
    }
}
