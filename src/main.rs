//! Flappy Canvas entry point
//!
//! On the web this wires the DOM to a [`Session`]. Natively it runs a
//! headless autopilot demo, optionally with a tuning file.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{
        AddEventListenerOptions, CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent,
        MouseEvent, TouchEvent,
    };

    use flappy_canvas::platform::{IntervalTicker, now_ms};
    use flappy_canvas::renderer::CanvasRenderer;
    use flappy_canvas::{Character, Session, Settings};

    type WebSession = Session<CanvasRenderer, IntervalTicker>;

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::error_1(&format!("Logger init failed: {}", e).into());
        }

        log::info!("Flappy Canvas starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let settings = Settings::load();
        let tuning = settings.resolved_tuning();
        let seed = settings.seed_or(now_ms());

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .ok_or("no canvas")?
            .dyn_into()?;
        canvas.set_width(tuning.play_width as u32);
        canvas.set_height(tuning.play_height as u32);
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or("no 2d context")?
            .dyn_into()?;

        let renderer = CanvasRenderer::new(ctx, tuning.play_width as f64, tuning.play_height as f64);
        let session = Rc::new(RefCell::new(Session::new(
            tuning,
            settings.spawn_policy,
            seed,
            renderer,
            IntervalTicker::new(),
        )));
        log::info!("Game initialized with seed: {}", seed);

        if let Some(character) = settings.last_character {
            session.borrow_mut().preselect(character);
        }

        // The ticker lives inside the session, so the callback only holds a weak handle
        {
            let weak = Rc::downgrade(&session);
            let closure = Closure::<dyn FnMut()>::new(move || {
                if let Some(session) = weak.upgrade() {
                    session.borrow_mut().on_frame(now_ms());
                }
            });
            session.borrow_mut().ticker_mut().set_callback(closure);
        }

        setup_character_buttons(session.clone(), settings);
        setup_start_button(session.clone());
        setup_input_handlers(session);

        log::info!("Flappy Canvas running!");
        Ok(())
    }

    fn setup_character_buttons(session: Rc<RefCell<WebSession>>, settings: Settings) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let settings = Rc::new(RefCell::new(settings));

        for id in ["dragon", "horse"] {
            let Some(character) = Character::from_str(id) else {
                continue;
            };
            let Some(btn) = document.get_element_by_id(id) else {
                log::warn!("Missing #{} button", id);
                continue;
            };
            let session = session.clone();
            let settings = settings.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                // Errors were already shown to the user by the session
                let _ = session.borrow_mut().select_character(character, now_ms());
                let mut s = settings.borrow_mut();
                s.last_character = Some(character);
                s.save();
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_start_button(session: Rc<RefCell<WebSession>>) {
        let Some(btn) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("start-btn"))
        else {
            log::warn!("Missing #start-btn");
            return;
        };
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
            let _ = session.borrow_mut().start(now_ms());
        });
        let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_input_handlers(session: Rc<RefCell<WebSession>>) {
        let Some(window) = web_sys::window() else {
            return;
        };

        // Mouse
        {
            let session = session.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                session.borrow_mut().on_input(now_ms());
            });
            let _ = window
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch; non-passive so prevent_default suppresses the emulated mousedown
        {
            let session = session.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                session.borrow_mut().on_input(now_ms());
            });
            let options = AddEventListenerOptions::new();
            options.set_passive(false);
            let _ = window.add_event_listener_with_callback_and_add_event_listener_options(
                "touchstart",
                closure.as_ref().unchecked_ref(),
                &options,
            );
            closure.forget();
        }

        // Keyboard
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut s = session.borrow_mut();
                match event.key().as_str() {
                    "i" | "I" => {
                        s.toggle_idle_mode();
                    }
                    _ => {
                        if event.key() == " " {
                            event.prevent_default();
                        }
                        s.on_input(now_ms());
                    }
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    if let Err(e) = wasm_game::run() {
        log::error!("Setup failed: {:?}", e);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    use anyhow::Context;

    use flappy_canvas::platform::{ManualTicker, Ticker, now_ms};
    use flappy_canvas::renderer::HeadlessRenderer;
    use flappy_canvas::{Character, Session, Settings, Tuning};

    /// Stop the demo after this many frames even if the autopilot survives
    const MAX_FRAMES: u64 = 4000;

    env_logger::init();
    log::info!("Flappy Canvas (native) starting...");
    log::info!("Native mode runs a headless demo - build for wasm32 to play in a browser");

    let settings = Settings::load();
    let tuning = match std::env::args().nth(1) {
        Some(path) => {
            let json = std::fs::read_to_string(&path)
                .with_context(|| format!("reading tuning file {}", path))?;
            let tuning = Tuning::from_json(&json).with_context(|| format!("parsing {}", path))?;
            log::info!("Loaded tuning from {}", path);
            tuning
        }
        None => settings.resolved_tuning(),
    };
    let period = tuning.frame_period_ms() as f64;
    let seed = settings.seed_or(now_ms());

    let mut session = Session::new(
        tuning,
        settings.spawn_policy,
        seed,
        HeadlessRenderer::default(),
        ManualTicker::default(),
    );
    session.select_character(Character::Dragon, 0.0)?;
    session.toggle_idle_mode();

    // Virtual clock: one ticker period per frame
    let mut now = 0.0;
    let mut frames = 0;
    while session.ticker().is_armed() && frames < MAX_FRAMES {
        now += period;
        session.on_frame(now);
        frames += 1;
    }

    let state = session.state();
    println!(
        "Demo finished after {} frames ({:.1}s simulated): mode={}, score={}, lives={}",
        frames,
        now / 1000.0,
        state.mode.as_str(),
        state.stats.score,
        state.stats.lives,
    );
    Ok(())
}
