//! Canvas 2D backend (web only)
//!
//! Images are requested once up front; a sprite whose image has not
//! finished loading is skipped for that frame.

use std::collections::HashMap;

use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, HtmlImageElement};

use super::{Renderer, TextStyle};
use crate::assets::ImageKey;
use crate::sim::Sprite;

const HEART_SIZE: f64 = 20.0;
const HEART_SPACING: f64 = 30.0;
const HEART_MARGIN: f64 = 10.0;

pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
    images: HashMap<ImageKey, HtmlImageElement>,
}

impl CanvasRenderer {
    pub fn new(ctx: CanvasRenderingContext2d, width: f64, height: f64) -> Self {
        let mut images = HashMap::new();
        for key in ImageKey::ALL {
            match HtmlImageElement::new() {
                Ok(img) => {
                    img.set_src(key.url());
                    images.insert(key, img);
                }
                Err(e) => log::error!("Failed to create image for {:?}: {:?}", key, e),
            }
        }
        log::info!("Canvas renderer ready ({}x{})", width, height);
        Self {
            ctx,
            width,
            height,
            images,
        }
    }

    fn loaded(&self, key: ImageKey) -> Option<&HtmlImageElement> {
        self.images
            .get(&key)
            .filter(|img| img.complete() && img.natural_width() > 0)
    }

    fn draw_sprite(&self, sprite: &Sprite) -> Result<(), JsValue> {
        let Some(img) = sprite.image.and_then(|k| self.loaded(k)) else {
            return Ok(());
        };
        let w = sprite.size.x as f64;
        let h = sprite.size.y as f64;
        let center = sprite.center();

        self.ctx.save();
        self.ctx.translate(center.x as f64, center.y as f64)?;
        self.ctx.rotate((sprite.angle as f64).to_radians())?;
        let sx = if sprite.flip_h { -1.0 } else { 1.0 };
        let sy = if sprite.flip_v { -1.0 } else { 1.0 };
        self.ctx.scale(sx, sy)?;
        let result = self
            .ctx
            .draw_image_with_html_image_element_and_dw_and_dh(img, -w / 2.0, -h / 2.0, w, h);
        self.ctx.restore();
        result
    }
}

impl Renderer for CanvasRenderer {
    fn clear_and_draw(&mut self, sprites: &[&Sprite]) {
        self.ctx.clear_rect(0.0, 0.0, self.width, self.height);
        for sprite in sprites.iter().filter(|s| s.visible) {
            if let Err(e) = self.draw_sprite(sprite) {
                log::error!("Sprite draw failed: {:?}", e);
            }
        }
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, style: &TextStyle) {
        self.ctx.set_font(&format!("{}px Arial", style.size_px));
        self.ctx.set_fill_style_str(style.color);
        self.ctx.set_text_align(style.align.as_str());
        if let Err(e) = self.ctx.fill_text(text, x as f64, y as f64) {
            log::error!("fill_text failed: {:?}", e);
        }
    }

    fn draw_lives_hud(&mut self, lives: u8) {
        let Some(heart) = self.loaded(ImageKey::Heart) else {
            return;
        };
        for i in 0..lives {
            let x = HEART_MARGIN + i as f64 * HEART_SPACING;
            if let Err(e) = self.ctx.draw_image_with_html_image_element_and_dw_and_dh(
                heart,
                x,
                HEART_MARGIN,
                HEART_SIZE,
                HEART_SIZE,
            ) {
                log::error!("Heart draw failed: {:?}", e);
            }
        }
    }

    fn notify(&mut self, message: &str) {
        log::warn!("{}", message);
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
}
