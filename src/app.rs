//! All mutable sketch state in one place, driven by the browser layer.

use rand::rngs::StdRng;

use crate::config::SketchConfig;
use crate::gate::{Gate, GateOutcome};
use crate::paint::Painter;
use crate::shapes::{Bounds, ShapeField};
use crate::sprite::SpriteAnimator;

pub struct App {
    config: SketchConfig,
    gate: Gate,
    field: ShapeField,
    animator: SpriteAnimator,
    rng: StdRng,
    bounds: Bounds,
    last_pointer_x: Option<f64>,
}

impl App {
    pub fn new(config: SketchConfig, rng: StdRng, bounds: Bounds) -> Self {
        let gate = Gate::new(config.passcode.clone());
        let field = ShapeField::new(config.size_step, config.size_floor);
        let animator =
            SpriteAnimator::new(config.assets(), config.frame_count, config.frame_interval_ms);
        Self {
            config,
            gate,
            field,
            animator,
            rng,
            bounds,
            last_pointer_x: None,
        }
    }

    /// Answer the passcode prompt. The first successful answer populates the field.
    pub fn submit_passcode(&mut self, input: Option<&str>) -> GateOutcome {
        let outcome = self.gate.submit(input);
        match outcome {
            GateOutcome::Unlocked => {
                log::info!("gate unlocked");
                self.field
                    .populate(&mut self.rng, self.bounds, self.config.max_shapes);
            }
            GateOutcome::Rejected => log::warn!("gate rejected passcode"),
            GateOutcome::AlreadyOpen => {}
        }
        outcome
    }

    /// Render one frame. Draws nothing while the gate is locked.
    pub fn frame(&mut self, now_ms: f64, painter: &mut dyn Painter) {
        if !self.gate.is_open() {
            return;
        }
        painter.clear(&self.config.background);
        self.field.step(self.bounds);
        self.field.draw(painter);
        if let Some(f) = self.animator.tick(now_ms) {
            painter.draw_sprite(f.asset, f.strip, self.config.sprite_origin);
        }
    }

    /// Pointer position in canvas coordinates; only the horizontal delta matters.
    pub fn pointer_moved(&mut self, x: f64) {
        let prev = self.last_pointer_x.replace(x);
        if !self.gate.is_open() {
            return;
        }
        if let Some(prev) = prev {
            self.field.pointer_moved(x - prev);
        }
    }

    /// Hover the menu entry with the given visible label.
    pub fn hover(&mut self, label: &str, now_ms: f64) {
        if let Some(asset) = self.config.asset_for_label(label).map(str::to_owned) {
            self.hover_asset(&asset, now_ms);
        }
    }

    pub fn hover_asset(&mut self, asset: &str, now_ms: f64) {
        if self.gate.is_open() {
            self.animator.select(asset, now_ms);
        }
    }

    pub fn leave(&mut self) {
        self.animator.clear();
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.bounds = Bounds::new(width, height);
        self.field.confine(self.bounds);
        log::debug!("canvas resized to {width}x{height}");
    }

    /// A sprite sheet finished loading with the given natural size.
    pub fn sheet_loaded(&mut self, asset: &str, width: u32, height: u32) {
        if !self.animator.slice(asset, width, height) {
            log::warn!("loaded unknown sheet {asset}");
        }
    }

    /// How long to wait before asking for the passcode again.
    pub fn retry_delay_ms(&self) -> u32 {
        self.gate.retry_delay_ms()
    }

    pub fn config(&self) -> &SketchConfig {
        &self.config
    }

    pub fn gate(&self) -> &Gate {
        &self.gate
    }

    pub fn field(&self) -> &ShapeField {
        &self.field
    }

    pub fn animator(&self) -> &SpriteAnimator {
        &self.animator
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }
}
