//! Floating background shapes.

use std::f64::consts::{FRAC_PI_4, TAU};

use rand::Rng;

use crate::paint::{Painter, Rgba};

/// Canvas extent in CSS pixels. Shapes live in `[0, width] x [0, height]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    pub fn contains(&self, (x, y): (f64, f64)) -> bool {
        (0.0..=self.width).contains(&x) && (0.0..=self.height).contains(&y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShapeKind {
    Circle,
    Diamond,
    Star,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 3] = [ShapeKind::Circle, ShapeKind::Diamond, ShapeKind::Star];
}

pub const MIN_SIZE: f64 = 5.0;
pub const MAX_SIZE: f64 = 50.0;
const STAR_POINTS: usize = 5;
const SHAPE_ALPHA: u8 = 180;

#[derive(Clone, Debug, PartialEq)]
pub struct Shape {
    pub x: f64,
    pub y: f64,
    pub dx: f64,
    pub dy: f64,
    pub size: f64,
    pub color: Rgba,
    pub kind: ShapeKind,
}

impl Shape {
    pub fn random<R: Rng + ?Sized>(rng: &mut R, bounds: Bounds) -> Self {
        let kind = ShapeKind::ALL[rng.gen_range(0..ShapeKind::ALL.len())];
        Self {
            x: span(rng, bounds.width),
            y: span(rng, bounds.height),
            size: rng.gen_range(MIN_SIZE..MAX_SIZE),
            kind,
            color: Rgba::new(
                rng.gen_range(150..255),
                rng.gen_range(150..255),
                rng.gen_range(150..255),
                SHAPE_ALPHA,
            ),
            dx: rng.gen_range(-1.0..1.0),
            dy: rng.gen_range(-1.0..1.0),
        }
    }

    /// Advance one frame, bouncing off the canvas edges on each axis independently.
    pub fn step(&mut self, bounds: Bounds) {
        self.x += self.dx;
        self.y += self.dy;
        bounce(&mut self.x, &mut self.dx, bounds.width);
        bounce(&mut self.y, &mut self.dy, bounds.height);
    }

    pub fn draw(&self, painter: &mut dyn Painter, scale: f64) {
        let s = self.size * scale;
        let at = (self.x, self.y);
        match self.kind {
            ShapeKind::Circle => painter.fill_circle(at, s, self.color),
            ShapeKind::Diamond => painter.fill_rotated_square(at, s, FRAC_PI_4, self.color),
            ShapeKind::Star => {
                painter.fill_polygon(&star_points(at, s / 2.0, s, STAR_POINTS), self.color)
            }
        }
    }
}

fn span<R: Rng + ?Sized>(rng: &mut R, extent: f64) -> f64 {
    if extent > 0.0 {
        rng.gen_range(0.0..extent)
    } else {
        0.0
    }
}

fn bounce(pos: &mut f64, vel: &mut f64, extent: f64) {
    if *pos < 0.0 {
        *pos = 0.0;
        *vel = vel.abs();
    } else if *pos > extent {
        *pos = extent;
        *vel = -vel.abs();
    }
}

/// Vertices of a star alternating between `outer` and `inner` radius,
/// starting with an outer vertex at angle zero.
pub fn star_points(center: (f64, f64), inner: f64, outer: f64, points: usize) -> Vec<(f64, f64)> {
    let angle = TAU / points as f64;
    let half = angle / 2.0;
    let (cx, cy) = center;
    let mut out = Vec::with_capacity(points * 2);
    for i in 0..points {
        let a = i as f64 * angle;
        out.push((cx + a.cos() * outer, cy + a.sin() * outer));
        out.push((cx + (a + half).cos() * inner, cy + (a + half).sin() * inner));
    }
    out
}

/// The fixed population of shapes plus the pointer-driven size multiplier.
#[derive(Clone, Debug)]
pub struct ShapeField {
    shapes: Vec<Shape>,
    scale: f64,
    step: f64,
    floor: f64,
}

impl ShapeField {
    pub fn new(step: f64, floor: f64) -> Self {
        Self {
            shapes: Vec::new(),
            scale: 1.0,
            step,
            floor,
        }
    }

    /// Fill the field with `count` random shapes. Calling it again is a no-op;
    /// the population is fixed once created.
    pub fn populate<R: Rng + ?Sized>(&mut self, rng: &mut R, bounds: Bounds, count: usize) {
        if !self.shapes.is_empty() {
            return;
        }
        self.shapes = (0..count).map(|_| Shape::random(rng, bounds)).collect();
    }

    pub fn step(&mut self, bounds: Bounds) {
        for shape in &mut self.shapes {
            shape.step(bounds);
        }
    }

    pub fn draw(&self, painter: &mut dyn Painter) {
        for shape in &self.shapes {
            shape.draw(painter, self.scale);
        }
    }

    /// Grow on rightward pointer motion, shrink on leftward, never below the floor.
    pub fn pointer_moved(&mut self, dx: f64) {
        if dx > 0.0 {
            self.scale += self.step;
        } else if dx < 0.0 {
            self.scale = (self.scale - self.step).max(self.floor);
        }
    }

    /// Pull every shape back inside `bounds`, e.g. after the canvas shrank.
    pub fn confine(&mut self, bounds: Bounds) {
        for s in &mut self.shapes {
            bounce(&mut s.x, &mut s.dx, bounds.width);
            bounce(&mut s.y, &mut s.dy, bounds.height);
        }
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }
}
