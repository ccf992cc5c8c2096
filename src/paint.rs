//! Drawing seam between the sketch state and whatever surface renders it.

use crate::sprite::Strip;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// CSS `rgba()` form accepted by canvas fill styles.
    pub fn css(&self) -> String {
        format!(
            "rgba({}, {}, {}, {:.3})",
            self.r,
            self.g,
            self.b,
            f64::from(self.a) / 255.0
        )
    }
}

/// Primitive operations the sketch needs from a 2D surface.
pub trait Painter {
    fn clear(&mut self, css_color: &str);
    fn fill_circle(&mut self, center: (f64, f64), diameter: f64, color: Rgba);
    /// Square of side `side` centred on `center`, rotated by `angle` radians.
    fn fill_rotated_square(&mut self, center: (f64, f64), side: f64, angle: f64, color: Rgba);
    fn fill_polygon(&mut self, points: &[(f64, f64)], color: Rgba);
    /// Blit one strip of the named sheet at natural size with its top-left at `at`.
    fn draw_sprite(&mut self, asset: &str, strip: Strip, at: (f64, f64));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_alpha_is_normalised() {
        assert_eq!(Rgba::new(200, 160, 255, 255).css(), "rgba(200, 160, 255, 1.000)");
        assert_eq!(Rgba::new(0, 0, 0, 0).css(), "rgba(0, 0, 0, 0.000)");
    }
}
