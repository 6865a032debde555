//! Fill styles for shape painting.
//!
//! A [`Fill`] describes how a shape's interior is colored: either a flat
//! color or a two-point linear gradient. Fills are sampled per pixel via
//! [`Fill::color_at`], which keeps the rasterizer agnostic of the fill
//! kind.

use palette::{Mix, Srgb};
use serde::{Deserialize, Serialize};

// ============================================================================
// Rgba8
// ============================================================================

/// A straight-alpha sRGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    /// Fully opaque white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Creates a fully opaque color from RGB channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Creates a color from RGBA channels.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Converts to an `image` crate pixel.
    pub fn to_pixel(self) -> image::Rgba<u8> {
        image::Rgba([self.r, self.g, self.b, self.a])
    }

    /// Linearly blends toward `other` by `t` in `[0, 1]`.
    ///
    /// The blend is per-channel in sRGB space, which matches what classic
    /// 2D gradient brushes produce. Alpha is blended the same way.
    pub fn mix(self, other: Self, t: f32) -> Self {
        let from = Srgb::new(
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        );
        let to = Srgb::new(
            other.r as f32 / 255.0,
            other.g as f32 / 255.0,
            other.b as f32 / 255.0,
        );
        let mixed = from.mix(to, t);
        let alpha = self.a as f32 + (other.a as f32 - self.a as f32) * t;

        Self {
            r: (mixed.red * 255.0).round() as u8,
            g: (mixed.green * 255.0).round() as u8,
            b: (mixed.blue * 255.0).round() as u8,
            a: alpha.round().clamp(0.0, 255.0) as u8,
        }
    }
}

// ============================================================================
// Fill
// ============================================================================

/// Fill source for shape interiors.
///
/// Intentionally a small enum. Extend by adding variants (`RadialGradient`,
/// `Pattern`) while keeping the enum stable for rasterizer dispatch.
///
/// # Example
///
/// ```
/// use flutter_icon_gen::{Fill, Rgba8};
///
/// let solid = Fill::solid(Rgba8::rgb(16, 185, 129));
/// let gradient = Fill::linear_gradient(
///     (0.0, 0.0),
///     (256.0, 256.0),
///     Rgba8::rgb(59, 130, 246),
///     Rgba8::rgb(6, 182, 212),
/// );
///
/// assert_eq!(solid.color_at(10.0, 10.0), Rgba8::rgb(16, 185, 129));
/// assert_eq!(gradient.color_at(0.0, 0.0), Rgba8::rgb(59, 130, 246));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Fill {
    /// Flat color, position-independent.
    Solid { color: Rgba8 },

    /// Two-point linear gradient in canvas pixel space.
    ///
    /// Points are projected onto the `start`→`end` axis; the projection is
    /// clamped to the span, so pixels before `start` get `from` and pixels
    /// past `end` get `to`.
    #[serde(rename_all = "camelCase")]
    LinearGradient {
        start: (f32, f32),
        end: (f32, f32),
        from: Rgba8,
        to: Rgba8,
    },
}

impl Fill {
    /// Creates a flat color fill.
    pub fn solid(color: Rgba8) -> Self {
        Self::Solid { color }
    }

    /// Creates a two-point linear gradient fill.
    pub fn linear_gradient(start: (f32, f32), end: (f32, f32), from: Rgba8, to: Rgba8) -> Self {
        Self::LinearGradient {
            start,
            end,
            from,
            to,
        }
    }

    /// Samples the fill color at a position in canvas pixel space.
    ///
    /// Callers pass pixel-center coordinates (`x + 0.5`, `y + 0.5`) so the
    /// sampled color corresponds to the pixel being painted.
    pub fn color_at(&self, x: f32, y: f32) -> Rgba8 {
        match self {
            Self::Solid { color } => *color,
            Self::LinearGradient {
                start,
                end,
                from,
                to,
            } => {
                let dx = end.0 - start.0;
                let dy = end.1 - start.1;
                let len_sq = dx * dx + dy * dy;
                // A degenerate axis has no direction to interpolate along.
                if len_sq <= f32::EPSILON {
                    return *from;
                }
                let t = ((x - start.0) * dx + (y - start.1) * dy) / len_sq;
                from.mix(*to, t.clamp(0.0, 1.0))
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solid_ignores_position() {
        let fill = Fill::solid(Rgba8::rgb(245, 158, 11));
        assert_eq!(fill.color_at(0.0, 0.0), Rgba8::rgb(245, 158, 11));
        assert_eq!(fill.color_at(500.0, -3.0), Rgba8::rgb(245, 158, 11));
    }

    #[test]
    fn gradient_hits_endpoints() {
        let from = Rgba8::rgb(59, 130, 246);
        let to = Rgba8::rgb(6, 182, 212);
        let fill = Fill::linear_gradient((0.0, 0.0), (256.0, 256.0), from, to);

        assert_eq!(fill.color_at(0.0, 0.0), from);
        assert_eq!(fill.color_at(256.0, 256.0), to);
    }

    #[test]
    fn gradient_clamps_outside_span() {
        let from = Rgba8::rgb(255, 0, 0);
        let to = Rgba8::rgb(0, 0, 255);
        let fill = Fill::linear_gradient((10.0, 0.0), (20.0, 0.0), from, to);

        assert_eq!(fill.color_at(0.0, 0.0), from);
        assert_eq!(fill.color_at(100.0, 0.0), to);
    }

    #[test]
    fn gradient_midpoint_blends_channels() {
        let from = Rgba8::rgb(0, 100, 200);
        let to = Rgba8::rgb(100, 200, 0);
        let fill = Fill::linear_gradient((0.0, 0.0), (100.0, 0.0), from, to);

        let mid = fill.color_at(50.0, 0.0);
        assert!((mid.r as i32 - 50).abs() <= 1);
        assert!((mid.g as i32 - 150).abs() <= 1);
        assert!((mid.b as i32 - 100).abs() <= 1);
        assert_eq!(mid.a, 255);
    }

    #[test]
    fn gradient_channels_stay_within_endpoints() {
        let from = Rgba8::rgb(59, 130, 246);
        let to = Rgba8::rgb(6, 182, 212);
        let fill = Fill::linear_gradient((0.0, 0.0), (256.0, 256.0), from, to);

        for i in 0..=32 {
            let p = i as f32 * 8.0;
            let c = fill.color_at(p, p);
            assert!(c.r >= 6 && c.r <= 59, "r out of range at t step {i}");
            assert!(c.g >= 130 && c.g <= 182, "g out of range at t step {i}");
            assert!(c.b >= 212 && c.b <= 246, "b out of range at t step {i}");
        }
    }

    #[test]
    fn degenerate_gradient_returns_start_color() {
        let from = Rgba8::rgb(1, 2, 3);
        let fill = Fill::linear_gradient((50.0, 50.0), (50.0, 50.0), from, Rgba8::WHITE);
        assert_eq!(fill.color_at(10.0, 90.0), from);
    }

    #[test]
    fn mix_endpoints_are_exact() {
        let a = Rgba8::new(10, 20, 30, 40);
        let b = Rgba8::new(200, 210, 220, 230);
        assert_eq!(a.mix(b, 0.0), a);
        assert_eq!(a.mix(b, 1.0), b);
    }
}
