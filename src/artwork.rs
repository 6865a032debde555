//! The Flutter-style icon artwork and its render routine.
//!
//! An [`IconArtwork`] is a declarative, ordered list of ellipse draw
//! commands ([`ShapeSpec`]) plus the canvas dimensions. Rendering walks the
//! list in order and composites each shape onto a fresh transparent canvas,
//! so later shapes paint over earlier ones wherever they overlap.
//!
//! The artwork description is serializable, which makes the fixed icon
//! definition inspectable and diffable as JSON.
//!
//! # Example
//!
//! ```
//! use flutter_icon_gen::IconArtwork;
//!
//! let artwork = IconArtwork::flutter();
//! let canvas = artwork.render();
//!
//! // Opaque white center disc.
//! assert_eq!(canvas.pixel(128, 128).0, [255, 255, 255, 255]);
//! // Corners are outside every ellipse and stay transparent.
//! assert_eq!(canvas.pixel(0, 0).0[3], 0);
//! ```

use serde::{Deserialize, Serialize};

use crate::canvas::{Canvas, RectPx};
use crate::fill::{Fill, Rgba8};

/// Edge length of the generated icon canvas in pixels.
pub const ICON_SIZE: u32 = 256;

// Flutter-style palette.
const BLUE: Rgba8 = Rgba8::rgb(59, 130, 246);
const CYAN: Rgba8 = Rgba8::rgb(6, 182, 212);
const GREEN: Rgba8 = Rgba8::rgb(16, 185, 129);
const AMBER: Rgba8 = Rgba8::rgb(245, 158, 11);

// ============================================================================
// ShapeSpec
// ============================================================================

/// A single draw command: an ellipse bounding box and its fill style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapeSpec {
    /// Bounding box of the ellipse in canvas pixel coordinates.
    pub bounds: RectPx,

    /// Fill style for the ellipse interior.
    pub fill: Fill,
}

// ============================================================================
// IconArtwork
// ============================================================================

/// An ordered set of ellipse draw commands on a fixed-size canvas.
///
/// Shapes are composited in listed order (painter's algorithm).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IconArtwork {
    /// Canvas width in pixels.
    pub width: u32,

    /// Canvas height in pixels.
    pub height: u32,

    /// Draw commands, composited first-to-last.
    pub shapes: Vec<ShapeSpec>,
}

impl IconArtwork {
    /// Creates an empty artwork for a canvas of the given dimensions.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            shapes: Vec::new(),
        }
    }

    /// Appends a shape, returning the artwork for chaining.
    pub fn with_shape(mut self, bounds: RectPx, fill: Fill) -> Self {
        self.shapes.push(ShapeSpec { bounds, fill });
        self
    }

    /// The fixed Flutter-style icon: a gradient main circle, two solid
    /// wings, and an opaque white center disc, on a 256x256 canvas.
    pub fn flutter() -> Self {
        let size = ICON_SIZE as f32;
        Self::new(ICON_SIZE, ICON_SIZE)
            // Main circle, shaded corner to corner.
            .with_shape(
                RectPx::new(32, 32, 192, 192),
                Fill::linear_gradient((0.0, 0.0), (size, size), BLUE, CYAN),
            )
            // Left wing.
            .with_shape(RectPx::new(16, 64, 128, 128), Fill::solid(GREEN))
            // Right wing.
            .with_shape(RectPx::new(112, 64, 128, 128), Fill::solid(AMBER))
            // Center circle.
            .with_shape(RectPx::new(96, 96, 64, 64), Fill::solid(Rgba8::WHITE))
    }

    /// Renders the artwork onto a fresh transparent canvas.
    ///
    /// Rendering is deterministic: the same artwork always produces the
    /// same pixels.
    pub fn render(&self) -> Canvas {
        log::debug!(
            "compositing {} shapes onto a {}x{} canvas",
            self.shapes.len(),
            self.width,
            self.height
        );

        let mut canvas = Canvas::new(self.width, self.height);
        for shape in &self.shapes {
            canvas.fill_ellipse(shape.bounds, &shape.fill);
        }
        canvas
    }

    /// Serializes the artwork description to a JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Serializes the artwork description to a pretty-printed JSON string.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserializes an artwork description from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

// ============================================================================
// Tests
// ============================================================================
