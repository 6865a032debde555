//! flutter-icon-gen: procedural Flutter-style icon renderer
//!
//! This crate draws a fixed 256x256 icon (a gradient-shaded main circle,
//! two solid wings, and an opaque white center disc) onto a transparent
//! RGBA canvas and exports it as a PNG and as a single-image ICO
//! container.
//!
//! # Example
//!
//! ```no_run
//! use flutter_icon_gen::{export, IconArtwork};
//!
//! # fn main() -> flutter_icon_gen::Result<()> {
//! let canvas = IconArtwork::flutter().render();
//!
//! export::write_png("flutter_icon.png", &canvas)?;
//! export::write_ico("flutter_icon.ico", &canvas)?;
//! # Ok(())
//! # }
//! ```
//!
//! # Artwork as Data
//!
//! The icon is described declaratively as an ordered list of ellipse draw
//! commands, each pairing a bounding box with a [`Fill`]. The description
//! serializes to JSON:
//!
//! ```
//! use flutter_icon_gen::IconArtwork;
//!
//! let json = IconArtwork::flutter().to_json_pretty().unwrap();
//! let restored = IconArtwork::from_json(&json).unwrap();
//! assert_eq!(restored, IconArtwork::flutter());
//! ```

mod artwork;
mod canvas;
mod error;
mod fill;

pub mod export;
pub mod logging;

pub use artwork::{ICON_SIZE, IconArtwork, ShapeSpec};
pub use canvas::{Canvas, RectPx};
pub use error::{IconError, Result};
pub use fill::{Fill, Rgba8};
