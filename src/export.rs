//! PNG and ICO file export.
//!
//! Both encoders are create-or-replace: the canvas is encoded fully in
//! memory, then written to the target path in one call, overwriting any
//! existing file. A failed write leaves whatever the filesystem left
//! behind; there is no retry and no cleanup of sibling outputs.
//!
//! The ICO export embeds a single image. A conformant multi-resolution
//! icon would re-encode the artwork at several sizes; consumers that need
//! one must post-process.

use std::fs;
use std::path::Path;

use image::codecs::ico::IcoEncoder;
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};

use crate::canvas::Canvas;
use crate::error::Result;

/// Encodes the canvas as a lossless RGBA PNG.
pub fn encode_png(canvas: &Canvas) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    PngEncoder::new(&mut buf).write_image(
        canvas.data().as_raw(),
        canvas.width(),
        canvas.height(),
        ExtendedColorType::Rgba8,
    )?;
    Ok(buf)
}

/// Encodes the canvas as an ICO container holding a single image.
pub fn encode_ico(canvas: &Canvas) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    IcoEncoder::new(&mut buf).write_image(
        canvas.data().as_raw(),
        canvas.width(),
        canvas.height(),
        ExtendedColorType::Rgba8,
    )?;
    Ok(buf)
}

/// Writes the canvas to `path` as a PNG, overwriting any existing file.
pub fn write_png(path: impl AsRef<Path>, canvas: &Canvas) -> Result<()> {
    let path = path.as_ref();
    let bytes = encode_png(canvas)?;
    fs::write(path, &bytes)?;
    log::debug!("wrote {} ({} bytes)", path.display(), bytes.len());
    Ok(())
}

/// Writes the canvas to `path` as a single-image ICO, overwriting any
/// existing file.
pub fn write_ico(path: impl AsRef<Path>, canvas: &Canvas) -> Result<()> {
    let path = path.as_ref();
    let bytes = encode_ico(canvas)?;
    fs::write(path, &bytes)?;
    log::debug!("wrote {} ({} bytes)", path.display(), bytes.len());
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
