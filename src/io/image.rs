//! PNG export of rendered canvases

use crate::io::error::{ArtError, Result, invalid_parameter};
use crate::render::evaluator::Canvas;
use image::RgbaImage;
use std::path::Path;

/// Write row-major RGBA bytes to a PNG file, creating parent directories
///
/// # Errors
///
/// Returns an error if:
/// - The buffer length is not `width * height * 4`
/// - The parent directory cannot be created
/// - The image cannot be encoded or written
pub fn export_rgba_as_png(rgba: &[u8], width: u32, height: u32, output_path: &Path) -> Result<()> {
    let image = RgbaImage::from_raw(width, height, rgba.to_vec()).ok_or_else(|| {
        invalid_parameter(
            "rgba",
            &format!("{} bytes", rgba.len()),
            &format!("does not match a {width}x{height} RGBA image"),
        )
    })?;

    if let Some(parent) = output_path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| ArtError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    image.save(output_path).map_err(|e| ArtError::ImageExport {
        path: output_path.to_path_buf(),
        source: e,
    })
}

/// Write a canvas to a PNG file
///
/// # Errors
///
/// Returns an error if the directory cannot be created or the file cannot be written.
pub fn export_canvas_as_png(canvas: &Canvas, output_path: &Path) -> Result<()> {
    export_rgba_as_png(canvas.as_rgba(), canvas.width(), canvas.height(), output_path)
}
