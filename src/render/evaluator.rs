//! Sampling compiled functions over a pixel grid into RGBA8 canvases

use crate::io::configuration::MAX_DIMENSION;
use crate::io::error::{Result, invalid_parameter};
use crate::render::compiler::CompiledFn;
use ndarray::{Array3, Axis, Zip};

/// Number of bytes per pixel (R, G, B, A)
pub const CHANNELS: usize = 4;

/// Alpha written to every pixel
pub const OPAQUE: u8 = 255;

/// RGBA8 pixel grid stored as `(height, width, channel)`
///
/// The standard memory layout of the array is exactly row-major RGBA, so the
/// raw buffer can be handed to image encoders without copying.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Canvas {
    pixels: Array3<u8>,
}

impl Canvas {
    /// Width in pixels
    pub fn width(&self) -> u32 {
        self.pixels.len_of(Axis(1)) as u32
    }

    /// Height in pixels
    pub fn height(&self) -> u32 {
        self.pixels.len_of(Axis(0)) as u32
    }

    /// RGBA value at a pixel, `None` outside the canvas
    pub fn pixel(&self, px: u32, py: u32) -> Option<[u8; 4]> {
        let (row, col) = (py as usize, px as usize);
        Some([
            *self.pixels.get((row, col, 0))?,
            *self.pixels.get((row, col, 1))?,
            *self.pixels.get((row, col, 2))?,
            *self.pixels.get((row, col, 3))?,
        ])
    }

    /// Row-major RGBA bytes
    pub fn as_rgba(&self) -> &[u8] {
        self.pixels.as_slice().unwrap_or_default()
    }

    /// Consume the canvas into its row-major RGBA bytes
    pub fn into_rgba(self) -> Vec<u8> {
        let (bytes, _offset) = self.pixels.into_raw_vec_and_offset();
        bytes
    }
}

/// Reject dimensions that are zero or exceed [`MAX_DIMENSION`]
///
/// # Errors
///
/// Returns an invalid parameter error naming the offending dimension.
pub fn validate_dimensions(width: u32, height: u32) -> Result<()> {
    for (parameter, value) in [("width", width), ("height", height)] {
        if value == 0 {
            return Err(invalid_parameter(parameter, &value, &"must be greater than zero"));
        }
        if value as usize > MAX_DIMENSION {
            return Err(invalid_parameter(
                parameter,
                &value,
                &format!("must not exceed {MAX_DIMENSION}"),
            ));
        }
    }
    Ok(())
}

/// Map a pixel index onto `[-1, 1)` along an axis of the given extent
// Unfused to keep the exact rounding of `(index / extent) * 2 - 1`
#[allow(clippy::suboptimal_flops)]
pub fn normalize(index: u32, extent: u32) -> f64 {
    (f64::from(index) / f64::from(extent)) * 2.0 - 1.0
}

/// Convert one color component to a byte
///
/// Takes the magnitude, scales it to `[0, 255]` and saturates: NaN becomes 0,
/// anything at or beyond 255 (infinity included) becomes 255, and values in
/// between round half to even.
pub fn channel_to_byte(value: f64) -> u8 {
    let scaled = value.abs() * 255.0;
    if scaled.is_nan() {
        0
    } else {
        scaled.clamp(0.0, 255.0).round_ties_even() as u8
    }
}

/// Color of a single pixel
pub fn shade(
    function: &CompiledFn,
    px: u32,
    py: u32,
    width: u32,
    height: u32,
    epsilon: f64,
) -> [u8; 4] {
    let x = normalize(px, width) + epsilon;
    let y = normalize(py, height) + epsilon;
    let [r, g, b] = function.eval(x, y);
    [
        channel_to_byte(r),
        channel_to_byte(g),
        channel_to_byte(b),
        OPAQUE,
    ]
}

/// Sample a compiled function over every pixel of a `width` x `height` grid
///
/// Each sample is taken at the normalized pixel coordinate shifted by
/// `epsilon` on both axes, which keeps the origin and other exact grid
/// values from hitting singularities. Rows are shaded in parallel; the output
/// does not depend on scheduling.
///
/// # Errors
///
/// Returns an error if either dimension is zero or exceeds [`MAX_DIMENSION`].
pub fn render(function: &CompiledFn, width: u32, height: u32, epsilon: f64) -> Result<Canvas> {
    validate_dimensions(width, height)?;

    let mut pixels = Array3::<u8>::zeros((height as usize, width as usize, CHANNELS));
    Zip::indexed(pixels.lanes_mut(Axis(2))).par_for_each(|(row, col), mut lane| {
        let rgba = shade(function, col as u32, row as u32, width, height, epsilon);
        for (channel, value) in lane.iter_mut().zip(rgba) {
            *channel = value;
        }
    });

    Ok(Canvas { pixels })
}
