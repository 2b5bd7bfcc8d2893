//! Raster output: maps one generation to an RGBA image, upscaling each cell
//! to a square pixel block. Live cells are white; alpha is either uniform or
//! falls off radially from the grid center.

use image::{ImageBuffer, Rgba, RgbaImage};

use crate::domain::Grid;

/// Falloff exponent for radial opacity. Fixed design constant.
const RADIAL_FALLOFF_EXPONENT: f32 = 1.5;

/// How live cells are shaded
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum OpacityMode {
    /// Every live cell at full alpha
    #[default]
    Uniform,
    /// Alpha decreases with Euclidean distance from the grid center
    Radial,
}

/// Rendering parameters for one run
#[derive(Clone, Copy, Debug)]
pub struct RenderConfig {
    /// Target resolution in pixels; per-cell block size is
    /// `resolution / longest grid dimension` (integer division)
    pub resolution: u32,
    pub opacity: OpacityMode,
}

impl RenderConfig {
    pub fn new(resolution: u32, opacity: OpacityMode) -> Self {
        Self { resolution, opacity }
    }
}

/// Render one generation to an RGBA image.
///
/// The image is `(width * scale, height * scale)` pixels, initialized fully
/// transparent. A grid whose longest dimension exceeds the target resolution
/// gets `scale == 0` and therefore an empty image; that degenerate case is
/// defined behavior, not an error.
pub fn render(grid: &Grid, config: &RenderConfig) -> RgbaImage {
    let (width, height) = grid.dimensions();
    let longest = width.max(height).max(1);
    let scale = config.resolution / longest as u32;

    let mut img: RgbaImage = ImageBuffer::new(width as u32 * scale, height as u32 * scale);
    if scale == 0 {
        return img;
    }

    // Integer cell centers; distances are exact for the documented square case
    let center_col = (width / 2) as f32;
    let center_row = (height / 2) as f32;
    let max_distance = (center_row * center_row + center_col * center_col).sqrt();

    for (x, y, cell) in grid.iter_cells() {
        if !cell.is_alive() {
            continue;
        }

        let alpha = match config.opacity {
            OpacityMode::Uniform => u8::MAX,
            OpacityMode::Radial => radial_alpha(x, y, center_col, center_row, max_distance),
        };

        // Constant alpha across the whole block, no per-pixel sub-gradient
        let pixel = Rgba([255, 255, 255, alpha]);
        for py in y as u32 * scale..(y as u32 + 1) * scale {
            for px in x as u32 * scale..(x as u32 + 1) * scale {
                img.put_pixel(px, py, pixel);
            }
        }
    }

    img
}

/// Alpha for a live cell at (x, y): 255 at the grid center, 0 at the
/// farthest corner, interpolated with the fixed falloff exponent.
fn radial_alpha(x: usize, y: usize, center_col: f32, center_row: f32, max_distance: f32) -> u8 {
    if max_distance == 0.0 {
        return u8::MAX;
    }

    let dc = x as f32 - center_col;
    let dr = y as f32 - center_row;
    let distance = (dr * dr + dc * dc).sqrt();

    let falloff = (1.0 - distance / max_distance).powf(RADIAL_FALLOFF_EXPONENT);
    (255.0 * falloff).round().clamp(0.0, 255.0) as u8
}
