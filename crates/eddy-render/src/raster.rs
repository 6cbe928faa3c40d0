//! Density-to-pixel conversion.
//!
//! Each pixel samples the grid cell under it (nearest neighbour), maps
//! `density * 255` to a byte with clamping, and optionally inverts it.
//! Canvases need not be square or a multiple of N.

use eddy_grid::Grid;

use crate::error::RenderError;

/// Canvas size and colour mapping.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderOptions {
    /// Canvas width in pixels. Default: 512.
    pub width: usize,
    /// Canvas height in pixels. Default: 512.
    pub height: usize,
    /// Map full density to black instead of white. Default: off.
    pub invert: bool,
    /// RGB written by [`render_rgba`] where density is zero or negative.
    /// Default: black.
    pub background: [u8; 3],
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: 512,
            height: 512,
            invert: false,
            background: [0, 0, 0],
        }
    }
}

impl RenderOptions {
    /// Canvas of `width` by `height` pixels with default colours.
    pub fn canvas(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Bytes needed by [`render_luma`].
    pub fn luma_len(&self) -> usize {
        self.width * self.height
    }

    /// Bytes needed by [`render_rgba`].
    pub fn rgba_len(&self) -> usize {
        self.luma_len() * 4
    }
}

/// Byte intensity of one density sample.
#[inline]
fn intensity(density: f32, invert: bool) -> u8 {
    // NaN clamps to NaN; treat it as empty.
    let v = if density.is_nan() {
        0.0
    } else {
        (density * 255.0).clamp(0.0, 255.0)
    };
    let byte = v as u8;
    if invert {
        255 - byte
    } else {
        byte
    }
}

fn check(
    density: &[f32],
    grid: &Grid,
    opts: &RenderOptions,
    out_len: usize,
    needed: usize,
) -> Result<(), RenderError> {
    if opts.width == 0 || opts.height == 0 {
        return Err(RenderError::EmptyCanvas {
            width: opts.width,
            height: opts.height,
        });
    }
    if density.len() != grid.cell_count() {
        return Err(RenderError::FieldLength {
            expected: grid.cell_count(),
            actual: density.len(),
        });
    }
    if out_len < needed {
        return Err(RenderError::BufferTooSmall {
            needed,
            actual: out_len,
        });
    }
    Ok(())
}

/// Column (or row) of the cell under pixel `p` on an axis of `extent`
/// pixels.
#[inline]
fn cell_coord(p: usize, extent: usize, n: usize) -> usize {
    (p * n / extent).min(n - 1)
}

/// Render `density` as one byte per pixel into `out`, row-major.
pub fn render_luma(
    density: &[f32],
    grid: &Grid,
    opts: &RenderOptions,
    out: &mut [u8],
) -> Result<(), RenderError> {
    check(density, grid, opts, out.len(), opts.luma_len())?;
    let n = grid.n();
    for y in 0..opts.height {
        let j = cell_coord(y, opts.height, n);
        let row = &mut out[y * opts.width..(y + 1) * opts.width];
        for (x, px) in row.iter_mut().enumerate() {
            let i = cell_coord(x, opts.width, n);
            *px = intensity(density[grid.index(i, j)], opts.invert);
        }
    }
    Ok(())
}

/// Render `density` as RGBA (alpha 255) into `out`, row-major.
///
/// Pixels whose density is zero or negative take `opts.background`;
/// the rest are grey at the [`render_luma`] intensity.
pub fn render_rgba(
    density: &[f32],
    grid: &Grid,
    opts: &RenderOptions,
    out: &mut [u8],
) -> Result<(), RenderError> {
    check(density, grid, opts, out.len(), opts.rgba_len())?;
    let n = grid.n();
    let [br, bg, bb] = opts.background;
    for y in 0..opts.height {
        let j = cell_coord(y, opts.height, n);
        for x in 0..opts.width {
            let i = cell_coord(x, opts.width, n);
            let d = density[grid.index(i, j)];
            let o = (y * opts.width + x) * 4;
            let px = &mut out[o..o + 4];
            if d > 0.0 {
                let v = intensity(d, opts.invert);
                px.copy_from_slice(&[v, v, v, 255]);
            } else {
                px.copy_from_slice(&[br, bg, bb, 255]);
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn checker(grid: &Grid) -> Vec<f32> {
        (0..grid.cell_count())
            .map(|c| {
                let (i, j) = grid.coords(c);
                ((i + j) % 2) as f32
            })
            .collect()
    }

    #[test]
    fn one_pixel_per_cell_copies_scaled_density() {
        let g = Grid::new(3).unwrap();
        let d = [0.0, 0.5, 1.0, 2.0, -1.0, 0.1, 0.0, 0.0, 0.0];
        let opts = RenderOptions::canvas(3, 3);
        let mut out = vec![0u8; 9];
        render_luma(&d, &g, &opts, &mut out).unwrap();
        assert_eq!(&out[..6], &[0, 127, 255, 255, 0, 25]);
    }

    #[test]
    fn upsampling_repeats_cells() {
        let g = Grid::new(4).unwrap();
        let d = checker(&g);
        let opts = RenderOptions::canvas(8, 8);
        let mut out = vec![0u8; 64];
        render_luma(&d, &g, &opts, &mut out).unwrap();
        // Pixels (0,0),(1,0),(0,1),(1,1) all come from cell (0,0) = 0.
        assert_eq!([out[0], out[1], out[8], out[9]], [0, 0, 0, 0]);
        // Pixel (2,0) comes from cell (1,0) = 1.
        assert_eq!(out[2], 255);
    }

    #[test]
    fn inversion_flips_bytes() {
        let g = Grid::new(3).unwrap();
        let mut d = vec![0.0f32; 9];
        d[4] = 1.0;
        let opts = RenderOptions {
            invert: true,
            ..RenderOptions::canvas(3, 3)
        };
        let mut out = vec![0u8; 9];
        render_luma(&d, &g, &opts, &mut out).unwrap();
        assert_eq!(out[0], 255);
        assert_eq!(out[4], 0);
    }

    #[test]
    fn rgba_uses_background_for_empty_cells() {
        let g = Grid::new(3).unwrap();
        let mut d = vec![0.0f32; 9];
        d[0] = 1.0;
        let opts = RenderOptions {
            background: [10, 20, 30],
            ..RenderOptions::canvas(3, 3)
        };
        let mut out = vec![0u8; opts.rgba_len()];
        render_rgba(&d, &g, &opts, &mut out).unwrap();
        assert_eq!(&out[..4], &[255, 255, 255, 255]);
        assert_eq!(&out[4..8], &[10, 20, 30, 255]);
    }

    #[test]
    fn nan_renders_as_empty() {
        assert_eq!(intensity(f32::NAN, false), 0);
        assert_eq!(intensity(f32::INFINITY, false), 255);
        assert_eq!(intensity(f32::NEG_INFINITY, true), 255);
    }

    #[test]
    fn argument_errors() {
        let g = Grid::new(4).unwrap();
        let d = vec![0.0f32; 16];
        let mut out = vec![0u8; 16];
        assert_eq!(
            render_luma(&d, &g, &RenderOptions::canvas(0, 4), &mut out),
            Err(RenderError::EmptyCanvas {
                width: 0,
                height: 4
            })
        );
        assert_eq!(
            render_luma(&d[..15], &g, &RenderOptions::canvas(4, 4), &mut out),
            Err(RenderError::FieldLength {
                expected: 16,
                actual: 15
            })
        );
        assert_eq!(
            render_rgba(&d, &g, &RenderOptions::canvas(4, 4), &mut out),
            Err(RenderError::BufferTooSmall {
                needed: 64,
                actual: 16
            })
        );
    }

    proptest! {
        #[test]
        fn every_pixel_maps_to_a_cell(n in 3usize..40, w in 1usize..300, h in 1usize..300) {
            for p in [0, w / 2, w - 1] {
                prop_assert!(cell_coord(p, w, n) < n);
            }
            for p in [0, h / 2, h - 1] {
                prop_assert!(cell_coord(p, h, n) < n);
            }
        }
    }
}
