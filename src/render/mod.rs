//! Bitmap output for ownership grids
//!
//! One pixel per cell: void cells near-black, unclaimed cells grey, empire
//! cells colored from a fixed palette cycled by id.

use std::path::Path;

use image::{Rgb, RgbImage};

use crate::conquest::grid::{OwnershipGrid, UNCLAIMED, VOID};
use crate::core::error::Result;
use crate::core::types::EmpireId;

const VOID_COLOR: Rgb<u8> = Rgb([16, 16, 20]);
const UNCLAIMED_COLOR: Rgb<u8> = Rgb([70, 70, 78]);

/// Fixed empire palette; ids cycle through it.
const PALETTE: [Rgb<u8>; 8] = [
    Rgb([51, 153, 230]),  // blue
    Rgb([230, 80, 60]),   // red
    Rgb([80, 200, 100]),  // green
    Rgb([240, 200, 60]),  // yellow
    Rgb([170, 90, 220]),  // purple
    Rgb([240, 140, 50]),  // orange
    Rgb([70, 210, 200]),  // teal
    Rgb([230, 120, 180]), // pink
];

pub fn empire_color(id: EmpireId) -> Rgb<u8> {
    PALETTE[id.0.saturating_sub(1) as usize % PALETTE.len()]
}

/// Render `grid` to an RGB image, one pixel per cell.
pub fn render_ownership(grid: &OwnershipGrid) -> RgbImage {
    let mut img = RgbImage::new(grid.width() as u32, grid.height() as u32);
    for (c, owner) in grid.cells() {
        let color = match owner {
            VOID => VOID_COLOR,
            UNCLAIMED => UNCLAIMED_COLOR,
            id => empire_color(EmpireId(id as u32)),
        };
        img.put_pixel(c.x as u32, c.y as u32, color);
    }
    img
}

/// Render and save; the format follows the file extension.
pub fn draw_ownership(grid: &OwnershipGrid, path: &Path) -> Result<()> {
    render_ownership(grid).save(path)?;
    Ok(())
}
