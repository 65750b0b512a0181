use crate::GridCoord;
use crate::HEIGHT;
use crate::PixelOffset;
use crate::WIDTH;

/// How many pixels each cell of the board takes up on the render surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellLayout {
    pub cell_width: PixelOffset,
    pub cell_height: PixelOffset,
}

/// Pixel rectangle covered by one cell, `right` and `bottom` exclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRect {
    pub left: PixelOffset,
    pub top: PixelOffset,
    pub right: PixelOffset,
    pub bottom: PixelOffset,
}

impl CellLayout {
    pub const fn new(cell_width: PixelOffset, cell_height: PixelOffset) -> Self {
        Self {
            cell_width,
            cell_height,
        }
    }

    /// Split a surface evenly between the board's cells. Leftover pixels on the right and bottom
    /// are left unused.
    pub const fn fit(surface_width: PixelOffset, surface_height: PixelOffset) -> Self {
        Self::new(
            surface_width / WIDTH as PixelOffset,
            surface_height / HEIGHT as PixelOffset,
        )
    }

    /// Whether the surface is too small to give every cell at least one pixel
    pub const fn is_degenerate(&self) -> bool {
        self.cell_width == 0 || self.cell_height == 0
    }

    /// Size in pixels of the area covered by the board
    pub const fn surface_size(&self) -> (PixelOffset, PixelOffset) {
        (
            self.cell_width * WIDTH as PixelOffset,
            self.cell_height * HEIGHT as PixelOffset,
        )
    }

    /// Map a pixel to the cell under it.
    ///
    /// Pixels past the board map to coordinates past the board; it's up to the caller to deal with
    /// those. Only a degenerate layout yields `None`.
    pub fn cell_at(&self, px: PixelOffset, py: PixelOffset) -> Option<(GridCoord, GridCoord)> {
        if self.is_degenerate() {
            return None;
        }

        let x = px / self.cell_width;
        let y = py / self.cell_height;

        Some((x as GridCoord, y as GridCoord))
    }

    pub fn cell_rect(&self, x: GridCoord, y: GridCoord) -> CellRect {
        let (x, y) = (x as PixelOffset, y as PixelOffset);

        CellRect {
            left: x * self.cell_width,
            top: y * self.cell_height,
            right: (x + 1) * self.cell_width,
            bottom: (y + 1) * self.cell_height,
        }
    }
}
