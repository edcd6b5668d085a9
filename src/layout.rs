use crate::grid::GRID_SIZE;

/// Share of the window width given to the sidebar, in percent.
pub const SIDEBAR_PERCENT: i32 = 30;
pub const MIN_CELL_SIZE: i32 = 5;
pub const MAX_CELL_SIZE: i32 = 8;

const GRID_CELLS: i32 = GRID_SIZE as i32;

/// A grid coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridPos {
    pub x: usize,
    pub y: usize,
}

impl GridPos {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

/// Screen geometry for one frame, derived from the window size alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub screen_width: i32,
    pub screen_height: i32,
    pub sidebar_width: i32,
    pub cell_size: i32,
    pub grid_pixels: i32,
    /// Left edge of the grid. Negative when the window is narrower than the grid.
    pub offset_x: i32,
    /// Top edge of the grid, never negative.
    pub offset_y: i32,
}

impl Layout {
    pub fn compute(screen_width: i32, screen_height: i32) -> Self {
        let sidebar_width = screen_width * SIDEBAR_PERCENT / 100;
        let cell_size =
            ((screen_width - sidebar_width) / GRID_CELLS).clamp(MIN_CELL_SIZE, MAX_CELL_SIZE);
        let grid_pixels = cell_size * GRID_CELLS;

        // Horizontal centering is left unclamped; only the vertical offset is kept on screen.
        let offset_x = (screen_width - sidebar_width - grid_pixels).div_euclid(2);
        let offset_y = (screen_height - grid_pixels).div_euclid(2).max(0);

        Self {
            screen_width,
            screen_height,
            sidebar_width,
            cell_size,
            grid_pixels,
            offset_x,
            offset_y,
        }
    }

    /// Left edge of the sidebar panel.
    pub fn sidebar_x(&self) -> i32 {
        self.screen_width - self.sidebar_width
    }

    /// Maps a pointer position to the cell under it, if it falls inside the grid.
    pub fn cell_at(&self, px: i32, py: i32) -> Option<GridPos> {
        let gx = (px - self.offset_x).div_euclid(self.cell_size);
        let gy = (py - self.offset_y).div_euclid(self.cell_size);
        if (0..GRID_CELLS).contains(&gx) && (0..GRID_CELLS).contains(&gy) {
            Some(GridPos::new(gx as usize, gy as usize))
        } else {
            None
        }
    }

    /// Pixel rectangle `(x, y, w, h)` of a cell, one pixel short on each axis.
    pub fn cell_rect(&self, x: usize, y: usize) -> (i32, i32, i32, i32) {
        let size = self.cell_size - 1;
        (
            self.offset_x + x as i32 * self.cell_size,
            self.offset_y + y as i32 * self.cell_size,
            size,
            size,
        )
    }
}
