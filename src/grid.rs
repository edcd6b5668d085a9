/// Number of cells along each side of the grid.
pub const GRID_SIZE: usize = 128;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cell {
    pub width: i32,
    pub height: i32,
    /// Up to 64 flags. Only zero / non-zero matters to the viewer.
    pub bitmask: u64,
}

impl Cell {
    pub fn with_bitmask(bitmask: u64) -> Self {
        Self {
            bitmask,
            ..Self::default()
        }
    }

    pub fn is_active(&self) -> bool {
        self.bitmask != 0
    }
}

/// Fixed-size grid stored row-major in a flat buffer (`y * GRID_SIZE + x`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Cell>,
}

impl Grid {
    /// An all-zero grid.
    pub fn empty() -> Self {
        Self {
            cells: vec![Cell::default(); GRID_SIZE * GRID_SIZE],
        }
    }

    /// The startup grid: four seeded cells, everything else zero.
    pub fn initialize() -> Self {
        let mut grid = Self::empty();
        // (x, y, bitmask)
        let seeds = [
            (10, 10, 1 << 1),
            (15, 20, 1 << 2),
            (30, 50, 1 << 3),
            (5, 10, 1 << 1 | 1 << 2 | 1 << 3),
        ];
        for (x, y, bitmask) in seeds {
            grid.cells[y * GRID_SIZE + x] = Cell::with_bitmask(bitmask);
        }
        grid
    }

    pub fn cell(&self, x: usize, y: usize) -> Option<&Cell> {
        if x < GRID_SIZE && y < GRID_SIZE {
            self.cells.get(y * GRID_SIZE + x)
        } else {
            None
        }
    }

    pub fn bitmask(&self, x: usize, y: usize) -> u64 {
        self.cell(x, y).map_or(0, |cell| cell.bitmask)
    }

    /// Row-major iteration over every cell as `(x, y, cell)`.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &Cell)> {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, cell)| (i % GRID_SIZE, i / GRID_SIZE, cell))
    }

    pub fn active_cells(&self) -> impl Iterator<Item = (usize, usize, u64)> + '_ {
        self.iter()
            .filter(|(_, _, cell)| cell.is_active())
            .map(|(x, y, cell)| (x, y, cell.bitmask))
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::initialize()
    }
}
