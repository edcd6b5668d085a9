use crate::grid::{Cell, Grid};
use crate::layout::{GridPos, Layout};

pub const SELECTION_PROMPT: &str = "Click a cell to view info";

/// Everything the frame loop mutates. The selection is only written by
/// [`AppState::update`], once per frame, before drawing.
#[derive(Debug, Clone)]
pub struct AppState {
    grid: Grid,
    selection: Option<GridPos>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            grid: Grid::initialize(),
            selection: None,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn selection(&self) -> Option<GridPos> {
        self.selection
    }

    pub fn selected_cell(&self) -> Option<(GridPos, &Cell)> {
        let pos = self.selection?;
        self.grid.cell(pos.x, pos.y).map(|cell| (pos, cell))
    }

    pub fn is_selected(&self, x: usize, y: usize) -> bool {
        self.selection == Some(GridPos::new(x, y))
    }

    /// Computes this frame's layout and applies the click, if any.
    ///
    /// A click outside the grid leaves the previous selection in place.
    pub fn update(&mut self, width: i32, height: i32, click: Option<(i32, i32)>) -> Layout {
        let layout = Layout::compute(width, height);
        if let Some((px, py)) = click {
            match layout.cell_at(px, py) {
                Some(pos) => {
                    log::debug!(
                        "Selected cell ({}, {}) bitmask {:#x}",
                        pos.x,
                        pos.y,
                        self.grid.bitmask(pos.x, pos.y)
                    );
                    self.selection = Some(pos);
                }
                None => log::trace!("Click at ({}, {}) outside grid", px, py),
            }
        }
        layout
    }

    /// Detail text for the sidebar, or the prompt when nothing is selected.
    pub fn sidebar_text(&self) -> String {
        match self.selected_cell() {
            Some((pos, cell)) => {
                format!("X: {}\nY: {}\nBitmask: {:x}", pos.x, pos.y, cell.bitmask)
            }
            None => SELECTION_PROMPT.to_string(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
