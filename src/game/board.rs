use super::state::Position;

/// Default number of columns
pub const DEFAULT_WIDTH: usize = 30;
/// Default number of rows
pub const DEFAULT_HEIGHT: usize = 20;

/// Widest board the renderer can lay out: two terminal columns per cell plus a border
pub const MAX_WIDTH: usize = (u16::MAX as usize - 2) / 2;
/// Tallest board the renderer can lay out: one terminal row per cell plus a border
pub const MAX_HEIGHT: usize = u16::MAX as usize - 2;

/// Cell a fresh snake's head is placed on, before clamping to the board
const START_CELL: Position = Position { x: 10, y: 10 };

/// Grid geometry with toroidal edges
///
/// Dimensions are capped at [`MAX_WIDTH`] x [`MAX_HEIGHT`], which keeps every
/// coordinate well inside `i32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
}

impl Board {
    /// Oversized dimensions are clamped to the maximum
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width: width.min(MAX_WIDTH),
            height: height.min(MAX_HEIGHT),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Check if a position is within the grid bounds
    pub fn contains(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.width as i32 && pos.y >= 0 && pos.y < self.height as i32
    }

    /// Bring a position that stepped one cell off an edge back in on the
    /// opposite edge. Only single-cell overshoots are handled; that is all
    /// a step can produce.
    pub fn wrap(&self, pos: Position) -> Position {
        Position {
            x: wrap_axis(pos.x, self.width as i32),
            y: wrap_axis(pos.y, self.height as i32),
        }
    }

    /// Head cell of a newly created snake
    pub fn start_cell(&self) -> Position {
        Position {
            x: START_CELL.x.min(self.width as i32 - 1).max(0),
            y: START_CELL.y.min(self.height as i32 - 1).max(0),
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}

fn wrap_axis(value: i32, size: i32) -> i32 {
    if value < 0 {
        size - 1
    } else if value >= size {
        0
    } else {
        value
    }
}
