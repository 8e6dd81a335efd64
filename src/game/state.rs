use super::{action::Direction, board::Board, wall::Wall};

/// A position on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move position in a direction
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx, dy)
    }
}

/// What a single call to [`Snake::step`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The head advanced and the tail was dropped
    Moved,
    /// The new head hit a trailing segment; the snake is now terminated
    Collided,
    /// The snake was already terminated, nothing changed
    Halted,
}

/// The snake in the game
///
/// Lives on a toroidal [`Board`]: leaving one edge re-enters on the opposite
/// one. The only way to die is running into its own trailing segments, after
/// which the snake is frozen for good.
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at index 0
    body: Vec<Position>,
    /// Current direction of movement
    direction: Direction,
    board: Board,
    terminated: bool,
}

impl Snake {
    /// Create a snake of `length` cells heading right, laid out leftwards
    /// from the board's start cell.
    ///
    /// A length of 0 is clamped to 1. Segments that fall left of column 0
    /// are kept where they are; the tail drops them as the snake advances.
    pub fn new(length: usize, board: Board) -> Self {
        Self::with_head(board.start_cell(), Direction::Right, length, board)
    }

    /// Create a snake at an arbitrary head position, with the body trailing
    /// behind it opposite to `direction`
    pub fn with_head(head: Position, direction: Direction, length: usize, board: Board) -> Self {
        let length = length.max(1);
        let mut body = Vec::with_capacity(length);
        body.push(head);

        let (dx, dy) = direction.opposite().delta();
        for i in 1..length {
            let prev = body[i - 1];
            body.push(prev.moved_by(dx, dy));
        }

        Self {
            body,
            direction,
            board,
            terminated: false,
        }
    }

    /// Request a new heading.
    ///
    /// A snake longer than one cell cannot reverse onto itself, so the exact
    /// opposite of the current heading is ignored. Returns whether the
    /// heading was taken.
    pub fn set_direction(&mut self, requested: Direction) -> bool {
        if self.body.len() > 1 && self.direction.is_opposite(requested) {
            return false;
        }
        self.direction = requested;
        true
    }

    /// Advance one cell in the current heading
    pub fn step(&mut self) -> StepOutcome {
        if self.terminated {
            return StepOutcome::Halted;
        }

        let new_head = self
            .board
            .wrap(self.head().moved_in_direction(self.direction));

        // The tail still counts: it only moves out of the way once the step is committed
        if self.collides_with_body(new_head) {
            self.terminated = true;
            return StepOutcome::Collided;
        }

        self.body.insert(0, new_head);
        self.body.pop();
        StepOutcome::Moved
    }

    pub fn is_terminated(&self) -> bool {
        self.terminated
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        self.body[0]
    }

    /// Get the tail position (last segment)
    pub fn tail(&self) -> Position {
        self.body[self.body.len() - 1]
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn board(&self) -> Board {
        self.board
    }

    /// All segments, head first
    pub fn body(&self) -> &[Position] {
        &self.body
    }

    /// Get body segments (excluding head)
    pub fn body_segments(&self) -> &[Position] {
        &self.body[1..]
    }

    /// Check if position collides with snake body (excluding head)
    pub fn collides_with_body(&self, pos: Position) -> bool {
        self.body_segments().contains(&pos)
    }

    /// Check if a position is occupied by any segment, head included
    pub fn occupies(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Always false; kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// One episode: the snake plus the static scenery around it
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub wall: Wall,
    pub steps: u32,
}

impl GameState {
    /// Create a new game state
    pub fn new(snake: Snake) -> Self {
        let wall = Wall::new(snake.board());
        Self {
            snake,
            wall,
            steps: 0,
        }
    }

    pub fn board(&self) -> Board {
        self.snake.board()
    }

    pub fn is_alive(&self) -> bool {
        !self.snake.is_terminated()
    }
}
