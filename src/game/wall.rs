use super::{board::Board, state::Position};

/// The drawn border of the board.
///
/// Purely decorative: the snake wraps around the edges and is never checked
/// against these cells, so it can run straight over them.
#[derive(Debug, Clone, PartialEq)]
pub struct Wall {
    board: Board,
    cells: Vec<Position>,
}

impl Wall {
    pub fn new(board: Board) -> Self {
        let (width, height) = (board.width() as i32, board.height() as i32);
        let mut cells = Vec::new();

        for x in 0..width {
            cells.push(Position::new(x, 0));
            cells.push(Position::new(x, height - 1));
        }
        for y in 0..height {
            cells.push(Position::new(0, y));
            cells.push(Position::new(width - 1, y));
        }

        // Corners (and every cell of a 1-wide board) are produced twice
        cells.sort_unstable();
        cells.dedup();

        Self { board, cells }
    }

    pub fn board(&self) -> Board {
        self.board
    }

    pub fn iter(&self) -> impl Iterator<Item = &Position> {
        self.cells.iter()
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.cells.binary_search(&pos).is_ok()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_perimeter_size() {
        let wall = Wall::new(Board::default());
        // 2 * 30 + 2 * 20 minus the four corners counted twice
        assert_eq!(wall.len(), 96);
    }

    #[test]
    fn test_perimeter_membership() {
        let wall = Wall::new(Board::default());

        assert!(wall.contains(Position::new(0, 0)));
        assert!(wall.contains(Position::new(29, 19)));
        assert!(wall.contains(Position::new(15, 0)));
        assert!(wall.contains(Position::new(15, 19)));
        assert!(wall.contains(Position::new(0, 7)));
        assert!(wall.contains(Position::new(29, 7)));

        assert!(!wall.contains(Position::new(1, 1)));
        assert!(!wall.contains(Position::new(10, 10)));
        assert!(!wall.contains(Position::new(30, 0)));
    }

    #[test]
    fn test_every_cell_on_an_edge() {
        let board = Board::new(7, 5);
        let wall = Wall::new(board);
        for pos in wall.iter() {
            assert!(board.contains(*pos));
            assert!(pos.x == 0 || pos.x == 6 || pos.y == 0 || pos.y == 4);
        }
        assert_eq!(wall.len(), 2 * 7 + 2 * 5 - 4);
    }

    #[test]
    fn test_degenerate_boards() {
        assert_eq!(Wall::new(Board::new(1, 1)).len(), 1);
        assert_eq!(Wall::new(Board::new(4, 1)).len(), 4);
        assert!(Wall::new(Board::new(0, 0)).is_empty());
    }
}
