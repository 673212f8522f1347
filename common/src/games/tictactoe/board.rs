use std::fmt;

use super::types::{BOARD_SIZE, CELL_COUNT, Mark, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    OutOfRange { row: usize, col: usize },
    OccupiedCell { row: usize, col: usize },
    InvalidMark,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::OutOfRange { row, col } => {
                write!(f, "Position ({}, {}) is out of bounds", row, col)
            }
            MoveError::OccupiedCell { row, col } => {
                write!(f, "Cell ({}, {}) is already marked", row, col)
            }
            MoveError::InvalidMark => write!(f, "A move must place X or O"),
        }
    }
}

impl std::error::Error for MoveError {}

/// Fixed 3x3 grid stored row-major.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Mark; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rows(rows: [[Mark; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        let mut cells = [Mark::Empty; CELL_COUNT];
        for (row, marks) in rows.iter().enumerate() {
            for (col, &mark) in marks.iter().enumerate() {
                cells[row * BOARD_SIZE + col] = mark;
            }
        }
        Self { cells }
    }

    pub fn get(&self, row: usize, col: usize) -> Option<Mark> {
        let position = Position::new(row, col);
        position.is_on_board().then(|| self.cells[position.index()])
    }

    /// Unchecked read for positions taken from the line table or
    /// [`Board::available_moves`].
    pub(crate) fn at(&self, position: Position) -> Mark {
        self.cells[position.index()]
    }

    pub fn set(&mut self, row: usize, col: usize, mark: Mark) -> Result<(), MoveError> {
        self.place(Position::new(row, col), mark)
    }

    pub fn place(&mut self, position: Position, mark: Mark) -> Result<(), MoveError> {
        let Position { row, col } = position;
        if !position.is_on_board() {
            return Err(MoveError::OutOfRange { row, col });
        }
        if mark == Mark::Empty {
            return Err(MoveError::InvalidMark);
        }
        if self.cells[position.index()] != Mark::Empty {
            return Err(MoveError::OccupiedCell { row, col });
        }
        self.cells[position.index()] = mark;
        Ok(())
    }

    /// Writes a mark without the occupancy check. Used by the search, which
    /// only ever tries cells taken from [`Board::available_moves`].
    pub(crate) fn put(&mut self, position: Position, mark: Mark) {
        self.cells[position.index()] = mark;
    }

    /// Clears a single cell. Only the search undoes moves; everyone else
    /// goes through [`Board::reset`].
    pub(crate) fn clear(&mut self, position: Position) {
        self.cells[position.index()] = Mark::Empty;
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Mark::Empty)
    }

    pub fn reset(&mut self) {
        self.cells = [Mark::Empty; CELL_COUNT];
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&cell| cell == Mark::Empty)
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&cell| cell == mark).count()
    }

    /// Empty cells in row-major order.
    pub fn available_moves(&self) -> Vec<Position> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Mark::Empty)
            .map(|(index, _)| Position::from_index(index))
            .collect()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Mark]> {
        self.cells.chunks(BOARD_SIZE)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let line: Vec<String> = row.iter().map(|mark| mark.to_string()).collect();
            write!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
