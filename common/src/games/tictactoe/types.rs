use std::fmt;

use serde::{Deserialize, Serialize};

pub const BOARD_SIZE: usize = 3;
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// Mark placed by the human player. The human always plays X.
pub const HUMAN_MARK: Mark = Mark::X;
/// Mark placed by the bot. The bot is always the maximizing side.
pub const BOT_MARK: Mark = Mark::O;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mark {
    #[default]
    Empty,
    X,
    O,
}

impl Mark {
    pub fn opponent(&self) -> Option<Mark> {
        match self {
            Mark::X => Some(Mark::O),
            Mark::O => Some(Mark::X),
            Mark::Empty => None,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Mark::Empty => '.',
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn is_on_board(&self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }

    pub(crate) fn index(&self) -> usize {
        self.row * BOARD_SIZE + self.col
    }

    pub(crate) fn from_index(index: usize) -> Self {
        Self::new(index / BOARD_SIZE, index % BOARD_SIZE)
    }

    pub fn is_corner(&self) -> bool {
        (self.row == 0 || self.row == BOARD_SIZE - 1) && (self.col == 0 || self.col == BOARD_SIZE - 1)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Three cells that win the game when they all hold the same mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Line {
    pub cells: [Position; 3],
}

impl Line {
    const fn new(cells: [(usize, usize); 3]) -> Self {
        Self {
            cells: [
                Position::new(cells[0].0, cells[0].1),
                Position::new(cells[1].0, cells[1].1),
                Position::new(cells[2].0, cells[2].1),
            ],
        }
    }

    pub fn start(&self) -> Position {
        self.cells[0]
    }

    pub fn end(&self) -> Position {
        self.cells[2]
    }

    pub fn contains(&self, position: Position) -> bool {
        self.cells.contains(&position)
    }
}

/// All winning lines in evaluation order: rows, then columns, then the main
/// and anti diagonals. When a malformed board holds two complete lines the
/// earlier one is reported.
pub const LINES: [Line; 8] = [
    Line::new([(0, 0), (0, 1), (0, 2)]),
    Line::new([(1, 0), (1, 1), (1, 2)]),
    Line::new([(2, 0), (2, 1), (2, 2)]),
    Line::new([(0, 0), (1, 0), (2, 0)]),
    Line::new([(0, 1), (1, 1), (2, 1)]),
    Line::new([(0, 2), (1, 2), (2, 2)]),
    Line::new([(0, 0), (1, 1), (2, 2)]),
    Line::new([(0, 2), (1, 1), (2, 0)]),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Win { mark: Mark, line: Line },
    Draw,
}

impl Outcome {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Win { mark, .. } => Some(*mark),
            _ => None,
        }
    }

    pub fn winning_line(&self) -> Option<&Line> {
        match self {
            Outcome::Win { line, .. } => Some(line),
            _ => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::Win { mark, .. } => write!(f, "Player {} wins", mark),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FirstPlayerMode {
    #[default]
    Human,
    Bot,
    Random,
}
