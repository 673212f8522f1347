use std::fmt;
use std::ops::{Deref, DerefMut};

use serde::{Deserialize, Serialize};

use super::board::Board;
use super::types::{Mark, Position};
use super::win_detector::check_win;
use crate::debug_log;
use crate::games::SessionRng;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BotType {
    #[default]
    Minimax,
    Random,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    NoLegalMove,
    InvalidMark,
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::NoLegalMove => write!(f, "No legal move: the board is full"),
            SearchError::InvalidMark => write!(f, "The bot cannot play the empty mark"),
        }
    }
}

impl std::error::Error for SearchError {}

pub struct BotInput {
    pub board: Board,
    pub bot_mark: Mark,
}

impl BotInput {
    pub fn new(board: Board, bot_mark: Mark) -> Self {
        Self { board, bot_mark }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchReport {
    pub position: Position,
    pub score: i32,
    pub nodes_visited: u64,
}

pub fn calculate_move(
    bot_type: BotType,
    input: &BotInput,
    rng: &mut SessionRng,
) -> Result<Position, SearchError> {
    match bot_type {
        BotType::Minimax => {
            let report = analyze(&input.board, input.bot_mark)?;
            debug_log!(
                "Minimax picked {} (score {}, {} nodes)",
                report.position,
                report.score,
                report.nodes_visited
            );
            Ok(report.position)
        }
        BotType::Random => calculate_random_move(&input.board, rng),
    }
}

fn calculate_random_move(board: &Board, rng: &mut SessionRng) -> Result<Position, SearchError> {
    let available_moves = board.available_moves();
    rng.choose(&available_moves).copied().ok_or(SearchError::NoLegalMove)
}

/// Optimal move for `bot_mark`. Ties go to the earliest empty cell in
/// row-major order.
pub fn best_move(board: &Board, bot_mark: Mark) -> Result<Position, SearchError> {
    analyze(board, bot_mark).map(|report| report.position)
}

pub fn analyze(board: &Board, bot_mark: Mark) -> Result<SearchReport, SearchError> {
    let opponent_mark = bot_mark.opponent().ok_or(SearchError::InvalidMark)?;
    let mut board = *board;
    let mut nodes_visited = 0;
    let mut best: Option<(Position, i32)> = None;

    for position in board.available_moves() {
        let mut trial = TrialMove::new(&mut board, position, bot_mark);
        let score = minimax(&mut trial, false, bot_mark, opponent_mark, &mut nodes_visited);
        drop(trial);

        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((position, score));
        }
    }

    let (position, score) = best.ok_or(SearchError::NoLegalMove)?;
    Ok(SearchReport {
        position,
        score,
        nodes_visited,
    })
}

/// Minimax value of `board` with `bot_mark` as the maximizing side and
/// `is_maximizing` telling whose ply comes next.
pub fn minimax_value(board: &Board, bot_mark: Mark, is_maximizing: bool) -> Result<i32, SearchError> {
    let opponent_mark = bot_mark.opponent().ok_or(SearchError::InvalidMark)?;
    let mut board = *board;
    let mut nodes_visited = 0;
    Ok(minimax(&mut board, is_maximizing, bot_mark, opponent_mark, &mut nodes_visited))
}

// A win on the board was made by the side that just moved, which is never
// the side flagged to move next: -1 when the maximizer is to move, +1 otherwise.
fn minimax(
    board: &mut Board,
    is_maximizing: bool,
    bot_mark: Mark,
    opponent_mark: Mark,
    nodes_visited: &mut u64,
) -> i32 {
    *nodes_visited += 1;

    if check_win(board).is_some() {
        return if is_maximizing { -1 } else { 1 };
    }
    if board.is_full() {
        return 0;
    }

    let mark = if is_maximizing { bot_mark } else { opponent_mark };
    let mut best_score = if is_maximizing { i32::MIN } else { i32::MAX };

    for position in board.available_moves() {
        let mut trial = TrialMove::new(board, position, mark);
        let score = minimax(&mut trial, !is_maximizing, bot_mark, opponent_mark, nodes_visited);

        best_score = if is_maximizing {
            best_score.max(score)
        } else {
            best_score.min(score)
        };
    }

    best_score
}

/// A mark placed for the duration of one search branch. The cell is cleared
/// again when the guard is dropped.
struct TrialMove<'a> {
    board: &'a mut Board,
    position: Position,
}

impl<'a> TrialMove<'a> {
    fn new(board: &'a mut Board, position: Position, mark: Mark) -> Self {
        board.put(position, mark);
        Self { board, position }
    }
}

impl Deref for TrialMove<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        &*self.board
    }
}

impl DerefMut for TrialMove<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        &mut *self.board
    }
}

impl Drop for TrialMove<'_> {
    fn drop(&mut self) {
        self.board.clear(self.position);
    }
}
