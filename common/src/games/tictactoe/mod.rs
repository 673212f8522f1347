mod board;
mod bot_controller;
mod driver;
mod settings;
mod types;
mod win_detector;

pub use board::{Board, MoveError};
pub use bot_controller::{
    BotInput, BotType, SearchError, SearchReport, analyze, best_move, calculate_move, minimax_value,
};
pub use driver::{DriverState, GameDriver, Scoreboard};
pub use settings::TicTacToeSettings;
pub use types::{
    BOARD_SIZE, BOT_MARK, CELL_COUNT, FirstPlayerMode, HUMAN_MARK, LINES, Line, Mark, Outcome, Position,
};
pub use win_detector::{check_win, check_win_with_line, evaluate};
