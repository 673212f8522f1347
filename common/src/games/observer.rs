use super::tictactoe::{Board, Outcome};

/// Presentation side of a game. The driver calls it after every board change
/// and once per finished round.
pub trait GameObserver {
    fn on_board_changed(&mut self, board: &Board);

    fn on_game_over(&mut self, outcome: &Outcome);
}
