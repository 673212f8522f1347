use super::board::Board;
use super::types::{LINES, Line, Mark, Outcome};

pub fn check_win_with_line(board: &Board) -> Option<(Mark, Line)> {
    LINES.iter().find_map(|line| {
        let mark = board.at(line.start());
        if mark == Mark::Empty {
            return None;
        }
        line.cells
            .iter()
            .all(|&cell| board.at(cell) == mark)
            .then_some((mark, *line))
    })
}

pub fn check_win(board: &Board) -> Option<Mark> {
    check_win_with_line(board).map(|(mark, _)| mark)
}

/// Classifies the board. A win takes precedence over a full board.
pub fn evaluate(board: &Board) -> Outcome {
    if let Some((mark, line)) = check_win_with_line(board) {
        return Outcome::Win { mark, line };
    }

    if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::types::Position;
    use std::collections::HashSet;

    const E: Mark = Mark::Empty;
    const X: Mark = Mark::X;
    const O: Mark = Mark::O;

    fn winners(board: &Board) -> HashSet<Mark> {
        LINES
            .iter()
            .filter_map(|line| {
                let mark = board.at(line.start());
                (mark != Mark::Empty && line.cells.iter().all(|&c| board.at(c) == mark)).then_some(mark)
            })
            .collect()
    }

    fn visit_reachable(board: &mut Board, to_move: Mark, seen: &mut HashSet<Board>) {
        if !seen.insert(*board) || evaluate(board).is_terminal() {
            return;
        }
        for position in board.available_moves() {
            board.place(position, to_move).unwrap();
            visit_reachable(board, to_move.opponent().unwrap(), seen);
            board.clear(position);
        }
    }

    #[test]
    fn test_empty_board_in_progress() {
        assert_eq!(evaluate(&Board::new()), Outcome::InProgress);
    }

    #[test]
    fn test_row_win() {
        let board = Board::from_rows([[E, E, E], [X, X, X], [O, O, E]]);

        assert_eq!(evaluate(&board), Outcome::Win { mark: X, line: LINES[1] });
    }

    #[test]
    fn test_column_win() {
        let board = Board::from_rows([[X, E, O], [X, E, O], [E, X, O]]);

        assert_eq!(evaluate(&board), Outcome::Win { mark: O, line: LINES[5] });
    }

    #[test]
    fn test_diagonal_wins() {
        let main = Board::from_rows([[O, X, E], [X, O, E], [E, X, O]]);
        let anti = Board::from_rows([[O, O, X], [E, X, E], [X, E, E]]);

        assert_eq!(evaluate(&main), Outcome::Win { mark: O, line: LINES[6] });
        let outcome = evaluate(&anti);
        assert_eq!(outcome, Outcome::Win { mark: X, line: LINES[7] });
        assert_eq!(outcome.winning_line().unwrap().start(), Position::new(0, 2));
        assert_eq!(outcome.winning_line().unwrap().end(), Position::new(2, 0));
    }

    #[test]
    fn test_draw() {
        let board = Board::from_rows([[X, O, X], [X, O, O], [O, X, X]]);

        assert_eq!(evaluate(&board), Outcome::Draw);
    }

    #[test]
    fn test_win_on_full_board_is_not_draw() {
        let board = Board::from_rows([[X, X, X], [O, O, X], [X, O, O]]);

        assert_eq!(evaluate(&board).winner(), Some(X));
    }

    #[test]
    fn test_malformed_board_reports_earliest_line() {
        let board = Board::from_rows([[O, O, O], [E, E, E], [X, X, X]]);
        let column_and_row = Board::from_rows([[X, E, E], [X, E, E], [X, O, O]]);

        assert_eq!(evaluate(&board), Outcome::Win { mark: O, line: LINES[0] });
        assert_eq!(check_win_with_line(&column_and_row), Some((X, LINES[3])));
    }

    #[test]
    fn test_evaluate_is_idempotent_and_pure() {
        let board = Board::from_rows([[X, O, E], [E, X, O], [E, E, X]]);
        let before = board;

        let first = evaluate(&board);
        let second = evaluate(&board);

        assert_eq!(first, second);
        assert_eq!(board, before);
    }

    #[test]
    fn test_reachable_boards_never_have_two_winners() {
        let mut seen = HashSet::new();
        visit_reachable(&mut Board::new(), X, &mut seen);

        assert_eq!(seen.len(), 5478);
        for board in &seen {
            assert!(winners(board).len() <= 1, "two winners on\n{}", board);
            assert_eq!(evaluate(board), evaluate(board));
        }
    }
}
