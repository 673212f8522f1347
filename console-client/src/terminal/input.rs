use std::fmt;

use triki_common::games::tictactoe::BOARD_SIZE;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move { row: usize, col: usize },
    Reset,
    Quit,
    Help,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    Empty,
    Unrecognized(String),
    OutOfRange { row: usize, col: usize },
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::Empty => write!(f, "Type a command"),
            InputError::Unrecognized(input) => write!(f, "Unrecognized input: {}", input),
            InputError::OutOfRange { row, col } => write!(
                f,
                "({}, {}) is off the board, rows and columns go from 0 to {}",
                row,
                col,
                BOARD_SIZE - 1
            ),
        }
    }
}

impl std::error::Error for InputError {}

/// Accepts `row col` or `row,col`, plus the word commands.
pub fn parse_command(line: &str) -> Result<Command, InputError> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Err(InputError::Empty);
    }

    match trimmed.to_ascii_lowercase().as_str() {
        "reset" | "r" => return Ok(Command::Reset),
        "quit" | "q" | "exit" => return Ok(Command::Quit),
        "help" | "h" | "?" => return Ok(Command::Help),
        _ => {}
    }

    let parts: Vec<&str> = trimmed
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .collect();

    let [row, col] = parts.as_slice() else {
        return Err(InputError::Unrecognized(trimmed.to_string()));
    };
    let (Ok(row), Ok(col)) = (row.parse::<usize>(), col.parse::<usize>()) else {
        return Err(InputError::Unrecognized(trimmed.to_string()));
    };

    if row >= BOARD_SIZE || col >= BOARD_SIZE {
        return Err(InputError::OutOfRange { row, col });
    }
    Ok(Command::Move { row, col })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_space_separated_move() {
        assert_eq!(parse_command("1 2"), Ok(Command::Move { row: 1, col: 2 }));
        assert_eq!(parse_command("  0    0 \n"), Ok(Command::Move { row: 0, col: 0 }));
    }

    #[test]
    fn test_parse_comma_separated_move() {
        assert_eq!(parse_command("2,1"), Ok(Command::Move { row: 2, col: 1 }));
        assert_eq!(parse_command("2, 0"), Ok(Command::Move { row: 2, col: 0 }));
    }

    #[test]
    fn test_parse_word_commands() {
        assert_eq!(parse_command("reset"), Ok(Command::Reset));
        assert_eq!(parse_command("R"), Ok(Command::Reset));
        assert_eq!(parse_command("quit"), Ok(Command::Quit));
        assert_eq!(parse_command("q"), Ok(Command::Quit));
        assert_eq!(parse_command("Help"), Ok(Command::Help));
    }

    #[test]
    fn test_parse_out_of_range() {
        assert_eq!(parse_command("3 0"), Err(InputError::OutOfRange { row: 3, col: 0 }));
        assert_eq!(parse_command("0 9"), Err(InputError::OutOfRange { row: 0, col: 9 }));
    }

    #[test]
    fn test_parse_garbage() {
        assert_eq!(parse_command(""), Err(InputError::Empty));
        assert!(matches!(parse_command("1"), Err(InputError::Unrecognized(_))));
        assert!(matches!(parse_command("1 2 3"), Err(InputError::Unrecognized(_))));
        assert!(matches!(parse_command("a b"), Err(InputError::Unrecognized(_))));
        assert!(matches!(parse_command("-1 0"), Err(InputError::Unrecognized(_))));
    }
}
