use std::io::{self, Write};

use triki_common::games::GameObserver;
use triki_common::games::tictactoe::{BOARD_SIZE, Board, Line, Outcome, Position, Scoreboard};
use triki_common::log;

pub const HELP_TEXT: &str = "\
Enter a move as `row col` (0-2), e.g. `1 1` for the center.
Commands: reset (r), help (h), quit (q).";

/// Text front-end: draws the board on every change and announces results.
pub struct ConsoleRenderer<W: Write> {
    writer: W,
    last_board: Board,
}

impl<W: Write> ConsoleRenderer<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            last_board: Board::new(),
        }
    }

    #[cfg(test)]
    pub fn writer(&self) -> &W {
        &self.writer
    }

    pub fn print_line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.writer, "{}", text)?;
        self.writer.flush()
    }

    pub fn print_help(&mut self) -> io::Result<()> {
        self.print_line(HELP_TEXT)
    }

    pub fn print_scoreboard(&mut self, scoreboard: &Scoreboard) -> io::Result<()> {
        let text = format!(
            "Score: you {} | bot {} | draws {}",
            scoreboard.human_wins, scoreboard.bot_wins, scoreboard.draws
        );
        self.print_line(&text)
    }

    pub fn prompt(&mut self) -> io::Result<()> {
        write!(self.writer, "> ")?;
        self.writer.flush()
    }

    fn draw(&mut self, highlight: Option<&Line>) -> io::Result<()> {
        let text = render_board(&self.last_board, highlight);
        writeln!(self.writer)?;
        writeln!(self.writer, "{}", text)?;
        self.writer.flush()
    }

    fn announce(&mut self, outcome: &Outcome) -> io::Result<()> {
        self.draw(outcome.winning_line())?;
        match outcome.winning_line() {
            Some(line) => {
                let cells: Vec<String> = line.cells.iter().map(|p| p.to_string()).collect();
                writeln!(self.writer, "{} on {}", outcome, cells.join(" "))?;
            }
            None => writeln!(self.writer, "{}", outcome)?,
        }
        self.writer.flush()
    }
}

impl<W: Write> GameObserver for ConsoleRenderer<W> {
    fn on_board_changed(&mut self, board: &Board) {
        self.last_board = *board;
        if let Err(e) = self.draw(None) {
            log!("Failed to draw board: {}", e);
        }
    }

    fn on_game_over(&mut self, outcome: &Outcome) {
        if let Err(e) = self.announce(outcome) {
            log!("Failed to announce result: {}", e);
        }
    }
}

/// Grid with row and column indices. Cells of `highlight` are bracketed.
pub fn render_board(board: &Board, highlight: Option<&Line>) -> String {
    let mut lines = Vec::with_capacity(BOARD_SIZE * 2);
    let header: Vec<String> = (0..BOARD_SIZE).map(|col| format!(" {} ", col)).collect();
    lines.push(format!("   {}", header.join(" ")));

    for (row, marks) in board.rows().enumerate() {
        let cells: Vec<String> = marks
            .iter()
            .enumerate()
            .map(|(col, mark)| {
                if highlight.is_some_and(|line| line.contains(Position::new(row, col))) {
                    format!("[{}]", mark)
                } else {
                    format!(" {} ", mark)
                }
            })
            .collect();
        lines.push(format!("{}  {}", row, cells.join("|")));
        if row + 1 < BOARD_SIZE {
            lines.push(format!("   {}", vec!["---"; BOARD_SIZE].join("+")));
        }
    }

    lines.join("\n")
}
