use super::board::Board;
use super::bot_controller::{BotInput, calculate_move};
use super::settings::TicTacToeSettings;
use super::types::{BOT_MARK, FirstPlayerMode, HUMAN_MARK, Outcome, Position};
use super::win_detector::evaluate;
use crate::games::{GameObserver, SessionRng};
use crate::{debug_log, log};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DriverState {
    AwaitingHuman,
    AutomatedTurn,
    Terminal,
}

/// Results of the rounds played by one driver. Lives only in memory.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Scoreboard {
    pub human_wins: u32,
    pub bot_wins: u32,
    pub draws: u32,
}

impl Scoreboard {
    fn record(&mut self, outcome: &Outcome) {
        match outcome.winner() {
            Some(mark) if mark == HUMAN_MARK => self.human_wins += 1,
            Some(_) => self.bot_wins += 1,
            None if *outcome == Outcome::Draw => self.draws += 1,
            None => {}
        }
    }

    pub fn games_played(&self) -> u32 {
        self.human_wins + self.bot_wins + self.draws
    }
}

/// Owns the board and runs the turn order between the human (X) and the
/// bot (O). Moves the driver cannot accept are ignored, never reported as
/// errors.
pub struct GameDriver<O: GameObserver> {
    board: Board,
    state: DriverState,
    settings: TicTacToeSettings,
    rng: SessionRng,
    scoreboard: Scoreboard,
    observer: O,
}

impl<O: GameObserver> GameDriver<O> {
    pub fn new(settings: TicTacToeSettings, observer: O) -> Self {
        let rng = SessionRng::from_optional_seed(settings.seed);
        log!(
            "New session: bot {:?}, first player {:?}, seed {}",
            settings.bot,
            settings.first_player,
            rng.seed()
        );

        let mut driver = Self {
            board: Board::new(),
            state: DriverState::AwaitingHuman,
            settings,
            rng,
            scoreboard: Scoreboard::default(),
            observer,
        };
        driver.start_round();
        driver
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    pub fn outcome(&self) -> Outcome {
        evaluate(&self.board)
    }

    pub fn scoreboard(&self) -> Scoreboard {
        self.scoreboard
    }

    pub fn settings(&self) -> &TicTacToeSettings {
        &self.settings
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    /// Applies a human move and, if the game goes on, the bot's answer.
    /// Returns whether the move was accepted.
    pub fn request_move(&mut self, row: usize, col: usize) -> bool {
        if self.state != DriverState::AwaitingHuman {
            debug_log!("Ignoring move ({}, {}) in state {:?}", row, col, self.state);
            return false;
        }

        if let Err(e) = self.board.set(row, col, HUMAN_MARK) {
            debug_log!("Ignoring move: {}", e);
            return false;
        }

        debug_log!("Human played {}", Position::new(row, col));
        self.observer.on_board_changed(&self.board);

        if !self.finish_if_terminal() {
            self.play_bot_turn();
        }
        true
    }

    pub fn reset(&mut self) {
        log!("Reset requested");
        self.start_round();
    }

    fn start_round(&mut self) {
        self.board.reset();
        self.state = DriverState::AwaitingHuman;
        self.observer.on_board_changed(&self.board);

        if self.bot_opens() {
            debug_log!("Bot opens the round");
            self.play_bot_turn();
        }
    }

    fn bot_opens(&mut self) -> bool {
        match self.settings.first_player {
            FirstPlayerMode::Human => false,
            FirstPlayerMode::Bot => true,
            FirstPlayerMode::Random => self.rng.random_bool(),
        }
    }

    // Only reached with a board that is neither won nor full.
    fn play_bot_turn(&mut self) {
        self.state = DriverState::AutomatedTurn;

        let input = BotInput::new(self.board, BOT_MARK);
        let position = match calculate_move(self.settings.bot, &input, &mut self.rng) {
            Ok(position) => position,
            Err(e) => unreachable!("bot asked to move on a finished board: {}", e),
        };
        if let Err(e) = self.board.place(position, BOT_MARK) {
            unreachable!("bot chose an illegal cell: {}", e);
        }

        debug_log!("Bot played {}", position);
        self.observer.on_board_changed(&self.board);

        if !self.finish_if_terminal() {
            self.state = DriverState::AwaitingHuman;
        }
    }

    fn finish_if_terminal(&mut self) -> bool {
        let outcome = evaluate(&self.board);
        if !outcome.is_terminal() {
            return false;
        }

        self.state = DriverState::Terminal;
        self.scoreboard.record(&outcome);
        debug_log!("Game over: {}", outcome);
        self.observer.on_game_over(&outcome);

        if self.settings.auto_reset {
            self.start_round();
        }
        true
    }
}
