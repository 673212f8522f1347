mod config;
mod terminal;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use triki_common::games::tictactoe::{BotType, FirstPlayerMode, GameDriver, TicTacToeSettings};
use triki_common::{log, logger};

use config::get_config_manager;
use terminal::{Command, ConsoleRenderer, InputError, parse_command};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum BotArg {
    Minimax,
    Random,
}

impl From<BotArg> for BotType {
    fn from(arg: BotArg) -> Self {
        match arg {
            BotArg::Minimax => BotType::Minimax,
            BotArg::Random => BotType::Random,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FirstPlayerArg {
    Human,
    Bot,
    Random,
}

impl From<FirstPlayerArg> for FirstPlayerMode {
    fn from(arg: FirstPlayerArg) -> Self {
        match arg {
            FirstPlayerArg::Human => FirstPlayerMode::Human,
            FirstPlayerArg::Bot => FirstPlayerMode::Bot,
            FirstPlayerArg::Random => FirstPlayerMode::Random,
        }
    }
}

#[derive(Parser)]
#[command(name = "triki", about = "Tic-tac-toe against a minimax bot")]
struct Args {
    /// YAML config file. Defaults to triki_config.yaml next to the executable.
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, value_enum)]
    bot: Option<BotArg>,

    #[arg(long, value_enum)]
    first_player: Option<FirstPlayerArg>,

    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    use_log_prefix: bool,

    #[arg(long)]
    verbose: bool,
}

impl Args {
    fn apply_to(&self, settings: &mut TicTacToeSettings) {
        if let Some(bot) = self.bot {
            settings.bot = bot.into();
        }
        if let Some(first_player) = self.first_player {
            settings.first_player = first_player.into();
        }
        if self.seed.is_some() {
            settings.seed = self.seed;
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = get_config_manager(args.config.as_deref()).get_config()?;

    let prefix = match config.logging.prefix {
        Some(prefix) => Some(prefix),
        None if args.use_log_prefix => Some("Console".to_string()),
        None => None,
    };
    logger::init_logger(prefix, args.verbose || config.logging.verbose);

    let mut settings = config.tictactoe;
    args.apply_to(&mut settings);

    log!("Starting triki console");
    run(settings, io::stdin().lock(), io::stdout())?;
    log!("Bye");

    Ok(())
}

/// Reads commands until `quit` or end of input.
fn run<R: BufRead, W: Write>(settings: TicTacToeSettings, input: R, output: W) -> io::Result<()> {
    let mut renderer = ConsoleRenderer::new(output);
    renderer.print_help()?;

    let mut driver = GameDriver::new(settings, renderer);
    let mut lines = input.lines();

    loop {
        driver.observer_mut().prompt()?;
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;

        match parse_command(&line) {
            Ok(Command::Move { row, col }) => {
                let played = driver.scoreboard().games_played();
                if !driver.request_move(row, col) {
                    let text = format!("({}, {}) is taken or the round is over", row, col);
                    driver.observer_mut().print_line(&text)?;
                    continue;
                }
                let scoreboard = driver.scoreboard();
                if scoreboard.games_played() != played {
                    driver.observer_mut().print_scoreboard(&scoreboard)?;
                    if !driver.settings().auto_reset {
                        driver.observer_mut().print_line("Type `reset` for a new round")?;
                    }
                }
            }
            Ok(Command::Reset) => driver.reset(),
            Ok(Command::Help) => driver.observer_mut().print_help()?,
            Ok(Command::Quit) => break,
            Err(InputError::Empty) => {}
            Err(e) => {
                driver.observer_mut().print_line(&e.to_string())?;
                driver.observer_mut().print_help()?;
            }
        }
    }

    let scoreboard = driver.scoreboard();
    driver.observer_mut().print_scoreboard(&scoreboard)
}
