use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use log::info;
use std::io::{self, BufRead, Write};
use std::thread;
use std::time::{Duration, Instant};

use tictac::autoplay;
use tictac::display;
use tictac::{
    CellIndex, Game, GameConfig, GameRng, MoveOutcome, Participant, PolicyKind, ThinkTimer,
    UniformEmptyCell,
};

#[derive(Debug, Parser)]
#[command(name = "tictac", about = "Tic-tac-toe against a random computer opponent")]
struct Args {
    #[command(subcommand)]
    cmd: Option<Cmd>,

    /// Seed for all randomness (default: OS entropy)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Computer move selection strategy
    #[arg(long, value_enum, default_value_t = PolicyArg::EmptyCells, global = true)]
    policy: PolicyArg,
}

#[derive(Debug, Subcommand)]
enum Cmd {
    /// Play interactively in the terminal (default)
    Play {
        /// Milliseconds the computer "thinks" before moving
        #[arg(long, default_value_t = 1000)]
        think_ms: u64,
    },
    /// Play unattended rounds with a random stand-in for the human
    Autoplay {
        /// Number of rounds to play
        #[arg(long, default_value_t = 1000)]
        rounds: u32,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PolicyArg {
    EmptyCells,
    Rejection,
}

impl From<PolicyArg> for PolicyKind {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::EmptyCells => PolicyKind::EmptyCells,
            PolicyArg::Rejection => PolicyKind::RejectionSampling,
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let mut config = GameConfig::new().with_policy(args.policy.into());
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    match args.cmd.unwrap_or(Cmd::Play { think_ms: 1000 }) {
        Cmd::Play { think_ms } => {
            let game = Game::new(config.with_think_delay(Duration::from_millis(think_ms)))
                .context("invalid game configuration")?;
            run_interactive(game)
        }
        Cmd::Autoplay { rounds } => {
            let mut game = Game::new(config.instant()).context("invalid game configuration")?;
            let mut stand_in_rng = GameRng::new(game.seed().wrapping_add(1));
            info!("autoplay: {rounds} rounds with seed {}", game.seed());

            let tally =
                autoplay::play_rounds(&mut game, rounds, &UniformEmptyCell, &mut stand_in_rng);
            println!("{tally}");
            Ok(())
        }
    }
}

fn run_interactive(mut game: Game) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut timer = ThinkTimer::new();

    println!("seed {}: enter 1-9 to play, r to restart, q to quit", game.seed());

    loop {
        print_round(&game);

        if let Some(ticket) = game.pending_computer_move() {
            timer.arm(ticket, Instant::now());
            while timer.is_armed() {
                let now = Instant::now();
                if let Some(due) = timer.poll(now) {
                    game.computer_select(due);
                } else if let Some(wait) = timer.remaining(now) {
                    thread::sleep(wait);
                }
            }
            continue;
        }

        print!("> ");
        io::stdout().flush().context("flushing prompt")?;

        let Some(line) = lines.next() else {
            return Ok(());
        };
        let line = line.context("reading input")?;

        match line.trim() {
            "q" | "quit" => return Ok(()),
            "r" | "restart" => {
                timer.disarm();
                game.reset();
            }
            input => match CellIndex::from_display_number(input) {
                Ok(cell) => {
                    let outcome = game.attempt_move(cell.get(), Participant::Human);
                    if let MoveOutcome::Rejected(reason) = outcome {
                        println!("({reason})");
                    }
                }
                Err(err) => println!("({err})"),
            },
        }
    }
}

fn print_round(game: &Game) {
    let round = game.round();
    println!();
    println!("{}    {}", display::player_label(round.marks), display::computer_label(round.marks));
    println!("{}", display::render_board(round));
    println!("{}", display::status_text(round));
    if round.status.is_terminal() {
        println!("(r to restart, q to quit)");
    }
}
