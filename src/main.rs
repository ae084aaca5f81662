//! Console frontend for the noughts and crosses engine.
//!
//! A deliberately small host: it renders the board to stdout, reads
//! moves as `col row` pairs from stdin, and answers the replay prompt.
//! It exists to exercise the full frontend contract end to end.

use anyhow::{Context, Result};
use clap::Parser;
use noughts_crosses::{
    EngineError, Frontend, GameEngine, GameMode, GameSession, InvalidMove, Outcome, TurnState,
};
use std::io::{BufRead, Write};
use std::time::Duration;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "noughts", about = "Noughts and crosses in the terminal")]
struct Cli {
    /// Game mode.
    #[arg(long, value_enum, default_value = "cpu")]
    mode: ModeArg,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum ModeArg {
    /// One human against the computer.
    Cpu,
    /// Two humans at the same keyboard.
    TwoPlayer,
}

impl From<ModeArg> for GameMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Cpu => GameMode::HumanVsCpu,
            ModeArg::TwoPlayer => GameMode::HumanVsHuman,
        }
    }
}

/// Frontend that draws to stdout and prompts on stdin.
struct Console;

impl Console {
    fn read_line(&self) -> Result<String> {
        let mut line = String::new();
        std::io::stdin()
            .lock()
            .read_line(&mut line)
            .context("reading stdin")?;
        Ok(line.trim().to_string())
    }
}

impl Frontend for Console {
    fn board_changed(&mut self, session: &GameSession) {
        let [p1, p2] = session.players();
        println!();
        println!("{}", session.board().render());
        println!(
            "{}: {}   {}: {}",
            p1.name(),
            p1.score(),
            p2.name(),
            p2.score()
        );
    }

    fn invalid_move(&mut self, rejection: &InvalidMove) {
        println!("Invalid move: {rejection}.");
    }

    fn game_over(&mut self, outcome: Outcome, session: &GameSession) -> bool {
        match outcome.winner() {
            Some(mark) => {
                let winner = session
                    .players()
                    .iter()
                    .find(|p| p.mark() == mark)
                    .map(|p| p.name())
                    .unwrap_or("unknown");
                println!("{winner} has won!");
            }
            None => println!("There is a draw!"),
        }
        print!("Play again? [y/n] ");
        let _ = std::io::stdout().flush();
        matches!(self.read_line().as_deref(), Ok("y") | Ok("Y") | Ok("yes"))
    }

    fn pace(&mut self, delay: Duration) {
        // The engine never sleeps; the host may.
        std::thread::sleep(delay);
    }
}

fn parse_coords(input: &str) -> Option<(usize, usize)> {
    let mut parts = input.split([' ', ',']).filter(|p| !p.is_empty());
    let col = parts.next()?.parse().ok()?;
    let row = parts.next()?.parse().ok()?;
    Some((col, row))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut engine = GameEngine::new(Console);
    engine.configure(cli.mode.into());
    engine.reset()?;

    println!("Enter moves as `col row` with both in 0-2.");
    loop {
        let prompt = engine
            .session()
            .map(|s| s.current_player().name().to_string())
            .unwrap_or_default();
        print!("{prompt} > ");
        let _ = std::io::stdout().flush();

        let line = engine.frontend_mut().read_line()?;
        if line.is_empty() || line == "q" || line == "quit" {
            break;
        }
        let Some((col, row)) = parse_coords(&line) else {
            println!("Could not parse that; try e.g. `0 2`.");
            continue;
        };

        match engine.submit_move(col, row) {
            Ok(TurnState::AwaitingHuman) => {}
            Ok(TurnState::Terminal(_)) => break,
            Err(EngineError::Invalid(_)) => {
                // Already surfaced through the invalid_move callback.
                debug!("re-prompting after rejected move");
            }
            Err(EngineError::Illegal(call)) => {
                println!("Rejected: {call}.");
            }
            Err(err) => return Err(err.into()),
        }
    }

    Ok(())
}
