//! Falcon & Hunter chess in the terminal.
//!
//! Two players share one prompt and type moves in turn. Pieces are given
//! by algebraic square names (`e2 e4`); fairy pieces are brought in with
//! `enter falcon b1` once the side has lost enough major pieces.

mod command;
mod config;
mod render;

use anyhow::Context;
use clap::Parser;
use command::{Command, HELP};
use config::{CliConfig, Glyphs};
use fairy_engine::Session;
use render::render_board;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Play Falcon & Hunter chess against another person at the same terminal.
#[derive(Parser)]
#[command(name = "fairy-cli")]
#[command(about = "Play Falcon & Hunter chess in the terminal")]
struct Args {
    /// Path to the TOML configuration file
    #[arg(long, default_value_os_t = CliConfig::default_path())]
    config: PathBuf,

    /// Draw pieces with letters instead of chess symbols
    #[arg(long)]
    ascii: bool,

    /// Log filter, overrides `log_level` from the config file
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = CliConfig::load(&args.config)
        .with_context(|| format!("loading {}", args.config.display()))?;
    if args.ascii {
        config.glyphs = Glyphs::Ascii;
    }

    let directive = args.log_level.as_deref().unwrap_or(&config.log_level);
    let filter = EnvFilter::try_new(directive)
        .with_context(|| format!("invalid log level '{}'", directive))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    tracing::info!("Config: {:?}", args.config);
    tracing::debug!("Glyphs: {:?}, coordinates: {}", config.glyphs, config.show_coordinates);

    let mut session = Session::new();
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    write!(stdout, "{}", render_board(session.board(), config.glyphs, config.show_coordinates))?;
    prompt(&mut stdout, &session)?;

    for line in stdin.lock().lines() {
        let line = line?;
        match Command::parse(&line) {
            Ok(Command::Quit) => break,
            Ok(command) => execute(&mut session, command, &config, &mut stdout)?,
            Err(e) => writeln!(stdout, "{}", e)?,
        }
        prompt(&mut stdout, &session)?;
    }

    tracing::info!("Exiting after {} actions", session.history().len());
    Ok(())
}

fn prompt(out: &mut impl Write, session: &Session) -> io::Result<()> {
    if session.is_game_over() {
        write!(out, "[{}] > ", session.state())?;
    } else {
        write!(out, "[{} to move] > ", session.side_to_move())?;
    }
    out.flush()
}

/// Runs one parsed command against the session, writing any output to `out`.
fn execute(
    session: &mut Session,
    command: Command,
    config: &CliConfig,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    match command {
        Command::Move { from, to } => match session.submit_move(from, to) {
            Ok(outcome) => {
                if let Some(captured) = outcome.captured {
                    writeln!(out, "{} captures {} on {}", outcome.piece, captured, to)?;
                }
                show_board(session, config, out)?;
                if session.is_game_over() {
                    writeln!(out, "Game over: {}", session.state())?;
                }
            }
            Err(reason) => writeln!(out, "Invalid move: {}", reason)?,
        },
        Command::Enter { kind, square } => match session.submit_fairy_entry(kind, square) {
            Ok(()) => show_board(session, config, out)?,
            Err(reason) => writeln!(out, "Fairy piece cannot enter: {}", reason)?,
        },
        Command::Board => show_board(session, config, out)?,
        Command::Status => {
            let json = serde_json::to_string_pretty(&session.snapshot())?;
            writeln!(out, "{}", json)?;
        }
        Command::Help => writeln!(out, "{}", HELP)?,
        Command::Quit | Command::Empty => {}
    }
    Ok(())
}

fn show_board(session: &Session, config: &CliConfig, out: &mut impl Write) -> io::Result<()> {
    write!(
        out,
        "{}",
        render_board(session.board(), config.glyphs, config.show_coordinates)
    )
}
