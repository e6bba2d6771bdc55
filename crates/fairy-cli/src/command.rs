//! Command parsing for the interactive loop.

use fairy_core::{FairyKind, NotationError, Square, UnknownFairy};
use thiserror::Error;

/// Errors produced while parsing a command line.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command '{0}', type 'help' for a list")]
    Unknown(String),
    #[error("usage: {0}")]
    Usage(&'static str),
    #[error(transparent)]
    Notation(#[from] NotationError),
    #[error(transparent)]
    Fairy(#[from] UnknownFairy),
}

/// Commands typed by the players.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Move a piece: `e2 e4` or `move e2 e4`.
    Move { from: Square, to: Square },
    /// Bring a fairy piece into play: `enter falcon b1`.
    Enter { kind: FairyKind, square: Square },
    /// Redraw the board.
    Board,
    /// Print the session snapshot as JSON.
    Status,
    /// List the commands.
    Help,
    /// Leave the loop.
    Quit,
    /// Blank line.
    Empty,
}

const MOVE_USAGE: &str = "move <from> <to>";
const ENTER_USAGE: &str = "enter <falcon|hunter> <square>";

impl Command {
    /// Parse a single input line.
    pub fn parse(input: &str) -> Result<Self, CommandError> {
        let input = input.trim();
        let parts: Vec<&str> = input.split_whitespace().collect();

        let Some(first) = parts.first() else {
            return Ok(Command::Empty);
        };

        match first.to_ascii_lowercase().as_str() {
            "board" => Ok(Command::Board),
            "status" => Ok(Command::Status),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            "move" => Self::parse_move(&parts[1..]),
            "enter" => Self::parse_enter(&parts[1..]),
            _ if parts.len() == 2 && first.parse::<Square>().is_ok() => Self::parse_move(&parts),
            _ => Err(CommandError::Unknown(input.to_string())),
        }
    }

    fn parse_move(args: &[&str]) -> Result<Self, CommandError> {
        match args {
            [from, to] => Ok(Command::Move {
                from: from.parse()?,
                to: to.parse()?,
            }),
            _ => Err(CommandError::Usage(MOVE_USAGE)),
        }
    }

    fn parse_enter(args: &[&str]) -> Result<Self, CommandError> {
        match args {
            [kind, square] => Ok(Command::Enter {
                kind: kind.parse()?,
                square: square.parse()?,
            }),
            _ => Err(CommandError::Usage(ENTER_USAGE)),
        }
    }
}

/// Text printed by the `help` command.
pub const HELP: &str = "\
commands:
  <from> <to>                      move a piece, e.g. e2 e4
  move <from> <to>                 same as above
  enter <falcon|hunter> <square>   bring a fairy piece onto a home rank
  board                            show the board
  status                           print the game as JSON
  help                             show this list
  quit                             leave the game";
