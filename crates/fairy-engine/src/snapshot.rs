//! Serializable session snapshots.

use fairy_core::{Color, FairyKind, Piece};
use serde::{Deserialize, Serialize};

use crate::{GameState, Session};

/// A plain-data view of one side's bookkeeping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SideSnapshot {
    /// Major pieces this side has lost, in capture order.
    pub graveyard: Vec<Piece>,
    /// Fairy kinds this side may still enter.
    pub fairies: Vec<FairyKind>,
}

/// A plain-data view of a [`Session`], suitable for JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Board contents as a placement string.
    pub placement: String,
    pub side_to_move: Color,
    pub state: GameState,
    pub white: SideSnapshot,
    pub black: SideSnapshot,
    /// Number of accepted actions so far.
    pub actions: usize,
}

impl From<&Session> for Snapshot {
    fn from(session: &Session) -> Self {
        let side = |color: Color| SideSnapshot {
            graveyard: session.graveyard(color).to_vec(),
            fairies: session.available_fairies(color).iter().collect(),
        };
        Snapshot {
            placement: session.board().to_placement(),
            side_to_move: session.side_to_move(),
            state: session.state(),
            white: side(Color::White),
            black: side(Color::Black),
            actions: session.history().len(),
        }
    }
}
