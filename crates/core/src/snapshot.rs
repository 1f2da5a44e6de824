//! Snapshot module - immutable copies of the observable state
//!
//! Snapshots are what crosses the boundary to render collaborators,
//! observers and replay tooling: plain serializable data with no reference
//! back into the live state machine. A concurrent reader gets one of these
//! (or a copy), never the state itself.

use serde::{Deserialize, Serialize};

use blockfall_types::{PieceKind, BOARD_COLUMNS, BOARD_ROWS};

use crate::game_state::Piece;

/// Placement of the active piece at snapshot time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PieceSnapshot {
    pub kind: PieceKind,
    pub rot: u8,
    pub row: i8,
    pub col: i8,
}

impl From<Piece> for PieceSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            kind: value.kind,
            rot: value.rot,
            row: value.row,
            col: value.col,
        }
    }
}

/// Full observable game state
///
/// The board grid is exported as bytes: 0 for an empty cell, otherwise
/// 1 + the piece type index (renderers subtract one for palette lookup).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub board: [[u8; BOARD_COLUMNS]; BOARD_ROWS],
    pub current: PieceSnapshot,
    pub next_kind: PieceKind,
    pub paused: bool,
    pub game_over: bool,
    pub win: bool,
    pub score: u32,
    pub lines_cleared: u32,
    pub level: u32,
    pub drop_delay_ms: u32,
}

impl GameSnapshot {
    /// Whether gameplay commands currently have any effect
    pub fn playable(&self) -> bool {
        !self.game_over && !self.paused
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[0u8; BOARD_COLUMNS]; BOARD_ROWS],
            current: PieceSnapshot {
                kind: PieceKind::I,
                rot: 0,
                row: 0,
                col: 3,
            },
            next_kind: PieceKind::I,
            paused: false,
            game_over: false,
            win: false,
            score: 0,
            lines_cleared: 0,
            level: 1,
            drop_delay_ms: blockfall_types::DROP_MS_START,
        }
    }
}
