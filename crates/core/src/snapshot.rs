//! Snapshot module - stable read views for the presentation host
//!
//! The host reads one [`GameSnapshot`] per frame. `snapshot_into` refills a
//! caller-owned buffer so the per-frame path does not allocate. Coordinate
//! sets are plain arrays of (x, y) pairs.

use crate::game::Tetromino;
use crate::types::{
    GameStatus, PieceKind, Rotation, BOARD_HEIGHT, BOARD_WIDTH, NEXT_PREVIEW,
};

/// Read view of the active piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i8,
    pub y: i8,
    /// Absolute board coordinates of the four minos
    pub cells: [(i8, i8); 4],
}

impl From<Tetromino> for ActiveSnapshot {
    fn from(value: Tetromino) -> Self {
        Self {
            kind: value.kind,
            rotation: value.rotation,
            x: value.x,
            y: value.y,
            cells: value.cells(),
        }
    }
}

impl ActiveSnapshot {
    /// Color identifier of the active piece (1..=7)
    pub fn color_id(&self) -> u8 {
        self.kind.color_id()
    }
}

/// Timer readouts, mostly useful for debugging hosts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TimersSnapshot {
    pub fall_ms: u32,
    pub lock_ms: u32,
}

/// Complete read view of one engine state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    /// Per-cell color ids (0 = empty, 1..=7 = piece colors), row-major
    pub board: [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub active: Option<ActiveSnapshot>,
    /// Landing projection of the active piece
    pub ghost_cells: Option<[(i8, i8); 4]>,
    pub hold: Option<PieceKind>,
    pub next: [PieceKind; NEXT_PREVIEW],
    pub can_hold: bool,
    pub status: GameStatus,
    pub score: u32,
    pub lines: u32,
    pub level: u32,
    pub timers: TimersSnapshot,
}

impl GameSnapshot {
    pub fn playable(&self) -> bool {
        self.status == GameStatus::Running
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: None,
            ghost_cells: None,
            hold: None,
            next: [PieceKind::I; NEXT_PREVIEW],
            can_hold: true,
            status: GameStatus::Running,
            score: 0,
            lines: 0,
            level: 0,
            timers: TimersSnapshot::default(),
        }
    }
}
