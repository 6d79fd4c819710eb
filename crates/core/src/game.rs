//! Game module - the falling-piece state machine
//!
//! Ties together board, pieces, bag, and scoring. Owns every piece of
//! mutable state; the host drives it with discrete commands plus one
//! `update(elapsed_ms)` call per frame and reads back through the query
//! surface. No call blocks, schedules, or touches I/O.

use crate::board::Board;
use crate::pieces::{shape_of, try_rotate, PieceShape, SPAWN_POSITION};
use crate::rng::PieceBag;
use crate::scoring::{fall_interval_ms, level_for_lines, score_for_lines};
use crate::snapshot::{ActiveSnapshot, GameSnapshot, TimersSnapshot};
use crate::types::{
    GameStatus, PieceKind, Rotation, LOCK_DELAY_MS, LOCK_RESET_LIMIT, NEXT_PREVIEW,
};

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Hash)]
pub struct Tetromino {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i8,
    pub y: i8,
}

impl Tetromino {
    /// Create a new tetromino at the spawn origin
    pub fn new(kind: PieceKind) -> Self {
        Self {
            kind,
            rotation: Rotation::North,
            x: SPAWN_POSITION.0,
            y: SPAWN_POSITION.1,
        }
    }

    /// Get the mino offsets for the current rotation
    pub fn shape(&self) -> PieceShape {
        shape_of(self.kind, self.rotation)
    }

    /// Absolute board coordinates of the four minos
    pub fn cells(&self) -> [(i8, i8); 4] {
        self.shape().map(|(dx, dy)| (self.x + dx, self.y + dy))
    }

    /// Check if all minos are at valid positions on the board
    pub fn is_valid(&self, board: &Board) -> bool {
        self.cells().iter().all(|&(x, y)| board.is_valid(x, y))
    }

    /// Check if the piece is resting on the floor or on locked cells
    pub fn is_grounded(&self, board: &Board) -> bool {
        self.cells().iter().any(|&(x, y)| !board.is_valid(x, y + 1))
    }
}

/// Complete engine state
///
/// An explicit owned value: hosts may run any number of independent games.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    active: Option<Tetromino>,
    hold: Option<PieceKind>,
    bag: PieceBag,
    next_preview: [PieceKind; NEXT_PREVIEW],
    score: u32,
    lines: u32,
    level: u32,
    /// Elapsed time since the last gravity step
    fall_timer_ms: u32,
    /// Elapsed time the piece has rested on support
    lock_timer_ms: u32,
    lock_reset_count: u8,
    can_hold: bool,
    status: GameStatus,
}

impl Game {
    /// Create a new game with the given RNG seed and spawn the first piece
    pub fn new(seed: u32) -> Self {
        let bag = PieceBag::new(seed);
        let mut game = Self {
            board: Board::new(),
            active: None,
            hold: None,
            next_preview: [PieceKind::I; NEXT_PREVIEW],
            bag,
            score: 0,
            lines: 0,
            level: 0,
            fall_timer_ms: 0,
            lock_timer_ms: 0,
            lock_reset_count: 0,
            can_hold: true,
            status: GameStatus::Running,
        };
        game.spawn_piece();
        game
    }

    // ---- Commands ----------------------------------------------------

    /// Shift the active piece one column left if unobstructed
    pub fn move_left(&mut self) {
        self.try_move(-1, 0);
    }

    /// Shift the active piece one column right if unobstructed
    pub fn move_right(&mut self) {
        self.try_move(1, 0);
    }

    /// Soft drop: shift the active piece one row down if unobstructed
    ///
    /// A successful step also restarts the gravity accumulator, so the next
    /// automatic fall happens a full interval later.
    pub fn move_down(&mut self) {
        if self.try_move(0, 1) {
            self.fall_timer_ms = 0;
        }
    }

    /// Drop the active piece to its landing position and lock immediately
    pub fn hard_drop(&mut self) {
        let Some(active) = self.active else {
            return;
        };

        let distance = self.drop_distance(&active);
        if distance > 0 {
            self.active = Some(Tetromino {
                y: active.y + distance,
                ..active
            });
        }
        self.lock_active();
    }

    /// Rotate the active piece clockwise with kick resolution
    pub fn rotate_cw(&mut self) {
        self.try_rotate_active(true);
    }

    /// Rotate the active piece counter-clockwise with kick resolution
    pub fn rotate_ccw(&mut self) {
        self.try_rotate_active(false);
    }

    /// Swap the active piece with the held slot, once per spawn
    ///
    /// With an empty slot the next queued piece enters play and the active
    /// kind is parked. The swapped-in piece restarts at the spawn origin; a
    /// collision there ends the game.
    pub fn hold(&mut self) {
        if !self.can_hold {
            return;
        }
        let Some(active) = self.active else {
            return;
        };
        let parked = active.kind;

        match self.hold.take() {
            Some(held) => {
                let piece = Tetromino::new(held);
                if piece.is_valid(&self.board) {
                    self.active = Some(piece);
                    self.fall_timer_ms = 0;
                    self.lock_timer_ms = 0;
                    self.lock_reset_count = 0;
                } else {
                    self.active = None;
                    self.status = GameStatus::Lost;
                }
            }
            None => self.spawn_piece(),
        }

        self.hold = Some(parked);
        self.can_hold = false;
    }

    /// Advance gravity and lock timers by the host-supplied elapsed time
    ///
    /// Grounded pieces accumulate lock delay and lock when it expires.
    /// Airborne pieces consume one gravity interval per fall step, so an
    /// accumulated N intervals moves the piece N rows (absent obstruction).
    pub fn update(&mut self, elapsed_ms: u32) {
        if self.status == GameStatus::Lost {
            return;
        }
        let Some(active) = self.active else {
            return;
        };

        if active.is_grounded(&self.board) {
            self.fall_timer_ms = 0;
            self.lock_timer_ms = self.lock_timer_ms.saturating_add(elapsed_ms);
            if self.lock_timer_ms >= LOCK_DELAY_MS {
                self.lock_active();
            }
        } else {
            self.fall_timer_ms = self.fall_timer_ms.saturating_add(elapsed_ms);
            let interval = fall_interval_ms(self.level);
            while self.fall_timer_ms >= interval {
                self.fall_timer_ms -= interval;
                if !self.try_move(0, 1) {
                    // Resting: the lock timer takes over on later updates.
                    break;
                }
            }
        }
    }

    /// Reset board, queue, hold, score, and status to initial conditions
    ///
    /// The piece sequence reseeds from the live RNG state, so consecutive
    /// games differ while the whole run stays reproducible from the
    /// original seed.
    pub fn restart(&mut self) {
        let seed = self.bag.seed();
        *self = Self::new(seed);
    }

    // ---- Queries -----------------------------------------------------

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Option<Tetromino> {
        self.active
    }

    /// Absolute cell coordinates of the active piece
    pub fn active_cells(&self) -> Option<[(i8, i8); 4]> {
        self.active.map(|piece| piece.cells())
    }

    pub fn active_kind(&self) -> Option<PieceKind> {
        self.active.map(|piece| piece.kind)
    }

    /// Cells the active piece would occupy after an unobstructed drop
    ///
    /// A pure projection of the current board and piece, recomputed on
    /// every call.
    pub fn ghost_cells(&self) -> Option<[(i8, i8); 4]> {
        let active = self.active?;
        let distance = self.drop_distance(&active);
        Some(
            active
                .shape()
                .map(|(dx, dy)| (active.x + dx, active.y + dy + distance)),
        )
    }

    /// Upcoming piece kinds, in draw order
    pub fn next_preview(&self) -> [PieceKind; NEXT_PREVIEW] {
        self.next_preview
    }

    pub fn held(&self) -> Option<PieceKind> {
        self.hold
    }

    pub fn can_hold(&self) -> bool {
        self.can_hold
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Check if the active piece is resting on support
    pub fn is_grounded(&self) -> bool {
        match self.active {
            Some(piece) => piece.is_grounded(&self.board),
            None => false,
        }
    }

    /// Fill a caller-owned snapshot without allocating
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_color_grid(&mut out.board);
        out.active = self.active.map(ActiveSnapshot::from);
        out.ghost_cells = self.ghost_cells();
        out.hold = self.hold;
        out.next = self.next_preview;
        out.can_hold = self.can_hold;
        out.status = self.status;
        out.score = self.score;
        out.lines = self.lines;
        out.level = self.level;
        out.timers = TimersSnapshot {
            fall_ms: self.fall_timer_ms,
            lock_ms: self.lock_timer_ms,
        };
    }

    /// Allocate and fill a fresh snapshot
    pub fn snapshot(&self) -> GameSnapshot {
        let mut out = GameSnapshot::default();
        self.snapshot_into(&mut out);
        out
    }

    // ---- Internals ---------------------------------------------------

    /// Try to move the active piece by (dx, dy)
    fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        let Some(active) = self.active else {
            return false;
        };

        let fits = active
            .shape()
            .iter()
            .all(|&(mx, my)| self.board.is_valid(active.x + mx + dx, active.y + my + dy));
        if !fits {
            return false;
        }

        self.active = Some(Tetromino {
            x: active.x + dx,
            y: active.y + dy,
            ..active
        });

        if dy > 0 || !self.is_grounded() {
            // Support changed (or the piece is airborne again): the lock
            // timer and its reset budget start over.
            self.lock_timer_ms = 0;
            self.lock_reset_count = 0;
        } else {
            self.reset_lock_timer();
        }

        true
    }

    /// Try to rotate the active piece with SRS wall kicks
    fn try_rotate_active(&mut self, clockwise: bool) -> bool {
        let Some(active) = self.active else {
            return false;
        };

        // O piece doesn't rotate
        if active.kind == PieceKind::O {
            return false;
        }

        let result = try_rotate(
            active.kind,
            active.rotation,
            active.x,
            active.y,
            clockwise,
            |x, y| self.board.is_valid(x, y),
        );
        let Some((_shape, new_rotation, (dx, dy))) = result else {
            return false;
        };

        self.active = Some(Tetromino {
            rotation: new_rotation,
            x: active.x + dx,
            y: active.y + dy,
            ..active
        });

        if self.is_grounded() {
            self.reset_lock_timer();
        } else {
            self.lock_timer_ms = 0;
            self.lock_reset_count = 0;
        }

        true
    }

    /// Reset the lock timer, bounded so a grounded piece cannot stall
    /// forever by wiggling in place
    fn reset_lock_timer(&mut self) {
        if self.lock_reset_count < LOCK_RESET_LIMIT {
            self.lock_timer_ms = 0;
            self.lock_reset_count += 1;
        }
    }

    /// Rows the piece can fall before hitting support
    fn drop_distance(&self, piece: &Tetromino) -> i8 {
        let shape = piece.shape();
        let mut distance: i8 = 0;

        loop {
            let can_drop = shape
                .iter()
                .all(|&(dx, dy)| self.board.is_valid(piece.x + dx, piece.y + dy + distance + 1));
            if can_drop {
                distance += 1;
            } else {
                break;
            }
        }

        distance
    }

    /// Write the active piece into the board, clear lines, score, respawn
    fn lock_active(&mut self) {
        let Some(active) = self.active.take() else {
            return;
        };

        self.board
            .lock_piece(&active.shape(), active.x, active.y, active.kind);

        let cleared = self.board.clear_full_rows();
        if !cleared.is_empty() {
            self.lines += cleared.len() as u32;
            self.level = level_for_lines(self.lines);
            self.score += score_for_lines(cleared.len(), self.level);
        }

        self.spawn_piece();
    }

    /// Pop the next piece from the queue and place it at the spawn origin
    ///
    /// A collision at spawn ends the game; no further pieces are produced
    /// until restart.
    fn spawn_piece(&mut self) {
        let kind = self.bag.draw();
        let piece = Tetromino::new(kind);
        self.next_preview = self.bag.peek_preview();

        self.fall_timer_ms = 0;
        self.lock_timer_ms = 0;
        self.lock_reset_count = 0;
        self.can_hold = true;

        if piece.is_valid(&self.board) {
            self.active = Some(piece);
        } else {
            self.active = None;
            self.status = GameStatus::Lost;
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(1)
    }
}
