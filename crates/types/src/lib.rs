//! Shared types and constants for the blockfall engine
//!
//! Pure data with no dependencies, usable from the engine core, tests, and
//! any presentation host.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Height**: 20 rows (indexed 0-19, top to bottom)
//! - **Spawn position**: (3, 0), rotation [`Rotation::North`]
//!
//! # Timing
//!
//! All durations are in milliseconds. The host feeds elapsed frame time into
//! the engine; the engine never reads a clock of its own.
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `LOCK_DELAY_MS` | 450 | Rest time before a grounded piece locks |
//! | `LOCK_RESET_LIMIT` | 15 | Max lock timer resets per piece |
//! | `FALL_INTERVALS_MS` | 1000..160 | Gravity interval per level |
//! | `FALL_INTERVAL_FLOOR_MS` | 120 | Gravity floor past the table |

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Number of upcoming pieces exposed on the preview surface
pub const NEXT_PREVIEW: usize = 3;

/// Lock delay when a piece is grounded (milliseconds)
pub const LOCK_DELAY_MS: u32 = 450;

/// Maximum number of lock timer resets per piece
pub const LOCK_RESET_LIMIT: u8 = 15;

/// Gravity interval by level, milliseconds per row
///
/// Index 0 = level 0, index 8 = level 8.
pub const FALL_INTERVALS_MS: [u32; 9] = [1000, 800, 650, 500, 400, 320, 250, 200, 160];

/// Gravity interval for every level past the table (milliseconds)
pub const FALL_INTERVAL_FLOOR_MS: u32 = 120;

/// Cleared lines needed to advance one level
pub const LINES_PER_LEVEL: u32 = 10;

/// Line clear scoring table
///
/// Base points for clearing N lines at level 0:
/// - 1 line: 40 points
/// - 2 lines: 100 points
/// - 3 lines: 300 points
/// - 4 lines: 1200 points
///
/// Points are multiplied by (level + 1) at higher levels.
pub const LINE_SCORES: [u32; 5] = [0, 40, 100, 300, 1200];

/// The seven tetromino piece kinds
///
/// Each kind carries a fixed color identifier (see [`PieceKind::color_id`]):
/// - **I**: 1 (cyan), horizontal bar
/// - **O**: 2 (yellow), 2x2 square
/// - **T**: 3 (purple), T-shaped
/// - **S**: 4 (green), S-shaped
/// - **Z**: 5 (red), mirror of S
/// - **J**: 6 (blue), J-shaped
/// - **L**: 7 (orange), mirror of J
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All seven kinds, in color-id order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Color identifier in 1..=7; 0 is reserved for the empty cell
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::I.color_id(), 1);
    /// assert_eq!(PieceKind::L.color_id(), 7);
    /// ```
    pub fn color_id(self) -> u8 {
        match self {
            PieceKind::I => 1,
            PieceKind::O => 2,
            PieceKind::T => 3,
            PieceKind::S => 4,
            PieceKind::Z => 5,
            PieceKind::J => 6,
            PieceKind::L => 7,
        }
    }
}

/// Rotation states (North = spawn orientation)
///
/// The clockwise cycle is North → East → South → West → North.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// Rotate clockwise (90°)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::Rotation;
    ///
    /// assert_eq!(Rotation::North.rotate_cw(), Rotation::East);
    /// assert_eq!(Rotation::West.rotate_cw(), Rotation::North);
    /// ```
    pub fn rotate_cw(self) -> Self {
        match self {
            Rotation::North => Rotation::East,
            Rotation::East => Rotation::South,
            Rotation::South => Rotation::West,
            Rotation::West => Rotation::North,
        }
    }

    /// Rotate counter-clockwise (-90°)
    pub fn rotate_ccw(self) -> Self {
        match self {
            Rotation::North => Rotation::West,
            Rotation::West => Rotation::South,
            Rotation::South => Rotation::East,
            Rotation::East => Rotation::North,
        }
    }

    /// Table index for this rotation state (North=0 .. West=3)
    pub fn index(self) -> usize {
        match self {
            Rotation::North => 0,
            Rotation::East => 1,
            Rotation::South => 2,
            Rotation::West => 3,
        }
    }
}

/// Overall game status
///
/// `Lost` is terminal: every command except restart becomes a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Running,
    Lost,
}

/// A cell on the game board
///
/// - `None`: empty cell
/// - `Some(PieceKind)`: cell locked by the given piece kind
pub type Cell = Option<PieceKind>;
