//! Core types module - shared data structures and constants
//!
//! Every other crate in the workspace speaks in these types: the core state
//! machine, the session driver and the terminal front-end. They are plain data
//! with no behaviour beyond small conversions, so any layer can use them.
//!
//! # Coordinates
//!
//! Cells are addressed as `(row, col)`:
//!
//! - **row** grows downwards, `0..height`
//! - **col** grows to the right, `0..width`
//!
//! The default board is 12 columns wide and 22 rows tall. Every board rotation
//! swaps the two, so the same game alternates between 12x22 and 22x12.
//!
//! # Orientation
//!
//! The whole board turns 90° clockwise after every lock and the gravity
//! direction turns with it:
//!
//! | Orientation | Gravity | Spawn edge | Swept lines |
//! |-------------|---------|------------|-------------|
//! | `Down`  | row + 1 | top    | rows    |
//! | `Left`  | col - 1 | right  | columns |
//! | `Up`    | row - 1 | bottom | rows    |
//! | `Right` | col + 1 | left   | columns |
//!
//! # Examples
//!
//! ```
//! use spintris_types::{Command, Direction, Orientation, ShapeKind};
//!
//! let o = Orientation::Down;
//! assert_eq!(o.next_clockwise(), Orientation::Left);
//! assert_eq!(o.gravity(), Direction::Down);
//!
//! assert_eq!(ShapeKind::from_str("cross"), Some(ShapeKind::Cross));
//! assert_eq!(Command::from_str("hardDrop"), Some(Command::HardDrop));
//! ```

/// Default board width in columns.
pub const DEFAULT_BOARD_WIDTH: usize = 12;

/// Default board height in rows.
pub const DEFAULT_BOARD_HEIGHT: usize = 22;

/// Depth of the spawn band next to the spawn edge.
///
/// The line right after the band is the game-over sentinel. The band must be
/// at least as deep as the largest piece is long.
pub const SPAWN_MARGIN: usize = 4;

/// Rotate commands arriving sooner than this after the last rotation are dropped.
pub const ROTATE_COOLDOWN_MS: u32 = 50;

/// Fixed timestep of the session driver (~60 Hz).
pub const TICK_MS: u32 = 16;

/// Line clear points at level 1, indexed by lines cleared in one lock.
///
/// More than four lines in one lock award nothing.
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

/// Points per cell travelled by a hard drop.
pub const HARD_DROP_POINTS_PER_CELL: u32 = 2;

/// Score needed per level step (`level = score / 1000 + 1`).
pub const POINTS_PER_LEVEL: u32 = 1000;

/// Gravity interval by level (index 0 = level 1).
pub const GRAVITY_INTERVALS_MS: [u32; 9] = [800, 700, 600, 500, 400, 320, 250, 200, 160];

/// Gravity interval once the table runs out.
pub const GRAVITY_INTERVAL_FLOOR_MS: u32 = 120;

/// A board coordinate.
///
/// Signed so that candidate positions one step outside the board can be
/// represented and rejected by bounds checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pos {
    pub row: i16,
    pub col: i16,
}

impl Pos {
    pub const fn new(row: i16, col: i16) -> Self {
        Self { row, col }
    }

    /// The neighbouring position one step in `dir`.
    pub fn step(self, dir: Direction) -> Self {
        let (dr, dc) = dir.delta();
        Self {
            row: self.row + dr,
            col: self.col + dc,
        }
    }
}

/// 24-bit RGB color carried by shape templates and locked cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// A cell on the board: `None` is empty, `Some(color)` is occupied.
pub type Cell = Option<Color>;

/// One-step translation direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Down,
    Left,
    Right,
    Up,
}

impl Direction {
    /// `(row, col)` offset of one step.
    pub fn delta(self) -> (i16, i16) {
        match self {
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
            Direction::Up => (-1, 0),
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
        }
    }

    /// Parse direction from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "down" | "d" => Some(Direction::Down),
            "left" | "l" => Some(Direction::Left),
            "right" | "r" => Some(Direction::Right),
            "up" | "u" => Some(Direction::Up),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Up => "up",
        }
    }
}

/// Sense of a piece rotation about its pivot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ClockDirection {
    Clockwise,
    CounterClockwise,
}

impl ClockDirection {
    pub fn reverse(self) -> Self {
        match self {
            ClockDirection::Clockwise => ClockDirection::CounterClockwise,
            ClockDirection::CounterClockwise => ClockDirection::Clockwise,
        }
    }
}

/// Which family of lines a sweep or sentinel refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    Row,
    Col,
}

/// Gravity orientation of the whole board.
///
/// The cycle is `Down -> Left -> Up -> Right -> Down`, one step per board
/// rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    #[default]
    Down,
    Left,
    Up,
    Right,
}

impl Orientation {
    /// Orientation after one clockwise board rotation.
    ///
    /// # Examples
    ///
    /// ```
    /// use spintris_types::Orientation;
    ///
    /// assert_eq!(Orientation::Down.next_clockwise(), Orientation::Left);
    /// assert_eq!(Orientation::Left.next_clockwise(), Orientation::Up);
    /// assert_eq!(Orientation::Up.next_clockwise(), Orientation::Right);
    /// assert_eq!(Orientation::Right.next_clockwise(), Orientation::Down);
    /// ```
    pub fn next_clockwise(self) -> Self {
        match self {
            Orientation::Down => Orientation::Left,
            Orientation::Left => Orientation::Up,
            Orientation::Up => Orientation::Right,
            Orientation::Right => Orientation::Down,
        }
    }

    /// Direction gravity pushes the active piece.
    pub fn gravity(self) -> Direction {
        match self {
            Orientation::Down => Direction::Down,
            Orientation::Left => Direction::Left,
            Orientation::Up => Direction::Up,
            Orientation::Right => Direction::Right,
        }
    }

    /// Axis of the lines checked for completion.
    pub fn sweep_axis(self) -> Axis {
        match self {
            Orientation::Down | Orientation::Up => Axis::Row,
            Orientation::Left | Orientation::Right => Axis::Col,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Orientation::Down => "down",
            Orientation::Left => "left",
            Orientation::Up => "up",
            Orientation::Right => "right",
        }
    }
}

/// The nine piece shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ShapeKind {
    /// One cell.
    Single,
    /// Two-cell bar.
    Bar2,
    /// Three-cell bar.
    Bar3,
    /// Three-cell corner.
    Vee,
    /// Five-cell plus sign.
    Cross,
    /// Two cells with a gap between them.
    Split,
    /// Pentomino hook, long arm to the right.
    HookLeft,
    /// Mirror of [`ShapeKind::HookLeft`].
    HookRight,
    /// 2x3 rectangle.
    Block,
}

impl ShapeKind {
    /// All kinds in catalog order.
    pub const ALL: [ShapeKind; 9] = [
        ShapeKind::Single,
        ShapeKind::Bar2,
        ShapeKind::Bar3,
        ShapeKind::Vee,
        ShapeKind::Cross,
        ShapeKind::Split,
        ShapeKind::HookLeft,
        ShapeKind::HookRight,
        ShapeKind::Block,
    ];

    /// Position in [`ShapeKind::ALL`].
    pub fn index(self) -> usize {
        match self {
            ShapeKind::Single => 0,
            ShapeKind::Bar2 => 1,
            ShapeKind::Bar3 => 2,
            ShapeKind::Vee => 3,
            ShapeKind::Cross => 4,
            ShapeKind::Split => 5,
            ShapeKind::HookLeft => 6,
            ShapeKind::HookRight => 7,
            ShapeKind::Block => 8,
        }
    }

    /// Parse shape kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use spintris_types::ShapeKind;
    ///
    /// assert_eq!(ShapeKind::from_str("Vee"), Some(ShapeKind::Vee));
    /// assert_eq!(ShapeKind::from_str("hook-right"), Some(ShapeKind::HookRight));
    /// assert_eq!(ShapeKind::from_str("tetromino"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        ShapeKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::Single => "single",
            ShapeKind::Bar2 => "bar2",
            ShapeKind::Bar3 => "bar3",
            ShapeKind::Vee => "vee",
            ShapeKind::Cross => "cross",
            ShapeKind::Split => "split",
            ShapeKind::HookLeft => "hook-left",
            ShapeKind::HookRight => "hook-right",
            ShapeKind::Block => "block",
        }
    }
}

/// Lifecycle phase of the gravity scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    /// Created but not started.
    #[default]
    Idle,
    /// A piece is in play and gravity ticks move it.
    Falling,
    /// The active piece is being committed; transient within one step.
    Locking,
    /// Terminal until restart.
    GameOver,
}

/// Commands consumed from the input layer.
///
/// Ticks are not commands: the session driver feeds elapsed time separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Command {
    /// Translate the active piece one cell.
    Move(Direction),
    /// Rotate the active piece about its pivot (subject to cooldown).
    Rotate(ClockDirection),
    /// Drop along gravity until blocked, then lock.
    HardDrop,
    /// Discard the active piece and run the board rotation sequence.
    RotateBoard,
    /// Toggle pause.
    Pause,
    /// Reset the board and start over.
    Restart,
}

impl Command {
    /// Parse command from its camelCase name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use spintris_types::{ClockDirection, Command, Direction};
    ///
    /// assert_eq!(Command::from_str("moveLeft"), Some(Command::Move(Direction::Left)));
    /// assert_eq!(Command::from_str("rotateCcw"), Some(Command::Rotate(ClockDirection::CounterClockwise)));
    /// assert_eq!(Command::from_str("rotateBoard"), Some(Command::RotateBoard));
    /// assert_eq!(Command::from_str("hold"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(Command::Move(Direction::Left)),
            "moveright" => Some(Command::Move(Direction::Right)),
            "movedown" => Some(Command::Move(Direction::Down)),
            "moveup" => Some(Command::Move(Direction::Up)),
            "rotatecw" => Some(Command::Rotate(ClockDirection::Clockwise)),
            "rotateccw" => Some(Command::Rotate(ClockDirection::CounterClockwise)),
            "harddrop" => Some(Command::HardDrop),
            "rotateboard" => Some(Command::RotateBoard),
            "pause" => Some(Command::Pause),
            "restart" => Some(Command::Restart),
            _ => None,
        }
    }

    /// Convert to camelCase name
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::Move(Direction::Left) => "moveLeft",
            Command::Move(Direction::Right) => "moveRight",
            Command::Move(Direction::Down) => "moveDown",
            Command::Move(Direction::Up) => "moveUp",
            Command::Rotate(ClockDirection::Clockwise) => "rotateCw",
            Command::Rotate(ClockDirection::CounterClockwise) => "rotateCcw",
            Command::HardDrop => "hardDrop",
            Command::RotateBoard => "rotateBoard",
            Command::Pause => "pause",
            Command::Restart => "restart",
        }
    }
}

/// Notifications raised by the core for observers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameEvent {
    PieceCreated {
        kind: ShapeKind,
    },
    LinesCleared {
        count: u32,
        points: u32,
    },
    BoardRotated {
        orientation: Orientation,
        width: usize,
        height: usize,
    },
    GameOver {
        score: u32,
    },
}
