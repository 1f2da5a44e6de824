//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and
//! simulation logic. It has **zero dependencies** on UI, audio, or I/O,
//! making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Comprehensive unit tests for all game rules
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`board`]: 20x10 locked-cell grid with collision probing and line
//!   clearing
//! - [`game_state`]: the state machine - spawning, movement, rotation,
//!   locking, scoring, pause and terminal detection
//! - [`shapes`]: the seven canonical piece masks, built from textual seeds
//! - [`rng`]: seeded uniform piece selection for deterministic replay
//! - [`scoring`]: pure scoring, leveling and gravity-speed functions
//! - [`snapshot`]: immutable serializable copies of the observable state
//!
//! # Game Rules
//!
//! - **Uniform randomizer**: each spawn draws uniformly from the 7 kinds
//! - **Reduced wall kick**: a blocked rotation retries one column left,
//!   then one column right, at the same row; otherwise it is rejected
//! - **Gravity lock**: a gravity step blocked directly below locks the
//!   piece; horizontal blockage never locks
//! - **Scoring**: 100/300/500/800 points for 1-4 lines in one lock
//! - **Leveling**: level 1 + lines/10; gravity speeds up 50ms per level
//!   from 550ms down to a 90ms floor
//! - **Win**: 40 cumulative cleared lines; **loss**: lock-out or block-out
//!
//! # Example
//!
//! ```
//! use blockfall_core::GameState;
//!
//! // Create a game; the first piece is already spawned.
//! let mut game = GameState::new(12345);
//!
//! game.move_left();
//! game.rotate_cw();
//! game.hard_drop();
//!
//! // The piece locked into the board.
//! let filled = game.board().cells().iter().filter(|c| c.is_some()).count();
//! assert_eq!(filled, 4);
//! ```

pub mod board;
pub mod game_state;
pub mod rng;
pub mod scoring;
pub mod shapes;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use game_state::{GameState, Piece};
pub use rng::{PiecePicker, SimpleRng};
pub use shapes::{mask, rotations_from_seed, ShapeMask, ShapeTable};
pub use snapshot::{GameSnapshot, PieceSnapshot};
