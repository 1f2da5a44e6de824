//! Game state module - the player-facing state machine
//!
//! Owns the board, the current and next piece, and the progress counters
//! (score, cleared lines, level, gravity interval, pause/over/win flags).
//! Every player command and the gravity tick land here; all operations are
//! synchronous and run on a single logical thread. Illegal commands are
//! silently rejected, and the two fatal conditions - lock-out and block-out
//! - are state transitions to `game_over`, never errors.

use blockfall_types::{Cell, PieceKind, Rgb, BOARD_COLUMNS, DROP_MS_START, PALETTE, WIN_LINES};

use crate::board::Board;
use crate::rng::{PiecePicker, SimpleRng};
use crate::scoring::{drop_delay_for_level, level_for_lines, line_clear_points};
use crate::shapes::{self, ShapeMask};
use crate::snapshot::{GameSnapshot, PieceSnapshot};

/// Active falling piece
///
/// (row, col) is the top-left corner of the current rotation's bounding
/// box on the board grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub rot: u8,
    pub row: i8,
    pub col: i8,
}

impl Piece {
    /// A fresh piece at its spawn placement: rotation 0, top row,
    /// horizontally centered for the rotation-0 bounding box
    pub fn spawn(kind: PieceKind) -> Self {
        let width = shapes::mask(kind, 0).width();
        Self {
            kind,
            rot: 0,
            row: 0,
            col: ((BOARD_COLUMNS - width) / 2) as i8,
        }
    }

    /// Mask of the current rotation
    pub fn mask(&self) -> &'static ShapeMask {
        shapes::mask(self.kind, self.rot)
    }

    /// Occupied cells as absolute (row, col) board coordinates
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> {
        let (row, col) = (self.row, self.col);
        self.mask()
            .cells()
            .map(move |(r, c)| (row + r as i8, col + c as i8))
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    cur: Piece,
    next: Piece,
    picker: PiecePicker,
    paused: bool,
    game_over: bool,
    win: bool,
    score: u32,
    lines_cleared: u32,
    level: u32,
    drop_delay_ms: u32,
}

impl GameState {
    /// Create a new game with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self::with_rng(SimpleRng::new(seed))
    }

    /// Create a new game from an injected random source
    ///
    /// Deterministic replay: the same source state produces the same piece
    /// sequence.
    pub fn with_rng(rng: SimpleRng) -> Self {
        let mut state = Self {
            board: Board::new(),
            // Both pieces are redrawn by the reset below.
            cur: Piece::spawn(PieceKind::I),
            next: Piece::spawn(PieceKind::I),
            picker: PiecePicker::from_rng(rng),
            paused: false,
            game_over: false,
            win: false,
            score: 0,
            lines_cleared: 0,
            level: 1,
            drop_delay_ms: DROP_MS_START,
        };
        state.reset();
        state
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Type-index to display-color table for renderers
    pub fn palette(&self) -> &'static [Rgb; 7] {
        &PALETTE
    }

    pub fn current(&self) -> &Piece {
        &self.cur
    }

    pub fn next(&self) -> &Piece {
        &self.next
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn is_win(&self) -> bool {
        self.win
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines_cleared(&self) -> u32 {
        self.lines_cleared
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    /// Current gravity interval in milliseconds
    ///
    /// The external gravity timer must be reprogrammed to this value after
    /// every mutating call; a lock may have changed the level.
    pub fn drop_delay_ms(&self) -> u32 {
        self.drop_delay_ms
    }

    /// Re-initialize everything and draw two fresh pieces
    ///
    /// Always permitted, including while paused or after game over. A spawn
    /// collision on the fresh board still transitions to game over instead
    /// of being ignored (degenerate, normally unreachable).
    pub fn reset(&mut self) {
        self.board.clear();
        self.score = 0;
        self.lines_cleared = 0;
        self.level = 1;
        self.drop_delay_ms = DROP_MS_START;
        self.paused = false;
        self.game_over = false;
        self.win = false;
        self.cur = Piece::spawn(self.picker.next_kind());
        self.next = Piece::spawn(self.picker.next_kind());
        if self.collides_at(self.cur.kind, self.cur.rot, self.cur.row, self.cur.col) {
            self.game_over = true;
        }
    }

    /// One gravity step: move the current piece down a row
    ///
    /// Returns true when the piece moved. When the cell directly below
    /// blocks it, the piece locks instead and the call returns false.
    /// Returning false with no movement and no lock is the explicit
    /// contract for the remaining branch, which the lock fallback makes
    /// unreachable in practice.
    pub fn step_gravity(&mut self) -> bool {
        if self.paused || self.game_over {
            return false;
        }
        self.try_move(self.cur.row + 1, self.cur.col, self.cur.rot, true)
    }

    /// Accelerated-drop step; identical mechanics to [`Self::step_gravity`],
    /// separate entry point for the input collaborator
    pub fn soft_drop_once(&mut self) -> bool {
        self.step_gravity()
    }

    /// Shift one column left; silent no-op when blocked
    pub fn move_left(&mut self) {
        if self.paused || self.game_over {
            return;
        }
        self.try_move(self.cur.row, self.cur.col - 1, self.cur.rot, false);
    }

    /// Shift one column right; silent no-op when blocked
    pub fn move_right(&mut self) {
        if self.paused || self.game_over {
            return;
        }
        self.try_move(self.cur.row, self.cur.col + 1, self.cur.rot, false);
    }

    /// Drop to the floor and lock immediately, bypassing the gravity timer
    pub fn hard_drop(&mut self) {
        if self.paused || self.game_over {
            return;
        }
        while !self.collides_at(self.cur.kind, self.cur.rot, self.cur.row + 1, self.cur.col) {
            self.cur.row += 1;
        }
        self.lock_piece();
    }

    /// Rotate clockwise with the reduced wall-kick fallback
    ///
    /// Tries the next rotation in place, then shifted one column left, then
    /// one column right; the first fit wins and anything else rejects the
    /// rotation, leaving the piece untouched. No floor kick, no kick table.
    pub fn rotate_cw(&mut self) {
        if self.paused || self.game_over {
            return;
        }
        let new_rot = (self.cur.rot + 1) % 4;
        if !self.collides_at(self.cur.kind, new_rot, self.cur.row, self.cur.col) {
            self.cur.rot = new_rot;
        } else if !self.collides_at(self.cur.kind, new_rot, self.cur.row, self.cur.col - 1) {
            self.cur.col -= 1;
            self.cur.rot = new_rot;
        } else if !self.collides_at(self.cur.kind, new_rot, self.cur.row, self.cur.col + 1) {
            self.cur.col += 1;
            self.cur.rot = new_rot;
        }
    }

    /// Flip the paused flag (ignored once the game is over)
    pub fn toggle_pause(&mut self) {
        if !self.game_over {
            self.paused = !self.paused;
        }
    }

    /// Fill a reusable snapshot with the full observable state
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_u8_grid(&mut out.board);
        out.current = PieceSnapshot::from(self.cur);
        out.next_kind = self.next.kind;
        out.paused = self.paused;
        out.game_over = self.game_over;
        out.win = self.win;
        out.score = self.score;
        out.lines_cleared = self.lines_cleared;
        out.level = self.level;
        out.drop_delay_ms = self.drop_delay_ms;
    }

    /// Immutable copy of the full observable state
    pub fn snapshot(&self) -> GameSnapshot {
        let mut out = GameSnapshot::default();
        self.snapshot_into(&mut out);
        out
    }

    /// Test support: replace the active piece wholesale
    pub fn set_current_for_test(&mut self, kind: PieceKind, rot: u8, row: i8, col: i8) {
        self.cur = Piece { kind, rot, row, col };
    }

    /// Test support: write a board cell directly
    pub fn set_cell(&mut self, row: i8, col: i8, cell: Cell) -> bool {
        self.board.set(row, col, cell)
    }

    fn collides_at(&self, kind: PieceKind, rot: u8, row: i8, col: i8) -> bool {
        shapes::mask(kind, rot)
            .cells()
            .any(|(r, c)| self.board.is_blocked(row + r as i8, col + c as i8))
    }

    /// Apply a placement if it fits
    ///
    /// A blocked vertical step (target one row down, same column) locks the
    /// piece when the caller asked for it; horizontal blockage never locks.
    fn try_move(&mut self, new_row: i8, new_col: i8, new_rot: u8, lock_if_blocked: bool) -> bool {
        if !self.collides_at(self.cur.kind, new_rot, new_row, new_col) {
            self.cur.row = new_row;
            self.cur.col = new_col;
            self.cur.rot = new_rot;
            return true;
        }
        if lock_if_blocked && new_row == self.cur.row + 1 && new_col == self.cur.col {
            self.lock_piece();
        }
        false
    }

    /// Commit the current piece into the board and advance the game
    ///
    /// Cells outside the vertical bounds flip `game_over` (lock-out)
    /// instead of being written. Then lines clear, the win threshold is
    /// checked, the event is scored, level and gravity interval are
    /// recomputed, and - unless the game ended - the next piece spawns.
    fn lock_piece(&mut self) {
        for (row, col) in self.cur.cells() {
            if !self.board.place(row, col, self.cur.kind) {
                // Lock-out: part of the piece never entered the board.
                self.game_over = true;
            }
        }

        let cleared = self.board.clear_full_rows().len();
        self.lines_cleared += cleared as u32;
        if self.lines_cleared >= WIN_LINES {
            self.win = true;
            self.game_over = true;
        }

        self.score += line_clear_points(cleared);
        let new_level = level_for_lines(self.lines_cleared);
        if new_level != self.level {
            self.level = new_level;
            self.drop_delay_ms = drop_delay_for_level(new_level);
        }

        if !self.game_over {
            self.spawn_next();
        }
    }

    /// Promote the preview piece and draw a fresh one
    fn spawn_next(&mut self) {
        self.cur = std::mem::replace(&mut self.next, Piece::spawn(self.picker.next_kind()));
        if self.collides_at(self.cur.kind, self.cur.rot, self.cur.row, self.cur.col) {
            // Block-out: the fresh piece overlaps locked cells.
            self.game_over = true;
        }
    }
}
