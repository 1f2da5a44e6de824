//! Game state scenario tests
//!
//! End-to-end checks of the state machine's observable behavior: drops,
//! locks, clears, scoring, leveling, the win lock-down and the reduced
//! rotation fallback.

use blockfall::core::GameState;
use blockfall::types::{PieceKind, BOARD_COLUMNS, DROP_MS_START, WIN_LINES};

/// Fill row 19 except the four leftmost columns, ready for a flat I drop.
fn fill_bottom_row_except_left_gap(state: &mut GameState) {
    for col in 4..BOARD_COLUMNS as i8 {
        state.set_cell(19, col, Some(PieceKind::S));
    }
}

#[test]
fn test_o_piece_hard_drop_rests_on_floor() {
    let mut state = GameState::new(100);
    state.set_current_for_test(PieceKind::O, 0, 0, 4);

    state.hard_drop();

    // The 2x2 box locked at rows 18-19, columns 4-5.
    for (row, col) in [(18, 4), (18, 5), (19, 4), (19, 5)] {
        assert_eq!(state.board().get(row, col), Some(Some(PieceKind::O)));
    }
    assert_eq!(
        state.board().cells().iter().filter(|c| c.is_some()).count(),
        4
    );
    assert_eq!(state.lines_cleared(), 0);
    assert_eq!(state.score(), 0);
    assert!(!state.is_game_over());
}

#[test]
fn test_single_line_clear_scores_100() {
    let mut state = GameState::new(101);
    fill_bottom_row_except_left_gap(&mut state);
    state.set_current_for_test(PieceKind::I, 0, 0, 0);

    state.hard_drop();

    assert_eq!(state.lines_cleared(), 1);
    assert_eq!(state.score(), 100);
    assert!(state.board().cells().iter().all(|cell| cell.is_none()));
    assert!(!state.is_game_over());
}

#[test]
fn test_multi_line_scores_follow_bonus_curve() {
    // Four rows filled except column 0, cleared by one vertical I.
    let mut state = GameState::new(102);
    for row in 16..20 {
        for col in 1..BOARD_COLUMNS as i8 {
            state.set_cell(row, col, Some(PieceKind::J));
        }
    }
    state.set_current_for_test(PieceKind::I, 1, 0, 0);

    state.hard_drop();

    assert_eq!(state.lines_cleared(), 4);
    assert_eq!(state.score(), 800);
    assert!(state.board().cells().iter().all(|cell| cell.is_none()));
}

#[test]
fn test_ten_single_clears_reach_level_two() {
    let mut state = GameState::new(103);
    state.reset();
    for _ in 0..10 {
        fill_bottom_row_except_left_gap(&mut state);
        state.set_current_for_test(PieceKind::I, 0, 0, 0);
        state.hard_drop();
        assert!(!state.is_game_over());
    }
    assert_eq!(state.lines_cleared(), 10);
    assert_eq!(state.score(), 1000);
    assert_eq!(state.level(), 2);
    assert_eq!(state.drop_delay_ms(), 500);
}

#[test]
fn test_forty_lines_wins_and_freezes_the_board() {
    let mut state = GameState::new(104);
    for _ in 0..10 {
        for row in 16..20 {
            for col in 1..BOARD_COLUMNS as i8 {
                state.set_cell(row, col, Some(PieceKind::T));
            }
        }
        state.set_current_for_test(PieceKind::I, 1, 0, 0);
        state.hard_drop();
    }

    assert_eq!(state.lines_cleared(), WIN_LINES);
    assert!(state.is_win());
    assert!(state.is_game_over());

    // No further mutating call may change the board.
    let board_before = state.board().clone();
    let piece_before = *state.current();
    state.move_left();
    state.move_right();
    state.rotate_cw();
    state.hard_drop();
    assert!(!state.step_gravity());
    assert!(!state.soft_drop_once());
    state.toggle_pause();
    assert!(!state.is_paused());
    assert_eq!(state.board(), &board_before);
    assert_eq!(*state.current(), piece_before);
    assert!(state.is_win());
}

#[test]
fn test_moves_preserve_row_gravity_preserves_column() {
    let mut state = GameState::new(105);
    let row = state.current().row;

    state.move_left();
    assert_eq!(state.current().row, row);
    state.move_right();
    state.move_right();
    assert_eq!(state.current().row, row);

    let col = state.current().col;
    assert!(state.step_gravity());
    assert!(state.soft_drop_once());
    assert_eq!(state.current().col, col);
}

#[test]
fn test_rotation_rejected_flush_against_left_wall() {
    let mut state = GameState::new(106);
    // Vertical I on the wall; the flat rotation collides in place, the
    // left kick is off the board, and the right kick hits the blocker.
    state.set_current_for_test(PieceKind::I, 1, 10, 0);
    state.set_cell(10, 2, Some(PieceKind::Z));

    state.rotate_cw();

    assert_eq!(state.current().rot, 1);
    assert_eq!(state.current().row, 10);
    assert_eq!(state.current().col, 0);
}

#[test]
fn test_rotation_kicks_one_column_left_at_right_wall() {
    let mut state = GameState::new(107);
    // T pointing right, flush with the right wall; its flat rotation
    // overflows the board in place and fits one column to the left.
    state.set_current_for_test(PieceKind::T, 1, 10, 8);

    state.rotate_cw();

    assert_eq!(state.current().rot, 2);
    assert_eq!(state.current().row, 10);
    assert_eq!(state.current().col, 7);
}

#[test]
fn test_rotation_kicks_one_column_right_when_left_is_blocked() {
    let mut state = GameState::new(108);
    state.set_current_for_test(PieceKind::S, 1, 10, 4);
    // Blocks both the in-place rotation and the left kick, leaves the
    // right kick open.
    state.set_cell(10, 5, Some(PieceKind::J));

    state.rotate_cw();

    assert_eq!(state.current().rot, 2);
    assert_eq!(state.current().row, 10);
    assert_eq!(state.current().col, 5);
}

#[test]
fn test_soft_drop_locks_like_gravity() {
    let mut state = GameState::new(109);
    state.set_current_for_test(PieceKind::O, 0, 18, 4);

    assert!(!state.soft_drop_once());

    assert_eq!(state.board().get(19, 5), Some(Some(PieceKind::O)));
    assert_eq!(state.board().get(18, 4), Some(Some(PieceKind::O)));
}

#[test]
fn test_horizontal_blockage_never_locks() {
    let mut state = GameState::new(110);
    state.set_current_for_test(PieceKind::O, 0, 10, 0);
    state.set_cell(10, 2, Some(PieceKind::L));
    state.set_cell(11, 2, Some(PieceKind::L));

    // Blocked on the right by the stack, on the left by the wall; neither
    // may lock the piece.
    state.move_right();
    state.move_left();

    assert_eq!(state.current().row, 10);
    assert_eq!(state.current().col, 0);
    assert_eq!(
        state.board().cells().iter().filter(|c| c.is_some()).count(),
        2
    );
}

#[test]
fn test_block_out_on_spawn_ends_the_game() {
    let mut state = GameState::new(111);
    for col in 0..(BOARD_COLUMNS as i8 - 1) {
        state.set_cell(0, col, Some(PieceKind::J));
        state.set_cell(1, col, Some(PieceKind::J));
    }

    state.hard_drop();

    assert!(state.is_game_over());
    assert!(!state.is_win());
}

#[test]
fn test_reset_recovers_from_game_over() {
    let mut state = GameState::new(112);
    for col in 0..(BOARD_COLUMNS as i8 - 1) {
        state.set_cell(0, col, Some(PieceKind::J));
        state.set_cell(1, col, Some(PieceKind::J));
    }
    state.hard_drop();
    assert!(state.is_game_over());

    state.reset();

    assert!(!state.is_game_over());
    assert!(!state.is_win());
    assert_eq!(state.score(), 0);
    assert_eq!(state.lines_cleared(), 0);
    assert_eq!(state.level(), 1);
    assert_eq!(state.drop_delay_ms(), DROP_MS_START);
    assert!(state.board().cells().iter().all(|cell| cell.is_none()));
    assert!(state.step_gravity());
}
