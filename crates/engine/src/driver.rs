//! Command queue and gravity delivery for one game.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use blockfall_core::{GameState, SimpleRng};
use blockfall_types::{Command, DROP_MS_FAST};

/// Observable state transition
///
/// For collaborators that react to moments rather than state - the audio
/// layer's notification points: loop start on a new game, suspend/resume
/// around pause, and the terminal cue chosen by the win flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Transition {
    /// A new game began (construction or reset)
    LoopStarted,
    LoopPaused,
    LoopResumed,
    Won,
    Lost,
}

/// Single-threaded worker around one [`GameState`]
///
/// Commands are processed strictly in arrival order; nothing here suspends,
/// and nothing mutates the state from anywhere else.
#[derive(Debug)]
pub struct GameDriver {
    state: GameState,
    queue: VecDeque<Command>,
    soft_drop_held: bool,
    transitions: Vec<Transition>,
}

impl GameDriver {
    /// Create a driver around a fresh seeded game
    pub fn new(seed: u32) -> Self {
        Self::with_state(GameState::new(seed))
    }

    /// Create a driver from an injected random source
    pub fn with_rng(rng: SimpleRng) -> Self {
        Self::with_state(GameState::with_rng(rng))
    }

    /// Wrap an already-prepared game state
    pub fn with_state(state: GameState) -> Self {
        Self {
            state,
            queue: VecDeque::new(),
            soft_drop_held: false,
            transitions: vec![Transition::LoopStarted],
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The owner's mutable access, for setup and tests
    ///
    /// External collaborators get snapshots, never this; the driver's owner
    /// is the one mutator thread.
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    /// Enqueue a command; nothing executes until [`Self::drain`]
    pub fn push(&mut self, command: Command) {
        self.queue.push_back(command);
    }

    /// Number of commands waiting
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Apply every queued command strictly in arrival order
    ///
    /// Returns how many commands ran.
    pub fn drain(&mut self) -> usize {
        let mut applied = 0;
        while let Some(command) = self.queue.pop_front() {
            self.apply(command);
            applied += 1;
        }
        applied
    }

    /// Apply one command immediately
    pub fn apply(&mut self, command: Command) {
        let was_over = self.state.is_game_over();
        match command {
            Command::MoveLeft => self.state.move_left(),
            Command::MoveRight => self.state.move_right(),
            Command::RotateCw => self.state.rotate_cw(),
            Command::SoftDrop => {
                self.state.soft_drop_once();
            }
            Command::HardDrop => self.state.hard_drop(),
            Command::TogglePause => {
                let was_paused = self.state.is_paused();
                self.state.toggle_pause();
                if self.state.is_paused() != was_paused {
                    self.transitions.push(if self.state.is_paused() {
                        Transition::LoopPaused
                    } else {
                        Transition::LoopResumed
                    });
                }
            }
            Command::Reset => {
                self.soft_drop_held = false;
                self.state.reset();
                self.transitions.push(Transition::LoopStarted);
            }
        }
        self.note_terminal(was_over);
    }

    /// Deliver one gravity step
    ///
    /// No tick is delivered while paused: pausing stops the timer source at
    /// this layer too, rather than leaning on the state machine's internal
    /// guard alone.
    pub fn tick(&mut self) -> bool {
        if self.state.is_paused() {
            return false;
        }
        let was_over = self.state.is_game_over();
        let moved = self.state.step_gravity();
        self.note_terminal(was_over);
        moved
    }

    /// The accelerated-drop key went down
    pub fn soft_drop_hold(&mut self) {
        self.soft_drop_held = true;
    }

    /// The accelerated-drop key came back up
    pub fn soft_drop_release(&mut self) {
        self.soft_drop_held = false;
    }

    pub fn is_soft_drop_held(&self) -> bool {
        self.soft_drop_held
    }

    /// Interval the external gravity timer must run at right now
    ///
    /// Re-read after every drain, tick, hold or release; a lock may have
    /// changed the level and with it the interval.
    pub fn gravity_interval_ms(&self) -> u32 {
        if self.soft_drop_held {
            DROP_MS_FAST
        } else {
            self.state.drop_delay_ms()
        }
    }

    /// Drain accumulated transition notifications, oldest first
    pub fn take_transitions(&mut self) -> Vec<Transition> {
        std::mem::take(&mut self.transitions)
    }

    fn note_terminal(&mut self, was_over: bool) {
        if !was_over && self.state.is_game_over() {
            self.transitions.push(if self.state.is_win() {
                Transition::Won
            } else {
                Transition::Lost
            });
        }
    }
}
