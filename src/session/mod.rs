//! Puzzle session state machine and puzzle selection

mod game;
mod selection;
mod state;

pub use game::{Game, GameConfig, Mode};
pub use selection::{daily_index, date_key, shuffle_index};
pub use state::{DEFAULT_FEEDBACK, LadderStep, Session, SessionState, SubmitOutcome};
