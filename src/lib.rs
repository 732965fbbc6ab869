//! Chainmail
//!
//! A word ladder game: change one letter at a time to get from the start word
//! to the end word, with a date-seeded daily puzzle and a shuffle mode.
//!
//! # Quick Start
//!
//! ```rust
//! use chainmail::core::Puzzle;
//! use chainmail::session::{DEFAULT_FEEDBACK, Session, SubmitOutcome};
//!
//! let puzzle = Puzzle::new("cat", "dog", "cat,cot,cog,dog", None);
//! let mut session = Session::new(puzzle, DEFAULT_FEEDBACK);
//!
//! for ch in "cot".chars() {
//!     session.type_char(ch);
//! }
//! assert_eq!(session.submit(), SubmitOutcome::Accepted("cot".to_string()));
//! assert_eq!(session.ladder(), ["cat", "cot"]);
//! ```

// Core domain types
pub mod core;

// Chain dataset
pub mod dataset;

// Puzzle session state machine
pub mod session;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
