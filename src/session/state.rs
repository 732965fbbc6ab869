//! Puzzle session state machine
//!
//! A session owns one puzzle, the ladder of words accepted so far, and the
//! letters currently being typed. All transitions are synchronous; the only
//! timed element is the rejection indication, which is a deadline owned by the
//! session and cleared by [`Session::tick`].

use crate::core::{Puzzle, changed_positions};
use std::time::{Duration, Instant};

/// How long a rejected submission stays flagged
pub const DEFAULT_FEEDBACK: Duration = Duration::from_millis(500);

/// Observable session state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Waiting for letters or a submission
    Entering,
    /// The last submission was refused; clears when the feedback deadline passes
    Rejected,
    /// The end word has been reached
    Won,
}

/// Result of a submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Word appended to the ladder
    Accepted(String),
    /// Word appended and it was the end word
    Won(String),
    /// At least one letter slot is empty
    Incomplete,
    /// Word is not part of the solution chain
    NotInChain(String),
    /// Word is already on the ladder
    AlreadyUsed(String),
    /// The puzzle is already solved; nothing changes
    AlreadyWon,
}

impl SubmitOutcome {
    /// Whether this outcome raised the rejection indication
    #[must_use]
    pub const fn is_rejection(&self) -> bool {
        matches!(
            self,
            Self::Incomplete | Self::NotInChain(_) | Self::AlreadyUsed(_)
        )
    }
}

/// One rung of the ladder with its change marks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LadderStep<'a> {
    pub word: &'a str,
    /// `true` where the letter differs from the previous rung
    pub changed: Vec<bool>,
}

/// A single play-through of one puzzle
#[derive(Debug, Clone)]
pub struct Session {
    puzzle: Puzzle,
    ladder: Vec<String>,
    pending: Vec<Option<char>>,
    focus: usize,
    won: bool,
    feedback_duration: Duration,
    feedback_until: Option<Instant>,
}

impl Session {
    /// Start a session with the ladder holding only the start word
    #[must_use]
    pub fn new(puzzle: Puzzle, feedback_duration: Duration) -> Self {
        let ladder = vec![puzzle.start_word().to_lowercase()];
        let pending = vec![None; puzzle.word_length()];

        Self {
            puzzle,
            ladder,
            pending,
            focus: 0,
            won: false,
            feedback_duration,
            feedback_until: None,
        }
    }

    #[inline]
    #[must_use]
    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    /// Accepted words, start word first
    #[inline]
    #[must_use]
    pub fn ladder(&self) -> &[String] {
        &self.ladder
    }

    /// Letters typed for the next word, one slot per letter
    #[inline]
    #[must_use]
    pub fn pending(&self) -> &[Option<char>] {
        &self.pending
    }

    /// Slot that receives the next typed letter
    #[inline]
    #[must_use]
    pub fn focus(&self) -> usize {
        self.focus
    }

    #[inline]
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.won
    }

    /// Whether the rejection indication is showing
    #[inline]
    #[must_use]
    pub fn is_rejected(&self) -> bool {
        self.feedback_until.is_some()
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        if self.won {
            SessionState::Won
        } else if self.is_rejected() {
            SessionState::Rejected
        } else {
            SessionState::Entering
        }
    }

    /// Every accepted word with the letters that changed from the word before
    #[must_use]
    pub fn ladder_steps(&self) -> Vec<LadderStep<'_>> {
        self.ladder
            .iter()
            .enumerate()
            .map(|(i, word)| {
                let previous = i.checked_sub(1).map(|p| self.ladder[p].as_str());
                LadderStep {
                    word,
                    changed: changed_positions(previous, word),
                }
            })
            .collect()
    }

    /// Store a letter in `position`
    ///
    /// Anything other than a single ASCII letter is ignored, as is input after
    /// the puzzle is won. On success focus moves to the next empty slot after
    /// `position`, or stays put if there is none.
    pub fn enter_char(&mut self, position: usize, ch: char) -> bool {
        if self.won || !ch.is_ascii_alphabetic() {
            return false;
        }
        let Some(slot) = self.pending.get_mut(position) else {
            return false;
        };
        *slot = Some(ch);

        self.focus = (position + 1..self.pending.len())
            .find(|&i| self.pending[i].is_none())
            .unwrap_or(position);
        true
    }

    /// Store a letter in the focused slot
    pub fn type_char(&mut self, ch: char) -> bool {
        self.enter_char(self.focus, ch)
    }

    /// Clear `position` and move focus one slot left
    ///
    /// An empty slot is left alone and only focus moves. Backspace on an empty
    /// first slot changes nothing.
    pub fn backspace_at(&mut self, position: usize) {
        if self.won {
            return;
        }
        let Some(slot) = self.pending.get_mut(position) else {
            return;
        };
        let was_filled = slot.take().is_some();
        if was_filled || position > 0 {
            self.focus = position.saturating_sub(1);
        }
    }

    /// Backspace at the focused slot
    pub fn backspace(&mut self) {
        self.backspace_at(self.focus);
    }

    pub fn move_focus_left(&mut self) {
        self.focus = self.focus.saturating_sub(1);
    }

    pub fn move_focus_right(&mut self) {
        if self.focus + 1 < self.pending.len() {
            self.focus += 1;
        }
    }

    /// Empty every slot, refocus the first one and drop any rejection indication
    pub fn reset_entry(&mut self) {
        self.pending.fill(None);
        self.focus = 0;
        self.feedback_until = None;
    }

    /// Submit the pending letters as the next ladder word
    ///
    /// `now` starts the rejection deadline when the submission is refused.
    pub fn submit_at(&mut self, now: Instant) -> SubmitOutcome {
        if self.won {
            return SubmitOutcome::AlreadyWon;
        }

        if self.pending.iter().any(Option::is_none) {
            return self.reject(now, SubmitOutcome::Incomplete);
        }

        let word: String = self
            .pending
            .iter()
            .flatten()
            .map(char::to_ascii_lowercase)
            .collect();

        if !self.puzzle.accepts(&word) {
            return self.reject(now, SubmitOutcome::NotInChain(word));
        }
        if self.ladder.iter().any(|w| w == &word) {
            return self.reject(now, SubmitOutcome::AlreadyUsed(word));
        }

        self.ladder.push(word.clone());
        self.reset_entry();
        tracing::debug!(word = %word, rungs = self.ladder.len(), "word accepted");

        if self.puzzle.is_end_word(&word) {
            self.won = true;
            tracing::info!(
                start = self.puzzle.start_word(),
                end = self.puzzle.end_word(),
                rungs = self.ladder.len(),
                "puzzle solved"
            );
            SubmitOutcome::Won(word)
        } else {
            SubmitOutcome::Accepted(word)
        }
    }

    /// Submit using the current time
    pub fn submit(&mut self) -> SubmitOutcome {
        self.submit_at(Instant::now())
    }

    /// Clear the rejection indication once its deadline has passed
    ///
    /// Returns `true` if the state changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.feedback_until {
            Some(deadline) if now >= deadline => {
                self.feedback_until = None;
                true
            }
            _ => false,
        }
    }

    fn reject(&mut self, now: Instant, outcome: SubmitOutcome) -> SubmitOutcome {
        tracing::debug!(?outcome, "submission rejected");
        self.feedback_until = Some(now + self.feedback_duration);
        outcome
    }
}
