//! Daily and shuffle sessions side by side
//!
//! The game keeps one session per mode so switching modes never throws away
//! progress in the other one.

use super::selection::{daily_index, shuffle_index};
use super::state::{DEFAULT_FEEDBACK, Session};
use crate::dataset::Dataset;
use chrono::NaiveDate;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fmt;
use std::time::{Duration, Instant};

/// Puzzle selection mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    Daily,
    Shuffle,
}

impl Mode {
    /// The other mode
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Daily => Self::Shuffle,
            Self::Shuffle => Self::Daily,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Daily => write!(f, "Daily Puzzle"),
            Self::Shuffle => write!(f, "Shuffle Mode"),
        }
    }
}

/// Settings a game is created with
#[derive(Debug, Clone)]
pub struct GameConfig {
    pub date: NaiveDate,
    /// Seed for shuffle draws; `None` seeds from the OS
    pub seed: Option<u64>,
    pub feedback: Duration,
}

impl GameConfig {
    #[must_use]
    pub const fn new(date: NaiveDate) -> Self {
        Self {
            date,
            seed: None,
            feedback: DEFAULT_FEEDBACK,
        }
    }

    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub const fn with_feedback(mut self, feedback: Duration) -> Self {
        self.feedback = feedback;
        self
    }
}

/// Both mode sessions plus everything needed to replace them
pub struct Game {
    dataset: Dataset,
    rng: StdRng,
    feedback: Duration,
    mode: Mode,
    date: NaiveDate,
    daily_index: usize,
    daily: Session,
    shuffle_index: usize,
    shuffle: Session,
}

impl Game {
    /// Start in daily mode with a fresh shuffle puzzle already drawn
    #[must_use]
    pub fn new(dataset: Dataset, config: &GameConfig) -> Self {
        let mut rng = config
            .seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);

        let daily_index = daily_index(config.date, dataset.len());
        let shuffle_index = shuffle_index(&mut rng, dataset.len());
        let daily = Self::session_for(&dataset, daily_index, config.feedback);
        let shuffle = Self::session_for(&dataset, shuffle_index, config.feedback);

        tracing::info!(
            date = %config.date,
            daily_index,
            shuffle_index,
            puzzles = dataset.len().get(),
            "game created"
        );

        Self {
            dataset,
            rng,
            feedback: config.feedback,
            mode: Mode::Daily,
            date: config.date,
            daily_index,
            daily,
            shuffle_index,
            shuffle,
        }
    }

    fn session_for(dataset: &Dataset, index: usize, feedback: Duration) -> Session {
        // Indices are always reduced modulo the dataset length
        let puzzle = dataset.puzzles()[index].clone();
        Session::new(puzzle, feedback)
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Dataset index of the puzzle behind the active session
    #[must_use]
    pub fn active_index(&self) -> usize {
        match self.mode {
            Mode::Daily => self.daily_index,
            Mode::Shuffle => self.shuffle_index,
        }
    }

    #[must_use]
    pub fn active(&self) -> &Session {
        self.session(self.mode)
    }

    pub fn active_mut(&mut self) -> &mut Session {
        match self.mode {
            Mode::Daily => &mut self.daily,
            Mode::Shuffle => &mut self.shuffle,
        }
    }

    #[must_use]
    pub fn session(&self, mode: Mode) -> &Session {
        match mode {
            Mode::Daily => &self.daily,
            Mode::Shuffle => &self.shuffle,
        }
    }

    /// Make `mode` active, clearing its typed letters but keeping its ladder
    pub fn switch_mode(&mut self, mode: Mode) {
        if self.mode != mode {
            tracing::debug!(from = ?self.mode, to = ?mode, "mode switched");
        }
        self.mode = mode;
        self.active_mut().reset_entry();
    }

    /// Draw a new shuffle puzzle and start it from scratch
    ///
    /// The previous shuffle session is dropped along with any pending
    /// rejection deadline it held.
    pub fn shuffle(&mut self) {
        self.shuffle_index = shuffle_index(&mut self.rng, self.dataset.len());
        self.shuffle = Self::session_for(&self.dataset, self.shuffle_index, self.feedback);
        tracing::debug!(index = self.shuffle_index, "shuffled");
    }

    /// Move the daily puzzle to `date`
    ///
    /// A new date always starts a fresh daily session, even when it maps to
    /// the same puzzle. Returns `true` if the session was replaced.
    pub fn select_date(&mut self, date: NaiveDate) -> bool {
        if date == self.date {
            return false;
        }
        self.date = date;
        let index = daily_index(date, self.dataset.len());
        self.daily_index = index;
        self.daily = Self::session_for(&self.dataset, index, self.feedback);
        tracing::info!(date = %date, index, "daily puzzle rolled over");
        true
    }

    /// Expire rejection indications in both sessions
    pub fn tick(&mut self, now: Instant) -> bool {
        let daily = self.daily.tick(now);
        let shuffle = self.shuffle.tick(now);
        daily || shuffle
    }
}
