//! TUI application state and logic

use crate::session::{Game, Mode, SubmitOutcome};
use anyhow::Result;
use chrono::{Local, NaiveDate};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};

/// How often the event loop wakes up to expire feedback without input
const TICK: Duration = Duration::from_millis(50);

/// Application state
pub struct App {
    pub game: Game,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    /// Roll the daily puzzle over at local midnight
    follow_today: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub words_accepted: usize,
    pub rejections: usize,
    pub puzzles_solved: usize,
}

impl App {
    /// `follow_today` keeps the daily puzzle on the local calendar date
    #[must_use]
    pub fn new(game: Game, follow_today: bool) -> Self {
        let mut app = Self {
            game,
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
            follow_today,
        };
        app.add_message(
            "Change one letter at a time to reach the end word.",
            MessageStyle::Info,
        );
        app.add_message(
            "Type letters, Enter to submit, Tab to switch mode.",
            MessageStyle::Info,
        );
        app
    }

    /// Handle one key press
    pub fn on_key(&mut self, key: KeyEvent, now: Instant) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('s') if ctrl => self.shuffle(),
            KeyCode::F(2) => self.shuffle(),
            KeyCode::Tab | KeyCode::BackTab => self.switch_mode(self.game.mode().toggled()),
            KeyCode::Char(c) if !ctrl => {
                self.game.active_mut().type_char(c);
            }
            KeyCode::Backspace => self.game.active_mut().backspace(),
            KeyCode::Left => self.game.active_mut().move_focus_left(),
            KeyCode::Right => self.game.active_mut().move_focus_right(),
            KeyCode::Enter => self.submit(now),
            _ => {}
        }
    }

    /// Expire timed feedback and follow the calendar date
    pub fn tick(&mut self, now: Instant, today: NaiveDate) {
        self.game.tick(now);

        if self.follow_today && today != self.game.date() && self.game.select_date(today) {
            self.add_message("A new daily puzzle is available!", MessageStyle::Info);
        }
    }

    pub fn switch_mode(&mut self, mode: Mode) {
        self.game.switch_mode(mode);
        self.add_message(&format!("Switched to {mode}"), MessageStyle::Info);
    }

    pub fn shuffle(&mut self) {
        if self.game.mode() != Mode::Shuffle {
            self.add_message(
                "Shuffle is only available in Shuffle Mode (Tab)",
                MessageStyle::Error,
            );
            return;
        }

        self.game.shuffle();
        let puzzle = self.game.active().puzzle();
        let text = format!(
            "New puzzle: {} → {}",
            puzzle.start_word().to_uppercase(),
            puzzle.end_word().to_uppercase()
        );
        self.add_message(&text, MessageStyle::Info);
    }

    fn submit(&mut self, now: Instant) {
        let outcome = self.game.active_mut().submit_at(now);

        match outcome {
            SubmitOutcome::Accepted(word) => {
                self.stats.words_accepted += 1;
                self.add_message(&format!("✓ {}", word.to_uppercase()), MessageStyle::Success);
            }
            SubmitOutcome::Won(word) => {
                self.stats.words_accepted += 1;
                self.stats.puzzles_solved += 1;
                let rungs = self.game.active().ladder().len();
                self.add_message(
                    &format!("🎉 You won! {} reached in {rungs} words", word.to_uppercase()),
                    MessageStyle::Success,
                );
            }
            SubmitOutcome::Incomplete => {
                self.stats.rejections += 1;
                self.add_message("Fill every letter first", MessageStyle::Error);
            }
            SubmitOutcome::NotInChain(word) => {
                self.stats.rejections += 1;
                self.add_message(
                    &format!("{} is not in this chain", word.to_uppercase()),
                    MessageStyle::Error,
                );
            }
            SubmitOutcome::AlreadyUsed(word) => {
                self.stats.rejections += 1;
                self.add_message(
                    &format!("{} is already on the ladder", word.to_uppercase()),
                    MessageStyle::Error,
                );
            }
            SubmitOutcome::AlreadyWon => {}
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        tracing::error!(error = %err, "TUI exited with error");
    }
    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        // Only process key press events (fixes Windows double-input bug)
        if event::poll(TICK)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.on_key(key, Instant::now());
        }

        app.tick(Instant::now(), Local::now().date_naive());

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
