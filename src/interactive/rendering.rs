//! TUI rendering with ratatui
//!
//! Draws the mode tabs, the ladder with changed letters highlighted, and one
//! entry slot per letter.

use super::app::{App, MessageStyle};
use crate::session::{LadderStep, Mode, SessionState};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Tabs},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Mode tabs
            Constraint::Length(3), // Puzzle
            Constraint::Min(6),    // Ladder + messages
            Constraint::Length(5), // Entry slots
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_tabs(f, app, chunks[1]);
    render_puzzle(f, app, chunks[2]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Ladder
            Constraint::Percentage(40), // Messages
        ])
        .split(chunks[3]);

    render_ladder(f, app, main_chunks[0]);
    render_messages(f, app, main_chunks[1]);

    render_entry(f, app, chunks[4]);
    render_status(f, app, chunks[5]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("⛓ CHAINMAIL - Word Ladder")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_tabs(f: &mut Frame, app: &App, area: Rect) {
    let selected = match app.game.mode() {
        Mode::Daily => 0,
        Mode::Shuffle => 1,
    };
    let title = if app.game.mode() == Mode::Shuffle {
        " Tab: switch | Ctrl-S/F2: shuffle "
    } else {
        " Tab: switch "
    };

    let tabs = Tabs::new(vec![Mode::Daily.to_string(), Mode::Shuffle.to_string()])
        .select(selected)
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().title(title).borders(Borders::ALL));
    f.render_widget(tabs, area);
}

fn render_puzzle(f: &mut Frame, app: &App, area: Rect) {
    let puzzle = app.game.active().puzzle();
    let line = Line::from(vec![
        Span::styled(
            puzzle.start_word().to_uppercase(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(" → "),
        Span::styled(
            puzzle.end_word().to_uppercase(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" ({} words)", puzzle.number_of_words()),
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    let paragraph = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(paragraph, area);
}

/// Letters of one rung: first word white, changed letters green, others grey
fn step_line(step: &LadderStep<'_>, is_first: bool) -> Line<'static> {
    let spans: Vec<Span> = step
        .word
        .chars()
        .enumerate()
        .map(|(i, c)| {
            let color = if is_first {
                Color::White
            } else if step.changed.get(i).copied().unwrap_or(false) {
                Color::Green
            } else {
                Color::DarkGray
            };
            Span::styled(
                format!("{} ", c.to_ascii_uppercase()),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )
        })
        .collect();
    Line::from(spans)
}

fn render_ladder(f: &mut Frame, app: &App, area: Rect) {
    let session = app.game.active();
    let steps = session.ladder_steps();

    // Keep the newest rungs visible when the ladder outgrows the panel
    let visible = usize::from(area.height.saturating_sub(2));
    let skip = steps.len().saturating_sub(visible);
    let lines: Vec<Line> = steps
        .iter()
        .enumerate()
        .skip(skip)
        .map(|(i, step)| step_line(step, i == 0))
        .collect();

    let title = format!(
        " Ladder {}/{} ",
        steps.len(),
        session.puzzle().number_of_words()
    );
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_entry(f: &mut Frame, app: &App, area: Rect) {
    let session = app.game.active();

    let (title, color) = match session.state() {
        SessionState::Won => (" 🎉 YOU WON! 🎉 | Tab: other mode ", Color::Green),
        SessionState::Rejected => (" ✗ Not accepted ", Color::Red),
        SessionState::Entering => (" Your next word | Enter: submit ", Color::Yellow),
    };

    let slots: Vec<Span> = session
        .pending()
        .iter()
        .enumerate()
        .flat_map(|(i, slot)| {
            let letter = slot.map_or('_', |c| c.to_ascii_uppercase());
            let mut style = Style::default().fg(color).add_modifier(Modifier::BOLD);
            if i == session.focus() && session.state() != SessionState::Won {
                style = style.add_modifier(Modifier::REVERSED);
            }
            [Span::styled(format!(" {letter} "), style), Span::raw(" ")]
        })
        .collect();

    let entry = Paragraph::new(vec![Line::default(), Line::from(slots)])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(entry, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let mode_text = match app.game.mode() {
        Mode::Daily => format!("Daily: {}", app.game.date()),
        Mode::Shuffle => format!("Puzzle #{}", app.game.active_index()),
    };
    let mode = Paragraph::new(mode_text).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let solved = Paragraph::new(format!("Solved: {}", app.stats.puzzles_solved))
        .alignment(Alignment::Center);
    f.render_widget(solved, chunks[1]);

    let words = Paragraph::new(format!(
        "Words: {} | Misses: {}",
        app.stats.words_accepted, app.stats.rejections
    ))
    .alignment(Alignment::Center);
    f.render_widget(words, chunks[2]);

    let help = Paragraph::new("Esc: Quit | ←/→: Move | Enter: Submit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
