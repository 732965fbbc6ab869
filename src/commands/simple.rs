//! Simple interactive CLI mode
//!
//! Text-based game loop without TUI. Each line is either a command or a word,
//! and words go through the same letter-by-letter entry as the TUI.

use crate::output::formatters::mark_changes;
use crate::output::{print_ladder, print_puzzle_header, print_win};
use crate::session::{Game, Mode, SubmitOutcome};
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{self, Write};

/// What a line of input did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineResult {
    Quit,
    Help,
    Empty,
    Switched(Mode),
    Shuffled,
    /// Shuffle requested outside shuffle mode
    ShuffleUnavailable,
    WrongLength { expected: usize, got: usize },
    Submitted(SubmitOutcome),
}

/// Apply one line of input to the game
///
/// A line naming a word of the current chain is always played as a word, so
/// ladders through words like `new` or `help` stay winnable.
pub fn handle_line(game: &mut Game, line: &str) -> LineResult {
    let input = line.trim();
    let lowered = input.to_lowercase();

    if game.active().puzzle().accepts(&lowered) {
        return submit_word(game, input);
    }

    match lowered.as_str() {
        "" => LineResult::Empty,
        "quit" | "q" | "exit" => LineResult::Quit,
        "help" | "h" | "?" => LineResult::Help,
        "daily" | "d" => {
            game.switch_mode(Mode::Daily);
            LineResult::Switched(Mode::Daily)
        }
        "shuffle" | "s" => {
            if game.mode() == Mode::Shuffle {
                game.shuffle();
                LineResult::Shuffled
            } else {
                game.switch_mode(Mode::Shuffle);
                LineResult::Switched(Mode::Shuffle)
            }
        }
        "new" | "n" => {
            if game.mode() == Mode::Shuffle {
                game.shuffle();
                LineResult::Shuffled
            } else {
                LineResult::ShuffleUnavailable
            }
        }
        _ => submit_word(game, input),
    }
}

fn submit_word(game: &mut Game, input: &str) -> LineResult {
    let session = game.active_mut();
    let expected = session.puzzle().word_length();
    let got = input.chars().count();
    if got != expected {
        return LineResult::WrongLength { expected, got };
    }

    session.reset_entry();
    for (position, ch) in input.chars().enumerate() {
        session.enter_char(position, ch);
    }
    let outcome = session.submit();
    if outcome.is_rejection() {
        session.reset_entry();
    }
    LineResult::Submitted(outcome)
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple(game: &mut Game) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Chainmail - Word Ladder Game                 ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    print_help();
    show_board(game);

    loop {
        let Some(line) = get_user_input("Next word")? else {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        };

        match handle_line(game, &line) {
            LineResult::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            LineResult::Help => print_help(),
            LineResult::Empty => {}
            LineResult::Switched(_) | LineResult::Shuffled => show_board(game),
            LineResult::ShuffleUnavailable => {
                println!("Switch to shuffle mode first ('shuffle').\n");
            }
            LineResult::WrongLength { expected, got } => {
                println!(
                    "{}\n",
                    format!("✗ Words here have {expected} letters, you typed {got}").red()
                );
            }
            LineResult::Submitted(outcome) => report_outcome(game, &outcome),
        }
    }
}

fn report_outcome(game: &Game, outcome: &SubmitOutcome) {
    match outcome {
        SubmitOutcome::Accepted(_) => {
            if let Some(step) = game.active().ladder_steps().last() {
                println!(
                    "{}",
                    format!("✓ {}", mark_changes(step.word, &step.changed)).green()
                );
            }
            print_ladder(game.active());
            println!();
        }
        SubmitOutcome::Won(_) => {
            print_ladder(game.active());
            print_win(game.active());
            println!("\nType 'shuffle' for another puzzle or 'quit' to leave.\n");
        }
        SubmitOutcome::Incomplete => {
            println!("{}\n", "✗ Only letters are allowed".red());
        }
        SubmitOutcome::NotInChain(word) => {
            println!(
                "{}\n",
                format!("✗ {} is not part of this chain", word.to_uppercase()).red()
            );
        }
        SubmitOutcome::AlreadyUsed(word) => {
            println!(
                "{}\n",
                format!("✗ {} is already on your ladder", word.to_uppercase()).red()
            );
        }
        SubmitOutcome::AlreadyWon => {
            println!("This puzzle is already solved. Type 'shuffle' for another.\n");
        }
    }
}

fn show_board(game: &Game) {
    let title = match game.mode() {
        Mode::Daily => format!("{} · {}", game.mode(), game.date()),
        Mode::Shuffle => format!("{} · #{}", game.mode(), game.active_index()),
    };
    print_puzzle_header(&title, game.active().puzzle());
    print_ladder(game.active());
    println!();
}

fn print_help() {
    println!("Change one letter at a time to get from the start word to the end word.");
    println!("Only words from the puzzle's chain are accepted.\n");
    println!("Commands: 'daily', 'shuffle' (again for a new puzzle), 'help', 'quit'\n");
}

/// Get user input with a prompt; `None` on end of input
fn get_user_input(prompt: &str) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush().context("failed to flush stdout")?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .context("failed to read from stdin")?;

    Ok((read > 0).then(|| input.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{ChainRecord, Dataset};
    use crate::session::GameConfig;
    use chrono::NaiveDate;

    fn game_with(start: &str, end: &str, solution: &str) -> Game {
        let record = ChainRecord {
            start_word: start.to_string(),
            end_word: end.to_string(),
            solution: solution.to_string(),
            number_of_words: None,
        };
        let dataset = Dataset::from_records(vec![record]).unwrap();
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        Game::new(dataset, &GameConfig::new(date).with_seed(1))
    }

    fn game() -> Game {
        game_with("cat", "dog", "cat,cot,cog,dog")
    }

    #[test]
    fn words_are_submitted() {
        let mut game = game();
        assert_eq!(
            handle_line(&mut game, "COT"),
            LineResult::Submitted(SubmitOutcome::Accepted("cot".to_string()))
        );
        assert_eq!(game.active().ladder(), ["cat", "cot"]);
    }

    #[test]
    fn full_game_reaches_win() {
        let mut game = game();
        handle_line(&mut game, "cot");
        handle_line(&mut game, "cog");
        assert_eq!(
            handle_line(&mut game, "dog"),
            LineResult::Submitted(SubmitOutcome::Won("dog".to_string()))
        );
        assert_eq!(
            handle_line(&mut game, "dog"),
            LineResult::Submitted(SubmitOutcome::AlreadyWon)
        );
    }

    #[test]
    fn wrong_length_is_not_submitted() {
        let mut game = game();
        assert_eq!(
            handle_line(&mut game, "cots"),
            LineResult::WrongLength {
                expected: 3,
                got: 4
            }
        );
        assert_eq!(game.active().ladder(), ["cat"]);
    }

    #[test]
    fn non_letters_make_incomplete_word() {
        let mut game = game();
        assert_eq!(
            handle_line(&mut game, "c0t"),
            LineResult::Submitted(SubmitOutcome::Incomplete)
        );
        // Rejected words do not linger in the slots
        assert!(game.active().pending().iter().all(Option::is_none));
    }

    #[test]
    fn commands_switch_and_shuffle() {
        let mut game = game();
        assert_eq!(handle_line(&mut game, "new"), LineResult::ShuffleUnavailable);
        assert_eq!(
            handle_line(&mut game, "shuffle"),
            LineResult::Switched(Mode::Shuffle)
        );
        assert_eq!(handle_line(&mut game, "shuffle"), LineResult::Shuffled);
        assert_eq!(handle_line(&mut game, "n"), LineResult::Shuffled);
        assert_eq!(
            handle_line(&mut game, " Daily "),
            LineResult::Switched(Mode::Daily)
        );
        assert_eq!(handle_line(&mut game, "q"), LineResult::Quit);
        assert_eq!(handle_line(&mut game, "   "), LineResult::Empty);
        assert_eq!(handle_line(&mut game, "help"), LineResult::Help);
    }

    #[test]
    fn chain_words_win_over_commands() {
        let mut game = game_with("hew", "now", "hew,new,now");
        assert_eq!(
            handle_line(&mut game, "new"),
            LineResult::Submitted(SubmitOutcome::Accepted("new".to_string()))
        );
        assert_eq!(game.active().ladder(), ["hew", "new"]);
        assert_eq!(
            handle_line(&mut game, "NOW"),
            LineResult::Submitted(SubmitOutcome::Won("now".to_string()))
        );
    }

    #[test]
    fn used_chain_word_is_not_read_as_command() {
        let mut game = game_with("hew", "now", "hew,new,now");
        game.switch_mode(Mode::Shuffle);
        handle_line(&mut game, "new");
        assert_eq!(
            handle_line(&mut game, "new"),
            LineResult::Submitted(SubmitOutcome::AlreadyUsed("new".to_string()))
        );
        assert_eq!(game.active().ladder(), ["hew", "new"]);
    }
}
