//! Display functions for command results

use super::formatters::ladder_progress;
use crate::core::{Puzzle, changed_positions};
use crate::dataset::check::CheckReport;
use crate::session::{LadderStep, Session};
use colored::{ColoredString, Colorize};

/// Color one rung: first word white, changed letters green, the rest grey
#[must_use]
pub fn colorize_step(step: &LadderStep<'_>, is_first: bool) -> String {
    step.word
        .chars()
        .enumerate()
        .map(|(i, c)| {
            let letter = c.to_ascii_uppercase().to_string();
            let styled: ColoredString = if is_first {
                letter.bright_white()
            } else if step.changed.get(i).copied().unwrap_or(false) {
                letter.green()
            } else {
                letter.bright_black()
            };
            styled.bold().to_string()
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Print `START → END (n words)` with a title line
pub fn print_puzzle_header(title: &str, puzzle: &Puzzle) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("{}", title.bright_cyan().bold());
    println!(
        "{} → {} {}",
        puzzle.start_word().to_uppercase().bright_yellow().bold(),
        puzzle.end_word().to_uppercase().bright_yellow().bold(),
        format!("({} words)", puzzle.number_of_words()).bright_black()
    );
    println!("{}", "─".repeat(60).cyan());
}

/// Print the accepted ladder of a session with a progress bar
pub fn print_ladder(session: &Session) {
    let steps = session.ladder_steps();
    println!();
    for (i, step) in steps.iter().enumerate() {
        println!("  {}", colorize_step(step, i == 0));
    }
    println!(
        "\n  {} {}/{}",
        ladder_progress(steps.len(), session.puzzle().number_of_words(), 20).cyan(),
        steps.len(),
        session.puzzle().number_of_words()
    );
}

/// Print the full solution chain of a puzzle
pub fn print_solution(puzzle: &Puzzle) {
    println!("\n📜 {}", "Solution:".bright_cyan().bold());
    let solution = puzzle.solution();
    for (i, word) in solution.iter().enumerate() {
        let previous = i.checked_sub(1).map(|p| solution[p].as_str());
        let step = LadderStep {
            word,
            changed: changed_positions(previous, word),
        };
        println!(
            "  {}. {}",
            (i + 1).to_string().bright_black(),
            colorize_step(&step, i == 0)
        );
    }
}

/// Print the win banner for a solved session
pub fn print_win(session: &Session) {
    let rungs = session.ladder().len();
    println!("\n{}", "═".repeat(60).bright_cyan());
    println!(
        "{}",
        "      🎉 ⛓  C H A I N   C O M P L E T E !  ⛓ 🎉".bright_green().bold()
    );
    println!("{}", "═".repeat(60).bright_cyan());
    println!(
        "\n  {} → {} in {} words",
        session.puzzle().start_word().to_uppercase().bright_white().bold(),
        session.puzzle().end_word().to_uppercase().bright_white().bold(),
        rungs.to_string().bright_cyan().bold()
    );
}

/// Print a dataset integrity report
pub fn print_check_report(report: &CheckReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "DATASET CHECK".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n   Chains checked:   {}", report.total_records);
    println!(
        "   Chains with issues: {}",
        if report.is_clean() {
            "0".green().bold()
        } else {
            report.failures.len().to_string().red().bold()
        }
    );

    for failure in &report.failures {
        println!(
            "\n  #{} {} → {}",
            failure.index,
            failure.start_word.to_uppercase().bright_white(),
            failure.end_word.to_uppercase().bright_white()
        );
        for issue in &failure.issues {
            println!("    {} {issue}", "✗".red());
        }
    }

    println!();
    if report.is_clean() {
        println!("{}", "✅ All chains are valid ladders".green().bold());
    } else {
        println!(
            "{}",
            format!("❌ {} issues found", report.issue_count())
                .red()
                .bold()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colorize_step_keeps_letters_in_order() {
        colored::control::set_override(false);
        let step = LadderStep {
            word: "cot",
            changed: vec![false, true, false],
        };
        assert_eq!(colorize_step(&step, false), "C O T");
        assert_eq!(colorize_step(&step, true), "C O T");
    }
}
