//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_check_report, print_ladder, print_puzzle_header, print_solution, print_win,
};
