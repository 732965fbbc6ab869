//! Command implementations

pub mod check;
pub mod show;
pub mod simple;

pub use check::run_check;
pub use show::{Selection, run_show, select_puzzle};
pub use simple::{LineResult, handle_line, run_simple};
