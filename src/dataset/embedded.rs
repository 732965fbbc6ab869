//! Embedded chain dataset
//!
//! Chains compiled into the binary at build time.

/// One chain record as stored in the generated table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmbeddedChain {
    pub start_word: &'static str,
    pub end_word: &'static str,
    pub solution: &'static str,
    pub number_of_words: Option<usize>,
}

// Include generated chain table from build script
include!(concat!(env!("OUT_DIR"), "/chains.rs"));
