//! Errors raised at the input boundary
//!
//! Generators themselves never fail: bad algorithm input turns into a single
//! explanatory step. [`InputError`] covers the text the user types before it
//! becomes an [`Input`](super::Input): number lists, problem names, language
//! identifiers and speed multipliers.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("no numbers given")]
    Empty,

    #[error("'{token}' (item {position}) is not an integer")]
    InvalidNumber { token: String, position: usize },

    #[error("unknown problem '{0}'")]
    UnknownProblem(String),

    #[error("unknown language '{0}' (expected cpp, java, python or javascript)")]
    UnknownLanguage(String),

    #[error("speed must be a positive finite multiplier, got {0}")]
    InvalidSpeed(f64),
}
