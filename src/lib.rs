//! Bibliotheque library exports for testing

use clap::ValueEnum;
use serde::Deserialize;

pub mod console;
pub mod core;

#[cfg(test)]
pub mod test_support;

/// What happens when the publication year typed by the user is not an integer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum YearPolicy {
    /// Report the problem and ask for the year again.
    #[default]
    Reprompt,
    /// Abandon the book and end the session with an error.
    Abort,
}
