//! # Console Adapter
//!
//! The text-menu front end. Prints the menu, reads the user's answers,
//! turns them into `core::Command` values and prints each `Outcome`.
//!
//! This is the only module that reads or writes the terminal. It is generic
//! over any `BufRead` input and `Write` output, so a whole session can be
//! driven from a byte buffer.
//!
//! ## Session State Machine
//!
//! ```text
//!            choice 1-4 / invalid
//!               ┌──────────┐
//!               ▼          │
//!  start ──▶ Running ──────┘
//!               │
//!               │ choice 5 / end of input
//!               ▼
//!           Terminated
//! ```
//!
//! An unparsable or out-of-range year either re-prompts or ends the session
//! with the `SessionError`, depending on the configured `YearPolicy`.

mod prompt;
pub mod render;

use std::io::{self, BufRead, Write};

use log::{debug, info, warn};

use crate::YearPolicy;
use crate::core::action::{Command, MenuChoice, NewBook, Outcome, parse_year, update};
use crate::core::config::{MAX_RULE_WIDTH, ResolvedConfig};
use crate::core::error::SessionError;
use crate::core::state::Library;

pub use prompt::Prompter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Running,
    Terminated,
}

/// One run of the program: a library plus the console it is driven from.
pub struct Session<R, W> {
    library: Library,
    prompter: Prompter<R, W>,
    state: SessionState,
    year_policy: YearPolicy,
    rule_width: usize,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, config: &ResolvedConfig) -> Self {
        Self {
            library: Library::new(),
            prompter: Prompter::new(input, output),
            state: SessionState::Running,
            year_policy: config.year_policy,
            rule_width: config.rule_width.min(MAX_RULE_WIDTH),
        }
    }

    pub fn library(&self) -> &Library {
        &self.library
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn into_output(self) -> W {
        self.prompter.into_output()
    }

    /// Runs menu iterations until the session terminates.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Io` if the console fails, and
    /// `SessionError::InvalidYear` or `SessionError::YearOutOfRange`
    /// under `YearPolicy::Abort`.
    pub fn run(&mut self) -> Result<(), SessionError> {
        info!("Session started (year policy: {:?})", self.year_policy);
        while self.state == SessionState::Running {
            self.step()?;
        }
        info!("Session terminated with {} book(s) in the library", self.library.len());
        Ok(())
    }

    /// Runs a single menu iteration: show the menu, read a choice, handle it.
    pub fn step(&mut self) -> Result<(), SessionError> {
        self.prompter.say(render::MENU)?;
        let Some(raw) = self.prompter.ask(render::PROMPT_CHOICE)? else {
            return self.end_of_input();
        };

        let choice = MenuChoice::parse(&raw);
        debug!("Menu choice: {:?}", choice);

        let command = match choice {
            MenuChoice::AddBook => match self.read_new_book()? {
                Some(new_book) => Command::AddBook(new_book),
                None => return self.end_of_input(),
            },
            MenuChoice::ListBooks => Command::ListBooks,
            MenuChoice::MarkRead => match self.prompter.ask(render::PROMPT_MARK_TITLE)? {
                Some(title) => Command::MarkRead { title },
                None => return self.end_of_input(),
            },
            MenuChoice::SearchGenre => match self.prompter.ask(render::PROMPT_SEARCH_GENRE)? {
                Some(genre) => Command::SearchGenre { genre },
                None => return self.end_of_input(),
            },
            MenuChoice::Quit => Command::Quit,
            MenuChoice::Invalid(input) => {
                debug!("Invalid menu choice {:?}", input);
                self.prompter.say(render::INVALID_CHOICE)?;
                return Ok(());
            }
        };

        let outcome = update(&mut self.library, command);
        if outcome == Outcome::Farewell {
            self.state = SessionState::Terminated;
        }
        self.prompter.say(&render::render(&outcome, self.rule_width))?;
        Ok(())
    }

    /// Collects title, author, year and genre, in that order.
    /// Returns `None` if the input closes part-way through.
    fn read_new_book(&mut self) -> Result<Option<NewBook>, SessionError> {
        let Some(title) = self.prompter.ask(render::PROMPT_TITLE)? else {
            return Ok(None);
        };
        let Some(author) = self.prompter.ask(render::PROMPT_AUTHOR)? else {
            return Ok(None);
        };
        let Some(year) = self.read_year()? else {
            return Ok(None);
        };
        let Some(genre) = self.prompter.ask(render::PROMPT_GENRE)? else {
            return Ok(None);
        };
        Ok(Some(NewBook {
            title,
            author,
            year,
            genre,
        }))
    }

    fn read_year(&mut self) -> Result<Option<i64>, SessionError> {
        loop {
            let Some(raw) = self.prompter.ask(render::PROMPT_YEAR)? else {
                return Ok(None);
            };
            match parse_year(&raw) {
                Ok(year) => return Ok(Some(year)),
                Err(e) => match self.year_policy {
                    YearPolicy::Abort => {
                        warn!("Aborting session: {}", e);
                        return Err(e);
                    }
                    YearPolicy::Reprompt => {
                        warn!("Asking again after {}", e);
                        let message = match e {
                            SessionError::YearOutOfRange { .. } => render::year_out_of_range(&raw),
                            _ => render::invalid_year(&raw),
                        };
                        self.prompter.say(&message)?;
                    }
                },
            }
        }
    }

    fn end_of_input(&mut self) -> Result<(), SessionError> {
        warn!("Input closed, ending session");
        self.state = SessionState::Terminated;
        Ok(())
    }
}

/// Runs an interactive session on stdin/stdout.
pub fn run(config: &ResolvedConfig) -> Result<(), SessionError> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    Session::new(stdin.lock(), stdout.lock(), config).run()
}
