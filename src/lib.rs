//! Whole-string matching of `.` and `*` patterns.
//!
//! - `.` matches exactly one character
//! - `*` matches zero or more characters
//! - any other character, including `.` and `*` in the input, matches itself
//!
//! Patterns are compiled into a nondeterministic finite automaton by the [`nfa`] crate,
//! and [`Matcher`] is the entry point that validates arguments and runs it.
//!
//! ```
//! use dotstar::Matcher;
//!
//! let matcher = Matcher::create(Some("ta*ste*")).unwrap();
//! assert!(matcher.matches("tasteless"));
//! assert!(!matcher.matches("takdfskteklsd"));
//! ```

// public modules
pub mod app;
pub mod cli;
pub mod error;
pub mod matcher;
pub mod settings;

// public uses
pub use error::{Error, Result};
pub use matcher::Matcher;
pub use nfa::{Automaton, Frontier, Options};
