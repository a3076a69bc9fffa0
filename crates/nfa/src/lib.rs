//! A tiny nondeterministic finite automaton for `.`/`*` patterns.
//!
//! Patterns support two metacharacters:
//!
//! - `.` - Matches exactly one character
//! - `*` - Matches zero or more characters
//! - Any other character matches itself, there is no escaping
//!
//! A pattern is compiled into an [`Automaton`], a chain of states where every `*`
//! adds a self-loop to the state preceding it. The automaton is then simulated
//! over the input by tracking the set of states it could occupy at once
//! (the [`Frontier`]), so the running time is linear in the input length and
//! bounded by the number of states per step.
//!
//! Matching is always over the whole input, never a substring search.
//!
//! # Examples
//!
//! ```
//! use nfa::Automaton;
//!
//! let automaton = Automaton::build("t.st");
//! assert!(automaton.run("tast"));
//! assert!(!automaton.run("tst"));
//! assert!(!automaton.run("taste"));
//!
//! let automaton = Automaton::build("t*st");
//! assert!(automaton.run("tst"));
//! assert!(automaton.run("tasrestfdst"));
//! ```
//!
//! # Reusing the frontier
//!
//! ```
//! use nfa::{Automaton, Frontier, Simulator};
//!
//! let automaton = Automaton::build("*.log");
//! let simulator = Simulator::new(&automaton);
//! let mut frontier = Frontier::new();
//! for (name, expected) in [("app.log", true), ("app.txt", false)] {
//!     assert_eq!(simulator.run_with(&mut frontier, name), expected);
//! }
//! ```

pub mod automaton;
pub mod build;
pub mod run;

pub use automaton::{Automaton, Predicate, State, StateId, Transition};
pub use build::Builder;
pub use run::{Frontier, Options, Simulator};
