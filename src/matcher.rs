// std imports
use std::{convert::Infallible, fmt, str::FromStr, sync::Arc};

// third-party imports
use nfa::{Automaton, Frontier, Options, Simulator};
use serde::{Deserialize, Serialize};

// local imports
use crate::error::{Error, Result};

// ---

/// A compiled `.`/`*` pattern.
///
/// - `.` matches exactly one character
/// - `*` matches zero or more characters
/// - any other character matches itself
///
/// The pattern must match the whole input, not a part of it.
/// The automaton is built once, when the matcher is created, and is shared by all clones.
///
/// # Examples
///
/// ```
/// use dotstar::Matcher;
///
/// let matcher = Matcher::create(Some("t.st")).unwrap();
/// assert!(matcher.matches("tast"));
/// assert!(!matcher.matches("taste"));
///
/// let matcher = Matcher::new("t*st");
/// assert!(matcher.matches("tst"));
/// assert!(matcher.matches("tasrestfdst"));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "Option<String>", into = "String")]
pub struct Matcher {
    pattern: String,
    automaton: Arc<Automaton>,
    options: Options,
}

impl Matcher {
    /// Compiles the pattern, failing with [`Error::NullPattern`] if there is none.
    ///
    /// # Examples
    ///
    /// ```
    /// use dotstar::{Error, Matcher};
    ///
    /// assert!(Matcher::create(Some("")).is_ok());
    /// assert!(matches!(Matcher::create(None::<&str>), Err(Error::NullPattern)));
    /// ```
    pub fn create<P: AsRef<str>>(pattern: Option<P>) -> Result<Self> {
        pattern.map(Self::new).ok_or(Error::NullPattern)
    }

    /// Compiles the pattern.
    ///
    /// This function is infallible; every string is a valid pattern.
    pub fn new(pattern: impl AsRef<str>) -> Self {
        let pattern = pattern.as_ref();
        Self {
            pattern: pattern.to_owned(),
            automaton: Arc::new(Automaton::build(pattern)),
            options: Options::default(),
        }
    }

    /// Replaces the simulation options, keeping the compiled automaton.
    pub fn with_options(self, options: Options) -> Self {
        Self { options, ..self }
    }

    #[inline]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    #[inline]
    pub fn automaton(&self) -> &Automaton {
        &self.automaton
    }

    #[inline]
    pub fn options(&self) -> Options {
        self.options
    }

    /// Tests whether the input matches, failing with [`Error::NullInput`] if there is none.
    ///
    /// A failed call does not affect the matcher.
    pub fn try_matches<S: AsRef<str>>(&self, input: Option<S>) -> Result<bool> {
        let input = input.ok_or(Error::NullInput)?;
        Ok(self.matches(input.as_ref()))
    }

    /// Tests whether the entire input matches the pattern.
    ///
    /// Each call starts from a fresh frontier, so a matcher can be used from many threads at once.
    #[inline]
    pub fn matches(&self, input: &str) -> bool {
        self.simulator().run(input)
    }

    /// Same as [`matches`](Self::matches), but reuses the caller's frontier buffer.
    ///
    /// # Examples
    ///
    /// ```
    /// use dotstar::{Frontier, Matcher};
    ///
    /// let matcher = Matcher::new("*.rs");
    /// let mut frontier = Frontier::new();
    /// assert!(matcher.matches_with(&mut frontier, "main.rs"));
    /// assert!(!matcher.matches_with(&mut frontier, "main.txt"));
    /// ```
    #[inline]
    pub fn matches_with(&self, frontier: &mut Frontier, input: &str) -> bool {
        self.simulator().run_with(frontier, input)
    }

    #[inline]
    fn simulator(&self) -> Simulator<'_> {
        Simulator::new(&self.automaton).with_options(self.options)
    }
}

impl PartialEq for Matcher {
    fn eq(&self, other: &Self) -> bool {
        self.pattern == other.pattern && self.options == other.options
    }
}

impl Eq for Matcher {}

impl fmt::Display for Matcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pattern)
    }
}

impl FromStr for Matcher {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl TryFrom<Option<String>> for Matcher {
    type Error = Error;

    fn try_from(pattern: Option<String>) -> Result<Self> {
        Self::create(pattern)
    }
}

impl From<Matcher> for String {
    fn from(matcher: Matcher) -> Self {
        matcher.pattern
    }
}
