// std imports
use std::fmt;

// local imports
use crate::{build::Builder, run::Simulator};

// ---

/// Handle of a state inside an [`Automaton`].
///
/// States reference each other by handle, which allows the self-loops produced by `*`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StateId(u32);

impl StateId {
    #[inline]
    pub(crate) fn new(index: usize) -> Self {
        debug_assert!(index < u32::MAX as usize, "state index overflow: {}", index);
        Self(index as u32)
    }

    /// Returns the position of the state in the automaton's arena.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---

/// Condition a single input character must satisfy to follow a [`Transition`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Predicate {
    /// Accepts any character.
    AnyChar,
    /// Accepts exactly the given character.
    ExactChar(char),
}

impl Predicate {
    #[inline(always)]
    pub fn test(self, ch: char) -> bool {
        match self {
            Self::AnyChar => true,
            Self::ExactChar(expected) => ch == expected,
        }
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AnyChar => write!(f, "any"),
            Self::ExactChar(ch) => write!(f, "{:?}", ch),
        }
    }
}

// ---

/// Directed edge between two states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Transition {
    pub predicate: Predicate,
    pub target: StateId,
}

impl Transition {
    #[inline]
    pub fn new(predicate: Predicate, target: StateId) -> Self {
        Self { predicate, target }
    }

    /// Returns the target state if `ch` satisfies the predicate.
    #[inline(always)]
    pub fn follow(&self, ch: char) -> Option<StateId> {
        self.predicate.test(ch).then_some(self.target)
    }
}

// ---

/// Node of an [`Automaton`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct State {
    pub(crate) accepting: bool,
    pub(crate) transitions: Vec<Transition>,
}

impl State {
    #[inline]
    pub fn is_accepting(&self) -> bool {
        self.accepting
    }

    /// Outgoing transitions in the order they were added.
    #[inline]
    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }
}

// ---

/// Compiled form of a pattern.
///
/// Owns all states in a flat arena. Once built, an automaton is never modified,
/// so it can be freely shared between threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Automaton {
    pub(crate) states: Vec<State>,
    pub(crate) start: StateId,
}

impl Automaton {
    /// Compiles `pattern` into an automaton.
    ///
    /// This function is infallible; every string, including the empty one, is a valid pattern.
    ///
    /// # Examples
    ///
    /// ```
    /// use nfa::Automaton;
    ///
    /// let automaton = Automaton::build("");
    /// assert_eq!(automaton.state_count(), 1);
    /// assert!(automaton.run(""));
    /// assert!(!automaton.run("a"));
    /// ```
    pub fn build(pattern: impl AsRef<str>) -> Self {
        Builder::new().build(pattern.as_ref())
    }

    /// Tests whether the entire `input` is accepted, using default [`Options`](crate::Options).
    #[inline]
    pub fn run(&self, input: &str) -> bool {
        Simulator::new(self).run(input)
    }

    #[inline]
    pub fn start(&self) -> StateId {
        self.start
    }

    /// Returns the state with the given handle.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this automaton.
    #[inline]
    pub fn state(&self, id: StateId) -> &State {
        &self.states[id.index()]
    }

    pub fn states(&self) -> impl ExactSizeIterator<Item = (StateId, &State)> {
        self.states.iter().enumerate().map(|(i, state)| (StateId::new(i), state))
    }

    #[inline]
    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    pub fn transition_count(&self) -> usize {
        self.states.iter().map(|state| state.transitions.len()).sum()
    }
}

impl fmt::Display for Automaton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (id, state) in self.states() {
            write!(f, "{}", id)?;
            if id == self.start {
                write!(f, " (start)")?;
            }
            if state.accepting {
                write!(f, " (accept)")?;
            }
            for (i, transition) in state.transitions.iter().enumerate() {
                let sep = if i == 0 { " -> " } else { ", " };
                write!(f, "{}{}:{}", sep, transition.predicate, transition.target)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
