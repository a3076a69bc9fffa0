// local imports
use crate::automaton::{Automaton, Predicate, State, StateId, Transition};

// ---

/// Compiles patterns into an [`Automaton`].
///
/// Keeps a tail state that the next pattern character is attached to.
/// `.` and literal characters append a new state and move the tail,
/// `*` adds an [`AnyChar`](Predicate::AnyChar) self-loop to the tail and leaves it in place.
#[derive(Debug)]
pub struct Builder {
    states: Vec<State>,
    tail: StateId,
}

impl Builder {
    pub fn new() -> Self {
        Self {
            states: vec![State::default()],
            tail: StateId::new(0),
        }
    }

    pub fn build(mut self, pattern: &str) -> Automaton {
        for ch in pattern.chars() {
            match ch {
                '.' => {
                    self.append(Predicate::AnyChar);
                }
                '*' => {
                    self.connect(self.tail, Predicate::AnyChar, self.tail);
                }
                _ => {
                    self.append(Predicate::ExactChar(ch));
                }
            }
        }

        self.states[self.tail.index()].accepting = true;

        log::debug!(
            "nfa::build: compiled {:?} into {} states, accepting state {}",
            pattern,
            self.states.len(),
            self.tail
        );

        Automaton {
            states: self.states,
            start: StateId::new(0),
        }
    }

    fn append(&mut self, predicate: Predicate) {
        let next = self.push();
        self.connect(self.tail, predicate, next);
        self.tail = next;
    }

    fn push(&mut self) -> StateId {
        let id = StateId::new(self.states.len());
        self.states.push(State::default());
        id
    }

    fn connect(&mut self, from: StateId, predicate: Predicate, to: StateId) {
        self.states[from.index()].transitions.push(Transition::new(predicate, to));
    }
}

impl Default for Builder {
    fn default() -> Self {
        Self::new()
    }
}
