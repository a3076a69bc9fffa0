// std imports
use std::mem::swap;

// local imports
use crate::automaton::{Automaton, StateId};

// ---

/// Simulation options.
///
/// None of the options affect the result of a run, only the amount of work done to get it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Drop repeated states from the frontier after each step.
    ///
    /// Repeated identical transitions of a state, such as the self-loops of `**`, are always
    /// followed once. With deduplication disabled, only states reached from different states
    /// may repeat, which still makes the frontier grow with the input length, so this should
    /// only be turned off for diagnostics.
    pub dedup: bool,
    /// Stop as soon as the frontier becomes empty instead of consuming the rest of the input.
    pub early_exit: bool,
}

impl Options {
    pub fn with_dedup(self, dedup: bool) -> Self {
        Self { dedup, ..self }
    }

    pub fn with_early_exit(self, early_exit: bool) -> Self {
        Self { early_exit, ..self }
    }
}

impl Default for Options {
    fn default() -> Self {
        Self {
            dedup: true,
            early_exit: true,
        }
    }
}

// ---

/// Set of states an [`Automaton`] may simultaneously occupy.
///
/// A frontier is a reusable buffer. Every run resets it before use,
/// so nothing leaks from one run into the next.
#[derive(Debug, Clone, Default)]
pub struct Frontier {
    current: Vec<StateId>,
    next: Vec<StateId>,
    marks: Vec<u32>,
    generation: u32,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            current: Vec::with_capacity(capacity),
            next: Vec::with_capacity(capacity),
            marks: vec![0; capacity],
            generation: 0,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.current.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.current.is_empty()
    }

    /// States in the frontier, in the order they were reached.
    pub fn iter(&self) -> impl Iterator<Item = StateId> + '_ {
        self.current.iter().copied()
    }

    fn reset(&mut self, automaton: &Automaton) {
        self.current.clear();
        self.next.clear();
        if self.marks.len() < automaton.state_count() {
            self.marks.resize(automaton.state_count(), 0);
        }
        self.current.push(automaton.start());
    }

    fn advance(&mut self, automaton: &Automaton, ch: char, dedup: bool) {
        let generation = self.next_generation();
        let Self {
            current, next, marks, ..
        } = self;

        next.clear();
        for &id in current.iter() {
            let mut previous = None;
            for transition in automaton.state(id).transitions() {
                if previous.replace(transition) == Some(transition) {
                    continue;
                }
                let Some(target) = transition.follow(ch) else {
                    continue;
                };
                if dedup {
                    let mark = &mut marks[target.index()];
                    if *mark == generation {
                        continue;
                    }
                    *mark = generation;
                }
                next.push(target);
            }
        }

        swap(current, next);
    }

    fn next_generation(&mut self) -> u32 {
        self.generation = self.generation.wrapping_add(1);
        if self.generation == 0 {
            self.marks.fill(0);
            self.generation = 1;
        }
        self.generation
    }

    fn accepts(&self, automaton: &Automaton) -> bool {
        self.current.iter().any(|&id| automaton.state(id).is_accepting())
    }
}

// ---

/// Runs an [`Automaton`] over input strings.
#[derive(Debug, Clone, Copy)]
pub struct Simulator<'a> {
    automaton: &'a Automaton,
    options: Options,
}

impl<'a> Simulator<'a> {
    pub fn new(automaton: &'a Automaton) -> Self {
        Self {
            automaton,
            options: Options::default(),
        }
    }

    pub fn with_options(self, options: Options) -> Self {
        Self { options, ..self }
    }

    /// Tests whether the entire `input` is accepted, using a freshly allocated frontier.
    pub fn run(&self, input: &str) -> bool {
        self.run_with(&mut Frontier::with_capacity(self.automaton.state_count()), input)
    }

    /// Tests whether the entire `input` is accepted, reusing the given frontier.
    ///
    /// The frontier is reset first and holds the final set of states when this returns.
    pub fn run_with(&self, frontier: &mut Frontier, input: &str) -> bool {
        frontier.reset(self.automaton);

        let mut consumed = 0;
        for ch in input.chars() {
            frontier.advance(self.automaton, ch, self.options.dedup);
            consumed += 1;
            if self.options.early_exit && frontier.is_empty() {
                break;
            }
        }

        let accepted = frontier.accepts(self.automaton);
        log::trace!(
            "nfa::run: consumed {} chars, {} states left, accepted={}",
            consumed,
            frontier.len(),
            accepted
        );
        accepted
    }
}
