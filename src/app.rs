// std imports
use std::{
    borrow::Cow,
    io::{self, BufRead, Write},
};

// third-party imports
use nfa::Frontier;

// local imports
use crate::{cli::Opt, error::*, matcher::Matcher, settings::Settings};

// ---

pub struct Options {
    /// Select the inputs that do not match.
    pub invert: bool,
    /// Do not write selected inputs to the output.
    pub quiet: bool,
    /// Write the compiled automaton instead of matching.
    pub explain: bool,
}

/// Result of a successful [`App::execute`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Inputs were matched, and this many of them were selected.
    Selected(usize),
    /// The automaton was written out.
    Explained,
}

impl Outcome {
    pub fn exit_code(self) -> i32 {
        match self {
            Self::Selected(0) => 1,
            Self::Selected(_) | Self::Explained => 0,
        }
    }
}

/// Maps the result of a run to the process exit status, following grep.
pub fn exit_code(result: &Result<Outcome>) -> i32 {
    match result {
        Ok(outcome) => outcome.exit_code(),
        Err(_) => 2,
    }
}

// ---

/// Matches a sequence of inputs against a single pattern and writes out the selected ones.
pub struct App {
    matcher: Matcher,
    options: Options,
}

impl App {
    pub fn new(matcher: Matcher, options: Options) -> Self {
        Self { matcher, options }
    }

    /// Builds the app from command line options on top of loaded settings.
    pub fn from_opt(opt: &Opt, settings: &Settings) -> Result<Self> {
        let engine = opt.engine(settings.engine);
        log::debug!("app: engine settings {:?}", engine);

        let matcher = Matcher::create(Some(&opt.pattern))?.with_options(engine.into());

        Ok(Self::new(
            matcher,
            Options {
                invert: opt.invert,
                quiet: opt.quiet,
                explain: opt.explain,
            },
        ))
    }

    #[inline]
    pub fn matcher(&self) -> &Matcher {
        &self.matcher
    }

    /// Matches `args`, or the lines of `stdin` if there are no `args`.
    pub fn execute<R, W>(&self, args: Vec<String>, stdin: R, mut output: W) -> Result<Outcome>
    where
        R: BufRead,
        W: Write,
    {
        if self.options.explain {
            write!(output, "{}", self.matcher.automaton())?;
            output.flush()?;
            return Ok(Outcome::Explained);
        }

        let selected = if args.is_empty() {
            self.run(LossyLines::new(stdin), output)?
        } else {
            self.run(args.into_iter().map(Ok), output)?
        };

        Ok(Outcome::Selected(selected))
    }

    /// Returns the number of selected inputs.
    pub fn run<I, W>(&self, inputs: I, mut output: W) -> Result<usize>
    where
        I: IntoIterator<Item = io::Result<String>>,
        W: Write,
    {
        let mut frontier = Frontier::with_capacity(self.matcher.automaton().state_count());
        let mut selected = 0;
        let mut total = 0;

        for input in inputs {
            let input = input?;
            total += 1;
            if self.matcher.matches_with(&mut frontier, &input) != self.options.invert {
                selected += 1;
                if !self.options.quiet {
                    writeln!(output, "{}", input)?;
                }
            }
        }

        output.flush()?;
        log::debug!("app: selected {} of {} inputs", selected, total);

        Ok(selected)
    }
}

// ---

/// Lines of a reader, with invalid UTF-8 sequences replaced by `U+FFFD`.
struct LossyLines<R> {
    reader: R,
    buf: Vec<u8>,
    n: usize,
}

impl<R: BufRead> LossyLines<R> {
    fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
            n: 0,
        }
    }
}

impl<R: BufRead> Iterator for LossyLines<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.buf.clear();
        match self.reader.read_until(b'\n', &mut self.buf) {
            Ok(0) => None,
            Ok(_) => {
                self.n += 1;
                if self.buf.last() == Some(&b'\n') {
                    self.buf.pop();
                    if self.buf.last() == Some(&b'\r') {
                        self.buf.pop();
                    }
                }
                let line = String::from_utf8_lossy(&self.buf);
                if let Cow::Owned(_) = line {
                    log::warn!("app: replaced invalid utf-8 sequences in line {}", self.n);
                }
                Some(Ok(line.into_owned()))
            }
            Err(err) => Some(Err(err)),
        }
    }
}
