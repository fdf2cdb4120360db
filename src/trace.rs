//! Diagnostics. A [`Parser`](crate::Parser) owns one [`Trace`] sink and
//! reports what its work loop does through it; nothing is logged globally.

use crate::grammar::Symbol;
use crate::item::Item;

use derive_more::Display;

/// The transition that produced new items.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Display)]
pub enum Step {
    #[display(fmt = "predict")]
    Predictor,
    #[display(fmt = "lc-predict")]
    LcPredictor,
    #[display(fmt = "complete")]
    Completer,
    #[display(fmt = "scan")]
    Scanner,
    #[display(fmt = "lc-scan")]
    LcScanner,
    #[display(fmt = "combine")]
    Combine,
}

#[derive(Debug)]
pub enum Event<'a> {
    Seeded { item: &'a Item },
    /// `step` applied to `item` admitted `added` (> 0) new items.
    Applied { step: Step, item: &'a Item, added: usize },
    /// `item` waits for the terminal `symbol`, which the input does not
    /// supply at `position`. Reported once per item.
    Unmatched { item: &'a Item, symbol: &'a Symbol, position: usize },
    Finished { items: usize, passes: usize, recognised: bool },
}

pub trait Trace {
    fn event(&mut self, event: &Event<'_>);
}

/// Discards every event.
#[derive(Copy, Clone, Default, Debug)]
pub struct NoTrace;

impl Trace for NoTrace {
    fn event(&mut self, _event: &Event<'_>) {}
}

/// Prints every event to stderr.
#[derive(Copy, Clone, Default, Debug)]
pub struct Stderr;

impl Trace for Stderr {
    fn event(&mut self, event: &Event<'_>) {
        eprintln!("{}", event);
    }
}

/// Keeps the rendered events, one line each.
#[derive(Clone, Default, Debug)]
pub struct Recorder {
    lines: Vec<String>,
}

impl Recorder {
    pub fn new() -> Self { Self::default() }
    pub fn lines(&self) -> &[String] { &self.lines }
    pub fn joined(&self) -> String { self.lines.join("\n") }
}

impl Trace for Recorder {
    fn event(&mut self, event: &Event<'_>) {
        self.lines.push(event.to_string());
    }
}

impl<T: Trace + ?Sized> Trace for &mut T {
    fn event(&mut self, event: &Event<'_>) {
        (**self).event(event)
    }
}
