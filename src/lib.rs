//! Chart parsing over context-free grammars with three interchangeable
//! strategies: Earley, left-corner and head-corner.
//!
//! The first two work with single-dotted items (`A -> α . β`); head-corner
//! parsing grows double-dotted items (`A -> α . β . γ`) outward from the
//! head of each rule, steered by goal items and closed off by completed
//! items. All strategies share one [`Chart`] and one [`ItemFactory`].

#[macro_use] extern crate lalrpop_util;

mod agenda;
mod chart;
mod completed;
mod display;
mod double_dotted;
mod error;
mod goal;
mod grammar;
mod item;
mod parser;
mod rendering;
mod single_dotted;
pub mod trace;

pub use agenda::Agenda;
pub use chart::Chart;
pub use completed::CompletedItem;
pub use double_dotted::DoubleDottedItem;
pub use error::{ChartError, ItemError};
pub use goal::GoalItem;
pub use grammar::{Grammar, Rule, RuleId, Symbol};
pub use item::{Item, ItemFactory, ItemKey, ItemRef, ItemSpec, Span};
pub use parser::{Algorithm, Parse, Parser, ParserConfig, DEFAULT_TOKEN_PATTERN};
pub use rendering::Rendered;
pub use single_dotted::SingleDottedItem;
pub use trace::{Event, NoTrace, Recorder, Step, Stderr, Trace};


lalrpop_mod!(bnf); // synthesized by LALRPOP
