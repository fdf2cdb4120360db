//! The work loops that drive the item transitions to a fixpoint, one per
//! algorithm, and the configuration that picks between them.
//!
//! Items own their transitions; the driver only decides which item to
//! expand next and when to stop. Every loop keeps going until a full pass
//! over the relevant items admits nothing new, so the final chart does not
//! depend on the order items happened to be processed in.

use crate::agenda::Agenda;
use crate::chart::Chart;
use crate::grammar::{Grammar, Symbol};
use crate::item::{Item, ItemFactory, ItemKey, ItemRef, ItemSpec, Span};
use crate::trace::{Event, NoTrace, Step, Trace};
use crate::ChartError;

use std::collections::HashSet;

use derive_more::Display;
use regex::Regex;

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default, Display)]
pub enum Algorithm {
    #[default]
    #[display(fmt = "earley")]
    Earley,
    #[display(fmt = "left-corner")]
    LeftCorner,
    #[display(fmt = "head-corner")]
    HeadCorner,
}

impl std::str::FromStr for Algorithm {
    type Err = ChartError;
    fn from_str(s: &str) -> Result<Self, ChartError> {
        match s {
            "earley" => Ok(Algorithm::Earley),
            "left-corner" | "lc" => Ok(Algorithm::LeftCorner),
            "head-corner" | "hc" => Ok(Algorithm::HeadCorner),
            other => Err(ChartError::UnknownAlgorithm(other.to_string())),
        }
    }
}

pub const DEFAULT_TOKEN_PATTERN: &str = r"\S+";

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ParserConfig {
    pub algorithm: Algorithm,
    /// Overrides the grammar's start symbol.
    pub start: Option<Symbol>,
    /// Give up once the chart holds more items than this.
    pub item_limit: Option<usize>,
    /// Each match of this pattern is one word of the input to `parse_str`.
    pub token_pattern: String,
}

impl Default for ParserConfig {
    fn default() -> Self {
        ParserConfig {
            algorithm: Algorithm::default(),
            start: None,
            item_limit: None,
            token_pattern: DEFAULT_TOKEN_PATTERN.to_string(),
        }
    }
}

impl ParserConfig {
    pub fn new(algorithm: Algorithm) -> Self {
        ParserConfig { algorithm, ..Self::default() }
    }

    pub fn start(mut self, start: impl Into<Symbol>) -> Self {
        self.start = Some(start.into());
        self
    }

    pub fn item_limit(mut self, limit: usize) -> Self {
        self.item_limit = Some(limit);
        self
    }

    pub fn token_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.token_pattern = pattern.into();
        self
    }
}

pub struct Parser<'g, T: Trace = NoTrace> {
    grammar: &'g Grammar,
    config: ParserConfig,
    start: Symbol,
    tokens: Regex,
    trace: T,
}

impl<'g> Parser<'g, NoTrace> {
    pub fn new(grammar: &'g Grammar, config: ParserConfig) -> Result<Self, ChartError> {
        let start = config.start.clone().unwrap_or_else(|| grammar.start().clone());
        if !grammar.is_nonterminal(&start) {
            return Err(ChartError::UnknownStart(start));
        }
        let tokens = Regex::new(&config.token_pattern)?;
        Ok(Parser { grammar, config, start, tokens, trace: NoTrace })
    }
}

impl<'g, T: Trace> Parser<'g, T> {
    pub fn with_trace<U: Trace>(self, trace: U) -> Parser<'g, U> {
        let Parser { grammar, config, start, tokens, trace: _ } = self;
        Parser { grammar, config, start, tokens, trace }
    }

    pub fn config(&self) -> &ParserConfig { &self.config }
    pub fn start(&self) -> &Symbol { &self.start }

    pub fn tokenize(&self, text: &str) -> Vec<Symbol> {
        self.tokens.find_iter(text).map(|m| Symbol::from(m.as_str())).collect()
    }

    pub fn parse_str(&mut self, text: &str) -> Result<Parse, ChartError> {
        let words = self.tokenize(text);
        self.parse(&words)
    }

    pub fn parse(&mut self, words: &[Symbol]) -> Result<Parse, ChartError> {
        let mut chart = Chart::new(words.len());
        let passes = match self.config.algorithm {
            Algorithm::Earley | Algorithm::LeftCorner => self.run_single_dotted(words, &mut chart)?,
            Algorithm::HeadCorner => self.run_head_corner(words, &mut chart)?,
        };
        let parse = Parse {
            algorithm: self.config.algorithm,
            start: self.start.clone(),
            words: words.to_vec(),
            chart,
            passes,
        };
        self.trace.event(&Event::Finished {
            items: parse.chart.len(),
            passes,
            recognised: parse.is_recognised(),
        });
        Ok(parse)
    }

    fn check_limit(&self, chart: &Chart) -> Result<(), ChartError> {
        match self.config.item_limit {
            Some(limit) if chart.len() > limit => Err(ChartError::ItemLimit { limit }),
            _ => Ok(()),
        }
    }

    // Earley and left-corner: position by position, expanding every item
    // that ends at the position, and repeating the position until a pass
    // admits nothing.
    fn run_single_dotted(&mut self, words: &[Symbol], chart: &mut Chart) -> Result<usize, ChartError> {
        let grammar = self.grammar;
        for rule in grammar.rules_with_lhs(&self.start) {
            let item = ItemFactory.create(ItemSpec::SingleDotted {
                rule: rule.clone(),
                dot: 0,
                span: Span::point(0),
                children: vec![],
            })?;
            self.trace.event(&Event::Seeded { item: &item });
            chart.add_item(item);
        }

        let mut reported = HashSet::new();
        let mut passes = 0;
        for pos in 0..=words.len() {
            loop {
                passes += 1;
                let mut added = 0;
                let mut nth = 0;
                while let Some(item) = chart.item_to(pos, nth) {
                    nth += 1;
                    added += self.expand(&item, words, chart)?;
                    self.check_limit(chart)?;
                    self.report_unmatched(&item, words, &mut reported);
                }
                if added == 0 { break; }
            }
        }
        Ok(passes)
    }

    fn expand(&mut self, item: &ItemRef, words: &[Symbol], chart: &mut Chart) -> Result<usize, ChartError> {
        let grammar = self.grammar;
        let sd = match item.as_single_dotted() {
            Some(sd) => sd,
            None => return Ok(0),
        };
        let steps: &[Step] = match self.config.algorithm {
            Algorithm::LeftCorner => &[Step::LcPredictor, Step::LcScanner, Step::Scanner, Step::Completer],
            _ => &[Step::Predictor, Step::Scanner, Step::Completer],
        };
        let mut total = 0;
        for &step in steps {
            let added = match step {
                Step::Predictor => sd.predictor(chart, grammar)?,
                Step::LcPredictor => sd.lc_predictor(chart, grammar)?,
                Step::Scanner => sd.scanner(chart, grammar, words)?,
                Step::LcScanner => sd.lc_scanner(chart, grammar, words)?,
                Step::Completer => sd.completer(chart, grammar)?,
                Step::Combine => 0,
            };
            if added > 0 {
                self.trace.event(&Event::Applied { step, item: &**item, added });
            }
            total += added;
        }
        Ok(total)
    }

    fn report_unmatched(&mut self, item: &ItemRef, words: &[Symbol], reported: &mut HashSet<ItemKey>) {
        let sd = match item.as_single_dotted() {
            Some(sd) => sd,
            None => return,
        };
        let symbol = match sd.next_symbol() {
            Some(s) if !self.grammar.is_nonterminal(s) => s,
            _ => return,
        };
        if words.get(sd.to()) == Some(symbol) || !reported.insert(item.key()) {
            return;
        }
        self.trace.event(&Event::Unmatched { item: &**item, symbol, position: sd.to() });
    }

    // Head-corner: drain the agenda, admitting each item to the chart and
    // combining it; then replay the whole chart once, since an item may have
    // been combined before the partner it needed arrived. Stop when a replay
    // admits nothing.
    fn run_head_corner(&mut self, words: &[Symbol], chart: &mut Chart) -> Result<usize, ChartError> {
        let mut agenda = Agenda::new();
        let goal = ItemFactory.create(ItemSpec::Goal {
            nonterminal: self.start.clone(),
            span: Span::new(0, words.len()),
        })?;
        self.trace.event(&Event::Seeded { item: &goal });
        agenda.add_item(goal, chart);

        let mut passes = 0;
        loop {
            passes += 1;
            while let Some(item) = agenda.pop() {
                chart.insert(item.clone());
                self.check_limit(chart)?;
                self.combine(&item, chart, &mut agenda, words)?;
            }
            let mut added = 0;
            for item in chart.items().to_vec() {
                added += self.combine(&item, chart, &mut agenda, words)?;
            }
            if added == 0 { break; }
        }
        Ok(passes)
    }

    fn combine(&mut self, item: &ItemRef, chart: &Chart, agenda: &mut Agenda, words: &[Symbol]) -> Result<usize, ChartError> {
        let grammar = self.grammar;
        let added = match &**item {
            Item::DoubleDotted(i) => {
                i.combine_with_chart(chart, agenda, grammar)? + i.scan_terminals(chart, agenda, grammar, words)?
            }
            Item::Goal(i) => i.combine_with_chart(chart, agenda, grammar, words)?,
            Item::Completed(i) => i.combine_with_chart(chart, agenda, grammar)?,
            Item::SingleDotted(_) => 0,
        };
        if added > 0 {
            self.trace.event(&Event::Applied { step: Step::Combine, item: &**item, added });
        }
        Ok(added)
    }
}

/// The chart a parse ended with, and what it recognised.
#[derive(Debug)]
pub struct Parse {
    algorithm: Algorithm,
    start: Symbol,
    words: Vec<Symbol>,
    chart: Chart,
    passes: usize,
}

impl Parse {
    pub fn algorithm(&self) -> Algorithm { self.algorithm }
    pub fn words(&self) -> &[Symbol] { &self.words }
    pub fn chart(&self) -> &Chart { &self.chart }
    pub fn passes(&self) -> usize { self.passes }

    /// Items for the start symbol that cover the whole input: complete
    /// single-dotted items, or completed items.
    pub fn complete_items(&self) -> Vec<ItemRef> {
        self.chart
            .get_items_from_to(0, self.words.len())
            .into_iter()
            .filter(|item| match &**item {
                Item::SingleDotted(i) => i.is_complete() && i.rule().lhs() == &self.start,
                Item::Completed(i) => i.rule().lhs() == &self.start,
                Item::DoubleDotted(_) | Item::Goal(_) => false,
            })
            .collect()
    }

    pub fn is_recognised(&self) -> bool {
        !self.complete_items().is_empty()
    }

    /// Rendered trees of `complete_items`, sorted and without duplicates.
    pub fn parse_trees(&self) -> Vec<String> {
        let mut trees: Vec<String> = self.complete_items().iter().map(|i| i.create_parse_tree()).collect();
        trees.sort();
        trees.dedup();
        trees
    }
}

#[cfg(test)]
#[path = "tests/parser.rs"]
mod tests_for_parser;
