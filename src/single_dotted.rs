//! Single-dotted items `A -> α . β [i,j)` and the transitions of the Earley
//! and left-corner algorithms.
//!
//! Every transition reads the chart, builds new items through the
//! [`ItemFactory`] and adds them straight to the chart, returning how many
//! were actually new. Items are never modified: advancing the dot builds a
//! fresh item.
//!
//! The left-corner transitions follow Robert C. Moore, "Improved Left-Corner
//! Chart Parsing for Large Context-Free Grammars" (IWPT 2000): rule 4a is
//! `lc_predictor`, rule 4b is `lc_scanner`.

use crate::chart::Chart;
use crate::error::ItemError;
use crate::grammar::{Grammar, Rule, Symbol};
use crate::item::{self, Item, ItemFactory, ItemKey, ItemRef, ItemSpec, Span};

use std::rc::Rc;

#[derive(Clone, Debug)]
pub struct SingleDottedItem {
    rule: Rc<Rule>,
    dot: usize,
    span: Span,
    children: Vec<ItemRef>,
}

impl SingleDottedItem {
    pub(crate) fn new(rule: Rc<Rule>, dot: usize, span: Span, children: Vec<ItemRef>) -> Self {
        SingleDottedItem { rule, dot, span, children }
    }

    pub fn rule(&self) -> &Rc<Rule> { &self.rule }
    pub fn dot(&self) -> usize { self.dot }
    pub fn span(&self) -> Span { self.span }
    pub fn from(&self) -> usize { self.span.from }
    pub fn to(&self) -> usize { self.span.to }
    pub fn children(&self) -> &[ItemRef] { &self.children }

    pub fn key(&self) -> ItemKey {
        ItemKey::SingleDotted { rule: self.rule.id(), dot: self.dot, span: self.span }
    }

    /// The symbol right of the dot, if any.
    pub fn next_symbol(&self) -> Option<&Symbol> {
        self.rule.rhs().get(self.dot)
    }

    pub fn is_complete(&self) -> bool { self.dot == self.rule.len() }
    pub fn is_incomplete(&self) -> bool { self.dot < self.rule.len() }

    // The chart-resident form of `self`, for use as a child of a new item.
    fn shared(&self) -> ItemRef {
        Rc::new(Item::SingleDotted(self.clone()))
    }

    ///  A -> α . B β [i,j)    B -> γ
    /// ------------------------------- predict
    ///  B -> . γ [j,j)
    pub fn predictor(&self, chart: &mut Chart, grammar: &Grammar) -> Result<usize, ItemError> {
        let mut added = 0;
        let next = match self.next_symbol() {
            Some(b) if grammar.is_nonterminal(b) => b,
            _ => return Ok(0),
        };
        for rule in grammar.rules_with_lhs(next) {
            let item = ItemFactory.create(ItemSpec::SingleDotted {
                rule: rule.clone(),
                dot: 0,
                span: Span::point(self.to()),
                children: vec![],
            })?;
            added += chart.add_item(item);
        }
        Ok(added)
    }

    ///  B -> γ . [i,j)    C -> δ . D ε [h,i)    A -> B α    A left corner of D
    /// ------------------------------------------------------------------------ 4a
    ///  A -> B . α [i,j)
    pub fn lc_predictor(&self, chart: &mut Chart, grammar: &Grammar) -> Result<usize, ItemError> {
        if self.is_incomplete() { return Ok(0); }
        let mut added = 0;
        let waiting = chart.get_items_to(self.from());
        let this = self.shared();
        for rule in grammar.rules_with_leftmost_daughter(self.rule.lhs()) {
            for that in waiting.iter().filter_map(|i| i.as_single_dotted()) {
                let wanted = match that.next_symbol() {
                    Some(d) => d,
                    None => continue,
                };
                if !grammar.is_leftcorner_of(rule.lhs(), wanted) { continue; }
                let item = ItemFactory.create(ItemSpec::SingleDotted {
                    rule: rule.clone(),
                    dot: 1,
                    span: self.span,
                    children: vec![this.clone()],
                })?;
                added += chart.add_item(item);
            }
        }
        Ok(added)
    }

    ///  B -> γ . [j,k)    A -> α . B β [i,j)
    /// -------------------------------------- complete
    ///  A -> α B . β [i,k)
    pub fn completer(&self, chart: &mut Chart, _grammar: &Grammar) -> Result<usize, ItemError> {
        if self.is_incomplete() { return Ok(0); }
        let mut added = 0;
        let this = self.shared();
        for that in chart.get_items_to(self.from()) {
            let that = match that.as_single_dotted() {
                Some(that) if that.next_symbol() == Some(self.rule.lhs()) => that,
                _ => continue,
            };
            let mut children = that.children.clone();
            children.push(this.clone());
            let item = ItemFactory.create(ItemSpec::SingleDotted {
                rule: that.rule.clone(),
                dot: that.dot + 1,
                span: Span::new(that.from(), self.to()),
                children,
            })?;
            added += chart.add_item(item);
        }
        Ok(added)
    }

    ///  A -> α . a β [i,j)    w_j = a
    /// ------------------------------- scan
    ///  A -> α a . β [i,j+1)
    pub fn scanner(&self, chart: &mut Chart, grammar: &Grammar, words: &[Symbol]) -> Result<usize, ItemError> {
        match (self.next_symbol(), words.get(self.to())) {
            (Some(a), Some(w)) if a == w && !grammar.is_nonterminal(a) => {}
            _ => return Ok(0),
        }
        let item = ItemFactory.create(ItemSpec::SingleDotted {
            rule: self.rule.clone(),
            dot: self.dot + 1,
            span: Span::new(self.from(), self.to() + 1),
            children: self.children.clone(),
        })?;
        Ok(chart.add_item(item))
    }

    ///  C -> δ . D ε [h,j)    w_j = a    A -> a α    A left corner of D
    /// ----------------------------------------------------------------- 4b
    ///  A -> a . α [j,j+1)
    ///
    /// Empty rules whose lhs is a left corner of `D` are introduced here as
    /// well, as complete items over `[j,j)`.
    pub fn lc_scanner(&self, chart: &mut Chart, grammar: &Grammar, words: &[Symbol]) -> Result<usize, ItemError> {
        let wanted = match self.next_symbol() {
            Some(d) => d,
            None => return Ok(0),
        };
        let mut added = 0;
        if let Some(word) = words.get(self.to()).filter(|w| !grammar.is_nonterminal(w)) {
            for rule in grammar.rules_with_leftmost_daughter(word) {
                if !grammar.is_leftcorner_of(rule.lhs(), wanted) { continue; }
                let item = ItemFactory.create(ItemSpec::SingleDotted {
                    rule: rule.clone(),
                    dot: 1,
                    span: Span::new(self.to(), self.to() + 1),
                    children: vec![],
                })?;
                added += chart.add_item(item);
            }
        }
        for rule in grammar.empty_rules() {
            if !grammar.is_leftcorner_of(rule.lhs(), wanted) { continue; }
            let item = ItemFactory.create(ItemSpec::SingleDotted {
                rule: rule.clone(),
                dot: 0,
                span: Span::point(self.to()),
                children: vec![],
            })?;
            added += chart.add_item(item);
        }
        Ok(added)
    }

    pub fn create_parse_tree(&self) -> String {
        item::render_tree(&self.rule, &self.children)
    }
}

#[cfg(test)]
#[path = "tests/single_dotted.rs"]
mod tests_for_single_dotted;
