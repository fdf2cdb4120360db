//! Double-dotted items `A -> α . β . γ [i,j)`: `β` has been recognised over
//! `[i,j)`, starting from the head of the rule, and the item grows outward,
//! leftward over `α` and rightward over `γ`.
//!
//! Growth is the intersection of top-down demand (goal items, which the
//! predict steps propose) and bottom-up availability (completed items, which
//! the complete steps consume).

use crate::agenda::Agenda;
use crate::chart::Chart;
use crate::error::ItemError;
use crate::goal::GoalItem;
use crate::grammar::{Grammar, Rule, Symbol};
use crate::item::{self, ItemFactory, ItemKey, ItemRef, ItemSpec, Span};

use std::rc::Rc;

#[derive(Clone, Debug)]
pub struct DoubleDottedItem {
    rule: Rc<Rule>,
    left_dot: usize,
    right_dot: usize,
    span: Span,
    children: Vec<ItemRef>,
}

impl DoubleDottedItem {
    pub(crate) fn new(rule: Rc<Rule>, left_dot: usize, right_dot: usize, span: Span, children: Vec<ItemRef>) -> Self {
        DoubleDottedItem { rule, left_dot, right_dot, span, children }
    }

    pub fn rule(&self) -> &Rc<Rule> { &self.rule }
    pub fn left_dot(&self) -> usize { self.left_dot }
    pub fn right_dot(&self) -> usize { self.right_dot }
    pub fn span(&self) -> Span { self.span }
    pub fn from(&self) -> usize { self.span.from }
    pub fn to(&self) -> usize { self.span.to }
    pub fn children(&self) -> &[ItemRef] { &self.children }

    pub fn key(&self) -> ItemKey {
        ItemKey::DoubleDotted {
            rule: self.rule.id(),
            left_dot: self.left_dot,
            right_dot: self.right_dot,
            span: self.span,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.left_dot == 0 && self.right_dot == self.rule.len()
    }
    pub fn is_incomplete(&self) -> bool { !self.is_complete() }

    /// The symbol just left of the left dot.
    pub fn left_symbol(&self) -> Option<&Symbol> {
        self.left_dot.checked_sub(1).map(|i| &self.rule.rhs()[i])
    }

    /// The symbol just right of the right dot.
    pub fn right_symbol(&self) -> Option<&Symbol> {
        self.rule.rhs().get(self.right_dot)
    }

    /// An independent item with the same dots and span. The children
    /// container is cloned; the children themselves are shared.
    pub fn copy(&self) -> DoubleDottedItem {
        self.clone()
    }

    /// Moves the left dot over `item`, which must end where `self` starts.
    /// Only ever called on a copy.
    pub fn recognise_left(&mut self, item: &ItemRef) -> Result<(), ItemError> {
        if self.left_dot == 0 {
            return Err(ItemError::LeftDotExhausted(self.rule.lhs().clone()));
        }
        self.left_dot -= 1;
        self.span.from = item.span().from;
        self.children.insert(0, item.clone());
        Ok(())
    }

    /// Moves the right dot over `item`, which must start where `self` ends.
    pub fn recognise_right(&mut self, item: &ItemRef) -> Result<(), ItemError> {
        if self.right_dot == self.rule.len() {
            return Err(ItemError::RightDotExhausted(self.rule.lhs().clone()));
        }
        self.right_dot += 1;
        self.span.to = item.span().to;
        self.children.push(item.clone());
        Ok(())
    }

    pub fn combine_with_chart(&self, chart: &Chart, agenda: &mut Agenda, grammar: &Grammar) -> Result<usize, ItemError> {
        let mut added = 0;
        added += self.pre_complete(chart, agenda, grammar)?;
        added += self.left_predict(chart, agenda, grammar)?;
        added += self.right_predict(chart, agenda, grammar)?;
        added += self.left_complete(chart, agenda, grammar)?;
        added += self.right_complete(chart, agenda, grammar)?;
        Ok(added)
    }

    ///  A -> . α . [i,j)
    /// ------------------ pre-complete
    ///  <A -> α> [i,j)
    pub fn pre_complete(&self, chart: &Chart, agenda: &mut Agenda, _grammar: &Grammar) -> Result<usize, ItemError> {
        if self.is_incomplete() { return Ok(0); }
        let item = ItemFactory.create(ItemSpec::Completed {
            rule: self.rule.clone(),
            span: self.span,
            children: self.children.clone(),
        })?;
        Ok(agenda.add_item(item, chart))
    }

    ///  A -> α B . β . γ [j,k)    ?C [h,k)    A head corner of C    h <= i <= i' <= j
    /// --------------------------------------------------------------------------- left predict
    ///  ?B [i,i')
    pub fn left_predict(&self, chart: &Chart, agenda: &mut Agenda, grammar: &Grammar) -> Result<usize, ItemError> {
        let wanted = match self.left_symbol() {
            Some(b) => b,
            None => return Ok(0),
        };
        let mut added = 0;
        for goal in self.goals_ending_here(chart, grammar) {
            for i in goal.from()..=self.from() {
                for j in i..=self.from() {
                    let item = ItemFactory.create(ItemSpec::Goal {
                        nonterminal: wanted.clone(),
                        span: Span::new(i, j),
                    })?;
                    added += agenda.add_item(item, chart);
                }
            }
        }
        Ok(added)
    }

    ///  A -> α . β . B γ [i,j)    ?C [i,l)    A head corner of C    j <= k <= k' <= l
    /// --------------------------------------------------------------------------- right predict
    ///  ?B [k,k')
    pub fn right_predict(&self, chart: &Chart, agenda: &mut Agenda, grammar: &Grammar) -> Result<usize, ItemError> {
        let wanted = match self.right_symbol() {
            Some(b) => b,
            None => return Ok(0),
        };
        let mut added = 0;
        for goal in self.goals_starting_here(chart, grammar) {
            for j in self.to()..=goal.to() {
                for k in j..=goal.to() {
                    let item = ItemFactory.create(ItemSpec::Goal {
                        nonterminal: wanted.clone(),
                        span: Span::new(j, k),
                    })?;
                    added += agenda.add_item(item, chart);
                }
            }
        }
        Ok(added)
    }

    ///  A -> α B . β . γ [j,k)    ?C [i,k)    <B -> δ> [i,j)    A head corner of C
    /// --------------------------------------------------------------------------- left complete
    ///  A -> α . B β . γ [i,k)
    pub fn left_complete(&self, chart: &Chart, agenda: &mut Agenda, grammar: &Grammar) -> Result<usize, ItemError> {
        let wanted = match self.left_symbol() {
            Some(b) => b,
            None => return Ok(0),
        };
        let mut added = 0;
        for goal in self.goals_ending_here(chart, grammar) {
            for found in chart.get_items_from_to(goal.from(), self.from()) {
                match found.as_completed() {
                    Some(c) if c.rule().lhs() == wanted => {}
                    _ => continue,
                }
                let mut item = self.copy();
                item.recognise_left(&found)?;
                added += agenda.add_item(item.into(), chart);
            }
        }
        Ok(added)
    }

    ///  A -> α . β . B γ [i,j)    ?C [i,l)    <B -> δ> [j,l)    A head corner of C
    /// --------------------------------------------------------------------------- right complete
    ///  A -> α . β B . γ [i,l)
    pub fn right_complete(&self, chart: &Chart, agenda: &mut Agenda, grammar: &Grammar) -> Result<usize, ItemError> {
        let wanted = match self.right_symbol() {
            Some(b) => b,
            None => return Ok(0),
        };
        let mut added = 0;
        for goal in self.goals_starting_here(chart, grammar) {
            for found in chart.get_items_from_to(self.to(), goal.to()) {
                match found.as_completed() {
                    Some(c) if c.rule().lhs() == wanted => {}
                    _ => continue,
                }
                let mut item = self.copy();
                item.recognise_right(&found)?;
                added += agenda.add_item(item.into(), chart);
            }
        }
        Ok(added)
    }

    /// Moves either dot over the input word next to the item, when that word
    /// is the terminal the rule wants there. The driver runs this next to
    /// `combine_with_chart`, since only it knows the input.
    pub fn scan_terminals(&self, chart: &Chart, agenda: &mut Agenda, grammar: &Grammar, words: &[Symbol]) -> Result<usize, ItemError> {
        Ok(self.left_scan(chart, agenda, grammar, words)? + self.right_scan(chart, agenda, grammar, words)?)
    }

    ///  A -> α a . β . γ [j,k)    ?C [i,k)    w_{j-1} = a    A head corner of C    i < j
    /// ------------------------------------------------------------------------------ left scan
    ///  A -> α . a β . γ [j-1,k)
    pub fn left_scan(&self, chart: &Chart, agenda: &mut Agenda, grammar: &Grammar, words: &[Symbol]) -> Result<usize, ItemError> {
        let wanted = match self.left_symbol() {
            Some(a) if !grammar.is_nonterminal(a) => a,
            _ => return Ok(0),
        };
        let at = match self.from().checked_sub(1) {
            Some(at) if words.get(at) == Some(wanted) => at,
            _ => return Ok(0),
        };
        if !self.goals_ending_here(chart, grammar).iter().any(|g| g.from() <= at) {
            return Ok(0);
        }
        let item = ItemFactory.create(ItemSpec::DoubleDotted {
            rule: self.rule.clone(),
            left_dot: self.left_dot - 1,
            right_dot: self.right_dot,
            span: Span::new(at, self.to()),
            children: self.children.clone(),
        })?;
        Ok(agenda.add_item(item, chart))
    }

    ///  A -> α . β . a γ [i,j)    ?C [i,l)    w_j = a    A head corner of C    j < l
    /// --------------------------------------------------------------------------- right scan
    ///  A -> α . β a . γ [i,j+1)
    pub fn right_scan(&self, chart: &Chart, agenda: &mut Agenda, grammar: &Grammar, words: &[Symbol]) -> Result<usize, ItemError> {
        let wanted = match self.right_symbol() {
            Some(a) if !grammar.is_nonterminal(a) => a,
            _ => return Ok(0),
        };
        if words.get(self.to()) != Some(wanted) {
            return Ok(0);
        }
        if !self.goals_starting_here(chart, grammar).iter().any(|g| g.to() > self.to()) {
            return Ok(0);
        }
        let item = ItemFactory.create(ItemSpec::DoubleDotted {
            rule: self.rule.clone(),
            left_dot: self.left_dot,
            right_dot: self.right_dot + 1,
            span: Span::new(self.from(), self.to() + 1),
            children: self.children.clone(),
        })?;
        Ok(agenda.add_item(item, chart))
    }

    // Goals ending at `self.to` whose category `self`'s lhs is a head corner of.
    fn goals_ending_here(&self, chart: &Chart, grammar: &Grammar) -> Vec<GoalItem> {
        self.goals(chart.get_items_to(self.to()), grammar)
    }

    // Goals starting at `self.from`, filtered the same way.
    fn goals_starting_here(&self, chart: &Chart, grammar: &Grammar) -> Vec<GoalItem> {
        self.goals(chart.get_items_from(self.from()), grammar)
    }

    fn goals(&self, items: Vec<ItemRef>, grammar: &Grammar) -> Vec<GoalItem> {
        items.iter()
            .filter_map(|i| i.as_goal())
            .filter(|g| grammar.is_headcorner_of(self.rule.lhs(), g.nonterminal()))
            .cloned()
            .collect()
    }

    pub fn create_parse_tree(&self) -> String {
        item::render_tree(&self.rule, &self.children)
    }
}

#[cfg(test)]
#[path = "tests/double_dotted.rs"]
mod tests_for_double_dotted;
