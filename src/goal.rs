use crate::agenda::Agenda;
use crate::chart::Chart;
use crate::completed;
use crate::error::ItemError;
use crate::grammar::{Grammar, Symbol};
use crate::item::{ItemFactory, ItemKey, ItemSpec, Span};

/// `?A [i,j)`: a constituent of category `A` over `[i,j)` is wanted.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct GoalItem {
    nonterminal: Symbol,
    span: Span,
}

impl GoalItem {
    pub(crate) fn new(nonterminal: Symbol, span: Span) -> Self {
        GoalItem { nonterminal, span }
    }

    pub fn nonterminal(&self) -> &Symbol { &self.nonterminal }
    pub fn span(&self) -> Span { self.span }
    pub fn from(&self) -> usize { self.span.from }
    pub fn to(&self) -> usize { self.span.to }

    pub fn key(&self) -> ItemKey {
        ItemKey::Goal { nonterminal: self.nonterminal.clone(), span: self.span }
    }

    /// Seeds head-corner growth inside this goal's span: lexical heads,
    /// empty rules, and completed items that are already in the chart. Also
    /// offers the narrower goals that items strictly inside the span grow
    /// under.
    pub fn combine_with_chart(&self, chart: &Chart, agenda: &mut Agenda, grammar: &Grammar, words: &[Symbol]) -> Result<usize, ItemError> {
        let mut added = 0;
        added += self.scan(chart, agenda, grammar, words)?;
        added += self.scan_empty(chart, agenda, grammar)?;
        added += self.project(chart, agenda, grammar)?;
        added += self.narrow(chart, agenda)?;
        Ok(added)
    }

    ///  ?C [h,l)    h <= k <= l
    /// -------------------------- narrow
    ///  ?C [h,k)    ?C [k,l)
    ///
    /// Growth steps only look at goals that share an edge with the item, so
    /// an item over `[i,j)` with `h < i` and `j < l` first grows right under
    /// `?C [i,l)` and then left under `?C [h,l)`.
    pub fn narrow(&self, chart: &Chart, agenda: &mut Agenda) -> Result<usize, ItemError> {
        let mut added = 0;
        for k in self.from()..=self.to() {
            for span in [Span::new(self.from(), k), Span::new(k, self.to())] {
                let item = ItemFactory.goal(self.nonterminal.clone(), span)?;
                added += agenda.add_item(item.into(), chart);
            }
        }
        Ok(added)
    }

    ///  ?C [i,j)    w_k = a    A -> α a* γ    A head corner of C    i <= k < j
    /// ------------------------------------------------------------------------ scan
    ///  A -> α . a . γ [k,k+1)
    pub fn scan(&self, chart: &Chart, agenda: &mut Agenda, grammar: &Grammar, words: &[Symbol]) -> Result<usize, ItemError> {
        let mut added = 0;
        for k in self.from()..self.to() {
            let word = match words.get(k) {
                Some(w) if !grammar.is_nonterminal(w) => w,
                _ => continue,
            };
            for rule in grammar.rules_with_head(word) {
                if !grammar.is_headcorner_of(rule.lhs(), &self.nonterminal) { continue; }
                let head = match rule.head() {
                    Some(h) => h,
                    None => continue,
                };
                let item = ItemFactory.create(ItemSpec::DoubleDotted {
                    rule: rule.clone(),
                    left_dot: head,
                    right_dot: head + 1,
                    span: Span::new(k, k + 1),
                    children: vec![],
                })?;
                added += agenda.add_item(item, chart);
            }
        }
        Ok(added)
    }

    ///  ?C [i,j)    A -> ε    A head corner of C    i <= k <= j
    /// ---------------------------------------------------------- scan empty
    ///  A -> . . [k,k)
    pub fn scan_empty(&self, chart: &Chart, agenda: &mut Agenda, grammar: &Grammar) -> Result<usize, ItemError> {
        let mut added = 0;
        for rule in grammar.empty_rules() {
            if !grammar.is_headcorner_of(rule.lhs(), &self.nonterminal) { continue; }
            for k in self.from()..=self.to() {
                let item = ItemFactory.create(ItemSpec::DoubleDotted {
                    rule: rule.clone(),
                    left_dot: 0,
                    right_dot: 0,
                    span: Span::point(k),
                    children: vec![],
                })?;
                added += agenda.add_item(item, chart);
            }
        }
        Ok(added)
    }

    /// Projects every completed item inside this goal's span onto the rules
    /// it heads.
    pub fn project(&self, chart: &Chart, agenda: &mut Agenda, grammar: &Grammar) -> Result<usize, ItemError> {
        let mut added = 0;
        for pos in self.from()..=self.to() {
            for found in chart.get_items_from(pos) {
                if found.as_completed().is_none() || !self.span.contains(found.span()) {
                    continue;
                }
                added += completed::project(&found, self, chart, agenda, grammar)?;
            }
        }
        Ok(added)
    }
}

#[cfg(test)]
#[path = "tests/goal.rs"]
mod tests_for_goal;
