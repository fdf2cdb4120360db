use crate::agenda::Agenda;
use crate::chart::Chart;
use crate::error::ItemError;
use crate::goal::GoalItem;
use crate::grammar::{Grammar, Rule};
use crate::item::{self, Item, ItemFactory, ItemKey, ItemRef, Span};

use std::rc::Rc;

/// `<A -> α> [i,j)`: a recognised constituent.
#[derive(Clone, Debug)]
pub struct CompletedItem {
    rule: Rc<Rule>,
    span: Span,
    children: Vec<ItemRef>,
}

impl CompletedItem {
    pub(crate) fn new(rule: Rc<Rule>, span: Span, children: Vec<ItemRef>) -> Self {
        CompletedItem { rule, span, children }
    }

    pub fn rule(&self) -> &Rc<Rule> { &self.rule }
    pub fn span(&self) -> Span { self.span }
    pub fn from(&self) -> usize { self.span.from }
    pub fn to(&self) -> usize { self.span.to }
    pub fn children(&self) -> &[ItemRef] { &self.children }

    pub fn key(&self) -> ItemKey {
        ItemKey::Completed { rule: self.rule.id(), span: self.span }
    }

    /// Projects this constituent onto the rules it heads, for every goal
    /// whose span covers it.
    pub fn combine_with_chart(&self, chart: &Chart, agenda: &mut Agenda, grammar: &Grammar) -> Result<usize, ItemError> {
        let this: ItemRef = Rc::new(Item::Completed(self.clone()));
        let mut added = 0;
        for pos in 0..=self.from() {
            for found in chart.get_items_from(pos) {
                let goal = match found.as_goal() {
                    Some(g) if g.span().contains(self.span) => g,
                    _ => continue,
                };
                added += project(&this, goal, chart, agenda, grammar)?;
            }
        }
        Ok(added)
    }

    pub fn create_parse_tree(&self) -> String {
        item::render_tree(&self.rule, &self.children)
    }
}

///  <B -> β> [i,j)    ?C [h,l)    A -> α B* γ    A head corner of C    h <= i, j <= l
/// -------------------------------------------------------------------------------- head corner
///  A -> α . B . γ [i,j)
///
/// The new item is built with both dots on the head and then recognises
/// `found` rightward, so its dots only ever move outward.
pub(crate) fn project(found: &ItemRef, goal: &GoalItem, chart: &Chart, agenda: &mut Agenda, grammar: &Grammar) -> Result<usize, ItemError> {
    let category = found.category();
    let mut added = 0;
    for rule in grammar.rules_with_head(category) {
        if !grammar.is_headcorner_of(rule.lhs(), goal.nonterminal()) { continue; }
        let head = match rule.head() {
            Some(h) => h,
            None => continue,
        };
        let mut item = ItemFactory.double_dotted(rule.clone(), head, head, Span::point(found.span().from), vec![])?;
        item.recognise_right(found)?;
        added += agenda.add_item(item.into(), chart);
    }
    Ok(added)
}

#[cfg(test)]
#[path = "tests/completed.rs"]
mod tests_for_completed;
