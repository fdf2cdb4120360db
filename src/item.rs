//! Chart items and the factory that builds them.
//!
//! Four kinds of item share one chart:
//!
//! * single-dotted `A -> α . β` items, used by the Earley and left-corner
//!   algorithms (see `single_dotted`),
//! * double-dotted `A -> α . β . γ` items that grow outward from a head,
//!   used by the head-corner algorithm (see `double_dotted`),
//! * goal items `?A [i,j)`, demanding an `A` over a span (see `goal`),
//! * completed items, recognised constituents that goals are satisfied by
//!   (see `completed`).
//!
//! Items are immutable once built and shared through [`ItemRef`]. Their
//! identity is the structural [`ItemKey`]; children never take part in it.

use crate::completed::CompletedItem;
use crate::double_dotted::DoubleDottedItem;
use crate::error::ItemError;
use crate::goal::GoalItem;
use crate::grammar::{Rule, RuleId, Symbol};
use crate::rendering::Rendered;
use crate::single_dotted::SingleDottedItem;

use std::rc::Rc;

use derive_more::{Display, From};

pub type ItemRef = Rc<Item>;

/// Half-open range `[from, to)` over input positions.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Display)]
#[display(fmt = "[{},{})", from, to)]
pub struct Span { pub from: usize, pub to: usize }

impl Span {
    pub fn new(from: usize, to: usize) -> Self { Span { from, to } }
    pub fn point(at: usize) -> Self { Span { from: at, to: at } }
    pub fn is_empty(&self) -> bool { self.from == self.to }
    pub fn contains(&self, other: Span) -> bool {
        self.from <= other.from && other.to <= self.to
    }
}

#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum ItemKey {
    SingleDotted { rule: RuleId, dot: usize, span: Span },
    DoubleDotted { rule: RuleId, left_dot: usize, right_dot: usize, span: Span },
    Goal { nonterminal: Symbol, span: Span },
    Completed { rule: RuleId, span: Span },
}

#[derive(Clone, Debug, From)]
pub enum Item {
    SingleDotted(SingleDottedItem),
    DoubleDotted(DoubleDottedItem),
    Goal(GoalItem),
    Completed(CompletedItem),
}

impl Item {
    pub fn key(&self) -> ItemKey {
        match self {
            Item::SingleDotted(i) => i.key(),
            Item::DoubleDotted(i) => i.key(),
            Item::Goal(i) => i.key(),
            Item::Completed(i) => i.key(),
        }
    }

    pub fn span(&self) -> Span {
        match self {
            Item::SingleDotted(i) => i.span(),
            Item::DoubleDotted(i) => i.span(),
            Item::Goal(i) => i.span(),
            Item::Completed(i) => i.span(),
        }
    }

    /// The category the item stands for: the rule's lhs, or the goal's
    /// nonterminal.
    pub fn category(&self) -> &Symbol {
        match self {
            Item::SingleDotted(i) => i.rule().lhs(),
            Item::DoubleDotted(i) => i.rule().lhs(),
            Item::Goal(i) => i.nonterminal(),
            Item::Completed(i) => i.rule().lhs(),
        }
    }

    pub fn create_parse_tree(&self) -> String {
        match self {
            Item::SingleDotted(i) => i.create_parse_tree(),
            Item::DoubleDotted(i) => i.create_parse_tree(),
            Item::Goal(i) => i.nonterminal().to_string(),
            Item::Completed(i) => i.create_parse_tree(),
        }
    }

    pub fn as_single_dotted(&self) -> Option<&SingleDottedItem> {
        if let Item::SingleDotted(i) = self { Some(i) } else { None }
    }
    pub fn as_double_dotted(&self) -> Option<&DoubleDottedItem> {
        if let Item::DoubleDotted(i) = self { Some(i) } else { None }
    }
    pub fn as_goal(&self) -> Option<&GoalItem> {
        if let Item::Goal(i) = self { Some(i) } else { None }
    }
    pub fn as_completed(&self) -> Option<&CompletedItem> {
        if let Item::Completed(i) = self { Some(i) } else { None }
    }
}

/// The fields of an item to be built, one variant per kind.
#[derive(Clone, Debug)]
pub enum ItemSpec {
    SingleDotted { rule: Rc<Rule>, dot: usize, span: Span, children: Vec<ItemRef> },
    DoubleDotted {
        rule: Rc<Rule>,
        left_dot: usize,
        right_dot: usize,
        span: Span,
        children: Vec<ItemRef>,
    },
    Goal { nonterminal: Symbol, span: Span },
    Completed { rule: Rc<Rule>, span: Span, children: Vec<ItemRef> },
}

/// The only way to build items. Checks the dot and span invariants, so every
/// item in a chart satisfies them.
#[derive(Copy, Clone, Default, Debug)]
pub struct ItemFactory;

impl ItemFactory {
    pub fn create(&self, spec: ItemSpec) -> Result<Item, ItemError> {
        Ok(match spec {
            ItemSpec::SingleDotted { rule, dot, span, children } =>
                self.single_dotted(rule, dot, span, children)?.into(),
            ItemSpec::DoubleDotted { rule, left_dot, right_dot, span, children } =>
                self.double_dotted(rule, left_dot, right_dot, span, children)?.into(),
            ItemSpec::Goal { nonterminal, span } =>
                self.goal(nonterminal, span)?.into(),
            ItemSpec::Completed { rule, span, children } =>
                self.completed(rule, span, children)?.into(),
        })
    }

    pub fn single_dotted(&self, rule: Rc<Rule>, dot: usize, span: Span, children: Vec<ItemRef>) -> Result<SingleDottedItem, ItemError> {
        check_span(span)?;
        if dot > rule.len() {
            return Err(ItemError::DotOutOfRange { lhs: rule.lhs().clone(), dot, len: rule.len() });
        }
        Ok(SingleDottedItem::new(rule, dot, span, children))
    }

    pub fn double_dotted(&self, rule: Rc<Rule>, left_dot: usize, right_dot: usize, span: Span, children: Vec<ItemRef>) -> Result<DoubleDottedItem, ItemError> {
        check_span(span)?;
        if right_dot > rule.len() {
            return Err(ItemError::DotOutOfRange { lhs: rule.lhs().clone(), dot: right_dot, len: rule.len() });
        }
        if left_dot > right_dot {
            return Err(ItemError::CrossedDots { lhs: rule.lhs().clone(), left: left_dot, right: right_dot });
        }
        Ok(DoubleDottedItem::new(rule, left_dot, right_dot, span, children))
    }

    pub fn goal(&self, nonterminal: Symbol, span: Span) -> Result<GoalItem, ItemError> {
        check_span(span)?;
        Ok(GoalItem::new(nonterminal, span))
    }

    pub fn completed(&self, rule: Rc<Rule>, span: Span, children: Vec<ItemRef>) -> Result<CompletedItem, ItemError> {
        check_span(span)?;
        Ok(CompletedItem::new(rule, span, children))
    }
}

fn check_span(span: Span) -> Result<(), ItemError> {
    if span.from > span.to { Err(ItemError::ReversedSpan(span)) } else { Ok(()) }
}

/// `lhs(c1,c2,...)`, or `lhs(rhs)` for an item that recognised no
/// nonterminal children (a lexical production such as `NP -> n`).
pub(crate) fn render_tree(rule: &Rule, children: &[ItemRef]) -> String {
    if children.is_empty() {
        format!("{}({})", rule.lhs(), rule.rhs().rendered())
    } else {
        let subtrees: Vec<String> = children.iter().map(|c| c.create_parse_tree()).collect();
        format!("{}({})", rule.lhs(), subtrees.join(","))
    }
}

#[cfg(test)]
#[path = "tests/item.rs"]
mod tests_for_item;
