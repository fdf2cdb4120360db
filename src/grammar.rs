use crate::bnf;
use crate::ChartError;

use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::rc::Rc;

use derive_more::{AsRef, Display};

// A grammar G is a tuple (N, T, S, R), where
//   N is the set of symbols that appear as a left-hand side,
//   T is every other symbol (the words of the input),
//   S in N is the start symbol (lhs of the first rule), and
//   R is the rule table; each rule may mark one rhs position as its head.

#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Hash, Debug, Display, AsRef)]
pub struct Symbol(String);

impl From<&str> for Symbol { fn from(s: &str) -> Self { Symbol(s.into()) } }
impl From<String> for Symbol { fn from(s: String) -> Self { Symbol(s) } }

impl Symbol {
    pub fn as_str(&self) -> &str { &self.0 }
}

/// Index of a rule in its grammar; the rule half of every item identity.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Display)]
#[display(fmt = "r{}", _0)]
pub struct RuleId(pub(crate) usize);

#[derive(PartialEq, Eq, Debug)]
pub struct Rule {
    pub(crate) id: RuleId,
    pub(crate) lhs: Symbol,
    pub(crate) rhs: Vec<Symbol>,
    pub(crate) head: Option<usize>,
}

impl Rule {
    pub fn id(&self) -> RuleId { self.id }
    pub fn lhs(&self) -> &Symbol { &self.lhs }
    pub fn rhs(&self) -> &[Symbol] { &self.rhs }
    pub fn len(&self) -> usize { self.rhs.len() }
    pub fn is_empty(&self) -> bool { self.rhs.is_empty() }

    /// Position of the head daughter; `None` only for empty right-hand sides.
    pub fn head(&self) -> Option<usize> { self.head }

    pub fn head_symbol(&self) -> Option<&Symbol> {
        self.head.map(|h| &self.rhs[h])
    }

    pub fn leftmost(&self) -> Option<&Symbol> { self.rhs.first() }
}

/// One alternative as written in the rule notation: the lhs and each rhs
/// symbol together with whether it carries the head mark.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct RuleSpec {
    pub(crate) lhs: Symbol,
    pub(crate) rhs: Vec<(Symbol, bool)>,
}

type Corners = HashMap<Symbol, HashSet<Symbol>>;

#[derive(Debug)]
pub struct Grammar {
    rules: Vec<Rc<Rule>>,
    start: Symbol,
    by_lhs: HashMap<Symbol, Vec<Rc<Rule>>>,
    by_leftmost: HashMap<Symbol, Vec<Rc<Rule>>>,
    by_head: HashMap<Symbol, Vec<Rc<Rule>>>,
    empty: Vec<Rc<Rule>>,
    left_corners: Corners,
    head_corners: Corners,
}

impl Grammar {
    pub fn from_specs(specs: Vec<RuleSpec>) -> Result<Self, ChartError> {
        let mut rules = Vec::with_capacity(specs.len());
        for (i, RuleSpec { lhs, rhs }) in specs.into_iter().enumerate() {
            let marked: Vec<usize> = rhs.iter().enumerate()
                .filter(|(_, (_, is_head))| *is_head)
                .map(|(pos, _)| pos)
                .collect();
            let head = match marked.as_slice() {
                [] if rhs.is_empty() => None,
                [] => Some(0),
                [h] => Some(*h),
                _ => return Err(ChartError::MultipleHeads { lhs }),
            };
            let rhs = rhs.into_iter().map(|(s, _)| s).collect();
            rules.push(Rc::new(Rule { id: RuleId(i), lhs, rhs, head }));
        }
        let start = match rules.first() {
            Some(r) => r.lhs.clone(),
            None => return Err(ChartError::EmptyGrammar),
        };

        let mut by_lhs: HashMap<Symbol, Vec<Rc<Rule>>> = HashMap::new();
        let mut by_leftmost: HashMap<Symbol, Vec<Rc<Rule>>> = HashMap::new();
        let mut by_head: HashMap<Symbol, Vec<Rc<Rule>>> = HashMap::new();
        let mut empty = Vec::new();
        for rule in &rules {
            by_lhs.entry(rule.lhs.clone()).or_default().push(rule.clone());
            if let Some(s) = rule.leftmost() {
                by_leftmost.entry(s.clone()).or_default().push(rule.clone());
            }
            match rule.head_symbol() {
                Some(s) => by_head.entry(s.clone()).or_default().push(rule.clone()),
                None => empty.push(rule.clone()),
            }
        }

        let left_corners = corners(&by_lhs, Rule::leftmost);
        let head_corners = corners(&by_lhs, Rule::head_symbol);
        Ok(Grammar { rules, start, by_lhs, by_leftmost, by_head, empty, left_corners, head_corners })
    }

    pub fn parse(text: &str) -> Result<Self, ChartError> {
        let specs = bnf::RulesParser::new()
            .parse(text)
            .map_err(|e| ChartError::Syntax(e.to_string()))?;
        Self::from_specs(specs)
    }

    /// Reads a grammar written in the rule notation from `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ChartError> {
        let text = fs_err::read_to_string(path.as_ref())?;
        Self::parse(&text)
    }

    pub fn rules(&self) -> &[Rc<Rule>] { &self.rules }
    pub fn start(&self) -> &Symbol { &self.start }

    pub fn is_nonterminal(&self, symbol: &Symbol) -> bool {
        self.by_lhs.contains_key(symbol)
    }

    pub fn rules_with_lhs(&self, symbol: &Symbol) -> &[Rc<Rule>] {
        self.by_lhs.get(symbol).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn rules_with_leftmost_daughter(&self, symbol: &Symbol) -> &[Rc<Rule>] {
        self.by_leftmost.get(symbol).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn rules_with_head(&self, symbol: &Symbol) -> &[Rc<Rule>] {
        self.by_head.get(symbol).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn empty_rules(&self) -> &[Rc<Rule>] { &self.empty }

    /// Is `a` reachable from `b` by repeatedly taking the leftmost daughter?
    /// Reflexive: every symbol is a left corner of itself.
    pub fn is_leftcorner_of(&self, a: &Symbol, b: &Symbol) -> bool {
        a == b || self.left_corners.get(b).map_or(false, |s| s.contains(a))
    }

    /// Is `a` reachable from `b` by repeatedly taking the head daughter?
    pub fn is_headcorner_of(&self, a: &Symbol, b: &Symbol) -> bool {
        a == b || self.head_corners.get(b).map_or(false, |s| s.contains(a))
    }
}

impl std::str::FromStr for Grammar {
    type Err = ChartError;
    fn from_str(s: &str) -> Result<Self, ChartError> { Grammar::parse(s) }
}

// Transitive closure of `pick` for every nonterminal; reflexivity is left to
// the callers above.
fn corners(
    by_lhs: &HashMap<Symbol, Vec<Rc<Rule>>>,
    pick: impl Fn(&Rule) -> Option<&Symbol>,
) -> Corners {
    let mut table = Corners::new();
    for nonterm in by_lhs.keys() {
        let mut reached = HashSet::new();
        let mut stack = vec![nonterm];
        while let Some(s) = stack.pop() {
            for rule in by_lhs.get(s).into_iter().flatten() {
                if let Some(c) = pick(&**rule) {
                    if reached.insert(c.clone()) {
                        stack.push(c);
                    }
                }
            }
        }
        table.insert(nonterm.clone(), reached);
    }
    table
}

// This is a trick: we have the source code for our tests under a single
// `src/tests/` subdirectory, but we declare it as a module *here*, under this
// module. That way, it has access to private constructors and state that a
// sibling (or in this case, nibling) module would not have access to.
#[cfg(test)]
#[path = "tests/grammar.rs"]
mod tests_for_grammar;
