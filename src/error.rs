use crate::grammar::Symbol;
use crate::item::Span;

use thiserror::Error;

/// Broken item invariants. These only arise when a transition is invoked on
/// an item whose precondition does not hold; the dots are never clamped.
#[derive(Clone, PartialEq, Eq, Debug, Error)]
pub enum ItemError {
    #[error("dot {dot} lies past the {len} rhs symbols of `{lhs}`")]
    DotOutOfRange { lhs: Symbol, dot: usize, len: usize },
    #[error("left dot {left} lies right of right dot {right} in `{lhs}`")]
    CrossedDots { lhs: Symbol, left: usize, right: usize },
    #[error("span {0} ends before it starts")]
    ReversedSpan(Span),
    #[error("left dot of `{0}` is already at the start of its rhs")]
    LeftDotExhausted(Symbol),
    #[error("right dot of `{0}` is already at the end of its rhs")]
    RightDotExhausted(Symbol),
}

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("grammar syntax error: {0}")]
    Syntax(String),
    #[error("grammar has no rules")]
    EmptyGrammar,
    #[error("an alternative of `{lhs}` marks more than one head")]
    MultipleHeads { lhs: Symbol },
    #[error("start symbol `{0}` has no rules")]
    UnknownStart(Symbol),
    #[error("chart grew past the limit of {limit} items")]
    ItemLimit { limit: usize },
    #[error("unknown parsing algorithm `{0}`")]
    UnknownAlgorithm(String),
    #[error("bad token pattern: {0}")]
    Pattern(#[from] regex::Error),
    #[error("grammar io error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Item(#[from] ItemError),
}
