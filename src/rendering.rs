use crate::chart::Chart;
use crate::grammar::Symbol;
use crate::item::ItemRef;

pub trait Rendered {
    fn rendered(&self) -> String;
}

/// The literal right-hand side of a lexical production, e.g. `n` for
/// `NP -> n`.
impl Rendered for [Symbol] {
    fn rendered(&self) -> String {
        self.iter()
            .map(|s| s.as_str())
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl Rendered for [ItemRef] {
    fn rendered(&self) -> String {
        self.iter()
            .map(|i| i.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// One line per item, in admission order.
impl Rendered for Chart {
    fn rendered(&self) -> String {
        self.items().rendered()
    }
}
