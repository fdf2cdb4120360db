use crate::completed::CompletedItem;
use crate::double_dotted::DoubleDottedItem;
use crate::goal::GoalItem;
use crate::grammar::Rule;
use crate::item::Item;
use crate::single_dotted::SingleDottedItem;
use crate::trace::Event;

// Writes `A -> X Y Z`, with a `.` before each rhs position in `dots`
// (`dots` may contain `rhs.len()` for a dot at the very end).
fn write_dotted(w: &mut std::fmt::Formatter, rule: &Rule, dots: &[usize]) -> std::fmt::Result {
    write!(w, "{} ->", rule.lhs())?;
    for (pos, symbol) in rule.rhs().iter().enumerate() {
        for _ in dots.iter().filter(|&&d| d == pos) { write!(w, " .")?; }
        write!(w, " {}", symbol)?;
    }
    for _ in dots.iter().filter(|&&d| d == rule.len()) { write!(w, " .")?; }
    Ok(())
}

impl std::fmt::Display for Rule {
    fn fmt(&self, w: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(w, "{} ->", self.lhs())?;
        for (pos, symbol) in self.rhs().iter().enumerate() {
            let mark = if self.head() == Some(pos) && self.len() > 1 { "*" } else { "" };
            write!(w, " {}{}", symbol, mark)?;
        }
        Ok(())
    }
}

impl std::fmt::Display for SingleDottedItem {
    fn fmt(&self, w: &mut std::fmt::Formatter) -> std::fmt::Result {
        write_dotted(w, self.rule(), &[self.dot()])?;
        write!(w, " {}", self.span())
    }
}

impl std::fmt::Display for DoubleDottedItem {
    fn fmt(&self, w: &mut std::fmt::Formatter) -> std::fmt::Result {
        write_dotted(w, self.rule(), &[self.left_dot(), self.right_dot()])?;
        write!(w, " {}", self.span())
    }
}

impl std::fmt::Display for GoalItem {
    fn fmt(&self, w: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(w, "?{} {}", self.nonterminal(), self.span())
    }
}

impl std::fmt::Display for CompletedItem {
    fn fmt(&self, w: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(w, "<{}> {}", self.rule(), self.span())
    }
}

impl std::fmt::Display for Item {
    fn fmt(&self, w: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Item::SingleDotted(i) => write!(w, "{}", i),
            Item::DoubleDotted(i) => write!(w, "{}", i),
            Item::Goal(i) => write!(w, "{}", i),
            Item::Completed(i) => write!(w, "{}", i),
        }
    }
}

impl std::fmt::Display for Event<'_> {
    fn fmt(&self, w: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Event::Seeded { item } => write!(w, "seed {}", item),
            Event::Applied { step, item, added } => write!(w, "{} {} +{}", step, item, added),
            Event::Unmatched { item, symbol, position } => {
                write!(w, "unmatched {} wants `{}` at {}", item, symbol, position)
            }
            Event::Finished { items, passes, recognised } => {
                write!(w, "finished items={} passes={} recognised={}", items, passes, recognised)
            }
        }
    }
}
