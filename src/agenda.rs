use crate::chart::Chart;
use crate::item::{Item, ItemKey, ItemRef};

use std::collections::{HashSet, VecDeque};
use std::rc::Rc;

/// First-in first-out queue of items waiting to be combined with the chart.
///
/// The agenda is the gatekeeper of the head-corner chart: an item is queued
/// only if neither the chart nor the queue holds an item with its identity.
#[derive(Debug, Default)]
pub struct Agenda {
    queue: VecDeque<ItemRef>,
    pending: HashSet<ItemKey>,
}

impl Agenda {
    pub fn new() -> Self { Self::default() }

    /// Returns 1 if `item` was queued, 0 if it was already known.
    pub fn add_item(&mut self, item: Item, chart: &Chart) -> usize {
        let key = item.key();
        if chart.contains(&key) || self.pending.contains(&key) {
            return 0;
        }
        self.pending.insert(key);
        self.queue.push_back(Rc::new(item));
        1
    }

    pub fn pop(&mut self) -> Option<ItemRef> {
        let item = self.queue.pop_front()?;
        self.pending.remove(&item.key());
        Some(item)
    }

    pub fn len(&self) -> usize { self.queue.len() }
    pub fn is_empty(&self) -> bool { self.queue.is_empty() }
}

#[cfg(test)]
#[path = "tests/agenda.rs"]
mod tests_for_agenda;
