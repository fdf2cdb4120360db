//! The chart: every distinct item discovered so far, at most once per
//! [`ItemKey`], indexed by where it starts and where it ends.

use crate::item::{Item, ItemKey, ItemRef};

use std::collections::HashMap;
use std::rc::Rc;

use linear_map::LinearMap;

type CellMap<K, V> = LinearMap<K, V>;

/// Positions into `Chart::items`.
type Slots = Vec<usize>;

#[derive(Debug, Default)]
pub struct Chart {
    items: Vec<ItemRef>,
    index: HashMap<ItemKey, usize>,
    starts: Vec<Slots>,
    ends: Vec<Slots>,
    /// The outer vec is indexed by `to`; the cell maps are keyed by `from`.
    cells: Vec<CellMap<usize, Slots>>,
}

impl Chart {
    /// A chart for an input of `n` words (positions `0..=n`). It grows on
    /// demand if items mention later positions.
    pub fn new(n: usize) -> Self {
        let mut chart = Chart::default();
        chart.ensure_capacity(n);
        chart
    }

    fn ensure_capacity(&mut self, pos: usize) {
        while self.ends.len() <= pos {
            self.starts.push(Vec::new());
            self.ends.push(Vec::new());
            self.cells.push(CellMap::new());
        }
    }

    /// Adds `item` unless an item with the same identity is present.
    /// Returns 1 if it was admitted, 0 otherwise.
    pub fn add_item(&mut self, item: Item) -> usize {
        if self.contains(&item.key()) { return 0; }
        self.insert(Rc::new(item))
    }

    /// As `add_item`, for an item that is already shared (e.g. one popped
    /// off the agenda).
    pub fn insert(&mut self, item: ItemRef) -> usize {
        let key = item.key();
        if self.index.contains_key(&key) { return 0; }
        let span = item.span();
        self.ensure_capacity(span.to);
        let slot = self.items.len();
        self.items.push(item);
        self.index.insert(key, slot);
        self.starts[span.from].push(slot);
        self.ends[span.to].push(slot);
        self.cells[span.to].entry(span.from).or_insert(Vec::new()).push(slot);
        1
    }

    pub fn contains(&self, key: &ItemKey) -> bool {
        self.index.contains_key(key)
    }

    pub fn get(&self, key: &ItemKey) -> Option<&ItemRef> {
        self.index.get(key).map(|&slot| &self.items[slot])
    }

    pub fn items(&self) -> &[ItemRef] { &self.items }
    pub fn len(&self) -> usize { self.items.len() }
    pub fn is_empty(&self) -> bool { self.items.is_empty() }

    /// Number of positions the chart currently indexes.
    pub fn positions(&self) -> usize { self.ends.len() }

    pub fn get_items_to(&self, pos: usize) -> Vec<ItemRef> {
        self.collect(self.ends.get(pos))
    }

    pub fn get_items_from(&self, pos: usize) -> Vec<ItemRef> {
        self.collect(self.starts.get(pos))
    }

    pub fn get_items_from_to(&self, from: usize, to: usize) -> Vec<ItemRef> {
        self.collect(self.cells.get(to).and_then(|cell| cell.get(&from)))
    }

    /// The `nth` item (in admission order) ending at `pos`. Lets a driver
    /// walk a position while the walk itself keeps adding to it.
    pub fn item_to(&self, pos: usize, nth: usize) -> Option<ItemRef> {
        self.ends.get(pos)?.get(nth).map(|&slot| self.items[slot].clone())
    }

    fn collect(&self, slots: Option<&Slots>) -> Vec<ItemRef> {
        slots.into_iter().flatten().map(|&slot| self.items[slot].clone()).collect()
    }
}

#[cfg(test)]
#[path = "tests/chart.rs"]
mod tests_for_chart;
