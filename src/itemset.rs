use fnv::FnvHashMap;
use item::Item;
use std::cmp::Ordering;

pub type ItemsetSupport = FnvHashMap<Vec<Item>, f64>;

#[derive(Clone, PartialEq, Debug)]
pub struct ItemSet {
    pub items: Vec<Item>,
    pub support: f64,
}

impl ItemSet {
    pub fn new(mut items: Vec<Item>, support: f64) -> ItemSet {
        items.sort();
        ItemSet { items, support }
    }
}

// Itemsets order by size, then by item order.
pub fn itemset_order(a: &[Item], b: &[Item]) -> Ordering {
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

// Frequent itemsets grouped by size; levels[k - 1] holds the itemsets of
// size k. Only non-empty levels are stored.
#[derive(Debug)]
pub struct FrequentItemsets {
    levels: Vec<ItemsetSupport>,
}

impl FrequentItemsets {
    pub fn new() -> FrequentItemsets {
        FrequentItemsets { levels: vec![] }
    }

    pub fn push_level(&mut self, level: ItemsetSupport) {
        debug_assert!(!level.is_empty());
        debug_assert!(level.keys().all(|k| k.len() == self.levels.len() + 1));
        self.levels.push(level);
    }

    // Size of the largest frequent itemset.
    pub fn max_size(&self) -> usize {
        self.levels.len()
    }

    pub fn level(&self, size: usize) -> Option<&ItemsetSupport> {
        if size == 0 {
            return None;
        }
        self.levels.get(size - 1)
    }

    pub fn support(&self, itemset: &[Item]) -> Option<f64> {
        self.level(itemset.len())
            .and_then(|level| level.get(itemset))
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.levels.iter().map(|l| l.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    // All itemsets of the given size, in itemset order.
    pub fn sorted_level(&self, size: usize) -> Vec<(&Vec<Item>, f64)> {
        let mut v: Vec<(&Vec<Item>, f64)> = match self.level(size) {
            Some(level) => level.iter().map(|(items, &support)| (items, support)).collect(),
            None => vec![],
        };
        v.sort_by(|a, b| a.0.cmp(b.0));
        v
    }

    pub fn to_itemsets(&self) -> Vec<ItemSet> {
        (1..self.max_size() + 1)
            .flat_map(|size| {
                self.sorted_level(size)
                    .into_iter()
                    .map(|(items, support)| ItemSet::new(items.clone(), support))
            })
            .collect()
    }
}
