use item::Item;

pub struct ItemCounter {
    counter: Vec<usize>
}

impl ItemCounter
{
    pub fn new() -> ItemCounter {
        ItemCounter {
            counter: vec![],
        }
    }
    pub fn add(&mut self, item: &Item, count: usize) {
        let index = item.as_index();
        if self.counter.len() <= index {
            self.counter.resize(index + 1, 0);
        }
        self.counter[index] += count;
    }
    pub fn get(&self, item: &Item) -> usize {
        let index = item.as_index();
        if index >= self.counter.len() {
            0
        } else {
            self.counter[index]
        }
    }
    // Items seen at least once whose count / num_transactions reaches
    // min_support, in item order.
    pub fn items_with_support_at_least(&self, min_support: f64, num_transactions: usize) -> Vec<Item> {
        let mut v : Vec<Item> = vec![];
        for i in 1..self.counter.len() {
            let item = Item::with_id(i as u32);
            let count = self.get(&item);
            if count > 0 && (count as f64) / (num_transactions as f64) >= min_support {
                v.push(item);
            }
        }
        v
    }
}

#[cfg(test)]
mod tests {
    use super::ItemCounter;
    use item::Item;

    #[test]
    fn test_item_counter() {
        let mut counter = ItemCounter::new();
        counter.add(&Item::with_id(3), 2);
        counter.add(&Item::with_id(1), 1);
        counter.add(&Item::with_id(3), 1);
        assert_eq!(counter.get(&Item::with_id(3)), 3);
        assert_eq!(counter.get(&Item::with_id(2)), 0);
        assert_eq!(counter.get(&Item::with_id(99)), 0);

        assert_eq!(
            counter.items_with_support_at_least(0.5, 4),
            vec![Item::with_id(3)]
        );
        assert_eq!(
            counter.items_with_support_at_least(0.25, 4),
            vec![Item::with_id(1), Item::with_id(3)]
        );
        // Unseen ids below the largest id never qualify, even at zero support.
        assert_eq!(
            counter.items_with_support_at_least(0.0, 4),
            vec![Item::with_id(1), Item::with_id(3)]
        );
    }
}
