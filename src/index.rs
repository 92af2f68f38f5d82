use item::Item;
#[cfg(test)]
use itemizer::Itemizer;

// Maps each item to the sorted list of ids of the transactions containing
// it, so an itemset's count is the size of the intersection of its items'
// tid lists.
pub struct Index {
    index: Vec<Vec<usize>>,
    transaction_count: usize,
}

impl Index {
    pub fn new() -> Index {
        Index {
            index: Vec::new(),
            transaction_count: 0,
        }
    }
    pub fn from_transactions(transactions: &[Vec<Item>]) -> Index {
        let mut index = Index::new();
        for transaction in transactions {
            index.insert(transaction);
        }
        index
    }
    pub fn insert(&mut self, transaction: &[Item]) {
        let tid = self.transaction_count;
        self.transaction_count += 1;
        for item in transaction {
            let item_index = item.as_index();
            while self.index.len() <= item_index {
                self.index.push(vec![]);
            }
            self.index[item_index].push(tid);
        }
    }
    pub fn count(&self, itemset: &[Item]) -> usize {
        if itemset.is_empty() {
            return 0;
        }

        let mut tid_lists: Vec<&Vec<usize>> = vec![];
        for item in itemset.iter() {
            let item_index = item.as_index();
            if item_index >= self.index.len() {
                return 0;
            }
            tid_lists.push(&self.index[item_index]);
        }

        if tid_lists.len() == 1 {
            return tid_lists[0].len();
        }

        let mut p: Vec<usize> = vec![0; tid_lists.len()];

        // For each tid in the itemset's first item's list of tids.
        let mut count = 0;
        for &tid in tid_lists[0].iter() {
            // Check whether all the other tid lists contain that tid.
            let mut tid_in_all_item_tid_lists = true;
            for i in 1..tid_lists.len() {
                while p[i] < tid_lists[i].len() && tid_lists[i][p[i]] < tid {
                    p[i] += 1;
                }
                if p[i] == tid_lists[i].len() || tid_lists[i][p[i]] != tid {
                    // This tidlist doesn't include that tid. So this tid cannot
                    // have all items in it.
                    tid_in_all_item_tid_lists = false;
                    break;
                }
            }
            if tid_in_all_item_tid_lists {
                count += 1
            }
        }
        count
    }
    pub fn support(&self, itemset: &[Item]) -> f64 {
        if self.transaction_count == 0 {
            return 0.0;
        }
        (self.count(itemset) as f64) / (self.transaction_count as f64)
    }
}
