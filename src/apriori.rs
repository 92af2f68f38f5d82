// Copyright 2018 Chris Pearce
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use error::{check_threshold, InputError};
use fnv::FnvHashSet;
use index::Index;
use item::Item;
use item_counter::ItemCounter;
use itemset::{FrequentItemsets, ItemsetSupport};
use itertools::Itertools;
use vec_sets::{union, union_size};

// Level-wise search for every itemset whose support is at least
// `min_support`. Transactions must be sorted and free of duplicates.
pub fn mine(transactions: &[Vec<Item>], min_support: f64) -> Result<FrequentItemsets, InputError> {
    check_threshold("min_support", min_support)?;

    let mut itemsets = FrequentItemsets::new();
    if transactions.is_empty() {
        return Ok(itemsets);
    }

    let mut item_count = ItemCounter::new();
    for transaction in transactions {
        for item in transaction {
            item_count.add(item, 1);
        }
    }
    let num_transactions = transactions.len();
    let index = Index::from_transactions(transactions);
    let mut level: ItemsetSupport = item_count
        .items_with_support_at_least(min_support, num_transactions)
        .into_iter()
        .map(|item| {
            let itemset = vec![item];
            let support = index.support(&itemset);
            (itemset, support)
        })
        .collect();

    while !level.is_empty() {
        let k = itemsets.max_size() + 1;
        let next_level: ItemsetSupport = apriori_gen(&level, k + 1)
            .into_iter()
            .filter_map(|candidate| {
                // An itemset no transaction contains is never frequent, even
                // at zero min_support.
                if index.count(&candidate) == 0 {
                    return None;
                }
                let support = index.support(&candidate);
                if support >= min_support {
                    Some((candidate, support))
                } else {
                    None
                }
            })
            .collect();
        itemsets.push_level(level);
        level = next_level;
    }

    Ok(itemsets)
}

// Generates the candidate itemsets of size `k` from the frequent itemsets of
// size k-1: joins every pair whose union has exactly k items, then drops
// candidates with an infrequent (k-1)-subset. Candidates come out sorted.
pub fn apriori_gen(level: &ItemsetSupport, k: usize) -> Vec<Vec<Item>> {
    let parents: Vec<&Vec<Item>> = level.keys().sorted().collect();
    let mut candidates: FnvHashSet<Vec<Item>> = FnvHashSet::default();
    for (i, a) in parents.iter().enumerate() {
        for b in parents[i + 1..].iter() {
            if union_size(&a[..], &b[..]) == k {
                candidates.insert(union(&a[..], &b[..]));
            }
        }
    }
    candidates
        .into_iter()
        .filter(|candidate| all_subsets_frequent(candidate, level))
        .sorted()
        .collect()
}

fn all_subsets_frequent(candidate: &[Item], level: &ItemsetSupport) -> bool {
    candidate
        .iter()
        .cloned()
        .combinations(candidate.len() - 1)
        .all(|subset| level.contains_key(&subset))
}
