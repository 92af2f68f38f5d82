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

use itemset::{itemset_order, ItemSet};
use ordered_float::OrderedFloat;
use rule::Rule;
use std::cmp::Reverse;

// Fraction of the lowest ranked results left out of the report.
pub const WEAKEST_FRACTION: f64 = 0.05;

// Number of entries to drop from the tail of `len` ranked results.
pub fn num_weakest(len: usize) -> usize {
    ((len as f64) * WEAKEST_FRACTION) as usize
}

fn drop_weakest<T>(ranked: &mut Vec<T>) {
    let keep = ranked.len() - num_weakest(ranked.len());
    ranked.truncate(keep);
}

// Sorts by decreasing support, ties in itemset order, and drops the
// weakest entries.
pub fn rank_itemsets(mut itemsets: Vec<ItemSet>) -> Vec<ItemSet> {
    itemsets.sort_by(|a, b| {
        Reverse(OrderedFloat(a.support))
            .cmp(&Reverse(OrderedFloat(b.support)))
            .then_with(|| itemset_order(&a.items, &b.items))
    });
    drop_weakest(&mut itemsets);
    itemsets
}

// Sorts by decreasing confidence, then decreasing support, then the
// itemset the rule covers and its consequent, and drops the weakest
// entries.
pub fn rank_rules(mut rules: Vec<Rule>) -> Vec<Rule> {
    rules.sort_by(|a, b| {
        Reverse(OrderedFloat(a.confidence))
            .cmp(&Reverse(OrderedFloat(b.confidence)))
            .then_with(|| Reverse(OrderedFloat(a.support)).cmp(&Reverse(OrderedFloat(b.support))))
            .then_with(|| itemset_order(&a.merge(), &b.merge()))
            .then_with(|| a.consequent.cmp(&b.consequent))
    });
    drop_weakest(&mut rules);
    rules
}
