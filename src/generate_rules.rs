use error::{check_threshold, InputError};
use fnv::FnvHashSet;
use item::Item;
use itemset::FrequentItemsets;
use rule::Rule;
use vec_sets::split_out_item;

// Generates every rule with a single item consequent whose confidence is at
// least `min_confidence`. Itemsets are visited by size, then in item order.
// For each itemset the antecedents come in combination order, so the
// consequent runs from the itemset's last item back to its first.
pub fn generate_rules(
    itemsets: &FrequentItemsets,
    min_confidence: f64,
) -> Result<Vec<Rule>, InputError> {
    check_threshold("min_confidence", min_confidence)?;

    let mut rules: Vec<Rule> = vec![];
    // Itemsets of size 1 can't split into a rule.
    for size in 2..itemsets.max_size() + 1 {
        for (itemset, _) in itemsets.sorted_level(size) {
            for &item in itemset.iter().rev() {
                let (antecedent, consequent) = split_out_item(itemset, item);
                if let Some(rule) = Rule::make(antecedent, consequent, itemsets, min_confidence) {
                    rules.push(rule);
                }
            }
        }
    }

    Ok(remove_redundant_rules(rules))
}

// Keeps only the first rule for each distinct antecedent ∪ consequent.
pub fn remove_redundant_rules(rules: Vec<Rule>) -> Vec<Rule> {
    let mut seen: FnvHashSet<Vec<Item>> = FnvHashSet::default();
    rules
        .into_iter()
        .filter(|rule| seen.insert(rule.merge()))
        .collect()
}
