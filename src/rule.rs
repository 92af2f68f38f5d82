use item::Item;
use itemizer::Itemizer;
use itemset::FrequentItemsets;
use std::hash::{Hash, Hasher};
use vec_sets::union;

#[derive(Clone, Debug)]
pub struct Rule {
    pub antecedent: Vec<Item>,
    pub consequent: Vec<Item>,
    pub confidence: f64,
    pub support: f64,
}

// Can't derive Eq as f64 doesn't satisfy Eq.
impl Eq for Rule {}

impl Hash for Rule {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.antecedent.hash(state);
        self.consequent.hash(state);
    }
}

impl PartialEq for Rule {
    fn eq(&self, other: &Rule) -> bool {
        self.antecedent == other.antecedent && self.consequent == other.consequent
    }
}

impl Rule {
    // Creates a new Rule from (antecedent,consequent) if the rule
    // would be above the min_confidence threshold. Both sides must be
    // sorted, and their union must be a frequent itemset.
    pub fn make(
        antecedent: Vec<Item>,
        consequent: Vec<Item>,
        itemsets: &FrequentItemsets,
        min_confidence: f64,
    ) -> Option<Rule> {
        if antecedent.is_empty() || consequent.is_empty() {
            return None;
        }

        let ac_sup = itemsets.support(&union(&antecedent, &consequent))?;
        let a_sup = itemsets.support(&antecedent)?;

        // NaN (zero antecedent support) must fail this test too.
        let confidence = ac_sup / a_sup;
        if !(confidence >= min_confidence) {
            return None;
        }

        Some(Rule {
            antecedent,
            consequent,
            confidence,
            support: ac_sup,
        })
    }

    // The itemset the rule was derived from.
    pub fn merge(&self) -> Vec<Item> {
        union(&self.antecedent, &self.consequent)
    }

    pub fn to_string(&self, itemizer: &Itemizer) -> String {
        [
            Item::item_vec_to_string(&self.antecedent, itemizer),
            Item::item_vec_to_string(&self.consequent, itemizer),
        ]
        .join(" => ")
    }
}
