use itemizer::Itemizer;
use itertools::Itertools;
use std::cmp::Ordering;

#[derive(Copy, Clone, Hash, PartialOrd, PartialEq, Eq, Ord, Debug)]
pub struct Item {
    id: u32,
}

impl Item {
    pub fn null() -> Item {
        Item { id: 0 }
    }
    pub fn with_id(id: u32) -> Item {
        Item { id: id }
    }
    pub fn as_index(&self) -> usize {
        self.id as usize
    }
    pub fn is_null(&self) -> bool {
        self.id == 0
    }
    // Formats as "[a, b, c]". Items are expected to be in itemizer order,
    // which is the display order once the itemizer has been sorted.
    pub fn item_vec_to_string(items: &[Item], itemizer: &Itemizer) -> String {
        format!(
            "[{}]",
            items.iter().map(|&item| itemizer.str_of(item)).join(", ")
        )
    }
}

// If all items convert to an integer, order by that integer,
// otherwise order lexicographically.
pub fn sort_for_display(a: &mut Vec<&str>) {
    let all_items_convert_to_ints = a.iter().all(|x| x.parse::<u64>().is_ok());
    if all_items_convert_to_ints {
        a.sort_by(|x, y| compare_as_ints(x, y));
    } else {
        a.sort();
    }
}

fn compare_as_ints(x: &str, y: &str) -> Ordering {
    let _x = x.parse::<u64>().unwrap_or(0);
    let _y = y.parse::<u64>().unwrap_or(0);
    _x.cmp(&_y).then_with(|| x.cmp(y))
}
