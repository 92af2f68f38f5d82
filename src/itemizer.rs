use fnv::FnvHashMap;
use item::{sort_for_display, Item};

pub struct Itemizer {
    next_item_id: u32,
    item_str_to_id: FnvHashMap<String, Item>,
    item_id_to_str: Vec<String>,
}

impl Itemizer {
    pub fn new() -> Itemizer {
        Itemizer {
            next_item_id: 1,
            item_str_to_id: FnvHashMap::default(),
            item_id_to_str: vec![],
        }
    }
    pub fn id_of(&mut self, item: &str) -> Item {
        if let Some(id) = self.item_str_to_id.get(item) {
            return *id;
        }
        let id = self.next_item_id;
        self.next_item_id += 1;
        self.item_str_to_id
            .insert(String::from(item), Item::with_id(id));
        self.item_id_to_str.push(String::from(item));
        debug_assert_eq!(self.item_id_to_str.len(), id as usize);
        Item::with_id(id)
    }
    pub fn str_of(&self, id: Item) -> &str {
        &self.item_id_to_str[id.as_index() - 1]
    }
    pub fn len(&self) -> usize {
        self.item_id_to_str.len()
    }
    #[cfg(test)]
    pub fn to_id_vec(&mut self, items: &[&str]) -> Vec<Item> {
        let mut v: Vec<Item> = items.iter().map(|s| self.id_of(s)).collect();
        v.sort();
        v
    }

    // Renumbers the items so that id order matches display order. Returns a
    // table mapping each old id's index to its new id; transactions itemized
    // before the call must be remapped through it.
    pub fn reorder_sorted(&mut self) -> Vec<Item> {
        let mut sorted: Vec<&str> = self.item_id_to_str.iter().map(|s| s.as_str()).collect();
        sort_for_display(&mut sorted);
        let sorted: Vec<String> = sorted.into_iter().map(String::from).collect();

        let mut remap = vec![Item::null(); self.item_id_to_str.len() + 1];
        for (index, item_str) in sorted.iter().enumerate() {
            let new_id = Item::with_id((index + 1) as u32);
            let old_id = self.item_str_to_id[item_str];
            remap[old_id.as_index()] = new_id;
            self.item_str_to_id.insert(item_str.clone(), new_id);
        }
        self.item_id_to_str = sorted;
        remap
    }
}
