use crate::entities::Item;

/// A single bin (e.g. a disc) with a fixed capacity and the items assigned to it.
#[derive(Debug, Clone, PartialEq)]
pub struct Bin {
    /// Index of the bin in the problem
    pub id: usize,
    /// Maximum total size of the items in the bin
    pub capacity: f64,
    /// Sum of the sizes of all items placed in the bin
    pub used_space: f64,
    /// Ids of the placed items, in order of placement
    pub item_ids: Vec<usize>,
}

impl Bin {
    pub fn new(id: usize, capacity: f64) -> Self {
        Self {
            id,
            capacity,
            used_space: 0.0,
            item_ids: vec![],
        }
    }

    pub fn free_space(&self) -> f64 {
        self.capacity - self.used_space
    }

    /// Free space that would remain after placing an item of `size` in the bin.
    /// Negative if the item would overflow the bin.
    pub fn residual(&self, size: f64) -> f64 {
        self.free_space() - size
    }

    pub fn fits(&self, size: f64) -> bool {
        self.residual(size) >= 0.0
    }

    pub fn place_item(&mut self, item: &Item) {
        assert!(
            self.fits(item.size),
            "item {} ({}) overflows bin {} ({} of {} used)",
            item.tag,
            item.size,
            self.id,
            self.used_space,
            self.capacity
        );
        self.item_ids.push(item.id);
        self.used_space += item.size;
    }

    pub fn is_empty(&self) -> bool {
        self.item_ids.is_empty()
    }

    pub fn n_items(&self) -> usize {
        self.item_ids.len()
    }
}
