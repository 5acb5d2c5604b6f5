use crate::entities::Item;
use crate::util::assertions::instance_item_ids_correct;

#[derive(Debug, Clone)]
/// Instance of the Bin Packing Problem: a set of items to be packed into bins of a single capacity.
pub struct BPInstance {
    /// The name of the instance
    pub name: String,
    /// The items to be packed, indexed by their id
    pub items: Vec<Item>,
    /// Capacity shared by all bins
    pub bin_capacity: f64,
}

impl BPInstance {
    pub fn new(name: String, items: Vec<Item>, bin_capacity: f64) -> Self {
        assert!(
            bin_capacity.is_finite() && bin_capacity > 0.0,
            "bin capacity must be strictly positive, got {bin_capacity}"
        );
        assert!(instance_item_ids_correct(&items));

        Self {
            name,
            items,
            bin_capacity,
        }
    }

    pub fn item(&self, id: usize) -> &Item {
        &self.items[id]
    }

    pub fn n_items(&self) -> usize {
        self.items.len()
    }
}
