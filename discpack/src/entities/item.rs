/// Item to be packed, e.g. a file to be written to a disc.
#[derive(Clone, Debug, PartialEq)]
pub struct Item {
    /// Index of the item in the instance
    pub id: usize,
    /// Name of the item as defined in the input
    pub tag: String,
    /// Size of the item, strictly positive and finite
    pub size: f64,
}

impl Item {
    pub fn new(id: usize, tag: String, size: f64) -> Item {
        assert!(
            size.is_finite() && size > 0.0,
            "item {tag} has an invalid size: {size}"
        );
        Item { id, tag, size }
    }

    /// Whether the item fits in an empty bin of the given capacity
    pub fn fits_in(&self, bin_capacity: f64) -> bool {
        self.size <= bin_capacity
    }
}
