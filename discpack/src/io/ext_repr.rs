use serde::{Deserialize, Serialize};

/// Bin Packing Problem instance
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtBPInstance {
    /// The name of the instance
    pub name: String,
    /// Capacity of every bin
    pub bin_capacity: f64,
    /// Set of items to be packed
    pub items: Vec<ExtItem>,
}

/// External representation of an [`Item`](crate::entities::Item).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtItem {
    /// Unique identifier of the item
    pub id: u64,
    /// Name of the item
    pub tag: String,
    /// Size of the item
    pub size: f64,
}

/// External representation of a used [`Bin`](crate::entities::Bin).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtBin {
    /// Index of the bin
    pub id: u64,
    /// Sum of the sizes of the items in the bin
    pub used_space: f64,
    /// The items placed in the bin, in order of placement
    pub items: Vec<ExtItem>,
}

/// Bin Packing Problem solution
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtBPSolution {
    /// Number of bins used
    pub n_bins: usize,
    /// Bins which compose the solution
    pub bins: Vec<ExtBin>,
    /// Items which are not placed in any bin (larger than the bin capacity)
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub excluded: Vec<ExtItem>,
    /// Sum of the sizes of the placed items divided by the sum of the capacity of the used bins
    pub density: f64,
    /// The time it took to generate the solution in seconds
    pub run_time_sec: u64,
}
