use serde::{Deserialize, Serialize};

/// Default capacity of a bin, a single-layer disc measured in GB
pub const DEFAULT_BIN_CAPACITY: f64 = 4.5;

/// Configuration for the OBF optimizer and its report
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct OBFConfig {
    /// Capacity of every bin, in the same unit as the item sizes
    pub bin_capacity: f64,
    /// Author mentioned in the header of the report. Omitted from the header if undefined
    #[serde(default)]
    pub author: Option<String>,
}

impl Default for OBFConfig {
    fn default() -> Self {
        Self {
            bin_capacity: DEFAULT_BIN_CAPACITY,
            author: None,
        }
    }
}
