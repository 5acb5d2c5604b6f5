use crate::entities::{BPInstance, Item};
use crate::io::ext_repr::ExtBPInstance;
use anyhow::{Result, ensure};
use itertools::Itertools;
use log::debug;
use rayon::prelude::*;

/// Imports an instance into the library
pub fn import(ext_instance: &ExtBPInstance) -> Result<BPInstance> {
    let bin_capacity = ext_instance.bin_capacity;
    ensure!(
        bin_capacity.is_finite() && bin_capacity > 0.0,
        "bin capacity should be strictly positive, got {bin_capacity}"
    );

    let items = {
        let mut items = ext_instance
            .items
            .par_iter()
            .map(|ext_item| {
                ensure!(
                    ext_item.size.is_finite() && ext_item.size > 0.0,
                    "item {} ({}) should have a strictly positive size, got {}",
                    ext_item.id,
                    ext_item.tag,
                    ext_item.size
                );
                ensure!(
                    !ext_item.tag.is_empty(),
                    "item {} should have a non-empty tag",
                    ext_item.id
                );
                Ok(Item::new(
                    ext_item.id as usize,
                    ext_item.tag.clone(),
                    ext_item.size,
                ))
            })
            .collect::<Result<Vec<Item>>>()?;

        items.sort_by_key(|item| item.id);
        ensure!(
            items.iter().enumerate().all(|(i, item)| item.id == i),
            "All items should have consecutive IDs starting from 0. IDs: {:?}",
            items.iter().map(|item| item.id).collect_vec()
        );
        items
    };

    debug!(
        "[IO] imported instance {} with {} items and bin capacity {}",
        ext_instance.name,
        items.len(),
        bin_capacity
    );

    Ok(BPInstance::new(
        ext_instance.name.clone(),
        items,
        bin_capacity,
    ))
}
