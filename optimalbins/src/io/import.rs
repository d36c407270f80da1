use anyhow::{Context, Result, bail};
use itertools::Itertools;
use log::warn;

use crate::entities::{Bin, Item};
use crate::io::ext_repr::{ExtBin, ExtInstance, ExtItem};

/// Converts an external instance into the items and bins of a packing run.
pub fn import_instance(ext_instance: &ExtInstance) -> Result<(Vec<Item>, Vec<Bin>)> {
    if let Some(id) = ext_instance.items.iter().map(|i| &i.id).duplicates().next() {
        bail!("duplicate item id in {}: {id}", ext_instance.name);
    }
    if let Some(id) = ext_instance.bins.iter().map(|b| &b.id).duplicates().next() {
        bail!("duplicate bin id in {}: {id}", ext_instance.name);
    }

    let items = ext_instance
        .items
        .iter()
        .map(import_item)
        .collect::<Result<Vec<_>>>()?;
    let bins = ext_instance
        .bins
        .iter()
        .map(import_bin)
        .collect::<Result<Vec<_>>>()?;

    if bins.is_empty() && !items.is_empty() {
        warn!("instance {} contains items but no bins", ext_instance.name);
    }
    Ok((items, bins))
}

pub fn import_item(ext_item: &ExtItem) -> Result<Item> {
    let mut item = Item::new(ext_item.id.clone(), ext_item.width, ext_item.height)
        .with_context(|| format!("failed to import item {}", ext_item.id))?;
    if let Some(depth) = ext_item.depth {
        item = item
            .with_depth(depth)
            .with_context(|| format!("failed to import item {}", ext_item.id))?;
    }
    if let Some(weight) = ext_item.weight {
        item = item.with_weight(weight);
    }
    Ok(item.with_rotations(ext_item.rotations_allowed))
}

pub fn import_bin(ext_bin: &ExtBin) -> Result<Bin> {
    let bin = Bin::new(ext_bin.id.clone(), ext_bin.width, ext_bin.height)
        .with_context(|| format!("failed to import bin {}", ext_bin.id))?;
    match ext_bin.depth {
        Some(depth) => bin
            .with_depth(depth)
            .with_context(|| format!("failed to import bin {}", ext_bin.id)),
        None => Ok(bin),
    }
}
