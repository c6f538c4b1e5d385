//! Mapping connected-component ids back to the labels they came from.
//!
//! Components are computed per original label, so every component id
//! should cover voxels of exactly one original label. The lenient form
//! trusts that; the strict form checks it.

use std::collections::BTreeMap;

use voxgraph_core::{Error, Grid3, Result};

/// Build a map from component id to the original label under it.
///
/// Voxels are visited z outer, then y, then x. If a component id covers
/// more than one original label, the label seen last in that order wins.
pub fn reconcile_labels<T: Copy>(
    labels: &Grid3<T>,
    components: &Grid3<u32>,
) -> Result<BTreeMap<u32, T>> {
    labels.shape().ensure_same(components.shape())?;
    let mut remap = BTreeMap::new();
    for (&cc, &label) in components.as_slice().iter().zip(labels.as_slice()) {
        remap.insert(cc, label);
    }
    log::debug!("reconcile_labels: {} components", remap.len());
    Ok(remap)
}

/// Like [`reconcile_labels`], but fail with [`Error::LabelConflict`] at the
/// first voxel whose component id was already mapped to a different label.
pub fn reconcile_labels_strict<T: Copy + PartialEq>(
    labels: &Grid3<T>,
    components: &Grid3<u32>,
) -> Result<BTreeMap<u32, T>> {
    labels.shape().ensure_same(components.shape())?;
    let mut remap: BTreeMap<u32, T> = BTreeMap::new();
    for (index, (&cc, &label)) in components
        .as_slice()
        .iter()
        .zip(labels.as_slice())
        .enumerate()
    {
        match remap.get(&cc) {
            Some(&seen) if seen != label => {
                return Err(Error::LabelConflict {
                    component: cc,
                    index,
                });
            }
            Some(_) => {}
            None => {
                remap.insert(cc, label);
            }
        }
    }
    Ok(remap)
}
