use crate::catalog::domain::{Ram, Screen, Storage, VariantSet};
use std::cmp::Ordering;

/// Display order of configurable options on the product page
///
/// Screens, RAM and storage are listed smallest first so that the default
/// selection is the entry-level configuration. Graphic cards and processors
/// keep the order in which they were linked.
pub struct OptionOrder;

impl OptionOrder {
    pub fn screens(screens: &mut VariantSet<Screen>) {
        screens.sort_by(|a, b| a.size.partial_cmp(&b.size).unwrap_or(Ordering::Equal));
    }

    pub fn rams(rams: &mut VariantSet<Ram>) {
        rams.sort_by(|a, b| a.capacity.cmp(&b.capacity));
    }

    /// Compares normalized capacity, so 512 GB sorts before 1 TB
    pub fn storages(storages: &mut VariantSet<Storage>) {
        storages.sort_by(|a, b| a.capacity_in_gb().cmp(&b.capacity_in_gb()));
    }
}
