use hh_catalog_types::CatalogItem;

#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub revision: u64,
    pub items: Vec<CatalogItem>,
}

/// Latest-wins holder for catalog snapshots.
///
/// Every delivery is stamped with a revision when it starts; a delivery that
/// completes after a newer one has already landed is discarded, so derived
/// views never regress to an older catalog.
#[derive(Debug, Default)]
pub struct SnapshotCell {
    current: Option<Snapshot>,
}

impl SnapshotCell {
    pub fn new() -> SnapshotCell {
        SnapshotCell::default()
    }

    /// Applies the snapshot unless a same-or-newer revision already landed.
    /// Returns whether it was applied.
    pub fn offer(&mut self, revision: u64, items: Vec<CatalogItem>) -> bool {
        if let Some(current) = &self.current {
            if revision <= current.revision {
                return false;
            }
        }
        self.current = Some(Snapshot { revision, items });
        true
    }

    pub fn latest(&self) -> Option<&Snapshot> {
        self.current.as_ref()
    }

    pub fn revision(&self) -> Option<u64> {
        self.current.as_ref().map(|snapshot| snapshot.revision)
    }

    /// Items of the latest snapshot; empty before the first delivery.
    pub fn items(&self) -> &[CatalogItem] {
        self.current
            .as_ref()
            .map(|snapshot| snapshot.items.as_slice())
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items_named(names: &[&str]) -> Vec<CatalogItem> {
        names
            .iter()
            .map(|name| CatalogItem {
                id: (*name).to_owned(),
                name: (*name).to_owned(),
                ..CatalogItem::default()
            })
            .collect()
    }

    #[test]
    fn empty_cell_exposes_no_items() {
        let cell = SnapshotCell::new();
        assert!(cell.items().is_empty());
        assert_eq!(cell.revision(), None);
    }

    #[test]
    fn newer_revisions_replace_older_ones() {
        let mut cell = SnapshotCell::new();
        assert!(cell.offer(1, items_named(&["a"])));
        assert!(cell.offer(2, items_named(&["b", "c"])));
        assert_eq!(cell.revision(), Some(2));
        assert_eq!(cell.items().len(), 2);
    }

    #[test]
    fn stale_delivery_is_discarded() {
        let mut cell = SnapshotCell::new();
        // Delivery 2 finished before delivery 1, which was started earlier.
        assert!(cell.offer(2, items_named(&["b"])));
        assert!(!cell.offer(1, items_named(&["a"])));
        assert_eq!(cell.revision(), Some(2));
        assert_eq!(cell.items()[0].id, "b");
    }

    #[test]
    fn duplicate_revision_is_discarded() {
        let mut cell = SnapshotCell::new();
        assert!(cell.offer(1, items_named(&["a"])));
        assert!(!cell.offer(1, items_named(&["z"])));
        assert_eq!(cell.items()[0].id, "a");
    }
}
