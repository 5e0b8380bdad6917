use stockshift_inventory::{InventoryRecord, InventoryStore, Shop};

/// Shops and stock records as they stood when a scan started.
///
/// Borrowed, never mutated: the engine reads the snapshot and nothing else.
#[derive(Debug, Clone, Copy)]
pub struct InventorySnapshot<'a> {
    pub shops: &'a [Shop],
    pub records: &'a [InventoryRecord],
}

impl<'a> InventorySnapshot<'a> {
    pub fn new(shops: &'a [Shop], records: &'a [InventoryRecord]) -> Self {
        Self { shops, records }
    }
}

impl<'a> From<&'a InventoryStore> for InventorySnapshot<'a> {
    fn from(store: &'a InventoryStore) -> Self {
        Self::new(store.shops(), store.records())
    }
}
