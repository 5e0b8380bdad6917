use serde::Serialize;

use stockshift_core::{
    DomainError, DomainResult, Entity, RecordId, ShopId, ensure_unique_ids, next_id,
};

use crate::draft::InventoryDraft;
use crate::record::{InventoryRecord, StockStatus, derive_status};
use crate::report::{self, DashboardSummary, ShopMetrics, StockShare};
use crate::shop::{Shop, find_shop};

/// Criteria for narrowing the inventory table. Empty criteria match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InventoryFilter {
    /// Case-insensitive substring of the product name.
    pub search: Option<String>,
    pub shop: Option<ShopId>,
    pub status: Option<StockStatus>,
}

impl InventoryFilter {
    pub fn matches(&self, record: &InventoryRecord) -> bool {
        let matches_search = match self.search.as_deref().map(str::trim) {
            Some(term) if !term.is_empty() => record
                .product
                .to_lowercase()
                .contains(&term.to_lowercase()),
            _ => true,
        };
        let matches_shop = self.shop.is_none_or(|shop| record.shop_id == shop);
        let matches_status = self.status.is_none_or(|status| derive_status(record) == status);
        matches_search && matches_shop && matches_status
    }
}

/// In-memory inventory: the shop list plus every stock record.
///
/// Shops are fixed at construction. Records are added, edited and removed
/// through the methods below; each failed call leaves the store untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct InventoryStore {
    shops: Vec<Shop>,
    #[serde(rename = "inventory")]
    records: Vec<InventoryRecord>,
}

impl InventoryStore {
    pub fn new(shops: Vec<Shop>) -> Self {
        Self {
            shops,
            records: Vec::new(),
        }
    }

    /// Build a store from an existing snapshot.
    ///
    /// Shop and record ids must be unique and every record must satisfy the
    /// same invariants `add` enforces.
    pub fn from_parts(shops: Vec<Shop>, records: Vec<InventoryRecord>) -> DomainResult<Self> {
        ensure_unique_ids(&shops)?;
        ensure_unique_ids(&records)?;
        for record in &records {
            record.validate()?;
        }
        Ok(Self { shops, records })
    }

    pub fn shops(&self) -> &[Shop] {
        &self.shops
    }

    pub fn records(&self) -> &[InventoryRecord] {
        &self.records
    }

    pub fn get(&self, id: RecordId) -> Option<&InventoryRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Add a record for `shop_id` from raw form values; returns the new id.
    pub fn add(&mut self, shop_id: ShopId, draft: InventoryDraft) -> DomainResult<RecordId> {
        if find_shop(&self.shops, shop_id).is_none() {
            return Err(DomainError::invalid_input(format!("unknown shop {shop_id}")));
        }

        let id = next_id(&self.records)?;
        let record = draft.into_record(id, shop_id)?;

        tracing::info!(
            record_id = %id,
            shop_id = %shop_id,
            product = %record.product,
            "inventory record added"
        );
        self.records.push(record);
        Ok(id)
    }

    /// Replace the current stock count of a record.
    pub fn update_current_stock(&mut self, id: RecordId, new_value: i64) -> DomainResult<()> {
        if new_value < 0 {
            return Err(DomainError::invalid_input(format!(
                "current stock must be a non-negative integer, got {new_value}"
            )));
        }
        let current = u32::try_from(new_value).map_err(|_| {
            DomainError::invalid_input(format!(
                "current stock {new_value} is out of range (max {})",
                u32::MAX
            ))
        })?;

        let record = self
            .records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| DomainError::not_found(format!("inventory record {id}")))?;

        tracing::info!(record_id = %id, from = record.current, to = current, "stock updated");
        record.current = current;
        Ok(())
    }

    /// Delete a record and hand it back.
    pub fn remove(&mut self, id: RecordId) -> DomainResult<InventoryRecord> {
        let idx = self
            .records
            .iter()
            .position(|r| *r.id() == id)
            .ok_or_else(|| DomainError::not_found(format!("inventory record {id}")))?;

        tracing::info!(record_id = %id, "inventory record removed");
        Ok(self.records.remove(idx))
    }

    pub fn derive_status(&self, record: &InventoryRecord) -> StockStatus {
        derive_status(record)
    }

    pub fn filter(&self, filter: &InventoryFilter) -> Vec<&InventoryRecord> {
        self.records.iter().filter(|r| filter.matches(r)).collect()
    }

    pub fn critical_count(&self) -> usize {
        report::count_status(&self.records, StockStatus::Critical)
    }

    pub fn summary(&self) -> DashboardSummary {
        report::summary(&self.records)
    }

    pub fn shop_metrics(&self) -> Vec<ShopMetrics> {
        report::shop_metrics(&self.shops, &self.records)
    }

    pub fn stock_distribution(&self) -> Vec<StockShare> {
        report::stock_distribution(&self.shops, &self.records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> InventoryStore {
        InventoryStore::new(vec![
            Shop::new(ShopId::new(1), "Downtown"),
            Shop::new(ShopId::new(2), "Mall"),
        ])
    }

    #[test]
    fn add_assigns_sequential_ids_and_defaults() {
        let mut store = store();
        let first = store
            .add(ShopId::new(1), InventoryDraft::new("Milk", 20, 50))
            .unwrap();
        let second = store
            .add(ShopId::new(2), InventoryDraft::new("Milk", 60, 30).threshold(5))
            .unwrap();

        assert_eq!(first, RecordId::new(1));
        assert_eq!(second, RecordId::new(2));
        assert_eq!(store.get(first).unwrap().threshold, 10);
        assert_eq!(store.get(first).unwrap().shelf_life, 365);
        assert_eq!(store.get(second).unwrap().threshold, 5);
    }

    #[test]
    fn add_with_invalid_input_leaves_store_unchanged() {
        let mut store = store();
        let mut draft = InventoryDraft::new("Milk", 20, 50);
        draft.current = None;

        let err = store.add(ShopId::new(1), draft).unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput(_)));
        assert!(store.records().is_empty());
    }

    #[test]
    fn add_for_unknown_shop_is_rejected() {
        let mut store = store();
        let err = store
            .add(ShopId::new(9), InventoryDraft::new("Milk", 20, 50))
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput(_)));
    }

    #[test]
    fn update_current_stock_validates_value_and_id() {
        let mut store = store();
        let id = store
            .add(ShopId::new(1), InventoryDraft::new("Milk", 20, 50))
            .unwrap();

        store.update_current_stock(id, 70).unwrap();
        assert_eq!(store.get(id).unwrap().current, 70);
        assert_eq!(store.get(id).unwrap().status(), StockStatus::Overstock);

        let err = store.update_current_stock(id, -1).unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput(_)));
        assert_eq!(store.get(id).unwrap().current, 70);

        let err = store.update_current_stock(RecordId::new(42), 1).unwrap_err();
        assert!(matches!(err, DomainError::NotFound(_)));
    }

    #[test]
    fn remove_returns_record_and_reports_missing_ids() {
        let mut store = store();
        let id = store
            .add(ShopId::new(1), InventoryDraft::new("Milk", 20, 50))
            .unwrap();

        let removed = store.remove(id).unwrap();
        assert_eq!(removed.product, "Milk");
        assert!(store.get(id).is_none());
        assert!(matches!(store.remove(id), Err(DomainError::NotFound(_))));
    }

    #[test]
    fn ids_continue_after_the_highest_survivor() {
        let mut store = store();
        let a = store.add(ShopId::new(1), InventoryDraft::new("A", 1, 1)).unwrap();
        let _b = store.add(ShopId::new(1), InventoryDraft::new("B", 1, 1)).unwrap();
        store.remove(a).unwrap();
        let c = store.add(ShopId::new(1), InventoryDraft::new("C", 1, 1)).unwrap();
        assert_eq!(c, RecordId::new(3));
    }

    #[test]
    fn filter_combines_search_shop_and_status() {
        let mut store = store();
        store.add(ShopId::new(1), InventoryDraft::new("Whole Milk", 5, 50)).unwrap();
        store.add(ShopId::new(2), InventoryDraft::new("Oat milk", 80, 50)).unwrap();
        store.add(ShopId::new(2), InventoryDraft::new("Bread", 40, 50)).unwrap();

        let all_milk = InventoryFilter {
            search: Some("MILK".to_string()),
            ..InventoryFilter::default()
        };
        assert_eq!(store.filter(&all_milk).len(), 2);

        let mall_overstock = InventoryFilter {
            shop: Some(ShopId::new(2)),
            status: Some(StockStatus::Overstock),
            ..InventoryFilter::default()
        };
        let hits = store.filter(&mall_overstock);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].product, "Oat milk");

        assert_eq!(store.filter(&InventoryFilter::default()).len(), 3);
        assert_eq!(store.critical_count(), 1);
    }

    #[test]
    fn from_parts_rejects_duplicate_ids() {
        let record = InventoryDraft::new("Milk", 1, 1)
            .into_record(RecordId::new(1), ShopId::new(1))
            .unwrap();
        let err = InventoryStore::from_parts(vec![], vec![record.clone(), record]).unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput(_)));

        let shops = vec![
            Shop::new(ShopId::new(1), "Downtown"),
            Shop::new(ShopId::new(1), "Mall"),
        ];
        let err = InventoryStore::from_parts(shops, vec![]).unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput(_)));
    }

    #[test]
    fn from_parts_rejects_records_breaking_invariants() {
        let valid = InventoryDraft::new("Milk", 50, 30)
            .perishable(2)
            .into_record(RecordId::new(1), ShopId::new(1))
            .unwrap();

        let mut expired = valid.clone();
        expired.shelf_life = 0;
        let err = InventoryStore::from_parts(vec![], vec![expired]).unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput(msg) if msg.contains("shelf life")));

        let mut unnamed = valid.clone();
        unnamed.product = "  ".to_string();
        let err = InventoryStore::from_parts(vec![], vec![unnamed]).unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput(_)));

        let store = InventoryStore::from_parts(vec![], vec![valid]).unwrap();
        assert_eq!(store.records().len(), 1);
    }

    #[test]
    fn add_after_highest_possible_id_is_rejected() {
        let record = InventoryDraft::new("Milk", 1, 1)
            .into_record(RecordId::new(u64::MAX), ShopId::new(1))
            .unwrap();
        let mut store =
            InventoryStore::from_parts(vec![Shop::new(ShopId::new(1), "Downtown")], vec![record])
                .unwrap();

        let err = store
            .add(ShopId::new(1), InventoryDraft::new("Bread", 1, 1))
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput(_)));
        assert_eq!(store.records().len(), 1);
    }

    #[test]
    fn oversized_stock_value_is_out_of_range() {
        let mut store = store();
        let id = store
            .add(ShopId::new(1), InventoryDraft::new("Milk", 20, 50))
            .unwrap();

        let err = store
            .update_current_stock(id, i64::from(u32::MAX) + 1)
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput(msg) if msg.contains("out of range")));
        assert_eq!(store.get(id).unwrap().current, 20);
    }
}
