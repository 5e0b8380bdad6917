//! Read-only aggregates over an inventory snapshot (dashboard and analytics
//! figures). All counts go through [`derive_status`].

use serde::{Deserialize, Serialize};

use stockshift_core::ShopId;

use crate::record::{InventoryRecord, StockStatus, derive_status};
use crate::shop::Shop;

/// Headline figures of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_products: usize,
    pub total_stock: u64,
    pub critical_items: usize,
}

/// Per-location performance row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopMetrics {
    pub shop_id: ShopId,
    pub name: String,
    pub total_stock: u64,
    pub critical_items: usize,
    pub overstock_items: usize,
    /// Percentage of the shop's records in `normal` status. `None` when the
    /// shop holds no records.
    pub efficiency: Option<f64>,
}

/// Units held by one shop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockShare {
    pub shop_id: ShopId,
    pub name: String,
    pub units: u64,
}

pub fn count_status<'a>(
    records: impl IntoIterator<Item = &'a InventoryRecord>,
    status: StockStatus,
) -> usize {
    records
        .into_iter()
        .filter(|r| derive_status(r) == status)
        .count()
}

fn total_units<'a>(records: impl IntoIterator<Item = &'a InventoryRecord>) -> u64 {
    records.into_iter().map(|r| u64::from(r.current)).sum()
}

pub fn summary(records: &[InventoryRecord]) -> DashboardSummary {
    DashboardSummary {
        total_products: records.len(),
        total_stock: total_units(records),
        critical_items: count_status(records, StockStatus::Critical),
    }
}

pub fn shop_metrics(shops: &[Shop], records: &[InventoryRecord]) -> Vec<ShopMetrics> {
    shops
        .iter()
        .map(|shop| {
            let held: Vec<&InventoryRecord> =
                records.iter().filter(|r| r.shop_id == shop.id).collect();
            let critical_items = count_status(held.iter().copied(), StockStatus::Critical);
            let overstock_items = count_status(held.iter().copied(), StockStatus::Overstock);
            let efficiency = if held.is_empty() {
                None
            } else {
                let normal = held.len() - critical_items - overstock_items;
                Some(normal as f64 / held.len() as f64 * 100.0)
            };

            ShopMetrics {
                shop_id: shop.id,
                name: shop.name.clone(),
                total_stock: total_units(held.iter().copied()),
                critical_items,
                overstock_items,
                efficiency,
            }
        })
        .collect()
}

pub fn stock_distribution(shops: &[Shop], records: &[InventoryRecord]) -> Vec<StockShare> {
    shops
        .iter()
        .map(|shop| StockShare {
            shop_id: shop.id,
            name: shop.name.clone(),
            units: total_units(records.iter().filter(|r| r.shop_id == shop.id)),
        })
        .collect()
}
