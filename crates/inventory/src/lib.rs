//! Inventory domain module.
//!
//! Shops, per-shop stock records, the derived stock status and the in-memory
//! store the dashboard edits. Pure domain logic (no IO, no storage).

pub mod draft;
pub mod record;
pub mod report;
pub mod shop;
pub mod store;

pub use draft::InventoryDraft;
pub use record::{InventoryRecord, StockStatus, default_threshold, derive_status};
pub use report::{DashboardSummary, ShopMetrics, StockShare};
pub use shop::{Shop, find_shop, shop_distance, shop_name};
pub use store::{InventoryFilter, InventoryStore};
