//! `stockshift-recommend`
//!
//! **Responsibility:** turn an inventory snapshot into inter-shop transfer
//! suggestions.
//!
//! The engine is read-only over inventory: it emits suggestions, it never
//! edits stock and never files ledger requests.

pub mod engine;
pub mod snapshot;
pub mod suggestion;

pub use engine::{
    DEFAULT_CRITICAL_DEFICIT, DEFAULT_MAX_SUGGESTIONS, DEFAULT_MIN_SURPLUS,
    DEFAULT_URGENT_SHELF_LIFE_DAYS, Recommender, TransferRecommender, recommend_transfers,
};
pub use snapshot::InventorySnapshot;
pub use suggestion::{Reason, TransferSuggestion};
