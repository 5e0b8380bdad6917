//! `stockshift-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives shared by the inventory
//! store, the transfer ledger and the recommendation engine.

pub mod entity;
pub mod error;
pub mod id;
pub mod input;
pub mod urgency;

pub use entity::{Entity, ensure_unique_ids, next_id};
pub use error::{DomainError, DomainResult};
pub use id::{RecordId, SequentialId, ShopId, TransferId};
pub use urgency::Urgency;
