//! `stockshift-dashboard` — wires the inventory store, the transfer ledger and
//! the recommendation engine together for a display layer.

pub mod config;
pub mod session;
pub mod view;

pub use config::DashboardConfig;
pub use session::{Session, SnapshotFile};
pub use view::{DashboardReport, StatusRow, SuggestionRow};
