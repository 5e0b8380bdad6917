//! Transfer ledger: user-created stock transfer requests and their
//! pending → approved / rejected lifecycle.

pub mod draft;
pub mod ledger;
pub mod request;

pub use draft::TransferDraft;
pub use ledger::TransferLedger;
pub use request::{TransferRequest, TransferStatus};
