//! Carrying the current solution across process invocations.
//!
//! Only the visiting order (and the city count it belongs to) is stored;
//! cities are regenerated from the layout rule on load. A stored tour that
//! does not fit the configured city count is rejected with
//! [`ConfigurationMismatch`](crate::AnnealError::ConfigurationMismatch).

mod codec;
mod store;

pub use codec::{decode_solution, encode_solution, PersistedTour};
pub use store::{JsonFileStore, MemoryStore, SolutionStore};
