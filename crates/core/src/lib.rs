//! walletwise_core - functional core for the walletwise finance client.
//!
//! Pure data types and computations with no I/O: recurrence labels, the
//! per-view page cache, and the finance records exchanged with the backend.

pub mod finance;
pub mod pagination;
pub mod recurrence;
pub mod serde;
