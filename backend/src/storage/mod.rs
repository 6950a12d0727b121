//! # Storage Module
//!
//! Persistence lives in a spreadsheet published as a web endpoint. This
//! module holds the `LeaveStore` abstraction, the HTTP client that speaks the
//! endpoint's action protocol, and an in-memory store used by tests and
//! local runs without network access.

pub mod memory;
pub mod sheet_client;
pub mod traits;

pub use memory::MemoryStore;
pub use sheet_client::SheetStoreClient;
pub use traits::{LeaveStore, StoreError};
