//! Adapters that translate external requests into ledger calls.

pub mod inbound;
