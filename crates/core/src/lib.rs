//! Content LEGO domain core.
//!
//! Brick and composition types, the builder state machine, the exporter,
//! and the validation helpers shared by the API server, the persistence
//! layer, and the REST client. This crate performs no I/O.

pub mod brick;
pub mod builder;
pub mod channel;
pub mod composition;
pub mod error;
pub mod export;
pub mod generation;
pub mod library;
pub mod template;
pub mod types;
