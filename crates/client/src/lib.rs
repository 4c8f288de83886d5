//! Typed client for the Content LEGO backend and the [`Composer`] session
//! that drives a builder against it.

pub mod api;
pub mod composer;
pub mod config;
pub mod error;

pub use api::ContentLegoClient;
pub use composer::{Composer, SaveForm};
pub use config::ClientConfig;
pub use error::ClientError;
