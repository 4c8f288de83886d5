//! Row types for each table and their conversions to domain types.
//!
//! Rows keep enum columns as plain text; conversion into the domain type
//! validates them.

pub mod brick;
pub mod channel;
pub mod composition;
pub mod template;

pub use brick::BrickRow;
pub use channel::ChannelRow;
pub use composition::CompositionRow;
pub use template::TemplateRow;
