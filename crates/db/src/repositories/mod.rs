//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&SqlitePool` as the first argument. Updates read the row,
//! apply the change through the domain type, and write it back inside one
//! transaction.

pub mod brick_repo;
pub mod channel_repo;
pub mod composition_repo;
pub mod template_repo;

pub use brick_repo::BrickRepo;
pub use channel_repo::ChannelRepo;
pub use composition_repo::CompositionRepo;
pub use template_repo::TemplateRepo;
