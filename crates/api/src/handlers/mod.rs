//! Request handlers, one module per resource.

pub mod ai;
pub mod bricks;
pub mod channels;
pub mod compositions;
pub mod templates;

/// Creator recorded on entities created through the API. There is no
/// authentication, so every caller is the same user.
pub const DEFAULT_CREATOR: &str = "user";
