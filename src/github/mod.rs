pub mod account;
pub mod builder;
pub mod github_client;
pub mod handler;
mod macros;
pub mod response;

/// Largest page size the listing API accepts
pub const MAX_PER_PAGE: u32 = 100;
