pub mod account;
pub mod aggregate;
pub mod cache;
pub(crate) mod config;
pub mod error;
pub mod extract;
pub mod judge;
pub mod options;
pub mod render;
pub mod types;

pub use config::cache::DEFAULT_DIR as DEFAULT_CACHE_DIR;
