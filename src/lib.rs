pub mod analysis;
pub mod config;
pub mod error;
pub mod filter;
pub mod models;
pub mod query;
pub mod store;
