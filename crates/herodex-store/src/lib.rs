//! HeroDex Store - SQLite persistence for heroes, teams and regions
//!
//! Provides:
//! - Configuration from the environment or a dotenv file
//! - A storage handle scoping one connection (and transaction) per unit
//! - Embedded, checksummed schema migrations
//! - Table repositories and the relationship resolver

pub mod config;
pub mod db;
pub mod errors;
pub mod migrations;
pub mod repo;

pub use config::StoreConfig;
pub use db::Database;
pub use errors::Result;
