//! HeroDex Engine - Repository operations
//!
//! Provides `HeroRepository`, the operation surface over the store. Each
//! operation is one atomic unit and owns its lifecycle logging.

pub mod commands;

pub use commands::HeroRepository;
