//! HeroDex Core - entity model, query builder and error taxonomy
//!
//! This crate is free of I/O. It provides:
//! - Hero, Team, Region and HeroRegionLink entities with typed column handles
//! - Declared relationship edges with cardinality and deletion policy
//! - A query builder rendering parameterized SQL (filters, joins, paging)
//! - Named statements for every repository lookup
//! - The canonical error facility and structured logging facility

pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod queries;
pub mod query_builder;

// Re-export commonly used types
pub use errors::{ExError, ExErrorKind, HerodexError, Result};
pub use model::{Entity, Hero, HeroRegionLink, Region, RegionMember, Team, TeamMembership, TeamWithHeroes};
pub use query_builder::{Predicate, Select, SortOrder};
