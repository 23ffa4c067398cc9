//! Repository layer
//!
//! Table access in the `SqliteRepo` style: unit structs with associated
//! functions taking a `&Connection`. A `Transaction` derefs to a
//! `Connection`, so the same functions compose inside one write unit.

pub mod exec;
pub mod hero_repo;
pub mod link_repo;
pub mod region_repo;
pub mod relationships;
pub mod rows;
pub mod team_repo;

pub use hero_repo::HeroRepo;
pub use link_repo::LinkRepo;
pub use region_repo::RegionRepo;
pub use relationships::RelationshipResolver;
pub use team_repo::TeamRepo;
