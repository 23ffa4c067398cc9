pub mod entity;
pub mod hero;
pub mod link;
pub mod region;
pub mod relationship;
pub mod team;

pub use entity::Entity;
pub use hero::Hero;
pub use link::HeroRegionLink;
pub use region::{Region, RegionMember};
pub use relationship::{Cardinality, OnDelete, RelationshipDef, RELATIONSHIPS};
pub use team::{Team, TeamMembership, TeamWithHeroes};
