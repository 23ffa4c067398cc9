//! Query builder
//!
//! Composes filter predicates, joins, ordering and pagination into a
//! parameterized SQL `SELECT`. The builder is pure: it renders SQL text and an
//! ordered parameter list, and the store binds and executes them.
//!
//! ```
//! use herodex_core::model::Hero;
//! use herodex_core::query_builder::{Predicate, Select};
//!
//! let select = Select::from::<Hero>()
//!     .filter(Predicate::range(Hero::AGE, 30, 50))
//!     .limit(3);
//! let (sql, params) = select.to_sql();
//! assert!(sql.ends_with("WHERE (hero.age >= ? AND hero.age <= ?) LIMIT 3"));
//! assert_eq!(params.len(), 2);
//! ```

pub mod column;
pub mod predicate;
pub mod select;
pub mod value;

pub use column::Column;
pub use predicate::{CompareOp, Predicate};
pub use select::{Join, JoinKind, OrderBy, Select, SortOrder};
pub use value::Value;
