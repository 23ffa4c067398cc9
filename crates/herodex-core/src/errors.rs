use thiserror::Error;

/// Result type alias using HerodexError
pub type Result<T> = std::result::Result<T, HerodexError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Every failure surfaced by the store and repository layers carries exactly
/// one kind. Callers branch on the kind (or its stable code), never on the
/// message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExErrorKind {
    // Validation
    InvalidInput,

    // Lookup
    /// An exactly-one or by-identity lookup matched zero rows
    NotFound,
    /// An exactly-one lookup matched more than one row
    MultipleResultsFound,

    // Integrity
    /// Uniqueness, foreign-key or composite-identity constraint rejected a write
    ConstraintViolation,
    /// A post-condition check failed: the store and the in-memory view diverged
    ConsistencyFailure,

    // Integration/IO
    Configuration,
    Persistence,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::MultipleResultsFound => "ERR_MULTIPLE_RESULTS_FOUND",
            ExErrorKind::ConstraintViolation => "ERR_CONSTRAINT_VIOLATION",
            ExErrorKind::ConsistencyFailure => "ERR_CONSISTENCY_FAILURE",
            ExErrorKind::Configuration => "ERR_CONFIGURATION",
            ExErrorKind::Persistence => "ERR_PERSISTENCE",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }

    /// True for kinds that signal an integrity fault rather than a lookup miss
    pub fn is_integrity_fault(&self) -> bool {
        matches!(
            self,
            ExErrorKind::ConstraintViolation | ExErrorKind::ConsistencyFailure
        )
    }
}

/// Canonical structured error type
///
/// Carries a classification (`kind`) for programmatic handling plus optional
/// context for debugging: the operation, the entity table and identity
/// involved, and a human-readable message.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity: Option<String>,
    entity_id: Option<String>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity: None,
            entity_id: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add entity (table) context
    pub fn with_entity(mut self, entity: impl Into<String>) -> Self {
        self.entity = Some(entity.into());
        self
    }

    /// Add entity identity context
    pub fn with_entity_id(mut self, id: impl ToString) -> Self {
        self.entity_id = Some(id.to_string());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the entity context, if any
    pub fn entity(&self) -> Option<&str> {
        self.entity.as_deref()
    }

    /// Get the entity identity context, if any
    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        match (&self.entity, &self.entity_id) {
            (Some(entity), Some(id)) => write!(f, " ({} {})", entity, id)?,
            (Some(entity), None) => write!(f, " ({})", entity)?,
            (None, Some(id)) => write!(f, " (entity_id: {})", id)?,
            (None, None) => {}
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Domain error taxonomy for HeroDex operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HerodexError {
    // ===== Lookup Errors =====
    /// An exactly-one lookup matched no rows
    #[error("No {entity} found where {key}")]
    NoRowFound { entity: String, key: String },

    /// An exactly-one lookup matched more than one row
    #[error("Multiple {entity} rows found where {key}")]
    MultipleRowsFound { entity: String, key: String },

    /// A by-identity lookup or update matched no row
    #[error("{entity} {id} not found")]
    IdentityNotFound { entity: String, id: i64 },

    /// The hero is not associated with the region
    #[error("Hero {hero_id} is not linked to region {region_id}")]
    RegionLinkNotFound { hero_id: i64, region_id: i64 },

    // ===== Validation Errors =====
    /// The operation needs a persistent entity but got a transient one
    #[error("{entity} has no identity; insert it first")]
    NotPersisted { entity: String },

    /// A required field is blank or out of range
    #[error("Invalid {entity}.{field}: {reason}")]
    InvalidField {
        entity: String,
        field: String,
        reason: String,
    },

    // ===== Relationship Errors =====
    /// The hero is already linked to the region
    #[error("Hero {hero_id} is already linked to region {region_id}")]
    DuplicateRegionLink { hero_id: i64, region_id: i64 },

    // ===== Consistency Errors =====
    /// A deleted row was still found after commit
    #[error("{entity} where {key} was NOT deleted")]
    RowNotDeleted { entity: String, key: String },

    /// A hero still references a team after the team was deleted
    #[error("Hero {hero_id} still references deleted team {team_id}")]
    ReferenceNotCleared { hero_id: i64, team_id: i64 },

    /// A hero referencing a deleted team vanished instead of being released
    #[error("Hero {hero_id} disappeared when team {team_id} was deleted")]
    ReferentRemoved { hero_id: i64, team_id: i64 },

    // ===== Generic Errors =====
    /// Generic internal error
    #[error("Internal error: {message}")]
    Internal { message: String },
}

/// Conversion from HerodexError to ExError
impl From<HerodexError> for ExError {
    fn from(err: HerodexError) -> Self {
        let message = err.to_string();
        match err {
            HerodexError::NoRowFound { entity, .. } => ExError::new(ExErrorKind::NotFound)
                .with_entity(entity)
                .with_message(message),

            HerodexError::MultipleRowsFound { entity, .. } => {
                ExError::new(ExErrorKind::MultipleResultsFound)
                    .with_entity(entity)
                    .with_message(message)
            }

            HerodexError::IdentityNotFound { entity, id } => ExError::new(ExErrorKind::NotFound)
                .with_entity(entity)
                .with_entity_id(id)
                .with_message(message),

            HerodexError::RegionLinkNotFound { hero_id, region_id } => {
                ExError::new(ExErrorKind::NotFound)
                    .with_entity("heroregionlink")
                    .with_entity_id(format!("{}:{}", hero_id, region_id))
                    .with_message(message)
            }

            HerodexError::NotPersisted { entity } => ExError::new(ExErrorKind::InvalidInput)
                .with_entity(entity)
                .with_message(message),

            HerodexError::InvalidField { entity, .. } => ExError::new(ExErrorKind::InvalidInput)
                .with_entity(entity)
                .with_message(message),

            HerodexError::DuplicateRegionLink { hero_id, region_id } => {
                ExError::new(ExErrorKind::ConstraintViolation)
                    .with_entity("heroregionlink")
                    .with_entity_id(format!("{}:{}", hero_id, region_id))
                    .with_message(message)
            }

            HerodexError::RowNotDeleted { entity, .. } => {
                ExError::new(ExErrorKind::ConsistencyFailure)
                    .with_entity(entity)
                    .with_message(message)
            }

            HerodexError::ReferenceNotCleared { hero_id, .. }
            | HerodexError::ReferentRemoved { hero_id, .. } => {
                ExError::new(ExErrorKind::ConsistencyFailure)
                    .with_entity("hero")
                    .with_entity_id(hero_id)
                    .with_message(message)
            }

            HerodexError::Internal { .. } => {
                ExError::new(ExErrorKind::Internal).with_message(message)
            }
        }
    }
}
