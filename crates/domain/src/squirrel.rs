//! Squirrel — the sole record type managed by the service.

use serde::{Deserialize, Serialize};

use crate::error::{ScurryError, ValidationError};
use crate::id::SquirrelId;

/// A persisted squirrel record.
///
/// The id is assigned by storage on creation and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Squirrel {
    pub id: SquirrelId,
    pub name: String,
    pub size: String,
}

/// The validated (name, size) pair supplied when creating or updating a
/// squirrel. Both fields are required and must be non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SquirrelAttributes {
    name: String,
    size: String,
}

impl SquirrelAttributes {
    /// Create a builder for constructing [`SquirrelAttributes`].
    #[must_use]
    pub fn builder() -> SquirrelAttributesBuilder {
        SquirrelAttributesBuilder::default()
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn size(&self) -> &str {
        &self.size
    }

    /// Combine with a storage-assigned id into a full record.
    #[must_use]
    pub fn into_squirrel(self, id: SquirrelId) -> Squirrel {
        Squirrel {
            id,
            name: self.name,
            size: self.size,
        }
    }
}

/// Step-by-step builder for [`SquirrelAttributes`].
#[derive(Debug, Default)]
pub struct SquirrelAttributesBuilder {
    name: Option<String>,
    size: Option<String>,
}

impl SquirrelAttributesBuilder {
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn size(mut self, size: impl Into<String>) -> Self {
        self.size = Some(size.into());
        self
    }

    /// Consume the builder, validate, and return [`SquirrelAttributes`].
    ///
    /// # Errors
    ///
    /// Returns [`ScurryError::Validation`] if `name` or `size` is missing
    /// or empty.
    pub fn build(self) -> Result<SquirrelAttributes, ScurryError> {
        let name = self.name.unwrap_or_default();
        if name.is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        let size = self.size.unwrap_or_default();
        if size.is_empty() {
            return Err(ValidationError::EmptySize.into());
        }
        Ok(SquirrelAttributes { name, size })
    }
}
