use derive_more::Display;
use serde::{Deserialize, Serialize};

///
/// TypeModel
/// Owning type of a mapped field, with its type-level mapping annotations.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct TypeModel {
    /// Fully-qualified type path (for diagnostics and key derivation).
    pub path: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity: Option<EntityMapping>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relationship: Option<RelationshipMapping>,
}

impl TypeModel {
    /// Unannotated owning type.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            entity: None,
            relationship: None,
        }
    }

    /// Owning type carrying a node-entity mapping annotation.
    pub fn entity(path: impl Into<String>, mapping: EntityMapping) -> Self {
        Self {
            entity: Some(mapping),
            ..Self::new(path)
        }
    }

    /// Owning type carrying a relationship-entity mapping annotation.
    pub fn relationship(path: impl Into<String>, mapping: RelationshipMapping) -> Self {
        Self {
            relationship: Some(mapping),
            ..Self::new(path)
        }
    }

    /// Last segment of the type path, split on `::`, `.` or the `$` that
    /// separates a nested type from its enclosing type.
    #[must_use]
    pub fn simple_name(&self) -> &str {
        self.path
            .rsplit([':', '.', '$'])
            .next()
            .unwrap_or(self.path.as_str())
    }

    /// Naming mode for stored property keys.
    ///
    /// The entity-level mapping wins when present, even if it leaves short
    /// names disabled; the relationship-level mapping is only consulted when
    /// there is no entity-level mapping.
    #[must_use]
    pub const fn naming_mode(&self) -> NamingMode {
        if let Some(entity) = &self.entity {
            return NamingMode::from_short_names(entity.short_names);
        }
        if let Some(relationship) = &self.relationship {
            return NamingMode::from_short_names(relationship.short_names);
        }

        NamingMode::Qualified
    }
}

///
/// EntityMapping
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct EntityMapping {
    #[serde(default)]
    pub short_names: bool,
}

impl EntityMapping {
    #[must_use]
    pub const fn short_names() -> Self {
        Self { short_names: true }
    }
}

///
/// RelationshipMapping
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct RelationshipMapping {
    #[serde(default)]
    pub short_names: bool,
}

impl RelationshipMapping {
    #[must_use]
    pub const fn short_names() -> Self {
        Self { short_names: true }
    }
}

///
/// NamingMode
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Display, Eq, PartialEq, Serialize)]
pub enum NamingMode {
    /// `<OwningSimpleTypeName>.<fieldName>`
    #[default]
    Qualified,

    /// Bare field name; the caller guarantees uniqueness.
    Short,
}

impl NamingMode {
    #[must_use]
    pub const fn from_short_names(short_names: bool) -> Self {
        if short_names {
            Self::Short
        } else {
            Self::Qualified
        }
    }
}
