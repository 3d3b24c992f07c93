//! Accessor classification.
//!
//! Each structural category has one total, side-effect-free predicate over a
//! [`FieldDescriptor`]. Categories overlap structurally (an identity field is
//! also a scalar, an entity collection is also iterable), so callers resolve
//! by scanning [`AccessorCategory::ALL`] and taking the first match.
//!
//! Classification here is shape only. Whether a field can actually be
//! resolved also depends on runtime configuration: a converted field is
//! classified as `ConvertedProperty` whether or not a converter is
//! registered for its type. Use the registry's [`category_for`] for the
//! category a registry will resolve to.
//!
//! [`category_for`]: crate::registry::AccessorFactoryRegistry::category_for
//!
//! Invariants:
//! - Predicates read static metadata only.
//! - Priority order is fixed: identity and transient short-circuit first,
//!   then stored properties, then relationships from the most specific
//!   container shape to the least specific.

#[cfg(test)]
mod tests;

use crate::model::{DeclaredType, FieldDescriptor, ScalarKind};
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Field name used for identity when no explicit identity annotation exists.
pub const CONVENTIONAL_ID_FIELD: &str = "id";

/// Name prefix reserved for fields injected by the interception layer.
pub const SYNTHETIC_FIELD_PREFIX: &str = "ajc";

///
/// AccessorCategory
/// Structural categories in priority order.
///

#[derive(
    Clone, Copy, Debug, Deserialize, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
pub enum AccessorCategory {
    Identity,
    Transient,
    Property,
    ConvertedProperty,
    SingleRelationship,
    CollectionRelationship,
    ReadOnlyCollectionRelationship,
    RelationshipEntityCollection,
}

impl AccessorCategory {
    /// Every category, highest priority first.
    pub const ALL: [Self; 8] = [
        Self::Identity,
        Self::Transient,
        Self::Property,
        Self::ConvertedProperty,
        Self::SingleRelationship,
        Self::CollectionRelationship,
        Self::ReadOnlyCollectionRelationship,
        Self::RelationshipEntityCollection,
    ];

    /// Zero-based priority index; lower wins.
    #[must_use]
    pub const fn priority(self) -> usize {
        self as usize
    }

    #[must_use]
    pub fn accepts(self, field: &FieldDescriptor) -> bool {
        match self {
            Self::Identity => is_identity_field(field),
            Self::Transient => is_transient_field(field),
            Self::Property => is_property_field(field),
            Self::ConvertedProperty => is_converted_property_field(field),
            Self::SingleRelationship => is_single_relationship_field(field),
            Self::CollectionRelationship => is_collection_relationship_field(field),
            Self::ReadOnlyCollectionRelationship => {
                is_read_only_collection_relationship_field(field)
            }
            Self::RelationshipEntityCollection => is_relationship_entity_collection_field(field),
        }
    }

    #[must_use]
    pub const fn is_relationship(self) -> bool {
        matches!(
            self,
            Self::SingleRelationship
                | Self::CollectionRelationship
                | Self::ReadOnlyCollectionRelationship
                | Self::RelationshipEntityCollection
        )
    }
}

/// First structural category accepting the field, if any.
///
/// A `Some` result does not mean the field resolves: converted fields also
/// need a registered converter.
#[must_use]
pub fn classify(field: &FieldDescriptor) -> Option<AccessorCategory> {
    AccessorCategory::ALL.into_iter().find(|c| c.accepts(field))
}

/// Every structurally accepting category, highest priority first.
#[must_use]
pub fn matching_categories(field: &FieldDescriptor) -> Vec<AccessorCategory> {
    AccessorCategory::ALL
        .into_iter()
        .filter(|c| c.accepts(field))
        .collect()
}

/// Whether the field name carries the reserved synthetic prefix.
#[must_use]
pub fn is_synthetic_field(field: &FieldDescriptor, prefix: &str) -> bool {
    field.has_prefix(prefix)
}

/// Explicit identity annotation, or the conventional `id: Int64` field.
#[must_use]
pub fn is_identity_field(field: &FieldDescriptor) -> bool {
    field.annotations.id
        || (field.name == CONVENTIONAL_ID_FIELD
            && field.declared == DeclaredType::Scalar(ScalarKind::Int64))
}

#[must_use]
pub const fn is_transient_field(field: &FieldDescriptor) -> bool {
    field.annotations.transient
}

#[must_use]
pub const fn is_property_field(field: &FieldDescriptor) -> bool {
    field.declared.is_scalar()
}

/// Declared as a converted type. Converter availability is checked by the
/// registry, not here.
#[must_use]
pub const fn is_converted_property_field(field: &FieldDescriptor) -> bool {
    matches!(field.declared, DeclaredType::Converted(_))
}

#[must_use]
pub const fn is_single_relationship_field(field: &FieldDescriptor) -> bool {
    field.declared.is_entity()
}

// Concrete container + relationship annotation naming a concrete node entity.
#[must_use]
pub fn is_collection_relationship_field(field: &FieldDescriptor) -> bool {
    if !field.declared.is_collection() {
        return false;
    }

    field
        .annotations
        .relationship
        .as_ref()
        .is_some_and(|rel| rel.element.is_node_entity())
}

// Exactly the iterable marker + relationship annotation not naming the node base.
#[must_use]
pub fn is_read_only_collection_relationship_field(field: &FieldDescriptor) -> bool {
    field.declared == DeclaredType::Iterable
        && field
            .annotations
            .relationship
            .as_ref()
            .is_some_and(|rel| !rel.element.is_node_base())
}

// Any iterable + relationship-entity annotation not naming the relationship base.
#[must_use]
pub fn is_relationship_entity_collection_field(field: &FieldDescriptor) -> bool {
    field.declared.is_iterable()
        && field
            .annotations
            .relationship_entity
            .as_ref()
            .is_some_and(|via| !via.element.is_relationship_base())
}

/// Whether any relationship category accepts the field.
#[must_use]
pub fn is_relationship_field(field: &FieldDescriptor) -> bool {
    is_single_relationship_field(field)
        || is_collection_relationship_field(field)
        || is_relationship_entity_collection_field(field)
        || is_read_only_collection_relationship_field(field)
}
