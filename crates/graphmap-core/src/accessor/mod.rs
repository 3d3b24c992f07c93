//! Built-in field accessor strategies.
//!
//! One strategy per [`AccessorCategory`]. A strategy is constructed once per
//! field by its factory and then shared for the lifetime of the mapping; it
//! holds only what it derived from the field descriptor at construction.

mod identity;
mod property;
mod relationship;
mod transient;

#[cfg(test)]
mod tests;

pub use identity::IdentityAccessor;
pub use property::{ConvertedPropertyAccessor, ConvertedPropertyFactory, PropertyAccessor};
pub use relationship::{
    CollectionRelationshipAccessor, ReadOnlyCollectionRelationshipAccessor,
    RelationshipEntityCollectionAccessor, SingleRelationshipAccessor,
};
pub use transient::TransientAccessor;

use crate::{
    classify::AccessorCategory,
    error::AccessError,
    model::{FieldDescriptor, FieldRef},
    registry::AccessorFactory,
    store::GraphStore,
    value::{ElementRef, Value},
};
use std::{fmt, sync::Arc};

///
/// FieldAccessor
///

pub trait FieldAccessor: fmt::Debug + Send + Sync {
    fn category(&self) -> AccessorCategory;

    fn field(&self) -> &FieldRef;

    /// Current value of the field for `owner`.
    ///
    /// `None` means the field is not store-backed and the caller keeps
    /// whatever value the instance holds in memory.
    fn read(&self, store: &dyn GraphStore, owner: ElementRef)
    -> Result<Option<Value>, AccessError>;

    fn write(
        &self,
        store: &mut dyn GraphStore,
        owner: ElementRef,
        value: &Value,
    ) -> Result<(), AccessError>;

    fn is_writable(&self) -> bool {
        true
    }
}

///
/// CategoryFactory
/// Stateless factory: the category classifier plus a constructor function.
///

#[derive(Clone, Copy)]
pub struct CategoryFactory {
    name: &'static str,
    category: AccessorCategory,
    build: fn(&FieldDescriptor) -> Arc<dyn FieldAccessor>,
}

impl CategoryFactory {
    #[must_use]
    pub const fn new(
        name: &'static str,
        category: AccessorCategory,
        build: fn(&FieldDescriptor) -> Arc<dyn FieldAccessor>,
    ) -> Self {
        Self {
            name,
            category,
            build,
        }
    }
}

impl AccessorFactory for CategoryFactory {
    fn name(&self) -> &'static str {
        self.name
    }

    fn category(&self) -> AccessorCategory {
        self.category
    }

    fn construct(&self, field: &FieldDescriptor) -> Arc<dyn FieldAccessor> {
        (self.build)(field)
    }
}

impl fmt::Debug for CategoryFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Stateless built-in factories, highest priority first. The converted
/// property factory is stateful and lives in [`ConvertedPropertyFactory`].
pub const IDENTITY_FACTORY: CategoryFactory =
    CategoryFactory::new("identity", AccessorCategory::Identity, IdentityAccessor::build);
pub const TRANSIENT_FACTORY: CategoryFactory =
    CategoryFactory::new("transient", AccessorCategory::Transient, TransientAccessor::build);
pub const PROPERTY_FACTORY: CategoryFactory =
    CategoryFactory::new("property", AccessorCategory::Property, PropertyAccessor::build);
pub const SINGLE_RELATIONSHIP_FACTORY: CategoryFactory = CategoryFactory::new(
    "single_relationship",
    AccessorCategory::SingleRelationship,
    SingleRelationshipAccessor::build,
);
pub const COLLECTION_RELATIONSHIP_FACTORY: CategoryFactory = CategoryFactory::new(
    "collection_relationship",
    AccessorCategory::CollectionRelationship,
    CollectionRelationshipAccessor::build,
);
pub const READ_ONLY_COLLECTION_RELATIONSHIP_FACTORY: CategoryFactory = CategoryFactory::new(
    "read_only_collection_relationship",
    AccessorCategory::ReadOnlyCollectionRelationship,
    ReadOnlyCollectionRelationshipAccessor::build,
);
pub const RELATIONSHIP_ENTITY_COLLECTION_FACTORY: CategoryFactory = CategoryFactory::new(
    "relationship_entity_collection",
    AccessorCategory::RelationshipEntityCollection,
    RelationshipEntityCollectionAccessor::build,
);

// Reject values whose variant does not fit the field.
fn expect_variant(
    field: &FieldRef,
    expected: &str,
    value: &Value,
    fits: bool,
) -> Result<(), AccessError> {
    if fits {
        Ok(())
    } else {
        Err(AccessError::type_mismatch(field.clone(), expected, value))
    }
}
