//! Shared descriptor fixtures for unit tests.

use crate::{
    classify::AccessorCategory,
    model::{
        CollectionKind, DeclaredType, Direction, ElementClass, EntityMapping, FieldDescriptor,
        RelatedTo, RelatedToVia, ScalarKind, TypeModel,
    },
};
use std::sync::Arc;

pub(crate) const PERSON: &str = "app::model::Person";

pub(crate) fn person() -> Arc<TypeModel> {
    Arc::new(TypeModel::entity(PERSON, EntityMapping::default()))
}

pub(crate) fn field(name: &str, declared: DeclaredType) -> FieldDescriptor {
    FieldDescriptor::new(person(), name, declared)
}

pub(crate) fn id_field() -> FieldDescriptor {
    field("id", DeclaredType::Scalar(ScalarKind::Int64))
}

pub(crate) fn transient_field() -> FieldDescriptor {
    field("cache", DeclaredType::Scalar(ScalarKind::Text)).transient()
}

pub(crate) fn property_field() -> FieldDescriptor {
    field("name", DeclaredType::Scalar(ScalarKind::Text))
}

pub(crate) fn converted_field() -> FieldDescriptor {
    field("born", DeclaredType::Converted("Date".to_string()))
}

pub(crate) fn single_relationship_field() -> FieldDescriptor {
    field("spouse", DeclaredType::Entity(PERSON.to_string()))
        .related_to(RelatedTo::new().rel_type("MARRIED_TO"))
}

pub(crate) fn collection_relationship_field() -> FieldDescriptor {
    field("friends", DeclaredType::Collection(CollectionKind::Set))
        .with_element(DeclaredType::Entity(PERSON.to_string()))
        .related_to(
            RelatedTo::new()
                .rel_type("KNOWS")
                .element(ElementClass::Node(PERSON.to_string())),
        )
}

pub(crate) fn read_only_collection_relationship_field() -> FieldDescriptor {
    field("followers", DeclaredType::Iterable)
        .with_element(DeclaredType::Entity(PERSON.to_string()))
        .related_to(
            RelatedTo::new()
                .rel_type("FOLLOWS")
                .direction(Direction::Incoming)
                .element(ElementClass::Node(PERSON.to_string())),
        )
}

pub(crate) fn relationship_entity_collection_field() -> FieldDescriptor {
    field("roles", DeclaredType::Iterable)
        .with_element(DeclaredType::RelationshipEntity("app::model::Role".to_string()))
        .related_via(
            RelatedToVia::new()
                .rel_type("ACTS_IN")
                .element(ElementClass::Relationship("app::model::Role".to_string())),
        )
}

/// One canonical field per category, in priority order.
pub(crate) fn one_field_per_category() -> Vec<(AccessorCategory, FieldDescriptor)> {
    vec![
        (AccessorCategory::Identity, id_field()),
        (AccessorCategory::Transient, transient_field()),
        (AccessorCategory::Property, property_field()),
        (AccessorCategory::ConvertedProperty, converted_field()),
        (
            AccessorCategory::SingleRelationship,
            single_relationship_field(),
        ),
        (
            AccessorCategory::CollectionRelationship,
            collection_relationship_field(),
        ),
        (
            AccessorCategory::ReadOnlyCollectionRelationship,
            read_only_collection_relationship_field(),
        ),
        (
            AccessorCategory::RelationshipEntityCollection,
            relationship_entity_collection_field(),
        ),
    ]
}

/// Field no classifier accepts.
pub(crate) fn unmappable_field() -> FieldDescriptor {
    field("blob", DeclaredType::Opaque("std::any::Any".to_string()))
}
