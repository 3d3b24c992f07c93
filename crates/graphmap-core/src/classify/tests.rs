use super::*;
use crate::{
    model::{CollectionKind, ElementClass, RelatedTo, RelatedToVia, TypeModel},
    test_support::*,
};
use proptest::prelude::*;
use std::sync::Arc;

#[test]
fn each_fixture_lands_in_its_own_category() {
    for (expected, field) in one_field_per_category() {
        assert_eq!(classify(&field), Some(expected), "field '{}'", field.name);
    }
}

#[test]
fn identity_wins_over_property() {
    let field = id_field();

    assert_eq!(
        matching_categories(&field),
        vec![AccessorCategory::Identity, AccessorCategory::Property]
    );
    assert_eq!(classify(&field), Some(AccessorCategory::Identity));
}

#[test]
fn explicit_identity_annotation_on_any_name() {
    let field = field("key", DeclaredType::Scalar(ScalarKind::Text)).id();

    assert_eq!(classify(&field), Some(AccessorCategory::Identity));
}

#[test]
fn conventional_id_requires_int64() {
    let field = field("id", DeclaredType::Scalar(ScalarKind::Text));

    assert_eq!(classify(&field), Some(AccessorCategory::Property));
}

#[test]
fn transient_entity_field_is_not_a_relationship() {
    let field = single_relationship_field().transient();

    assert_eq!(classify(&field), Some(AccessorCategory::Transient));
}

#[test]
fn container_of_entities_is_bounded_not_read_only() {
    let field = collection_relationship_field();

    assert!(!is_read_only_collection_relationship_field(&field));
    assert_eq!(
        classify(&field),
        Some(AccessorCategory::CollectionRelationship)
    );
}

#[test]
fn container_with_node_base_element_is_unmappable() {
    let field = field("friends", DeclaredType::Collection(CollectionKind::List))
        .related_to(RelatedTo::new());

    assert_eq!(classify(&field), None);
}

#[test]
fn container_with_non_entity_element_is_unmappable() {
    let field = field("tags", DeclaredType::Collection(CollectionKind::List))
        .related_to(RelatedTo::new().element(ElementClass::Other("Tag".to_string())));

    assert_eq!(classify(&field), None);
}

#[test]
fn iterable_accepts_non_entity_element_as_read_only() {
    let field = field("tags", DeclaredType::Iterable)
        .related_to(RelatedTo::new().element(ElementClass::Other("Tag".to_string())));

    assert_eq!(
        classify(&field),
        Some(AccessorCategory::ReadOnlyCollectionRelationship)
    );
}

#[test]
fn iterable_with_concrete_relationship_entity_is_category_eight() {
    let field = relationship_entity_collection_field();

    assert_eq!(
        classify(&field),
        Some(AccessorCategory::RelationshipEntityCollection)
    );
}

#[test]
fn relationship_entity_on_concrete_container_is_accepted() {
    let field = field("roles", DeclaredType::Collection(CollectionKind::List)).related_via(
        RelatedToVia::new().element(ElementClass::Relationship("Role".to_string())),
    );

    assert_eq!(
        classify(&field),
        Some(AccessorCategory::RelationshipEntityCollection)
    );
}

#[test]
fn relationship_entity_base_element_is_unmappable() {
    let field = field("roles", DeclaredType::Iterable).related_via(RelatedToVia::new());

    assert_eq!(classify(&field), None);
}

#[test]
fn opaque_field_matches_nothing() {
    assert!(matching_categories(&unmappable_field()).is_empty());
}

#[test]
fn relationship_field_aggregate() {
    for (category, field) in one_field_per_category() {
        let expected = matches!(
            category,
            AccessorCategory::SingleRelationship
                | AccessorCategory::CollectionRelationship
                | AccessorCategory::ReadOnlyCollectionRelationship
                | AccessorCategory::RelationshipEntityCollection
        );
        assert_eq!(is_relationship_field(&field), expected, "field '{}'", field.name);
        assert_eq!(category.is_relationship(), expected);
    }
}

#[test]
fn priority_matches_declaration_order() {
    for (index, category) in AccessorCategory::ALL.into_iter().enumerate() {
        assert_eq!(category.priority(), index);
    }
}

#[test]
fn synthetic_prefix_detection() {
    let synthetic = field("ajc$this", DeclaredType::Opaque("Object".to_string()));

    assert!(is_synthetic_field(&synthetic, SYNTHETIC_FIELD_PREFIX));
    assert!(!is_synthetic_field(&property_field(), SYNTHETIC_FIELD_PREFIX));
    assert!(!is_synthetic_field(&synthetic, ""));
}

//
// property tests
//

fn arb_declared() -> impl Strategy<Value = DeclaredType> {
    prop_oneof![
        Just(DeclaredType::Scalar(ScalarKind::Int64)),
        Just(DeclaredType::Scalar(ScalarKind::Text)),
        Just(DeclaredType::ScalarArray(ScalarKind::Int32)),
        Just(DeclaredType::Converted("Date".to_string())),
        Just(DeclaredType::Entity("Person".to_string())),
        Just(DeclaredType::RelationshipEntity("Role".to_string())),
        Just(DeclaredType::Collection(CollectionKind::List)),
        Just(DeclaredType::Collection(CollectionKind::Set)),
        Just(DeclaredType::Iterable),
        Just(DeclaredType::Opaque("Any".to_string())),
    ]
}

fn arb_element() -> impl Strategy<Value = ElementClass> {
    prop_oneof![
        Just(ElementClass::NodeBase),
        Just(ElementClass::RelationshipBase),
        Just(ElementClass::Node("Person".to_string())),
        Just(ElementClass::Relationship("Role".to_string())),
        Just(ElementClass::Other("Tag".to_string())),
    ]
}

prop_compose! {
    fn arb_field()(
        name in prop_oneof![Just("id"), Just("name"), Just("friends"), Just("ajc$interfield")],
        declared in arb_declared(),
        id in any::<bool>(),
        transient in any::<bool>(),
        rel in proptest::option::of(arb_element()),
        via in proptest::option::of(arb_element()),
    ) -> FieldDescriptor {
        let owner = Arc::new(TypeModel::new("app::Person"));
        let mut field = FieldDescriptor::new(owner, name, declared);
        field.annotations.id = id;
        field.annotations.transient = transient;
        field.annotations.relationship = rel.map(|e| RelatedTo::new().element(e));
        field.annotations.relationship_entity = via.map(|e| RelatedToVia::new().element(e));
        field
    }
}

proptest! {
    #[test]
    fn classify_is_first_of_matching(field in arb_field()) {
        prop_assert_eq!(classify(&field), matching_categories(&field).first().copied());
    }

    #[test]
    fn classify_is_idempotent(field in arb_field()) {
        let copy = field.clone();
        prop_assert_eq!(classify(&field), classify(&field));
        prop_assert_eq!(classify(&field), classify(&copy));
    }

    #[test]
    fn no_higher_priority_category_accepts(field in arb_field()) {
        if let Some(chosen) = classify(&field) {
            for category in AccessorCategory::ALL.into_iter().take(chosen.priority()) {
                prop_assert!(!category.accepts(&field));
            }
        }
    }

    #[test]
    fn identity_and_transient_never_become_relationships(field in arb_field()) {
        if field.annotations.id || field.annotations.transient {
            prop_assert!(!classify(&field).is_some_and(AccessorCategory::is_relationship));
        }
    }
}
