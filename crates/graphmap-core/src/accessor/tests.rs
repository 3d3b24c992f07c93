use super::*;
use crate::{
    convert::{ConversionService, FnConverter},
    error::ConversionError,
    model::{EntityMapping, RelationshipMapping, ScalarKind, TypeModel},
    store::MemoryGraph,
    test_support::*,
    value::{NodeId, RelationshipId},
};
use crate::model::DeclaredType;

fn upper_to_stored(value: &Value) -> Result<Value, ConversionError> {
    match value {
        Value::Text(s) => Ok(Value::Text(s.to_uppercase())),
        other => Err(ConversionError::Invalid {
            ty: "Colour".to_string(),
            found: other.label(),
            message: "expected text".to_string(),
        }),
    }
}

fn lower_from_stored(stored: &Value) -> Result<Value, ConversionError> {
    match stored {
        Value::Text(s) => Ok(Value::Text(s.to_lowercase())),
        other => Err(ConversionError::Invalid {
            ty: "Colour".to_string(),
            found: other.label(),
            message: "expected text".to_string(),
        }),
    }
}

fn colour_service() -> Arc<ConversionService> {
    let converter = FnConverter::new(upper_to_stored, lower_from_stored);

    Arc::new(ConversionService::new().with("Colour", converter))
}

fn node(graph: &mut MemoryGraph) -> (NodeId, ElementRef) {
    let id = graph.create_node();
    (id, ElementRef::Node(id))
}

#[test]
fn identity_reads_element_id_and_ignores_writes() {
    let mut graph = MemoryGraph::new();
    let (id, owner) = node(&mut graph);
    let accessor = IDENTITY_FACTORY.construct(&id_field());

    accessor.write(&mut graph, owner, &Value::Uint(999)).unwrap();
    assert_eq!(accessor.read(&graph, owner).unwrap(), Some(Value::Uint(id.0)));
}

#[test]
fn transient_is_not_store_backed() {
    let mut graph = MemoryGraph::new();
    let (_, owner) = node(&mut graph);
    let accessor = TRANSIENT_FACTORY.construct(&transient_field());

    accessor.write(&mut graph, owner, &Value::from("x")).unwrap();
    assert_eq!(accessor.read(&graph, owner).unwrap(), None);
    assert_eq!(graph.property(owner, "Person.cache").unwrap(), None);
}

#[test]
fn property_uses_qualified_key() {
    let mut graph = MemoryGraph::new();
    let (_, owner) = node(&mut graph);
    let accessor = PROPERTY_FACTORY.construct(&property_field());

    assert_eq!(accessor.read(&graph, owner).unwrap(), Some(Value::Null));
    accessor.write(&mut graph, owner, &Value::from("ada")).unwrap();

    assert_eq!(
        graph.property(owner, "Person.name").unwrap(),
        Some(Value::from("ada"))
    );
    assert_eq!(accessor.read(&graph, owner).unwrap(), Some(Value::from("ada")));
}

#[test]
fn property_uses_short_key_when_owner_asks() {
    let mut graph = MemoryGraph::new();
    let (_, owner) = node(&mut graph);
    let owner_type = Arc::new(TypeModel::entity("app::Person", EntityMapping::short_names()));
    let field = FieldDescriptor::new(owner_type, "name", DeclaredType::Scalar(ScalarKind::Text));

    PROPERTY_FACTORY
        .construct(&field)
        .write(&mut graph, owner, &Value::from("ada"))
        .unwrap();

    assert_eq!(graph.property(owner, "name").unwrap(), Some(Value::from("ada")));
}

#[test]
fn property_null_removes_and_mismatch_is_rejected() {
    let mut graph = MemoryGraph::new();
    let (_, owner) = node(&mut graph);
    let accessor = PROPERTY_FACTORY.construct(&property_field());

    accessor.write(&mut graph, owner, &Value::from("ada")).unwrap();
    accessor.write(&mut graph, owner, &Value::Null).unwrap();
    assert_eq!(graph.property(owner, "Person.name").unwrap(), None);

    let err = accessor.write(&mut graph, owner, &Value::Int(3)).unwrap_err();
    assert!(matches!(
        err,
        AccessError::TypeMismatch { ref expected, found: "Int", .. } if expected == "Text"
    ));
}

#[test]
fn property_on_relationship_entity_owner() {
    let mut graph = MemoryGraph::new();
    let (a, _) = node(&mut graph);
    let (b, _) = node(&mut graph);
    let rel = graph.create_relationship(a, b, "ACTS_IN").unwrap();
    let owner = ElementRef::Relationship(rel);
    let owner_type = Arc::new(TypeModel::relationship("app::Role", RelationshipMapping::default()));
    let field = FieldDescriptor::new(owner_type, "title", DeclaredType::Scalar(ScalarKind::Text));

    PROPERTY_FACTORY
        .construct(&field)
        .write(&mut graph, owner, &Value::from("Neo"))
        .unwrap();

    assert_eq!(graph.property(owner, "Role.title").unwrap(), Some(Value::from("Neo")));
}

#[test]
fn converted_property_round_trips_through_converter() {
    let mut graph = MemoryGraph::new();
    let (_, owner) = node(&mut graph);
    let factory = ConvertedPropertyFactory::new(colour_service());
    let field = field("eyes", DeclaredType::Converted("Colour".to_string()));

    assert!(factory.accepts(&field));
    let accessor = factory.construct(&field);
    accessor.write(&mut graph, owner, &Value::from("green")).unwrap();

    assert_eq!(
        graph.property(owner, "Person.eyes").unwrap(),
        Some(Value::from("GREEN"))
    );
    assert_eq!(accessor.read(&graph, owner).unwrap(), Some(Value::from("green")));
}

#[test]
fn converted_property_without_converter_is_not_accepted() {
    let factory = ConvertedPropertyFactory::new(colour_service());

    assert!(!factory.accepts(&converted_field()));
    assert!(!factory.accepts(&property_field()));
}

#[test]
fn converted_property_constructed_without_converter_fails_on_access() {
    let mut graph = MemoryGraph::new();
    let (_, owner) = node(&mut graph);
    let accessor = ConvertedPropertyFactory::new(Arc::new(ConversionService::new()))
        .construct(&converted_field());

    let err = accessor.write(&mut graph, owner, &Value::Uint(1)).unwrap_err();
    assert!(matches!(
        err,
        AccessError::Conversion(ConversionError::MissingConverter { ref ty }) if ty == "Date"
    ));
    assert_eq!(graph.property(owner, "Person.born").unwrap(), None);

    graph.set_property(owner, "Person.born", Value::from("raw")).unwrap();
    let err = accessor.read(&graph, owner).unwrap_err();
    assert!(matches!(
        err,
        AccessError::Conversion(ConversionError::MissingConverter { .. })
    ));

    // absent values never need the converter
    graph.remove_property(owner, "Person.born").unwrap();
    assert_eq!(accessor.read(&graph, owner).unwrap(), Some(Value::Null));
}

#[test]
fn converted_property_surfaces_conversion_errors() {
    let mut graph = MemoryGraph::new();
    let (_, owner) = node(&mut graph);
    let field = field("eyes", DeclaredType::Converted("Colour".to_string()));
    let accessor = ConvertedPropertyFactory::new(colour_service()).construct(&field);

    let err = accessor.write(&mut graph, owner, &Value::Int(1)).unwrap_err();
    assert!(matches!(err, AccessError::Conversion(ConversionError::Invalid { .. })));
}

#[test]
fn single_relationship_replaces_target() {
    let mut graph = MemoryGraph::new();
    let (_, owner) = node(&mut graph);
    let (b, _) = node(&mut graph);
    let (c, _) = node(&mut graph);
    let accessor = SINGLE_RELATIONSHIP_FACTORY.construct(&single_relationship_field());

    assert_eq!(accessor.read(&graph, owner).unwrap(), Some(Value::Null));

    accessor.write(&mut graph, owner, &Value::Node(b)).unwrap();
    assert_eq!(accessor.read(&graph, owner).unwrap(), Some(Value::Node(b)));

    accessor.write(&mut graph, owner, &Value::Node(c)).unwrap();
    assert_eq!(accessor.read(&graph, owner).unwrap(), Some(Value::Node(c)));
    assert_eq!(graph.relationship_count(), 1);

    accessor.write(&mut graph, owner, &Value::Null).unwrap();
    assert_eq!(accessor.read(&graph, owner).unwrap(), Some(Value::Null));
    assert_eq!(graph.relationship_count(), 0);
}

#[test]
fn single_relationship_rejects_multiple_targets_on_read() {
    let mut graph = MemoryGraph::new();
    let (a, owner) = node(&mut graph);
    let (b, _) = node(&mut graph);
    let (c, _) = node(&mut graph);
    graph.create_relationship(a, b, "MARRIED_TO").unwrap();
    graph.create_relationship(a, c, "MARRIED_TO").unwrap();
    let accessor = SINGLE_RELATIONSHIP_FACTORY.construct(&single_relationship_field());

    let err = accessor.read(&graph, owner).unwrap_err();
    assert!(matches!(err, AccessError::Cardinality { found: 2, .. }));
}

#[test]
fn relationship_requires_node_owner() {
    let graph = MemoryGraph::new();
    let accessor = SINGLE_RELATIONSHIP_FACTORY.construct(&single_relationship_field());

    let err = accessor
        .read(&graph, ElementRef::Relationship(RelationshipId(1)))
        .unwrap_err();
    assert!(matches!(err, AccessError::NotNodeBacked { .. }));
}

#[test]
fn collection_relationship_diffs_targets() {
    let mut graph = MemoryGraph::new();
    let (_, owner) = node(&mut graph);
    let (b, _) = node(&mut graph);
    let (c, _) = node(&mut graph);
    let (d, _) = node(&mut graph);
    let accessor = COLLECTION_RELATIONSHIP_FACTORY.construct(&collection_relationship_field());

    accessor.write(&mut graph, owner, &Value::Nodes(vec![b, c])).unwrap();
    assert_eq!(accessor.read(&graph, owner).unwrap(), Some(Value::Nodes(vec![b, c])));

    accessor.write(&mut graph, owner, &Value::Nodes(vec![c, d, d])).unwrap();
    assert_eq!(accessor.read(&graph, owner).unwrap(), Some(Value::Nodes(vec![c, d])));
    assert_eq!(graph.relationship_count(), 2);

    let err = accessor.write(&mut graph, owner, &Value::Node(b)).unwrap_err();
    assert!(matches!(err, AccessError::TypeMismatch { .. }));
}

#[test]
fn read_only_collection_follows_direction_and_rejects_writes() {
    let mut graph = MemoryGraph::new();
    let (a, owner) = node(&mut graph);
    let (b, _) = node(&mut graph);
    let (c, _) = node(&mut graph);
    graph.create_relationship(b, a, "FOLLOWS").unwrap();
    graph.create_relationship(a, c, "FOLLOWS").unwrap();
    let field = read_only_collection_relationship_field();
    let accessor = READ_ONLY_COLLECTION_RELATIONSHIP_FACTORY.construct(&field);

    assert_eq!(accessor.read(&graph, owner).unwrap(), Some(Value::Nodes(vec![b])));
    assert!(!accessor.is_writable());
    let err = accessor.write(&mut graph, owner, &Value::Nodes(vec![c])).unwrap_err();
    assert!(matches!(err, AccessError::ReadOnly { .. }));
}

#[test]
fn relationship_entity_collection_reads_relationship_ids() {
    let mut graph = MemoryGraph::new();
    let (a, owner) = node(&mut graph);
    let (m1, _) = node(&mut graph);
    let (m2, _) = node(&mut graph);
    let r1 = graph.create_relationship(a, m1, "ACTS_IN").unwrap();
    let r2 = graph.create_relationship(a, m2, "ACTS_IN").unwrap();
    let accessor =
        RELATIONSHIP_ENTITY_COLLECTION_FACTORY.construct(&relationship_entity_collection_field());

    assert_eq!(
        accessor.read(&graph, owner).unwrap(),
        Some(Value::Relationships(vec![r1, r2]))
    );
    let err = accessor.write(&mut graph, owner, &Value::Null).unwrap_err();
    assert!(matches!(err, AccessError::ReadOnly { .. }));
}

#[test]
fn constructed_accessor_reports_its_category_and_field() {
    let factories: [&dyn AccessorFactory; 7] = [
        &IDENTITY_FACTORY,
        &TRANSIENT_FACTORY,
        &PROPERTY_FACTORY,
        &SINGLE_RELATIONSHIP_FACTORY,
        &COLLECTION_RELATIONSHIP_FACTORY,
        &READ_ONLY_COLLECTION_RELATIONSHIP_FACTORY,
        &RELATIONSHIP_ENTITY_COLLECTION_FACTORY,
    ];

    for (category, field) in one_field_per_category() {
        let Some(factory) = factories.iter().find(|f| f.category() == category) else {
            continue;
        };
        let accessor = factory.construct(&field);

        assert_eq!(accessor.category(), category);
        assert_eq!(accessor.field(), &field.field_ref());
    }
}
