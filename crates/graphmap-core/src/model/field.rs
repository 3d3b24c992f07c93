use crate::model::{DeclaredType, ElementClass, TypeModel};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::{fmt, sync::Arc};

///
/// FieldDescriptor
///
/// Static shape of one declared field. Built once by the metadata source and
/// shared read-only by every resolution call for that field.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct FieldDescriptor {
    pub owner: Arc<TypeModel>,
    pub name: String,
    pub declared: DeclaredType,

    /// Generic element type, when the declared type is parameterised.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub element: Option<DeclaredType>,

    #[serde(default)]
    pub annotations: Annotations,
}

impl FieldDescriptor {
    pub fn new(owner: Arc<TypeModel>, name: impl Into<String>, declared: DeclaredType) -> Self {
        Self {
            owner,
            name: name.into(),
            declared,
            element: None,
            annotations: Annotations::default(),
        }
    }

    #[must_use]
    pub fn with_element(mut self, element: DeclaredType) -> Self {
        self.element = Some(element);
        self
    }

    #[must_use]
    pub fn id(mut self) -> Self {
        self.annotations.id = true;
        self
    }

    #[must_use]
    pub fn transient(mut self) -> Self {
        self.annotations.transient = true;
        self
    }

    #[must_use]
    pub fn indexed(mut self) -> Self {
        self.annotations.indexed = true;
        self
    }

    #[must_use]
    pub fn related_to(mut self, relationship: RelatedTo) -> Self {
        self.annotations.relationship = Some(relationship);
        self
    }

    #[must_use]
    pub fn related_via(mut self, relationship_entity: RelatedToVia) -> Self {
        self.annotations.relationship_entity = Some(relationship_entity);
        self
    }

    /// Owner path + field name, for diagnostics and error payloads.
    #[must_use]
    pub fn field_ref(&self) -> FieldRef {
        FieldRef::new(self.owner.path.clone(), self.name.clone())
    }

    /// Whether the field name carries the given reserved prefix.
    #[must_use]
    pub fn has_prefix(&self, prefix: &str) -> bool {
        !prefix.is_empty() && self.name.starts_with(prefix)
    }

    /// Relationship type and direction declared by whichever relationship
    /// annotation is present; the field name is the type when none is given.
    #[must_use]
    pub fn relationship_end(&self) -> (&str, Direction) {
        let (rel_type, direction) = match (
            &self.annotations.relationship,
            &self.annotations.relationship_entity,
        ) {
            (Some(rel), _) => (rel.rel_type.as_deref(), rel.direction),
            (None, Some(via)) => (via.rel_type.as_deref(), via.direction),
            (None, None) => (None, Direction::default()),
        };

        (rel_type.unwrap_or(self.name.as_str()), direction)
    }
}

///
/// Annotations
/// Structural annotations relevant to mapping.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct Annotations {
    #[serde(default)]
    pub id: bool,

    #[serde(default)]
    pub transient: bool,

    #[serde(default)]
    pub indexed: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relationship: Option<RelatedTo>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relationship_entity: Option<RelatedToVia>,
}

///
/// RelatedTo
/// Relationship annotation; the element class defaults to the node base marker.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct RelatedTo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rel_type: Option<String>,

    #[serde(default)]
    pub direction: Direction,

    #[serde(default = "node_base")]
    pub element: ElementClass,
}

impl RelatedTo {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            rel_type: None,
            direction: Direction::Outgoing,
            element: ElementClass::NodeBase,
        }
    }

    #[must_use]
    pub fn rel_type(mut self, rel_type: impl Into<String>) -> Self {
        self.rel_type = Some(rel_type.into());
        self
    }

    #[must_use]
    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    #[must_use]
    pub fn element(mut self, element: ElementClass) -> Self {
        self.element = element;
        self
    }
}

impl Default for RelatedTo {
    fn default() -> Self {
        Self::new()
    }
}

///
/// RelatedToVia
/// Relationship-entity annotation; the element class defaults to the
/// relationship-entity base marker.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct RelatedToVia {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rel_type: Option<String>,

    #[serde(default)]
    pub direction: Direction,

    #[serde(default = "relationship_base")]
    pub element: ElementClass,
}

impl RelatedToVia {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            rel_type: None,
            direction: Direction::Outgoing,
            element: ElementClass::RelationshipBase,
        }
    }

    #[must_use]
    pub fn rel_type(mut self, rel_type: impl Into<String>) -> Self {
        self.rel_type = Some(rel_type.into());
        self
    }

    #[must_use]
    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    #[must_use]
    pub fn element(mut self, element: ElementClass) -> Self {
        self.element = element;
        self
    }
}

impl Default for RelatedToVia {
    fn default() -> Self {
        Self::new()
    }
}

const fn node_base() -> ElementClass {
    ElementClass::NodeBase
}

const fn relationship_base() -> ElementClass {
    ElementClass::RelationshipBase
}

///
/// Direction
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Display, Eq, PartialEq, Serialize)]
pub enum Direction {
    #[default]
    Outgoing,
    Incoming,
    Both,
}

///
/// FieldRef
/// Owner path and field name of one mapped field.
///

#[derive(Clone, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct FieldRef {
    pub owner: String,
    pub field: String,
}

impl FieldRef {
    pub fn new(owner: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            field: field.into(),
        }
    }
}

impl fmt::Display for FieldRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}", self.owner, self.field)
    }
}
