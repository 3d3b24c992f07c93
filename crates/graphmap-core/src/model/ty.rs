use crate::value::Value;
use derive_more::Display;
use serde::{Deserialize, Serialize};

///
/// DeclaredType
///
/// Structural projection of a field's declared type. This is all the type
/// information classification needs; the metadata source decides which
/// variant a concrete language type maps to.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum DeclaredType {
    /// Natively storable property value.
    Scalar(ScalarKind),

    /// Array of natively storable values.
    ScalarArray(ScalarKind),

    /// Named type stored through a value converter (dates, enums, ...).
    Converted(String),

    /// Mapped node-entity type.
    Entity(String),

    /// Mapped relationship-entity type.
    RelationshipEntity(String),

    /// Concrete generic container.
    Collection(CollectionKind),

    /// The unordered-iterable marker type (not a concrete container).
    Iterable,

    /// Anything the mapping layer has no structural knowledge of.
    Opaque(String),
}

impl DeclaredType {
    #[must_use]
    pub const fn is_scalar(&self) -> bool {
        matches!(self, Self::Scalar(_) | Self::ScalarArray(_))
    }

    #[must_use]
    pub const fn is_collection(&self) -> bool {
        matches!(self, Self::Collection(_))
    }

    /// Concrete containers and the iterable marker are both iterable.
    #[must_use]
    pub const fn is_iterable(&self) -> bool {
        matches!(self, Self::Collection(_) | Self::Iterable)
    }

    #[must_use]
    pub const fn is_entity(&self) -> bool {
        matches!(self, Self::Entity(_))
    }

    /// Whether a runtime value is acceptable for a property of this type.
    /// Only scalar shapes are checked; `Null` is always admitted.
    #[must_use]
    pub fn admits(&self, value: &Value) -> bool {
        match (self, value) {
            (_, Value::Null) => true,
            (Self::Scalar(kind), value) => kind.admits(value),
            (Self::ScalarArray(kind), Value::List(items)) => {
                items.iter().all(|item| kind.admits(item))
            }
            (Self::ScalarArray(_), _) => false,
            _ => true,
        }
    }
}

///
/// ScalarKind
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, Hash, PartialEq, Serialize)]
#[remain::sorted]
pub enum ScalarKind {
    Bool,
    Char,
    Float32,
    Float64,
    Int8,
    Int16,
    Int32,
    Int64,
    Text,
}

impl ScalarKind {
    #[must_use]
    pub const fn is_int(self) -> bool {
        matches!(self, Self::Int8 | Self::Int16 | Self::Int32 | Self::Int64)
    }

    #[must_use]
    pub const fn is_float(self) -> bool {
        matches!(self, Self::Float32 | Self::Float64)
    }

    /// Whether `value` can be stored under this kind without conversion.
    #[must_use]
    pub fn admits(self, value: &Value) -> bool {
        match value {
            Value::Bool(_) => matches!(self, Self::Bool),
            Value::Int(n) => match self {
                Self::Int8 => i8::try_from(*n).is_ok(),
                Self::Int16 => i16::try_from(*n).is_ok(),
                Self::Int32 => i32::try_from(*n).is_ok(),
                Self::Int64 => true,
                _ => false,
            },
            Value::Uint(n) => match self {
                Self::Int8 => i8::try_from(*n).is_ok(),
                Self::Int16 => i16::try_from(*n).is_ok(),
                Self::Int32 => i32::try_from(*n).is_ok(),
                Self::Int64 => i64::try_from(*n).is_ok(),
                _ => false,
            },
            Value::Float(_) => self.is_float(),
            Value::Text(s) => match self {
                Self::Text => true,
                Self::Char => s.chars().count() == 1,
                _ => false,
            },
            _ => false,
        }
    }
}

///
/// CollectionKind
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, PartialEq, Serialize)]
pub enum CollectionKind {
    List,
    Set,
}

///
/// ElementClass
///
/// Element class named by a relationship annotation. The two base markers
/// are the defaults an annotation carries when no concrete element class
/// was declared.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum ElementClass {
    /// Generic node-entity base marker.
    NodeBase,

    /// Generic relationship-entity base marker.
    RelationshipBase,

    /// Concrete mapped node-entity type.
    Node(String),

    /// Concrete mapped relationship-entity type.
    Relationship(String),

    /// A type outside the mapped hierarchy.
    Other(String),
}

impl ElementClass {
    #[must_use]
    pub const fn is_node_base(&self) -> bool {
        matches!(self, Self::NodeBase)
    }

    #[must_use]
    pub const fn is_relationship_base(&self) -> bool {
        matches!(self, Self::RelationshipBase)
    }

    /// A concrete node-entity type; the node base marker does not count.
    #[must_use]
    pub const fn is_node_entity(&self) -> bool {
        matches!(self, Self::Node(_))
    }

    #[must_use]
    pub fn type_name(&self) -> Option<&str> {
        match self {
            Self::NodeBase | Self::RelationshipBase => None,
            Self::Node(name) | Self::Relationship(name) | Self::Other(name) => Some(name),
        }
    }
}
