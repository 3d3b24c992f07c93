use derive_more::{Display, From};
use serde::{Deserialize, Serialize};

///
/// NodeId
///

#[derive(
    Clone, Copy, Debug, Deserialize, Display, Eq, From, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
#[display("node:{_0}")]
pub struct NodeId(pub u64);

///
/// RelationshipId
///

#[derive(
    Clone, Copy, Debug, Deserialize, Display, Eq, From, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
#[display("rel:{_0}")]
pub struct RelationshipId(pub u64);

///
/// ElementRef
/// The store element backing one entity instance.
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, From, Hash, PartialEq, Serialize)]
pub enum ElementRef {
    Node(NodeId),
    Relationship(RelationshipId),
}

impl ElementRef {
    #[must_use]
    pub const fn raw_id(self) -> u64 {
        match self {
            Self::Node(NodeId(id)) | Self::Relationship(RelationshipId(id)) => id,
        }
    }

    #[must_use]
    pub const fn as_node(self) -> Option<NodeId> {
        match self {
            Self::Node(id) => Some(id),
            Self::Relationship(_) => None,
        }
    }
}

///
/// Value
///
/// Field value as exchanged between the interception layer and an accessor.
/// Scalar variants are what the store holds as properties; the id variants
/// are what relationship accessors hand back.
///

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Uint(u64),
    Float(f64),
    Text(String),
    List(Vec<Self>),
    Node(NodeId),
    Nodes(Vec<NodeId>),
    Relationships(Vec<RelationshipId>),
}

impl Value {
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Short variant label used in type-mismatch diagnostics.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Null => "Null",
            Self::Bool(_) => "Bool",
            Self::Int(_) => "Int",
            Self::Uint(_) => "Uint",
            Self::Float(_) => "Float",
            Self::Text(_) => "Text",
            Self::List(_) => "List",
            Self::Node(_) => "Node",
            Self::Nodes(_) => "Nodes",
            Self::Relationships(_) => "Relationships",
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<NodeId> for Value {
    fn from(v: NodeId) -> Self {
        Self::Node(v)
    }
}
