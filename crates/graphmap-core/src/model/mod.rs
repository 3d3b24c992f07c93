//! Static mapping metadata.
//!
//! Types in `model` describe *what is declared*: the owning type of a field,
//! the declared shape of the field, and the structural annotations attached
//! to it. They are built once by the metadata source and never mutated.
//!
//! Nothing here depends on a field's runtime value; classifiers and the
//! naming strategy read these types and nothing else.

pub mod field;
pub mod owner;
pub mod ty;


pub use field::{Annotations, Direction, FieldDescriptor, FieldRef, RelatedTo, RelatedToVia};
pub use owner::{EntityMapping, NamingMode, RelationshipMapping, TypeModel};
pub use ty::{CollectionKind, DeclaredType, ElementClass, ScalarKind};
