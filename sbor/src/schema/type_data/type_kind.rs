use indexmap::IndexMap;

use crate::*;

pub type AggregatorTypeKind<S> =
    TypeKind<<S as CustomSchema>::CustomTypeKind<RustTypeId>, RustTypeId>;
pub type LocalTypeKind<S> = TypeKind<<S as CustomSchema>::CustomTypeKind<LocalTypeId>, LocalTypeId>;

/// A serializable record of the shape of a type, with links to the types it composes.
///
/// Note that the type kind alone does not carry numeric/length bounds (see
/// [`TypeValidation`]) or naming (see [`TypeMetadata`]).
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "type")
)]
#[derive(Debug, Clone, PartialEq, Eq, Sbor)]
pub enum TypeKind<C: CustomTypeKind<L>, L: SchemaTypeLink> {
    Any,
    Bool,
    I8,
    I16,
    I32,
    I64,
    I128,
    U8,
    U16,
    U32,
    U64,
    U128,
    String,
    Array { element_type: L },
    Tuple { field_types: Vec<L> },
    Enum { variants: IndexMap<u8, Vec<L>> },
    Map { key_type: L, value_type: L },
    Custom(C),
}

impl<C: CustomTypeKind<L>, L: SchemaTypeLink> TypeKind<C, L> {
    pub fn label(&self) -> &'static str {
        match self {
            TypeKind::Any => "Any",
            TypeKind::Bool => "Bool",
            TypeKind::I8 => "I8",
            TypeKind::I16 => "I16",
            TypeKind::I32 => "I32",
            TypeKind::I64 => "I64",
            TypeKind::I128 => "I128",
            TypeKind::U8 => "U8",
            TypeKind::U16 => "U16",
            TypeKind::U32 => "U32",
            TypeKind::U64 => "U64",
            TypeKind::U128 => "U128",
            TypeKind::String => "String",
            TypeKind::Array { .. } => "Array",
            TypeKind::Tuple { .. } => "Tuple",
            TypeKind::Enum { .. } => "Enum",
            TypeKind::Map { .. } => "Map",
            TypeKind::Custom(_) => "Custom",
        }
    }
}
