mod type_kind;
mod type_metadata;
mod type_validation;

pub use type_kind::*;
pub use type_metadata::*;
pub use type_validation::*;

use crate::*;

/// Combined type data for a single type: its kind, its naming, and its validation.
///
/// An entry of this shape exists for every type in a [`Schema`], and is returned by
/// [`Describe::type_data`] for every describable rust type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeData<C: CustomTypeKind<L>, L: SchemaTypeLink> {
    pub kind: TypeKind<C, L>,
    pub metadata: TypeMetadata,
    pub validation: TypeValidation<C::CustomTypeValidation>,
}

impl<C: CustomTypeKind<L>, L: SchemaTypeLink> TypeData<C, L> {
    pub fn new(kind: TypeKind<C, L>, metadata: TypeMetadata) -> Self {
        Self {
            kind,
            metadata,
            validation: TypeValidation::None,
        }
    }

    pub fn unnamed(kind: TypeKind<C, L>) -> Self {
        Self::new(kind, TypeMetadata::unnamed())
    }

    pub fn no_child_names(kind: TypeKind<C, L>, name: &'static str) -> Self {
        Self::new(kind, TypeMetadata::no_child_names(name))
    }

    /// A named tuple type with named fields - ie a rust struct with named fields
    pub fn struct_with_named_fields(name: &'static str, fields: Vec<(&'static str, L)>) -> Self {
        let (field_names, field_types): (Vec<_>, Vec<_>) = fields.into_iter().unzip();
        Self::new(
            TypeKind::Tuple { field_types },
            TypeMetadata::struct_fields(name, &field_names),
        )
    }

    /// A named tuple type with unnamed fields - ie a rust tuple struct
    pub fn struct_with_unnamed_fields(name: &'static str, field_types: Vec<L>) -> Self {
        Self::new(
            TypeKind::Tuple { field_types },
            TypeMetadata::no_child_names(name),
        )
    }

    /// A named tuple type with no fields - ie a rust unit struct
    pub fn struct_with_unit_fields(name: &'static str) -> Self {
        Self::struct_with_unnamed_fields(name, vec![])
    }

    /// An enum type - the variants are passed as their own [`TypeData`], which must all
    /// be of tuple kind, and get split into the enum's kind and metadata.
    pub fn enum_variants(
        name: &'static str,
        variants: indexmap::IndexMap<u8, TypeData<C, L>>,
    ) -> Self {
        let mut variant_field_types = indexmap::IndexMap::with_capacity(variants.len());
        let mut variant_naming = indexmap::IndexMap::with_capacity(variants.len());

        for (discriminator, variant_type_data) in variants {
            let field_types = match variant_type_data.kind {
                TypeKind::Tuple { field_types } => field_types,
                _ => panic!("Enum variants must be of tuple kind"),
            };
            variant_field_types.insert(discriminator, field_types);
            variant_naming.insert(discriminator, variant_type_data.metadata);
        }

        Self::new(
            TypeKind::Enum {
                variants: variant_field_types,
            },
            TypeMetadata::enum_variants(name, variant_naming),
        )
    }

    pub fn with_name(mut self, name: Option<std::borrow::Cow<'static, str>>) -> Self {
        self.metadata.type_name = name;
        self
    }

    pub fn with_validation(mut self, validation: TypeValidation<C::CustomTypeValidation>) -> Self {
        self.validation = validation;
        self
    }
}
