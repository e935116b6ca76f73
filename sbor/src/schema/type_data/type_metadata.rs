use std::borrow::Cow;

use indexmap::IndexMap;

use crate::*;

/// This is the struct used in the [`Schema`] for the naming of a type and its children.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Default, Sbor)]
pub struct TypeMetadata {
    pub type_name: Option<Cow<'static, str>>,
    pub child_names: Option<ChildNames>,
}

impl TypeMetadata {
    pub fn unnamed() -> Self {
        Self {
            type_name: None,
            child_names: None,
        }
    }

    pub fn no_child_names(name: &'static str) -> Self {
        Self {
            type_name: Some(Cow::Borrowed(name)),
            child_names: None,
        }
    }

    pub fn struct_fields(name: &'static str, field_names: &[&'static str]) -> Self {
        let field_names = field_names
            .iter()
            .map(|field_name| Cow::Borrowed(*field_name))
            .collect();
        Self {
            type_name: Some(Cow::Borrowed(name)),
            child_names: Some(ChildNames::NamedFields(field_names)),
        }
    }

    pub fn enum_variants(name: &'static str, variant_naming: IndexMap<u8, TypeMetadata>) -> Self {
        Self {
            type_name: Some(Cow::Borrowed(name)),
            child_names: Some(ChildNames::EnumVariants(variant_naming)),
        }
    }

    pub fn get_name(&self) -> Option<&str> {
        self.type_name.as_deref()
    }

    pub fn get_name_string(&self) -> Option<String> {
        self.type_name.as_ref().map(|name| name.to_string())
    }

    pub fn get_field_names(&self) -> Option<&[Cow<'static, str>]> {
        match &self.child_names {
            Some(ChildNames::NamedFields(field_names)) => Some(field_names),
            _ => None,
        }
    }

    pub fn get_matching_enum_variant_data(&self, discriminator: u8) -> Option<&TypeMetadata> {
        match &self.child_names {
            Some(ChildNames::EnumVariants(variants)) => variants.get(&discriminator),
            _ => None,
        }
    }
}

/// The naming of the children of a type - the fields of a tuple, or the variants of an enum.
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "type", content = "names")
)]
#[derive(Debug, Clone, PartialEq, Eq, Sbor)]
pub enum ChildNames {
    NamedFields(Vec<Cow<'static, str>>),
    EnumVariants(IndexMap<u8, TypeMetadata>),
}
