use std::collections::HashSet;

use proc_macro2::{Span, TokenStream};
use quote::{format_ident, quote};
use syn::{
    Attribute, Data, DataEnum, DeriveInput, Error, Fields, GenericParam, Generics, Ident, LitStr,
    Member, Path, Result, Type,
};

pub fn parse_item(input: TokenStream) -> Result<DeriveInput> {
    syn::parse2(input)
}

/// Checks for a `#[sbor(flag)]` marker in the given attributes.
pub fn has_sbor_flag(attrs: &[Attribute], flag: &str) -> bool {
    let mut found = false;
    for attr in attrs {
        if attr.path().is_ident("sbor") {
            let _ = attr.parse_nested_meta(|meta| {
                if let Ok(value) = meta.value() {
                    // A `name = "value"` entry - consume the value and move on
                    let _: LitStr = value.parse()?;
                } else if meta.path.is_ident(flag) {
                    found = true;
                }
                Ok(())
            });
        }
    }
    found
}

/// Reads a `#[sbor(name = "some::path")]` entry from the given attributes.
///
/// Used by `custom_value_kind` / `custom_type_kind`, which pin the generated impls to
/// a single dialect - necessary when a field is a custom leaf type of that dialect.
pub fn sbor_custom_path(attrs: &[Attribute], name: &str) -> Result<Option<Path>> {
    let mut result = None;
    for attr in attrs {
        if attr.path().is_ident("sbor") {
            attr.parse_nested_meta(|meta| {
                if let Ok(value) = meta.value() {
                    let literal: LitStr = value.parse()?;
                    if meta.path.is_ident(name) {
                        result = Some(literal.parse::<Path>()?);
                    }
                }
                Ok(())
            })?;
        }
    }
    Ok(result)
}

/// A path to use for the custom value kind / custom type kind generic: either a fresh
/// generic parameter, or a concrete path pinned by an `#[sbor(...)]` attribute.
pub struct CustomKindParam {
    pub path: Path,
    pub is_fresh_generic: bool,
}

pub fn custom_kind_param(
    attrs: &[Attribute],
    attribute_name: &str,
    preferred_ident: &str,
    generics: &Generics,
) -> Result<CustomKindParam> {
    match sbor_custom_path(attrs, attribute_name)? {
        Some(path) => Ok(CustomKindParam {
            path,
            is_fresh_generic: false,
        }),
        None => {
            let ident = fresh_ident(preferred_ident, generics);
            Ok(CustomKindParam {
                path: Path::from(ident),
                is_fresh_generic: true,
            })
        }
    }
}

pub fn is_transparent(attrs: &[Attribute]) -> bool {
    has_sbor_flag(attrs, "transparent")
}

pub struct FieldInfo {
    /// For `self.#member` access on structs.
    pub member: Member,
    /// For bindings in match patterns on enum variants.
    pub binding: Ident,
    pub ty: Type,
    pub name: Option<String>,
    pub skipped: bool,
}

pub fn field_info(fields: &Fields) -> Vec<FieldInfo> {
    fields
        .iter()
        .enumerate()
        .map(|(index, field)| {
            let member = match &field.ident {
                Some(ident) => Member::from(ident.clone()),
                None => Member::from(index),
            };
            let binding = match &field.ident {
                Some(ident) => ident.clone(),
                None => format_ident!("f{}", index),
            };
            FieldInfo {
                member,
                binding,
                ty: field.ty.clone(),
                name: field.ident.as_ref().map(|ident| ident.to_string()),
                skipped: has_sbor_flag(&field.attrs, "skip"),
            }
        })
        .collect()
}

pub fn unskipped(fields: &[FieldInfo]) -> Vec<&FieldInfo> {
    fields.iter().filter(|field| !field.skipped).collect()
}

/// Resolves the single unskipped field a `#[sbor(transparent)]` type delegates to.
pub fn single_unskipped_field(input: &DeriveInput) -> Result<FieldInfo> {
    let Data::Struct(data) = &input.data else {
        return Err(Error::new_spanned(
            input,
            "#[sbor(transparent)] is only supported on structs",
        ));
    };
    let mut fields = field_info(&data.fields);
    fields.retain(|field| !field.skipped);
    if fields.len() != 1 {
        return Err(Error::new_spanned(
            input,
            "#[sbor(transparent)] requires exactly one unskipped field",
        ));
    }
    Ok(fields.remove(0))
}

pub enum FieldsKind {
    Named,
    Unnamed,
    Unit,
}

pub struct VariantInfo {
    pub ident: Ident,
    pub discriminator: u8,
    pub fields: Vec<FieldInfo>,
    pub fields_kind: FieldsKind,
    pub syn_fields: Fields,
}

/// Collects an enum's variants, assigning ordinal discriminators in declaration order.
pub fn variant_info(input: &DeriveInput, data: &DataEnum) -> Result<Vec<VariantInfo>> {
    if data.variants.len() > u8::MAX as usize + 1 {
        return Err(Error::new_spanned(
            input,
            "enums with more than 256 variants are not supported",
        ));
    }
    Ok(data
        .variants
        .iter()
        .enumerate()
        .map(|(index, variant)| VariantInfo {
            ident: variant.ident.clone(),
            discriminator: index as u8,
            fields: field_info(&variant.fields),
            fields_kind: match &variant.fields {
                Fields::Named(_) => FieldsKind::Named,
                Fields::Unnamed(_) => FieldsKind::Unnamed,
                Fields::Unit => FieldsKind::Unit,
            },
            syn_fields: variant.fields.clone(),
        })
        .collect())
}

/// Builds the `Self::Variant { .. }` pattern for a match arm, binding the unskipped
/// fields and ignoring the rest.
pub fn variant_pattern(variant: &VariantInfo) -> TokenStream {
    let ident = &variant.ident;
    match variant.fields_kind {
        FieldsKind::Unit => quote! { Self::#ident },
        FieldsKind::Unnamed => {
            let bindings = variant.fields.iter().map(|field| {
                if field.skipped {
                    quote! { _ }
                } else {
                    let binding = &field.binding;
                    quote! { #binding }
                }
            });
            quote! { Self::#ident(#(#bindings),*) }
        }
        FieldsKind::Named => {
            let bindings = variant.fields.iter().map(|field| {
                let binding = &field.binding;
                if field.skipped {
                    quote! { #binding: _ }
                } else {
                    quote! { #binding }
                }
            });
            quote! { Self::#ident { #(#bindings),* } }
        }
    }
}

/// Picks an ident not already used by the type's generics.
pub fn fresh_ident(preferred: &str, generics: &Generics) -> Ident {
    let existing: HashSet<String> = generics
        .params
        .iter()
        .map(|param| match param {
            GenericParam::Type(type_param) => type_param.ident.to_string(),
            GenericParam::Const(const_param) => const_param.ident.to_string(),
            GenericParam::Lifetime(lifetime_param) => lifetime_param.lifetime.ident.to_string(),
        })
        .collect();
    let mut candidate = preferred.to_string();
    let mut suffix = 0usize;
    while existing.contains(&candidate) {
        candidate = format!("{}{}", preferred, suffix);
        suffix += 1;
    }
    Ident::new(&candidate, Span::call_site())
}
