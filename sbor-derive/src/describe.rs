use proc_macro2::TokenStream;
use quote::quote;
use sha2::{Digest, Sha256};
use syn::{parse_quote, Data, Error, Result, Type};

use crate::utils::*;

pub fn handle_describe(input: TokenStream) -> Result<TokenStream> {
    // The code hash distinguishes types with the same name, and feeds the type id
    // without ever needing to recurse into field types.
    let code_hash = {
        let mut hasher = Sha256::new();
        hasher.update(input.to_string().as_bytes());
        hasher.finalize()
    };
    let code_hash_bytes = code_hash.iter().take(20).copied().collect::<Vec<u8>>();

    let input = parse_item(input)?;
    let ident = &input.ident;
    let name = ident.to_string();
    let c_param = custom_kind_param(&input.attrs, "custom_type_kind", "C", &input.generics)?;
    let c = &c_param.path;
    let (_, ty_generics, _) = input.generics.split_for_impl();

    if is_transparent(&input.attrs) {
        let field = single_unskipped_field(&input)?;
        let field_type = &field.ty;
        let mut generics = input.generics.clone();
        generics
            .make_where_clause()
            .predicates
            .push(parse_quote!(#field_type: ::sbor::Describe<#c>));
        if c_param.is_fresh_generic {
            generics
                .params
                .push(parse_quote!(#c: ::sbor::CustomTypeKind<::sbor::RustTypeId>));
        }
        let (impl_generics, _, where_clause) = generics.split_for_impl();
        return Ok(quote! {
            impl #impl_generics ::sbor::Describe<#c> for #ident #ty_generics #where_clause {
                fn type_id() -> ::sbor::RustTypeId {
                    <#field_type as ::sbor::Describe<#c>>::type_id()
                }

                fn type_data() -> ::sbor::TypeData<#c, ::sbor::RustTypeId> {
                    <#field_type as ::sbor::Describe<#c>>::type_data()
                }

                fn add_all_dependencies(aggregator: &mut ::sbor::TypeAggregator<#c>) {
                    <#field_type as ::sbor::Describe<#c>>::add_all_dependencies(aggregator)
                }
            }
        });
    }

    let mut generics = input.generics.clone();
    for type_param in generics.type_params_mut() {
        type_param.bounds.push(parse_quote!(::sbor::Describe<#c>));
    }
    if c_param.is_fresh_generic {
        generics
            .params
            .push(parse_quote!(#c: ::sbor::CustomTypeKind<::sbor::RustTypeId>));
    }
    let (impl_generics, _, where_clause) = generics.split_for_impl();

    // The id's dependencies are the generic type parameters, not the field types
    let dependencies = input
        .generics
        .type_params()
        .map(|type_param| {
            let param_ident = &type_param.ident;
            quote! { <#param_ident as ::sbor::Describe<#c>>::type_id() }
        })
        .collect::<Vec<_>>();

    let (type_data, dependency_types) = match &input.data {
        Data::Struct(data) => {
            let fields = field_info(&data.fields);
            let unskipped = unskipped(&fields);
            let dependency_types = unskipped
                .iter()
                .map(|field| field.ty.clone())
                .collect::<Vec<_>>();
            (
                struct_type_data(&name, &unskipped, c),
                dependency_types,
            )
        }
        Data::Enum(data) => {
            let variants = variant_info(&input, data)?;
            let mut dependency_types = Vec::new();
            let entries = variants
                .iter()
                .map(|variant| {
                    let discriminator = variant.discriminator;
                    let variant_name = variant.ident.to_string();
                    let unskipped = unskipped(&variant.fields);
                    dependency_types
                        .extend(unskipped.iter().map(|field| field.ty.clone()));
                    let variant_type_data = struct_type_data(&variant_name, &unskipped, c);
                    quote! { (#discriminator, #variant_type_data) }
                })
                .collect::<Vec<_>>();
            let type_data = quote! {
                ::sbor::TypeData::enum_variants(
                    #name,
                    [#(#entries),*].into_iter().collect(),
                )
            };
            (type_data, dependency_types)
        }
        Data::Union(_) => {
            return Err(Error::new_spanned(&input, "unions are not supported"));
        }
    };

    let add_all_dependencies = if dependency_types.is_empty() {
        quote! {}
    } else {
        let additions = dependency_types.iter().map(|dependency_type| {
            quote! { aggregator.add_child_type_and_descendents::<#dependency_type>(); }
        });
        quote! {
            fn add_all_dependencies(aggregator: &mut ::sbor::TypeAggregator<#c>) {
                #(#additions)*
            }
        }
    };

    let code_hash = code_hash_bytes.iter().map(|byte| quote! { #byte });

    Ok(quote! {
        impl #impl_generics ::sbor::Describe<#c> for #ident #ty_generics #where_clause {
            fn type_id() -> ::sbor::RustTypeId {
                ::sbor::RustTypeId::novel_with_code(
                    #name,
                    &[#(#dependencies),*],
                    &[#(#code_hash),*],
                )
            }

            fn type_data() -> ::sbor::TypeData<#c, ::sbor::RustTypeId> {
                #type_data
            }

            #add_all_dependencies
        }
    })
}

fn struct_type_data(
    name: &str,
    fields: &[&FieldInfo],
    c: &syn::Path,
) -> TokenStream {
    if fields.is_empty() {
        return quote! { ::sbor::TypeData::struct_with_unit_fields(#name) };
    }
    let named = fields.iter().all(|field| field.name.is_some());
    if named {
        let entries = fields.iter().map(|field| {
            let field_name = field.name.clone().unwrap_or_default();
            let field_type = &field.ty;
            quote! { (#field_name, <#field_type as ::sbor::Describe<#c>>::type_id()) }
        });
        quote! {
            ::sbor::TypeData::struct_with_named_fields(#name, vec![#(#entries),*])
        }
    } else {
        let field_types = fields.iter().map(|field| {
            let field_type: &Type = &field.ty;
            quote! { <#field_type as ::sbor::Describe<#c>>::type_id() }
        });
        quote! {
            ::sbor::TypeData::struct_with_unnamed_fields(#name, vec![#(#field_types),*])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describe_embeds_a_code_hash_and_field_types() {
        let output = handle_describe(quote! {
            struct Thing {
                a: u32,
                b: Vec<Thing>,
            }
        })
        .unwrap();
        let rendered = output.to_string();
        assert!(rendered.contains("novel_with_code"));
        assert!(rendered.contains("struct_with_named_fields"));
        assert!(rendered.contains("add_child_type_and_descendents :: < Vec < Thing > >"));
        // The id never depends on field type ids, so recursive types terminate
        assert!(!rendered.contains("< Vec < Thing > as :: sbor :: Describe < C >> :: type_id"));
    }

    #[test]
    fn describe_hash_differs_when_the_definition_changes() {
        let a = handle_describe(quote! { struct Thing { a: u32 } })
            .unwrap()
            .to_string();
        let b = handle_describe(quote! { struct Thing { a: u64 } })
            .unwrap()
            .to_string();
        let hash_of = |rendered: &str| {
            let start = rendered.find("& [").and_then(|_| rendered.rfind("& [")); // final byte array
            start.map(|index| rendered[index..].to_string())
        };
        assert_ne!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn describe_with_pinned_custom_type_kind() {
        let output = handle_describe(quote! {
            #[sbor(custom_type_kind = "crate::MyCustomTypeKind")]
            struct Thing {
                a: u32,
            }
        })
        .unwrap();
        let rendered = output.to_string();
        assert!(rendered.contains(":: sbor :: Describe < crate :: MyCustomTypeKind >"));
        assert!(!rendered.contains("C : :: sbor :: CustomTypeKind"));
    }

    #[test]
    fn describe_for_generic_type_depends_on_its_parameters() {
        let output = handle_describe(quote! {
            struct Wrapper<T> {
                inner: T,
            }
        })
        .unwrap();
        let rendered = output.to_string();
        assert!(rendered.contains("< T as :: sbor :: Describe < C >> :: type_id ()"));
    }
}
