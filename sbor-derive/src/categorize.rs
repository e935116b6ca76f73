use proc_macro2::TokenStream;
use quote::quote;
use syn::{parse_quote, Data, Error, Result};

use crate::utils::*;

pub fn handle_categorize(input: TokenStream) -> Result<TokenStream> {
    let input = parse_item(input)?;
    let ident = &input.ident;
    let x_param = custom_kind_param(&input.attrs, "custom_value_kind", "X", &input.generics)?;
    let x = &x_param.path;
    let (_, ty_generics, _) = input.generics.split_for_impl();

    if is_transparent(&input.attrs) {
        let field = single_unskipped_field(&input)?;
        let field_type = &field.ty;
        let mut generics = input.generics.clone();
        generics
            .make_where_clause()
            .predicates
            .push(parse_quote!(#field_type: ::sbor::Categorize<#x>));
        if x_param.is_fresh_generic {
            generics
                .params
                .push(parse_quote!(#x: ::sbor::CustomValueKind));
        }
        let (impl_generics, _, where_clause) = generics.split_for_impl();
        return Ok(quote! {
            impl #impl_generics ::sbor::Categorize<#x> for #ident #ty_generics #where_clause {
                #[inline]
                fn value_kind() -> ::sbor::ValueKind<#x> {
                    <#field_type as ::sbor::Categorize<#x>>::value_kind()
                }
            }
        });
    }

    let value_kind = match &input.data {
        Data::Struct(_) => quote! { ::sbor::ValueKind::Tuple },
        Data::Enum(_) => quote! { ::sbor::ValueKind::Enum },
        Data::Union(_) => {
            return Err(Error::new_spanned(&input, "unions are not supported"));
        }
    };

    let mut generics = input.generics.clone();
    if x_param.is_fresh_generic {
        generics
            .params
            .push(parse_quote!(#x: ::sbor::CustomValueKind));
    }
    let (impl_generics, _, where_clause) = generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::sbor::Categorize<#x> for #ident #ty_generics #where_clause {
            #[inline]
            fn value_kind() -> ::sbor::ValueKind<#x> {
                #value_kind
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_code_eq(actual: TokenStream, expected: TokenStream) {
        assert_eq!(actual.to_string(), expected.to_string());
    }

    #[test]
    fn categorize_for_struct() {
        let output = handle_categorize(quote! {
            struct Thing {
                a: u32,
            }
        })
        .unwrap();
        assert_code_eq(
            output,
            quote! {
                impl<X: ::sbor::CustomValueKind> ::sbor::Categorize<X> for Thing {
                    #[inline]
                    fn value_kind() -> ::sbor::ValueKind<X> {
                        ::sbor::ValueKind::Tuple
                    }
                }
            },
        );
    }

    #[test]
    fn categorize_for_transparent_struct() {
        let output = handle_categorize(quote! {
            #[sbor(transparent)]
            struct Wrapper(u8);
        })
        .unwrap();
        assert_code_eq(
            output,
            quote! {
                impl<X: ::sbor::CustomValueKind> ::sbor::Categorize<X> for Wrapper
                where
                    u8: ::sbor::Categorize<X>
                {
                    #[inline]
                    fn value_kind() -> ::sbor::ValueKind<X> {
                        <u8 as ::sbor::Categorize<X>>::value_kind()
                    }
                }
            },
        );
    }

    #[test]
    fn categorize_for_enum() {
        let output = handle_categorize(quote! {
            enum Thing {
                A,
                B(u32),
            }
        })
        .unwrap();
        assert_code_eq(
            output,
            quote! {
                impl<X: ::sbor::CustomValueKind> ::sbor::Categorize<X> for Thing {
                    #[inline]
                    fn value_kind() -> ::sbor::ValueKind<X> {
                        ::sbor::ValueKind::Enum
                    }
                }
            },
        );
    }
}
