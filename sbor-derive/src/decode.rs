use proc_macro2::TokenStream;
use quote::quote;
use syn::{parse_quote, Data, Error, Fields, Result};

use crate::utils::*;

pub fn handle_decode(input: TokenStream) -> Result<TokenStream> {
    let input = parse_item(input)?;
    let ident = &input.ident;
    let x_param = custom_kind_param(&input.attrs, "custom_value_kind", "X", &input.generics)?;
    let x = &x_param.path;
    let d = fresh_ident("D", &input.generics);
    let (_, ty_generics, _) = input.generics.split_for_impl();

    if is_transparent(&input.attrs) {
        let Data::Struct(data) = &input.data else {
            return Err(Error::new_spanned(
                &input,
                "#[sbor(transparent)] is only supported on structs",
            ));
        };
        let field = single_unskipped_field(&input)?;
        let field_type = field.ty.clone();
        let decoded_field = quote! {
            <#field_type as ::sbor::Decode<#x, #d>>::decode_body_with_value_kind(decoder, value_kind)?
        };
        let constructor = build_constructor(quote!(Self), &data.fields, |field_info| {
            if field_info.skipped {
                quote! { ::core::default::Default::default() }
            } else {
                decoded_field.clone()
            }
        });
        let mut generics = input.generics.clone();
        generics
            .make_where_clause()
            .predicates
            .push(parse_quote!(#field_type: ::sbor::Decode<#x, #d>));
        if x_param.is_fresh_generic {
            generics
                .params
                .push(parse_quote!(#x: ::sbor::CustomValueKind));
        }
        generics.params.push(parse_quote!(#d: ::sbor::Decoder<#x>));
        let (impl_generics, _, where_clause) = generics.split_for_impl();
        return Ok(quote! {
            impl #impl_generics ::sbor::Decode<#x, #d> for #ident #ty_generics #where_clause {
                #[inline]
                fn decode_body_with_value_kind(
                    decoder: &mut #d,
                    value_kind: ::sbor::ValueKind<#x>,
                ) -> Result<Self, ::sbor::DecodeError> {
                    Ok(#constructor)
                }
            }
        });
    }

    let mut generics = input.generics.clone();
    for type_param in generics.type_params_mut() {
        type_param
            .bounds
            .push(parse_quote!(::sbor::Decode<#x, #d>));
        type_param.bounds.push(parse_quote!(::sbor::Categorize<#x>));
    }
    if x_param.is_fresh_generic {
        generics
            .params
            .push(parse_quote!(#x: ::sbor::CustomValueKind));
    }
    generics.params.push(parse_quote!(#d: ::sbor::Decoder<#x>));
    let (impl_generics, _, where_clause) = generics.split_for_impl();

    let decode_body = match &input.data {
        Data::Struct(data) => {
            let fields = field_info(&data.fields);
            let length = unskipped(&fields).len();
            let constructor = build_constructor(quote!(Self), &data.fields, decode_or_default);
            quote! {
                decoder.check_preloaded_value_kind(value_kind, ::sbor::ValueKind::Tuple)?;
                decoder.read_and_check_size(#length)?;
                Ok(#constructor)
            }
        }
        Data::Enum(data) => {
            let variants = variant_info(&input, data)?;
            let arms = variants.iter().map(|variant| {
                let variant_ident = &variant.ident;
                let discriminator = variant.discriminator;
                let length = unskipped(&variant.fields).len();
                let constructor = build_constructor(
                    quote!(Self::#variant_ident),
                    &variant.syn_fields,
                    decode_or_default,
                );
                quote! {
                    #discriminator => {
                        decoder.read_and_check_size(#length)?;
                        Ok(#constructor)
                    }
                }
            });
            quote! {
                decoder.check_preloaded_value_kind(value_kind, ::sbor::ValueKind::Enum)?;
                let discriminator = decoder.read_discriminator()?;
                match discriminator {
                    #(#arms)*
                    _ => Err(::sbor::DecodeError::UnknownDiscriminator(discriminator)),
                }
            }
        }
        Data::Union(_) => {
            return Err(Error::new_spanned(&input, "unions are not supported"));
        }
    };

    Ok(quote! {
        impl #impl_generics ::sbor::Decode<#x, #d> for #ident #ty_generics #where_clause {
            fn decode_body_with_value_kind(
                decoder: &mut #d,
                value_kind: ::sbor::ValueKind<#x>,
            ) -> Result<Self, ::sbor::DecodeError> {
                #decode_body
            }
        }
    })
}

fn decode_or_default(field: &FieldInfo) -> TokenStream {
    if field.skipped {
        quote! { ::core::default::Default::default() }
    } else {
        quote! { decoder.decode()? }
    }
}

/// Builds a `Path { a: ..., b: ... }` / `Path(...)` / `Path` constructor expression,
/// with the given function providing each field's value expression.
fn build_constructor(
    path: TokenStream,
    fields: &Fields,
    value_for_field: impl Fn(&FieldInfo) -> TokenStream,
) -> TokenStream {
    let field_infos = field_info(fields);
    match fields {
        Fields::Unit => path,
        Fields::Unnamed(_) => {
            let values = field_infos.iter().map(value_for_field);
            quote! { #path(#(#values),*) }
        }
        Fields::Named(_) => {
            let entries = field_infos.iter().map(|field| {
                let member = &field.member;
                let value = value_for_field(field);
                quote! { #member: #value }
            });
            quote! { #path { #(#entries),* } }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_for_struct_with_skipped_field() {
        let output = handle_decode(quote! {
            struct Thing {
                a: u32,
                #[sbor(skip)]
                b: String,
            }
        })
        .unwrap();
        assert_eq!(
            output.to_string(),
            quote! {
                impl<X: ::sbor::CustomValueKind, D: ::sbor::Decoder<X> > ::sbor::Decode<X, D> for Thing {
                    fn decode_body_with_value_kind(
                        decoder: &mut D,
                        value_kind: ::sbor::ValueKind<X>,
                    ) -> Result<Self, ::sbor::DecodeError> {
                        decoder.check_preloaded_value_kind(value_kind, ::sbor::ValueKind::Tuple)?;
                        decoder.read_and_check_size(1usize)?;
                        Ok(Self {
                            a: decoder.decode()?,
                            b: ::core::default::Default::default()
                        })
                    }
                }
            }
            .to_string()
        );
    }

    #[test]
    fn decode_for_enum() {
        let output = handle_decode(quote! {
            enum Thing {
                A,
                B(u32),
            }
        })
        .unwrap();
        assert_eq!(
            output.to_string(),
            quote! {
                impl<X: ::sbor::CustomValueKind, D: ::sbor::Decoder<X> > ::sbor::Decode<X, D> for Thing {
                    fn decode_body_with_value_kind(
                        decoder: &mut D,
                        value_kind: ::sbor::ValueKind<X>,
                    ) -> Result<Self, ::sbor::DecodeError> {
                        decoder.check_preloaded_value_kind(value_kind, ::sbor::ValueKind::Enum)?;
                        let discriminator = decoder.read_discriminator()?;
                        match discriminator {
                            0u8 => {
                                decoder.read_and_check_size(0usize)?;
                                Ok(Self::A)
                            }
                            1u8 => {
                                decoder.read_and_check_size(1usize)?;
                                Ok(Self::B(decoder.decode()?))
                            }
                            _ => Err(::sbor::DecodeError::UnknownDiscriminator(discriminator)),
                        }
                    }
                }
            }
            .to_string()
        );
    }
}
