use proc_macro2::TokenStream;
use quote::quote;
use syn::{parse_quote, Data, Error, Result};

use crate::utils::*;

pub fn handle_encode(input: TokenStream) -> Result<TokenStream> {
    let input = parse_item(input)?;
    let ident = &input.ident;
    let x_param = custom_kind_param(&input.attrs, "custom_value_kind", "X", &input.generics)?;
    let x = &x_param.path;
    let e = fresh_ident("E", &input.generics);
    let (_, ty_generics, _) = input.generics.split_for_impl();

    if is_transparent(&input.attrs) {
        let field = single_unskipped_field(&input)?;
        let field_type = &field.ty;
        let member = &field.member;
        let mut generics = input.generics.clone();
        generics
            .make_where_clause()
            .predicates
            .push(parse_quote!(#field_type: ::sbor::Encode<#x, #e>));
        if x_param.is_fresh_generic {
            generics
                .params
                .push(parse_quote!(#x: ::sbor::CustomValueKind));
        }
        generics.params.push(parse_quote!(#e: ::sbor::Encoder<#x>));
        let (impl_generics, _, where_clause) = generics.split_for_impl();
        return Ok(quote! {
            impl #impl_generics ::sbor::Encode<#x, #e> for #ident #ty_generics #where_clause {
                #[inline]
                fn encode_value_kind(&self, encoder: &mut #e) -> Result<(), ::sbor::EncodeError> {
                    self.#member.encode_value_kind(encoder)
                }

                #[inline]
                fn encode_body(&self, encoder: &mut #e) -> Result<(), ::sbor::EncodeError> {
                    self.#member.encode_body(encoder)
                }
            }
        });
    }

    let mut generics = input.generics.clone();
    for type_param in generics.type_params_mut() {
        type_param
            .bounds
            .push(parse_quote!(::sbor::Encode<#x, #e>));
        type_param.bounds.push(parse_quote!(::sbor::Categorize<#x>));
    }
    if x_param.is_fresh_generic {
        generics
            .params
            .push(parse_quote!(#x: ::sbor::CustomValueKind));
    }
    generics.params.push(parse_quote!(#e: ::sbor::Encoder<#x>));
    let (impl_generics, _, where_clause) = generics.split_for_impl();

    let (value_kind, encode_body) = match &input.data {
        Data::Struct(data) => {
            let fields = field_info(&data.fields);
            let unskipped = unskipped(&fields);
            let length = unskipped.len();
            let members = unskipped.iter().map(|field| &field.member);
            let body = quote! {
                encoder.write_size(#length)?;
                #(encoder.encode(&self.#members)?;)*
                Ok(())
            };
            (quote! { ::sbor::ValueKind::Tuple }, body)
        }
        Data::Enum(data) => {
            let variants = variant_info(&input, data)?;
            let arms = variants.iter().map(|variant| {
                let pattern = variant_pattern(variant);
                let discriminator = variant.discriminator;
                let unskipped = unskipped(&variant.fields);
                let length = unskipped.len();
                let bindings = unskipped.iter().map(|field| &field.binding);
                quote! {
                    #pattern => {
                        encoder.write_discriminator(#discriminator)?;
                        encoder.write_size(#length)?;
                        #(encoder.encode(#bindings)?;)*
                    }
                }
            });
            let body = quote! {
                match self {
                    #(#arms)*
                }
                Ok(())
            };
            (quote! { ::sbor::ValueKind::Enum }, body)
        }
        Data::Union(_) => {
            return Err(Error::new_spanned(&input, "unions are not supported"));
        }
    };

    Ok(quote! {
        impl #impl_generics ::sbor::Encode<#x, #e> for #ident #ty_generics #where_clause {
            #[inline]
            fn encode_value_kind(&self, encoder: &mut #e) -> Result<(), ::sbor::EncodeError> {
                encoder.write_value_kind(#value_kind)
            }

            #[inline]
            fn encode_body(&self, encoder: &mut #e) -> Result<(), ::sbor::EncodeError> {
                #encode_body
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_for_struct_with_skipped_field() {
        let output = handle_encode(quote! {
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
                impl<X: ::sbor::CustomValueKind, E: ::sbor::Encoder<X> > ::sbor::Encode<X, E> for Thing {
                    #[inline]
                    fn encode_value_kind(&self, encoder: &mut E) -> Result<(), ::sbor::EncodeError> {
                        encoder.write_value_kind(::sbor::ValueKind::Tuple)
                    }

                    #[inline]
                    fn encode_body(&self, encoder: &mut E) -> Result<(), ::sbor::EncodeError> {
                        encoder.write_size(1usize)?;
                        encoder.encode(&self.a)?;
                        Ok(())
                    }
                }
            }
            .to_string()
        );
    }

    #[test]
    fn encode_with_pinned_custom_value_kind() {
        let output = handle_encode(quote! {
            #[sbor(custom_value_kind = "crate::MyCustomValueKind")]
            struct Thing {
                a: u32,
            }
        })
        .unwrap();
        let rendered = output.to_string();
        assert!(rendered.contains(":: sbor :: Encoder < crate :: MyCustomValueKind >"));
        assert!(!rendered.contains("X : :: sbor :: CustomValueKind"));
    }

    #[test]
    fn encode_for_enum() {
        let output = handle_encode(quote! {
            enum Thing {
                A,
                B(u32),
                C { x: u8 },
            }
        })
        .unwrap();
        assert_eq!(
            output.to_string(),
            quote! {
                impl<X: ::sbor::CustomValueKind, E: ::sbor::Encoder<X> > ::sbor::Encode<X, E> for Thing {
                    #[inline]
                    fn encode_value_kind(&self, encoder: &mut E) -> Result<(), ::sbor::EncodeError> {
                        encoder.write_value_kind(::sbor::ValueKind::Enum)
                    }

                    #[inline]
                    fn encode_body(&self, encoder: &mut E) -> Result<(), ::sbor::EncodeError> {
                        match self {
                            Self::A => {
                                encoder.write_discriminator(0u8)?;
                                encoder.write_size(0usize)?;
                            }
                            Self::B(f0) => {
                                encoder.write_discriminator(1u8)?;
                                encoder.write_size(1usize)?;
                                encoder.encode(f0)?;
                            }
                            Self::C { x } => {
                                encoder.write_discriminator(2u8)?;
                                encoder.write_size(1usize)?;
                                encoder.encode(x)?;
                            }
                        }
                        Ok(())
                    }
                }
            }
            .to_string()
        );
    }
}
