use proc_macro::TokenStream;

mod categorize;
mod decode;
mod describe;
mod encode;
mod utils;

/// Derives [`Categorize`] for a struct or enum, generic over the custom value kind.
///
/// Structs categorize as `Tuple`, enums as `Enum`. A `#[sbor(transparent)]` struct
/// categorizes as its single unskipped field.
#[proc_macro_derive(Categorize, attributes(sbor))]
pub fn categorize(input: TokenStream) -> TokenStream {
    categorize::handle_categorize(input.into())
        .unwrap_or_else(|err| err.to_compile_error())
        .into()
}

/// Derives [`Encode`] for a struct or enum.
///
/// * Structs encode as a tuple of their unskipped fields, in declaration order.
/// * Enums encode their variant's index as the discriminator, then the variant's
///   unskipped fields as if a tuple.
/// * `#[sbor(skip)]` fields are left out of the payload.
/// * A `#[sbor(transparent)]` struct encodes identically to its single unskipped field.
#[proc_macro_derive(Encode, attributes(sbor))]
pub fn encode(input: TokenStream) -> TokenStream {
    encode::handle_encode(input.into())
        .unwrap_or_else(|err| err.to_compile_error())
        .into()
}

/// Derives [`Decode`] for a struct or enum - the inverse of the [`Encode`] derive.
///
/// `#[sbor(skip)]` fields are populated with their `Default` value.
#[proc_macro_derive(Decode, attributes(sbor))]
pub fn decode(input: TokenStream) -> TokenStream {
    decode::handle_decode(input.into())
        .unwrap_or_else(|err| err.to_compile_error())
        .into()
}

/// Derives [`Describe`] for a struct or enum.
///
/// The type gets a novel type id, hashed from its name, the type ids of its generic
/// parameters, and a digest of its definition - notably not from the ids of its field
/// types, so recursive types are supported.
#[proc_macro_derive(Describe, attributes(sbor))]
pub fn describe(input: TokenStream) -> TokenStream {
    describe::handle_describe(input.into())
        .unwrap_or_else(|err| err.to_compile_error())
        .into()
}

/// Derives [`Categorize`], [`Encode`], [`Decode`] and [`Describe`] in one go.
///
/// The generated impls are generic over the custom value kind and custom type kind,
/// unless pinned to a single dialect with
/// `#[sbor(custom_value_kind = "...")]` / `#[sbor(custom_type_kind = "...")]` -
/// required when a field is a custom leaf type of that dialect.
#[proc_macro_derive(Sbor, attributes(sbor))]
pub fn sbor(input: TokenStream) -> TokenStream {
    let input = proc_macro2::TokenStream::from(input);
    let output = categorize::handle_categorize(input.clone())
        .and_then(|categorize| {
            let encode = encode::handle_encode(input.clone())?;
            let decode = decode::handle_decode(input.clone())?;
            let describe = describe::handle_describe(input)?;
            Ok(quote::quote! {
                #categorize
                #encode
                #decode
                #describe
            })
        })
        .unwrap_or_else(|err| err.to_compile_error());
    output.into()
}
