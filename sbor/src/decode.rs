use crate::*;

/// A data structure that can be decoded from a byte array using SBOR.
pub trait Decode<X: CustomValueKind, D: Decoder<X>>: Sized {
    /// Decodes the type from the decoder, which should match a preloaded value kind.
    ///
    /// You may want to call `decoder.decode_deeper_body_with_value_kind` instead of this method.
    /// See the documentation of [`Decoder::decode_deeper_body_with_value_kind`] for details.
    fn decode_body_with_value_kind(
        decoder: &mut D,
        value_kind: ValueKind<X>,
    ) -> Result<Self, DecodeError>;
}
