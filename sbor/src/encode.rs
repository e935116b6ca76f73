use crate::*;

/// A data structure that can be serialized into a byte array using SBOR.
pub trait Encode<X: CustomValueKind, E: Encoder<X>> {
    /// Encodes the SBOR value's kind to the encoder
    fn encode_value_kind(&self, encoder: &mut E) -> Result<(), EncodeError>;

    /// Encodes the SBOR body of the type to the encoder.
    ///
    /// You may want to call `encoder.encode_deeper_body(value)` instead of this method. See
    /// the below section for details.
    ///
    /// ## Direct calls and SBOR Depth
    ///
    /// If the body of this type becomes a new child value in the SBOR value model, then the
    /// implementation should be codecs called from the encoder, using
    /// `encoder.encode_deeper_body(value)` - so that the depth increase is tracked.
    ///
    /// A direct call to `value.encode_body(encoder)` is only valid when the type is
    /// "transparent" to the value model - eg smart pointers.
    fn encode_body(&self, encoder: &mut E) -> Result<(), EncodeError>;
}

impl<X: CustomValueKind, E: Encoder<X>, T: Encode<X, E> + ?Sized> Encode<X, E> for &T {
    #[inline]
    fn encode_value_kind(&self, encoder: &mut E) -> Result<(), EncodeError> {
        (*self).encode_value_kind(encoder)
    }

    #[inline]
    fn encode_body(&self, encoder: &mut E) -> Result<(), EncodeError> {
        (*self).encode_body(encoder)
    }
}
