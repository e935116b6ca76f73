use std::marker::PhantomData;

use crate::value_kind::*;
use crate::*;

/// Represents an error occurred during encoding.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Sbor, thiserror::Error)]
pub enum EncodeError {
    #[error("Max depth of {0} exceeded while encoding")]
    MaxDepthExceeded(usize),

    #[error("Size {actual} too large, the maximum encodable size is {max_allowed}")]
    SizeTooLarge { actual: usize, max_allowed: usize },

    #[error("Array element is of kind {actual:#04x}, but the array header declared {expected:#04x}")]
    MismatchingArrayElementValueKind { expected: u8, actual: u8 },

    #[error("Map key is of kind {actual:#04x}, but the map header declared {expected:#04x}")]
    MismatchingMapKeyValueKind { expected: u8, actual: u8 },

    #[error("Map value is of kind {actual:#04x}, but the map header declared {expected:#04x}")]
    MismatchingMapValueValueKind { expected: u8, actual: u8 },
}

/// The writing half of the codec, generic over the custom value kinds of the dialect
/// being written.
pub trait Encoder<X: CustomValueKind>: Sized {
    /// Consumes the encoder, writing the payload prefix byte followed by the value.
    ///
    /// The prefix byte ties a payload to the dialect and codec version it was written
    /// with, so that payloads of different dialects can never be confused for one
    /// another.
    #[inline]
    fn encode_payload<T: Encode<X, Self> + ?Sized>(
        mut self,
        value: &T,
        payload_prefix: u8,
    ) -> Result<(), EncodeError> {
        self.write_payload_prefix(payload_prefix)?;
        self.encode(value)
    }

    /// Writes one whole value - its value kind byte followed by its body - at the
    /// current position.
    fn encode<T: Encode<X, Self> + ?Sized>(&mut self, value: &T) -> Result<(), EncodeError> {
        value.encode_value_kind(self)?;
        self.encode_deeper_body(value)
    }

    /// Writes the body of a child value whose value kind has already been written,
    /// counting one extra level against the depth limit.
    ///
    /// Typed codecs must track the same depth that encoding the equivalent [`Value`]
    /// tree would, otherwise two codecs could disagree on whether a payload is within
    /// the limit. So:
    /// * A codec embedding a child which appears as its own layer of the [`Value`] tree
    ///   must write it through this method.
    /// * A wrapper which is invisible in the [`Value`] tree (a smart pointer, a
    ///   transparent newtype, or plain code re-use of another type's codec) must instead
    ///   call `value.encode_body` directly, leaving the tracked depth untouched.
    fn encode_deeper_body<T: Encode<X, Self> + ?Sized>(
        &mut self,
        value: &T,
    ) -> Result<(), EncodeError>;

    #[inline]
    fn write_payload_prefix(&mut self, payload_prefix: u8) -> Result<(), EncodeError> {
        self.write_byte(payload_prefix)
    }

    #[inline]
    fn write_value_kind(&mut self, ty: ValueKind<X>) -> Result<(), EncodeError> {
        self.write_byte(ty.as_u8())
    }

    #[inline]
    fn write_discriminator(&mut self, discriminator: u8) -> Result<(), EncodeError> {
        self.write_byte(discriminator)
    }

    /// Writes a length as little-endian LEB128, capped at four bytes (28 bits of size).
    fn write_size(&mut self, mut size: usize) -> Result<(), EncodeError> {
        if size > MAX_SIZE {
            return Err(EncodeError::SizeTooLarge {
                actual: size,
                max_allowed: MAX_SIZE,
            });
        }
        loop {
            let seven_bits = size & 0x7f;
            size >>= 7;
            if size == 0 {
                self.write_byte(seven_bits as u8)?;
                return Ok(());
            } else {
                self.write_byte(seven_bits as u8 | 0x80)?;
            }
        }
    }

    fn write_byte(&mut self, n: u8) -> Result<(), EncodeError>;

    fn write_slice(&mut self, slice: &[u8]) -> Result<(), EncodeError>;
}

/// An [`Encoder`] appending to a byte vector.
pub struct VecEncoder<'a, X: CustomValueKind> {
    buf: &'a mut Vec<u8>,
    stack_depth: usize,
    max_depth: usize,
    phantom: PhantomData<X>,
}

impl<'a, X: CustomValueKind> VecEncoder<'a, X> {
    pub fn new(buf: &'a mut Vec<u8>, max_depth: usize) -> Self {
        Self {
            buf,
            stack_depth: 0,
            max_depth,
            phantom: PhantomData,
        }
    }

    #[inline]
    fn track_stack_depth_increase(&mut self) -> Result<(), EncodeError> {
        self.stack_depth += 1;
        if self.stack_depth > self.max_depth {
            return Err(EncodeError::MaxDepthExceeded(self.max_depth));
        }
        Ok(())
    }

    #[inline]
    fn track_stack_depth_decrease(&mut self) -> Result<(), EncodeError> {
        self.stack_depth -= 1;
        Ok(())
    }
}

impl<'a, X: CustomValueKind> Encoder<X> for VecEncoder<'a, X> {
    fn encode_deeper_body<T: Encode<X, Self> + ?Sized>(
        &mut self,
        value: &T,
    ) -> Result<(), EncodeError> {
        self.track_stack_depth_increase()?;
        value.encode_body(self)?;
        self.track_stack_depth_decrease()?;
        Ok(())
    }

    #[inline]
    fn write_byte(&mut self, n: u8) -> Result<(), EncodeError> {
        self.buf.push(n);
        Ok(())
    }

    #[inline]
    fn write_slice(&mut self, slice: &[u8]) -> Result<(), EncodeError> {
        self.buf.extend(slice);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::internal_prelude::*;
    use std::collections::{BTreeMap, BTreeSet};

    fn do_encoding(encoder: &mut BasicEncoder) -> Result<(), EncodeError> {
        encoder.encode(&())?;
        encoder.encode(&true)?;
        encoder.encode(&1i8)?;
        encoder.encode(&1i16)?;
        encoder.encode(&1i32)?;
        encoder.encode(&1i64)?;
        encoder.encode(&1i128)?;
        encoder.encode(&1u8)?;
        encoder.encode(&1u16)?;
        encoder.encode(&1u32)?;
        encoder.encode(&1u64)?;
        encoder.encode(&1u128)?;
        encoder.encode("hello")?;

        encoder.encode(&[1u32, 2u32, 3u32])?;
        encoder.encode(&(1u32, 2u32))?;

        encoder.encode(&vec![1u32, 2u32, 3u32])?;
        let mut set = BTreeSet::<u8>::new();
        set.insert(1);
        set.insert(2);
        encoder.encode(&set)?;
        let mut map = BTreeMap::<u8, u8>::new();
        map.insert(1, 2);
        map.insert(3, 4);
        encoder.encode(&map)?;

        encoder.encode(&None::<u32>)?;
        encoder.encode(&Some(1u32))?;
        encoder.encode(&Result::<u32, String>::Ok(1u32))?;
        encoder.encode(&Result::<u32, String>::Err("hello".to_owned()))?;

        Ok(())
    }

    #[test]
    pub fn test_encoding() {
        let mut bytes = Vec::with_capacity(512);
        let mut enc = BasicEncoder::new(&mut bytes, 256);
        do_encoding(&mut enc).unwrap();

        assert_eq!(
            bytes,
            vec![
                33, 0, // unit (encoded as empty tuple)
                1, 1, // bool
                2, 1, // i8
                3, 1, 0, // i16
                4, 1, 0, 0, 0, // i32
                5, 1, 0, 0, 0, 0, 0, 0, 0, // i64
                6, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, // i128
                7, 1, // u8
                8, 1, 0, // u16
                9, 1, 0, 0, 0, // u32
                10, 1, 0, 0, 0, 0, 0, 0, 0, // u64
                11, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, // u128
                12, 5, 104, 101, 108, 108, 111, // string
                32, 9, 3, 1, 0, 0, 0, 2, 0, 0, 0, 3, 0, 0, 0, // array
                33, 2, 9, 1, 0, 0, 0, 9, 2, 0, 0, 0, // tuple
                32, 9, 3, 1, 0, 0, 0, 2, 0, 0, 0, 3, 0, 0, 0, // vec
                32, 7, 2, 1, 2, // set
                35, 7, 7, 2, 1, 2, 3, 4, // map
                34, 0, 0, // None
                34, 1, 1, 9, 1, 0, 0, 0, // Some<T>
                34, 0, 1, 9, 1, 0, 0, 0, // Ok<T>
                34, 1, 1, 12, 5, 104, 101, 108, 108, 111, // Err<T>
            ]
        );
    }

    #[test]
    pub fn test_write_size() {
        fn size_bytes(size: usize) -> Result<Vec<u8>, EncodeError> {
            let mut bytes = Vec::new();
            let mut enc = BasicEncoder::new(&mut bytes, 256);
            enc.write_size(size)?;
            Ok(bytes)
        }

        assert_eq!(size_bytes(0x00000000), Ok(vec![0x00]));
        assert_eq!(size_bytes(0x0000007f), Ok(vec![0x7f]));
        assert_eq!(size_bytes(0x00000080), Ok(vec![0x80, 0x01]));
        assert_eq!(size_bytes(0x00002000), Ok(vec![0x80, 0x40]));
        assert_eq!(size_bytes(0x0fffffff), Ok(vec![0xff, 0xff, 0xff, 0x7f]));
        assert_eq!(
            size_bytes(0x10000000),
            Err(EncodeError::SizeTooLarge {
                actual: 0x10000000,
                max_allowed: 0x0fffffff
            })
        );
    }

    #[test]
    pub fn test_encode_max_depth() {
        // Depth 5: a vec of vec of vec of vec of u32
        let value = vec![vec![vec![vec![1u32]]]];

        let mut bytes = Vec::new();
        let encoder = BasicEncoder::new(&mut bytes, 5);
        encoder.encode_payload(&value, BASIC_SBOR_V1_PAYLOAD_PREFIX).unwrap();

        let mut bytes = Vec::new();
        let encoder = BasicEncoder::new(&mut bytes, 4);
        assert_eq!(
            encoder.encode_payload(&value, BASIC_SBOR_V1_PAYLOAD_PREFIX),
            Err(EncodeError::MaxDepthExceeded(4))
        );
    }
}
