use std::marker::PhantomData;

use crate::value_kind::*;
use crate::*;

/// Represents an error occurred during decoding.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Sbor, thiserror::Error)]
pub enum DecodeError {
    #[error("{0} byte(s) left unconsumed at the end of the payload")]
    ExtraTrailingBytes(usize),

    #[error("Buffer underflow, required {required} byte(s) but only {remaining} remaining")]
    BufferUnderflow { required: usize, remaining: usize },

    #[error("Unexpected payload prefix, expected {expected:#04x} but was {actual:#04x}")]
    UnexpectedPayloadPrefix { expected: u8, actual: u8 },

    #[error("Unexpected value kind, expected {expected:#04x} but was {actual:#04x}")]
    UnexpectedValueKind { expected: u8, actual: u8 },

    #[error("Unexpected custom value kind {actual:#04x}")]
    UnexpectedCustomValueKind { actual: u8 },

    #[error("Unexpected size, expected {expected} but was {actual}")]
    UnexpectedSize { expected: usize, actual: usize },

    #[error("Unexpected discriminator, expected {expected} but was {actual}")]
    UnexpectedDiscriminator { expected: u8, actual: u8 },

    #[error("Unknown value kind byte {0:#04x}")]
    UnknownValueKind(u8),

    #[error("Unknown discriminator {0}")]
    UnknownDiscriminator(u8),

    #[error("Invalid bool encoding {0}")]
    InvalidBool(u8),

    #[error("Invalid UTF-8 in string body")]
    InvalidUtf8,

    #[error("Invalid size encoding")]
    InvalidSize,

    #[error("Max depth of {0} exceeded while decoding")]
    MaxDepthExceeded(usize),

    #[error("Duplicate key in keyed collection")]
    DuplicateKey,

    #[error("Invalid custom value")]
    InvalidCustomValue,
}

/// The reading half of the codec, generic over the custom value kinds of the dialect
/// being read.
pub trait Decoder<X: CustomValueKind>: Sized {
    /// Consumes the decoder, reading one value preceded by the payload prefix byte and
    /// requiring that the value uses up the whole input.
    ///
    /// The prefix byte ties a payload to the dialect and codec version it was written
    /// with, so that payloads of different dialects can never be confused for one
    /// another.
    #[inline]
    fn decode_payload<T: Decode<X, Self>>(mut self, expected_prefix: u8) -> Result<T, DecodeError> {
        self.read_and_check_payload_prefix(expected_prefix)?;
        let value = self.decode()?;
        self.check_end()?;
        Ok(value)
    }

    /// As [`decode_payload`], but tolerating unread bytes after the decoded value.
    ///
    /// This suits reading a payload off the front of a larger buffer whose tail belongs
    /// to someone else. Where the input is exactly one payload, prefer the strict
    /// [`decode_payload`].
    ///
    /// [`decode_payload`]: Decoder::decode_payload
    #[inline]
    fn decode_payload_permissive<T: Decode<X, Self>>(
        mut self,
        expected_prefix: u8,
    ) -> Result<T, DecodeError> {
        self.read_and_check_payload_prefix(expected_prefix)?;
        self.decode()
    }

    /// Reads one whole value - its value kind byte followed by its body - from the
    /// current position.
    fn decode<T: Decode<X, Self>>(&mut self) -> Result<T, DecodeError> {
        let value_kind = self.read_value_kind()?;
        self.decode_deeper_body_with_value_kind(value_kind)
    }

    /// Reads the body of a child value whose value kind has already been read, counting
    /// one extra level against the depth limit.
    ///
    /// Typed codecs must track the same depth that decoding the equivalent [`Value`]
    /// tree would, otherwise two decoders could disagree on whether a payload is within
    /// the limit. So:
    /// * A codec embedding a child which appears as its own layer of the [`Value`] tree
    ///   must read it through this method.
    /// * A wrapper which is invisible in the [`Value`] tree (a smart pointer, a
    ///   transparent newtype, or plain code re-use of another type's codec) must instead
    ///   call `T::decode_body_with_value_kind` directly, leaving the tracked depth
    ///   untouched.
    fn decode_deeper_body_with_value_kind<T: Decode<X, Self>>(
        &mut self,
        value_kind: ValueKind<X>,
    ) -> Result<T, DecodeError>;

    #[inline]
    fn read_value_kind(&mut self) -> Result<ValueKind<X>, DecodeError> {
        let id = self.read_byte()?;
        ValueKind::from_u8(id).ok_or(DecodeError::UnknownValueKind(id))
    }

    #[inline]
    fn read_discriminator(&mut self) -> Result<u8, DecodeError> {
        self.read_byte()
    }

    /// Reads a length as little-endian LEB128, capped at four bytes (28 bits of size).
    ///
    /// Exactly one byte sequence is accepted per size: a redundant trailing zero
    /// continuation byte is rejected as [`DecodeError::InvalidSize`].
    fn read_size(&mut self) -> Result<usize, DecodeError> {
        let mut size = 0usize;
        let mut shift = 0;
        let mut byte;
        loop {
            byte = self.read_byte()?;
            size |= ((byte & 0x7f) as usize) << shift;
            if byte < 0x80 {
                break;
            }
            shift += 7;
            if shift >= 28 {
                return Err(DecodeError::InvalidSize);
            }
        }

        if byte == 0 && shift != 0 {
            return Err(DecodeError::InvalidSize);
        }

        Ok(size)
    }

    #[inline]
    fn check_preloaded_value_kind(
        &self,
        value_kind: ValueKind<X>,
        expected: ValueKind<X>,
    ) -> Result<ValueKind<X>, DecodeError> {
        if value_kind == expected {
            Ok(value_kind)
        } else {
            Err(DecodeError::UnexpectedValueKind {
                actual: value_kind.as_u8(),
                expected: expected.as_u8(),
            })
        }
    }

    #[inline]
    fn read_expected_discriminator(
        &mut self,
        expected_discriminator: u8,
    ) -> Result<(), DecodeError> {
        let actual = self.read_discriminator()?;
        if actual == expected_discriminator {
            Ok(())
        } else {
            Err(DecodeError::UnexpectedDiscriminator {
                actual,
                expected: expected_discriminator,
            })
        }
    }

    #[inline]
    fn read_and_check_payload_prefix(&mut self, expected_prefix: u8) -> Result<(), DecodeError> {
        let actual_payload_prefix = self.read_byte()?;
        if actual_payload_prefix != expected_prefix {
            return Err(DecodeError::UnexpectedPayloadPrefix {
                actual: actual_payload_prefix,
                expected: expected_prefix,
            });
        }

        Ok(())
    }

    #[inline]
    fn read_and_check_value_kind(
        &mut self,
        expected: ValueKind<X>,
    ) -> Result<ValueKind<X>, DecodeError> {
        let value_kind = self.read_value_kind()?;
        self.check_preloaded_value_kind(value_kind, expected)
    }

    #[inline]
    fn read_and_check_size(&mut self, expected: usize) -> Result<(), DecodeError> {
        let len = self.read_size()?;
        if len != expected {
            return Err(DecodeError::UnexpectedSize {
                expected,
                actual: len,
            });
        }

        Ok(())
    }

    fn check_end(&self) -> Result<(), DecodeError>;

    fn read_byte(&mut self) -> Result<u8, DecodeError>;

    fn read_slice(&mut self, n: usize) -> Result<&[u8], DecodeError>;

    // Lower-level accessors, chiefly for the payload validator

    fn peek_remaining(&self) -> &[u8];

    fn get_depth_limit(&self) -> usize;

    fn get_stack_depth(&self) -> usize;

    fn get_offset(&self) -> usize;

    fn peek_value_kind(&self) -> Result<ValueKind<X>, DecodeError> {
        let id = self.peek_byte()?;
        ValueKind::from_u8(id).ok_or(DecodeError::UnknownValueKind(id))
    }

    fn peek_byte(&self) -> Result<u8, DecodeError>;
}

pub trait BorrowingDecoder<'de, X: CustomValueKind>: Decoder<X> {
    fn read_slice_from_payload(&mut self, n: usize) -> Result<&'de [u8], DecodeError>;
}

/// A [`Decoder`] over a byte slice, lending decoded slices straight out of the input.
pub struct VecDecoder<'de, X: CustomValueKind> {
    input: &'de [u8],
    offset: usize,
    stack_depth: usize,
    max_depth: usize,
    phantom: PhantomData<X>,
}

impl<'de, X: CustomValueKind> VecDecoder<'de, X> {
    pub fn new(input: &'de [u8], max_depth: usize) -> Self {
        Self {
            input,
            offset: 0,
            stack_depth: 0,
            max_depth,
            phantom: PhantomData,
        }
    }

    #[inline]
    pub fn get_input_slice(&self) -> &'de [u8] {
        self.input
    }

    #[inline]
    fn require_remaining(&self, n: usize) -> Result<(), DecodeError> {
        if self.remaining_bytes() < n {
            Err(DecodeError::BufferUnderflow {
                required: n,
                remaining: self.remaining_bytes(),
            })
        } else {
            Ok(())
        }
    }

    #[inline]
    fn remaining_bytes(&self) -> usize {
        self.input.len() - self.offset
    }

    #[inline]
    pub fn track_stack_depth_increase(&mut self) -> Result<(), DecodeError> {
        self.stack_depth += 1;
        if self.stack_depth > self.max_depth {
            return Err(DecodeError::MaxDepthExceeded(self.max_depth));
        }
        Ok(())
    }

    #[inline]
    pub fn track_stack_depth_decrease(&mut self) -> Result<(), DecodeError> {
        self.stack_depth -= 1;
        Ok(())
    }
}

impl<'de, X: CustomValueKind> Decoder<X> for VecDecoder<'de, X> {
    fn decode_deeper_body_with_value_kind<T: Decode<X, Self>>(
        &mut self,
        value_kind: ValueKind<X>,
    ) -> Result<T, DecodeError> {
        self.track_stack_depth_increase()?;
        let decoded = T::decode_body_with_value_kind(self, value_kind)?;
        self.track_stack_depth_decrease()?;
        Ok(decoded)
    }

    #[inline]
    fn read_byte(&mut self) -> Result<u8, DecodeError> {
        self.require_remaining(1)?;
        let result = self.input[self.offset];
        self.offset += 1;
        Ok(result)
    }

    #[inline]
    fn read_slice(&mut self, n: usize) -> Result<&[u8], DecodeError> {
        // The trait method can't express the 'de lifetime on the return slice
        self.read_slice_from_payload(n)
    }

    #[inline]
    fn check_end(&self) -> Result<(), DecodeError> {
        let n = self.remaining_bytes();
        if n != 0 {
            Err(DecodeError::ExtraTrailingBytes(n))
        } else {
            Ok(())
        }
    }

    #[inline]
    fn peek_remaining(&self) -> &[u8] {
        &self.input[self.offset..]
    }

    #[inline]
    fn get_depth_limit(&self) -> usize {
        self.max_depth
    }

    #[inline]
    fn get_stack_depth(&self) -> usize {
        self.stack_depth
    }

    #[inline]
    fn get_offset(&self) -> usize {
        self.offset
    }

    #[inline]
    fn peek_byte(&self) -> Result<u8, DecodeError> {
        self.require_remaining(1)?;
        let result = self.input[self.offset];
        Ok(result)
    }
}

impl<'de, X: CustomValueKind> BorrowingDecoder<'de, X> for VecDecoder<'de, X> {
    #[inline]
    fn read_slice_from_payload(&mut self, n: usize) -> Result<&'de [u8], DecodeError> {
        self.require_remaining(n)?;
        let slice = &self.input[self.offset..self.offset + n];
        self.offset += n;
        Ok(slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::internal_prelude::*;
    use std::cell::RefCell;
    use std::collections::{BTreeMap, BTreeSet};
    use std::rc::Rc;

    fn size_round_trips(size: usize) -> Result<(), DecodeError> {
        let mut bytes = Vec::new();
        let mut encoder = BasicEncoder::new(&mut bytes, 256);
        encoder.write_size(size).unwrap();

        let mut decoder = BasicDecoder::new(&bytes, 256);
        decoder.read_and_check_size(size)?;
        decoder.check_end()
    }

    #[test]
    fn sizes_round_trip_at_every_varint_width_boundary() {
        for size in [
            0x00000000, 0x0000007f, 0x00000080, 0x00003fff, 0x00004000, 0x001fffff, 0x00200000,
            0x0fffffff,
        ] {
            size_round_trips(size).unwrap();
        }
    }

    #[test]
    fn canonical_size_encodings_decode() {
        assert_eq!(BasicDecoder::new(&[0x00], 256).read_size(), Ok(0));
        assert_eq!(BasicDecoder::new(&[123], 256).read_size(), Ok(123));
        assert_eq!(
            BasicDecoder::new(&[0x80, 0x01], 256).read_size(),
            Ok(1 << 7)
        );
        assert_eq!(
            BasicDecoder::new(&[0xff, 0xff, 0xff, 0x7f], 256).read_size(),
            Ok(0x0fffffff)
        );
    }

    #[test]
    fn redundant_and_oversized_size_encodings_are_rejected() {
        // Truncated after a continuation byte
        assert_eq!(
            BasicDecoder::new(&[0x80], 256).read_size(),
            Err(DecodeError::BufferUnderflow {
                required: 1,
                remaining: 0
            })
        );

        // A trailing zero byte re-encodes a size already expressible in fewer bytes
        assert_eq!(
            BasicDecoder::new(&[0x80, 0x00], 256).read_size(),
            Err(DecodeError::InvalidSize)
        );
        assert_eq!(
            BasicDecoder::new(&[0x80, 0x81, 0x00], 256).read_size(),
            Err(DecodeError::InvalidSize)
        );

        // Beyond 28 bits
        assert_eq!(
            BasicDecoder::new(&[0xff, 0xff, 0xff, 0x80], 256).read_size(),
            Err(DecodeError::InvalidSize)
        );
        assert_eq!(
            BasicDecoder::new(&[0xff, 0xff, 0xff, 0xff], 256).read_size(),
            Err(DecodeError::InvalidSize)
        );
        assert_eq!(
            BasicDecoder::new(&[0xff, 0xff, 0xff, 0xff, 0x00], 256).read_size(),
            Err(DecodeError::InvalidSize)
        );
    }

    #[test]
    fn one_decoder_reads_a_stream_of_values_in_sequence() {
        let mut bytes = Vec::new();
        let mut encoder = BasicEncoder::new(&mut bytes, 256);
        encoder.encode(&true).unwrap();
        encoder.encode(&-2i64).unwrap();
        encoder.encode("stream").unwrap();
        encoder.encode(&vec![5u16, 6u16]).unwrap();
        encoder.encode(&Some(9u32)).unwrap();
        encoder
            .encode(&Result::<u8, String>::Err("worse".to_string()))
            .unwrap();

        let mut decoder = BasicDecoder::new(&bytes, 256);
        assert_eq!(decoder.decode::<bool>(), Ok(true));
        assert_eq!(decoder.decode::<i64>(), Ok(-2));
        assert_eq!(decoder.decode::<String>(), Ok("stream".to_string()));
        assert_eq!(decoder.decode::<Vec<u16>>(), Ok(vec![5, 6]));
        assert_eq!(decoder.decode::<Option<u32>>(), Ok(Some(9)));
        assert_eq!(
            decoder.decode::<Result<u8, String>>(),
            Ok(Err("worse".to_string()))
        );
        assert_eq!(decoder.check_end(), Ok(()));
    }

    #[test]
    fn smart_pointers_decode_as_their_pointee() {
        // A bare u8 value body, no extra layer for the wrapper
        let bytes = [0x07, 0x05];
        assert_eq!(
            BasicDecoder::new(&bytes, 256).decode::<Box<u8>>(),
            Ok(Box::new(5))
        );
        assert_eq!(
            BasicDecoder::new(&bytes, 256).decode::<Rc<u8>>(),
            Ok(Rc::new(5))
        );
        assert_eq!(
            BasicDecoder::new(&bytes, 256).decode::<RefCell<u8>>(),
            Ok(RefCell::new(5))
        );
    }

    #[test]
    fn repeated_keys_decode_into_sequences_but_not_keyed_collections() {
        let payload = basic_encode(&vec![5u16, 5u16]).unwrap();
        assert_eq!(basic_decode::<Vec<u16>>(&payload), Ok(vec![5, 5]));
        assert!(basic_decode::<BasicValue>(&payload).is_ok());
        assert_eq!(
            basic_decode::<BTreeSet<u16>>(&payload),
            Err(DecodeError::DuplicateKey)
        );
        assert_eq!(
            basic_decode::<indexmap::IndexSet<u16>>(&payload),
            Err(DecodeError::DuplicateKey)
        );

        let map_with_repeated_key = BasicValue::Map {
            key_value_kind: ValueKind::U16,
            value_value_kind: ValueKind::String,
            entries: vec![
                (
                    BasicValue::U16 { value: 5 },
                    BasicValue::String {
                        value: "first".to_string(),
                    },
                ),
                (
                    BasicValue::U16 { value: 5 },
                    BasicValue::String {
                        value: "second".to_string(),
                    },
                ),
            ],
        };
        let payload = basic_encode(&map_with_repeated_key).unwrap();
        // The untyped value model keeps entries as a list, so it accepts the payload
        assert!(basic_decode::<BasicValue>(&payload).is_ok());
        assert_eq!(
            basic_decode::<BTreeMap<u16, String>>(&payload),
            Err(DecodeError::DuplicateKey)
        );
        assert_eq!(
            basic_decode::<indexmap::IndexMap<u16, String>>(&payload),
            Err(DecodeError::DuplicateKey)
        );
    }

    #[derive(sbor::Categorize, sbor::Encode, sbor::Decode, PartialEq, Eq, Debug)]
    struct Record {
        id: [u8; 32],
        data: Vec<u8>,
    }

    #[test]
    fn fixed_size_arrays_of_compound_elements_decode() {
        let records = [
            Record {
                id: [1u8; 32],
                data: vec![1],
            },
            Record {
                id: [2u8; 32],
                data: vec![2],
            },
        ];

        let mut bytes = Vec::new();
        let mut encoder = BasicEncoder::new(&mut bytes, 256);
        encoder.encode(&records).unwrap();

        let mut decoder = BasicDecoder::new(&bytes, 256);
        assert_eq!(decoder.decode::<[Record; 2]>(), Ok(records));
    }

    #[test]
    fn payload_decoding_is_bounded_by_the_depth_limit() {
        // Four nested vecs around a u32 leaf: five value layers
        let value = vec![vec![vec![vec![1u32]]]];
        let payload = basic_encode(&value).unwrap();

        let decoder = BasicDecoder::new(&payload, 5);
        assert_eq!(
            decoder.decode_payload::<Vec<Vec<Vec<Vec<u32>>>>>(BASIC_SBOR_V1_PAYLOAD_PREFIX),
            Ok(value)
        );

        let decoder = BasicDecoder::new(&payload, 4);
        assert_eq!(
            decoder.decode_payload::<Vec<Vec<Vec<Vec<u32>>>>>(BASIC_SBOR_V1_PAYLOAD_PREFIX),
            Err(DecodeError::MaxDepthExceeded(4))
        );
    }

    #[test]
    fn trailing_bytes_fail_strict_payload_decoding_but_pass_permissive() {
        let mut payload = basic_encode(&7u8).unwrap();
        payload.push(0xff);

        let decoder = BasicDecoder::new(&payload, 256);
        assert_eq!(
            decoder.decode_payload::<u8>(BASIC_SBOR_V1_PAYLOAD_PREFIX),
            Err(DecodeError::ExtraTrailingBytes(1))
        );

        let decoder = BasicDecoder::new(&payload, 256);
        assert_eq!(
            decoder.decode_payload_permissive::<u8>(BASIC_SBOR_V1_PAYLOAD_PREFIX),
            Ok(7)
        );
    }
}
