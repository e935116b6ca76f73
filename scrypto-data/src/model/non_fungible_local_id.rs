use std::fmt;
use std::str::FromStr;

use crate::internal_prelude::*;

/// The local id of a non fungible, unique within its resource.
///
/// Four flavors exist; each renders and parses with its own delimiters:
///
/// | Flavor    | Content                               | Text form        |
/// |-----------|---------------------------------------|------------------|
/// | `String`  | 1..=64 chars from `[0-9a-zA-Z_]`      | `<my_id>`        |
/// | `Integer` | a `u64`                               | `#123#`          |
/// | `Bytes`   | 1..=64 bytes                          | `[dead]`         |
/// | `RUID`    | 32 random bytes                       | `{xxxx-xxxx-..}` |
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NonFungibleLocalId {
    String(StringNonFungibleLocalId),
    Integer(IntegerNonFungibleLocalId),
    Bytes(BytesNonFungibleLocalId),
    RUID(RUIDNonFungibleLocalId),
}

impl NonFungibleLocalId {
    pub fn string(value: impl Into<String>) -> Result<Self, ContentValidationError> {
        StringNonFungibleLocalId::new(value).map(Self::String)
    }

    pub fn integer(value: u64) -> Self {
        Self::Integer(IntegerNonFungibleLocalId::new(value))
    }

    pub fn bytes(value: impl Into<Vec<u8>>) -> Result<Self, ContentValidationError> {
        BytesNonFungibleLocalId::new(value).map(Self::Bytes)
    }

    pub fn ruid(value: [u8; 32]) -> Self {
        Self::RUID(RUIDNonFungibleLocalId::new(value))
    }
}

/// A string local id, 1..=64 characters from `[0-9a-zA-Z_]`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StringNonFungibleLocalId(String);

impl StringNonFungibleLocalId {
    pub fn new(value: impl Into<String>) -> Result<Self, ContentValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ContentValidationError::Empty);
        }
        if value.len() > NON_FUNGIBLE_LOCAL_ID_MAX_LENGTH {
            return Err(ContentValidationError::TooLong);
        }
        for character in value.chars() {
            if !matches!(character, '0'..='9' | 'a'..='z' | 'A'..='Z' | '_') {
                return Err(ContentValidationError::ContainsBadCharacter(character));
            }
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

/// An integer local id.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IntegerNonFungibleLocalId(u64);

impl IntegerNonFungibleLocalId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

/// A byte-string local id, 1..=64 bytes.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BytesNonFungibleLocalId(Vec<u8>);

impl BytesNonFungibleLocalId {
    pub fn new(value: impl Into<Vec<u8>>) -> Result<Self, ContentValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ContentValidationError::Empty);
        }
        if value.len() > NON_FUNGIBLE_LOCAL_ID_MAX_LENGTH {
            return Err(ContentValidationError::TooLong);
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> &[u8] {
        &self.0
    }
}

/// A random (32-byte) local id, as minted for non fungibles with no caller-chosen id.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RUIDNonFungibleLocalId([u8; 32]);

impl RUIDNonFungibleLocalId {
    pub fn new(value: [u8; 32]) -> Self {
        Self(value)
    }

    pub fn value(&self) -> &[u8; 32] {
        &self.0
    }
}

pub const NON_FUNGIBLE_LOCAL_ID_MAX_LENGTH: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContentValidationError {
    #[error("The id content must not be empty")]
    Empty,

    #[error("The id content must be at most {NON_FUNGIBLE_LOCAL_ID_MAX_LENGTH} characters/bytes")]
    TooLong,

    #[error("The character {0:?} is not allowed in a string id")]
    ContainsBadCharacter(char),
}

//========
// binary
//========

pub const NON_FUNGIBLE_LOCAL_ID_DISCRIMINATOR_STRING: u8 = 0;
pub const NON_FUNGIBLE_LOCAL_ID_DISCRIMINATOR_INTEGER: u8 = 1;
pub const NON_FUNGIBLE_LOCAL_ID_DISCRIMINATOR_BYTES: u8 = 2;
pub const NON_FUNGIBLE_LOCAL_ID_DISCRIMINATOR_RUID: u8 = 3;

impl Categorize<ScryptoCustomValueKind> for NonFungibleLocalId {
    #[inline]
    fn value_kind() -> ValueKind<ScryptoCustomValueKind> {
        ValueKind::Custom(ScryptoCustomValueKind::NonFungibleLocalId)
    }
}

impl<E: Encoder<ScryptoCustomValueKind>> Encode<ScryptoCustomValueKind, E>
    for NonFungibleLocalId
{
    #[inline]
    fn encode_value_kind(&self, encoder: &mut E) -> Result<(), EncodeError> {
        encoder.write_value_kind(Self::value_kind())
    }

    fn encode_body(&self, encoder: &mut E) -> Result<(), EncodeError> {
        match self {
            Self::String(id) => {
                encoder.write_discriminator(NON_FUNGIBLE_LOCAL_ID_DISCRIMINATOR_STRING)?;
                encoder.write_size(id.value().len())?;
                encoder.write_slice(id.value().as_bytes())?;
            }
            Self::Integer(id) => {
                encoder.write_discriminator(NON_FUNGIBLE_LOCAL_ID_DISCRIMINATOR_INTEGER)?;
                // Big endian, so integer ids sort numerically as byte strings
                encoder.write_slice(&id.value().to_be_bytes())?;
            }
            Self::Bytes(id) => {
                encoder.write_discriminator(NON_FUNGIBLE_LOCAL_ID_DISCRIMINATOR_BYTES)?;
                encoder.write_size(id.value().len())?;
                encoder.write_slice(id.value())?;
            }
            Self::RUID(id) => {
                encoder.write_discriminator(NON_FUNGIBLE_LOCAL_ID_DISCRIMINATOR_RUID)?;
                encoder.write_slice(id.value().as_slice())?;
            }
        }
        Ok(())
    }
}

impl<D: Decoder<ScryptoCustomValueKind>> Decode<ScryptoCustomValueKind, D>
    for NonFungibleLocalId
{
    fn decode_body_with_value_kind(
        decoder: &mut D,
        value_kind: ValueKind<ScryptoCustomValueKind>,
    ) -> Result<Self, DecodeError> {
        decoder.check_preloaded_value_kind(value_kind, Self::value_kind())?;
        match decoder.read_discriminator()? {
            NON_FUNGIBLE_LOCAL_ID_DISCRIMINATOR_STRING => {
                let size = decoder.read_size()?;
                let text = String::from_utf8(decoder.read_slice(size)?.to_vec())
                    .map_err(|_| DecodeError::InvalidCustomValue)?;
                StringNonFungibleLocalId::new(text)
                    .map(Self::String)
                    .map_err(|_| DecodeError::InvalidCustomValue)
            }
            NON_FUNGIBLE_LOCAL_ID_DISCRIMINATOR_INTEGER => {
                let mut bytes = [0u8; 8];
                bytes.copy_from_slice(decoder.read_slice(8)?);
                Ok(Self::integer(u64::from_be_bytes(bytes)))
            }
            NON_FUNGIBLE_LOCAL_ID_DISCRIMINATOR_BYTES => {
                let size = decoder.read_size()?;
                BytesNonFungibleLocalId::new(decoder.read_slice(size)?.to_vec())
                    .map(Self::Bytes)
                    .map_err(|_| DecodeError::InvalidCustomValue)
            }
            NON_FUNGIBLE_LOCAL_ID_DISCRIMINATOR_RUID => {
                let mut bytes = [0u8; 32];
                bytes.copy_from_slice(decoder.read_slice(32)?);
                Ok(Self::ruid(bytes))
            }
            discriminator => Err(DecodeError::UnknownDiscriminator(discriminator)),
        }
    }
}

impl Describe<ScryptoCustomTypeKind> for NonFungibleLocalId {
    fn type_id() -> RustTypeId {
        RustTypeId::WellKnown(crate::custom_well_known_types::NON_FUNGIBLE_LOCAL_ID_TYPE)
    }

    fn type_data() -> TypeData<ScryptoCustomTypeKind, RustTypeId> {
        crate::custom_well_known_types::non_fungible_local_id_type_data()
    }
}

//======
// text
//======

impl fmt::Display for NonFungibleLocalId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::String(id) => write!(f, "<{}>", id.value()),
            Self::Integer(id) => write!(f, "#{}#", id.value()),
            Self::Bytes(id) => write!(f, "[{}]", hex::encode(id.value())),
            Self::RUID(id) => {
                let hex = hex::encode(id.value());
                write!(
                    f,
                    "{{{}-{}-{}-{}}}",
                    &hex[0..16],
                    &hex[16..32],
                    &hex[32..48],
                    &hex[48..64]
                )
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseNonFungibleLocalIdError {
    #[error("The id content is invalid: {0}")]
    InvalidContent(#[from] ContentValidationError),

    #[error("The id is not wrapped in a recognised flavor delimiter")]
    UnknownType,

    #[error("The id content does not parse under its flavor delimiter")]
    InvalidValue,
}

impl FromStr for NonFungibleLocalId {
    type Err = ParseNonFungibleLocalIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(content) = s.strip_prefix('<').and_then(|s| s.strip_suffix('>')) {
            return Ok(Self::string(content)?);
        }
        if let Some(content) = s.strip_prefix('#').and_then(|s| s.strip_suffix('#')) {
            let value = content
                .parse::<u64>()
                .map_err(|_| ParseNonFungibleLocalIdError::InvalidValue)?;
            return Ok(Self::integer(value));
        }
        if let Some(content) = s.strip_prefix('[').and_then(|s| s.strip_suffix(']')) {
            let bytes =
                hex::decode(content).map_err(|_| ParseNonFungibleLocalIdError::InvalidValue)?;
            return Ok(Self::bytes(bytes)?);
        }
        if let Some(content) = s.strip_prefix('{').and_then(|s| s.strip_suffix('}')) {
            let hex: String = content.split('-').collect();
            let bytes =
                hex::decode(&hex).map_err(|_| ParseNonFungibleLocalIdError::InvalidValue)?;
            let ruid = <[u8; 32]>::try_from(bytes.as_slice())
                .map_err(|_| ParseNonFungibleLocalIdError::InvalidValue)?;
            return Ok(Self::ruid(ruid));
        }
        Err(ParseNonFungibleLocalIdError::UnknownType)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_ids_are_validated() {
        assert!(NonFungibleLocalId::string("Hello_world_123").is_ok());
        assert_eq!(
            NonFungibleLocalId::string(""),
            Err(ContentValidationError::Empty)
        );
        assert_eq!(
            NonFungibleLocalId::string("x".repeat(65)),
            Err(ContentValidationError::TooLong)
        );
        assert_eq!(
            NonFungibleLocalId::string("hello world"),
            Err(ContentValidationError::ContainsBadCharacter(' '))
        );
    }

    #[test]
    fn bytes_ids_are_validated() {
        assert!(NonFungibleLocalId::bytes(vec![0u8; 64]).is_ok());
        assert_eq!(
            NonFungibleLocalId::bytes(vec![]),
            Err(ContentValidationError::Empty)
        );
        assert_eq!(
            NonFungibleLocalId::bytes(vec![0u8; 65]),
            Err(ContentValidationError::TooLong)
        );
    }

    #[test]
    fn display_and_parse_round_trip() {
        let cases = [
            NonFungibleLocalId::string("hello").unwrap(),
            NonFungibleLocalId::integer(123),
            NonFungibleLocalId::bytes(vec![0xde, 0xad]).unwrap(),
            NonFungibleLocalId::ruid([0x11; 32]),
        ];
        for id in cases {
            assert_eq!(id.to_string().parse::<NonFungibleLocalId>(), Ok(id.clone()));
        }
        assert_eq!(
            NonFungibleLocalId::integer(456).to_string(),
            "#456#"
        );
        assert_eq!(
            NonFungibleLocalId::ruid([0xaa; 32]).to_string(),
            "{aaaaaaaaaaaaaaaa-aaaaaaaaaaaaaaaa-aaaaaaaaaaaaaaaa-aaaaaaaaaaaaaaaa}"
        );
        assert_eq!(
            "plain".parse::<NonFungibleLocalId>(),
            Err(ParseNonFungibleLocalIdError::UnknownType)
        );
    }

    #[test]
    fn integer_ids_encode_big_endian() {
        let encoded = crate::scrypto_encode(&NonFungibleLocalId::integer(1)).unwrap();
        assert_eq!(
            encoded,
            [
                vec![
                    crate::SCRYPTO_SBOR_V1_PAYLOAD_PREFIX,
                    crate::VALUE_KIND_NON_FUNGIBLE_LOCAL_ID,
                    NON_FUNGIBLE_LOCAL_ID_DISCRIMINATOR_INTEGER
                ],
                vec![0, 0, 0, 0, 0, 0, 0, 1]
            ]
            .concat()
        );
    }
}
