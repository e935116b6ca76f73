use crate::internal_prelude::*;

/// A placeholder for a set of nodes known only to the executing context.
///
/// Expressions only appear in payloads which still await placeholder resolution - see
/// [`IndexedScryptoValue::replace_placeholders`][crate::IndexedScryptoValue].
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ManifestExpression {
    EntireWorktop,
    EntireAuthZone,
}

impl ManifestExpression {
    pub fn discriminator(&self) -> u8 {
        match self {
            Self::EntireWorktop => 0x00,
            Self::EntireAuthZone => 0x01,
        }
    }

    pub fn from_discriminator(discriminator: u8) -> Option<Self> {
        match discriminator {
            0x00 => Some(Self::EntireWorktop),
            0x01 => Some(Self::EntireAuthZone),
            _ => None,
        }
    }
}

impl Categorize<ScryptoCustomValueKind> for ManifestExpression {
    #[inline]
    fn value_kind() -> ValueKind<ScryptoCustomValueKind> {
        ValueKind::Custom(ScryptoCustomValueKind::Expression)
    }
}

impl<E: Encoder<ScryptoCustomValueKind>> Encode<ScryptoCustomValueKind, E>
    for ManifestExpression
{
    #[inline]
    fn encode_value_kind(&self, encoder: &mut E) -> Result<(), EncodeError> {
        encoder.write_value_kind(Self::value_kind())
    }

    #[inline]
    fn encode_body(&self, encoder: &mut E) -> Result<(), EncodeError> {
        encoder.write_byte(self.discriminator())
    }
}

impl<D: Decoder<ScryptoCustomValueKind>> Decode<ScryptoCustomValueKind, D>
    for ManifestExpression
{
    fn decode_body_with_value_kind(
        decoder: &mut D,
        value_kind: ValueKind<ScryptoCustomValueKind>,
    ) -> Result<Self, DecodeError> {
        decoder.check_preloaded_value_kind(value_kind, Self::value_kind())?;
        let discriminator = decoder.read_byte()?;
        Self::from_discriminator(discriminator).ok_or(DecodeError::InvalidCustomValue)
    }
}

impl Describe<ScryptoCustomTypeKind> for ManifestExpression {
    fn type_id() -> RustTypeId {
        RustTypeId::WellKnown(crate::custom_well_known_types::EXPRESSION_TYPE)
    }

    fn type_data() -> TypeData<ScryptoCustomTypeKind, RustTypeId> {
        crate::custom_well_known_types::expression_type_data()
    }
}
