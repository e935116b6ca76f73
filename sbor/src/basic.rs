use indexmap::IndexSet;

use crate::*;

/// The basic SBOR dialect: no custom value kinds, no custom types.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum NoCustomExtension {}

pub type BasicEncoder<'a> = VecEncoder<'a, NoCustomValueKind>;
pub type BasicDecoder<'de> = VecDecoder<'de, NoCustomValueKind>;
pub type BasicValue = Value<NoCustomValueKind, NoCustomValue>;
pub type BasicValueKind = ValueKind<NoCustomValueKind>;
pub type BasicSchema = Schema<NoCustomSchema>;
pub type BasicTypeData = TypeData<NoCustomTypeKind, LocalTypeId>;

/// Encodes a rust representation to a basic payload, including the payload prefix.
pub fn basic_encode<T: for<'a> Encode<NoCustomValueKind, BasicEncoder<'a>> + ?Sized>(
    value: &T,
) -> Result<Vec<u8>, EncodeError> {
    let mut buf = Vec::with_capacity(512);
    let encoder = BasicEncoder::new(&mut buf, BASIC_SBOR_V1_MAX_DEPTH);
    encoder.encode_payload(value, BASIC_SBOR_V1_PAYLOAD_PREFIX)?;
    Ok(buf)
}

/// Decodes a full basic payload, checking the payload prefix and that the whole payload
/// is consumed.
pub fn basic_decode<T: for<'de> Decode<NoCustomValueKind, BasicDecoder<'de>>>(
    buf: &[u8],
) -> Result<T, DecodeError> {
    BasicDecoder::new(buf, BASIC_SBOR_V1_MAX_DEPTH).decode_payload(BASIC_SBOR_V1_PAYLOAD_PREFIX)
}

/// As [`basic_decode`], but tolerating unread bytes after the decoded value.
pub fn basic_decode_permissive<T: for<'de> Decode<NoCustomValueKind, BasicDecoder<'de>>>(
    buf: &[u8],
) -> Result<T, DecodeError> {
    BasicDecoder::new(buf, BASIC_SBOR_V1_MAX_DEPTH)
        .decode_payload_permissive(BASIC_SBOR_V1_PAYLOAD_PREFIX)
}

/// Generates the schema for a single basic type, alongside its local type id.
pub fn generate_basic_schema_from_single_type<
    T: Describe<<NoCustomSchema as CustomSchema>::CustomTypeKind<RustTypeId>>,
>() -> (LocalTypeId, BasicSchema) {
    generate_full_schema_from_single_type::<T, NoCustomSchema>()
}

#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "type")
)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum NoCustomValueKind {}

impl CustomValueKind for NoCustomValueKind {
    fn as_u8(&self) -> u8 {
        match *self {}
    }

    fn from_u8(_id: u8) -> Option<Self> {
        None
    }
}

#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "type")
)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum NoCustomValue {}

impl CustomValue<NoCustomValueKind> for NoCustomValue {
    fn get_custom_value_kind(&self) -> NoCustomValueKind {
        match *self {}
    }
}

impl<E: Encoder<NoCustomValueKind>> Encode<NoCustomValueKind, E> for NoCustomValue {
    fn encode_value_kind(&self, _encoder: &mut E) -> Result<(), EncodeError> {
        match *self {}
    }

    fn encode_body(&self, _encoder: &mut E) -> Result<(), EncodeError> {
        match *self {}
    }
}

impl<D: Decoder<NoCustomValueKind>> Decode<NoCustomValueKind, D> for NoCustomValue {
    fn decode_body_with_value_kind(
        _decoder: &mut D,
        value_kind: ValueKind<NoCustomValueKind>,
    ) -> Result<Self, DecodeError> {
        match value_kind {
            ValueKind::Custom(custom) => match custom {},
            _ => Err(DecodeError::InvalidCustomValue),
        }
    }
}

#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "type")
)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoCustomTypeKind {}

impl<L: SchemaTypeLink> CustomTypeKind<L> for NoCustomTypeKind {
    type CustomTypeValidation = NoCustomTypeValidation;
}

// The schema model types are themselves encodable (schemas travel in payloads), which
// requires a codec for the uninhabited custom slots.
macro_rules! uninhabited_codec {
    ($type:ty) => {
        impl<X: CustomValueKind> Categorize<X> for $type {
            #[inline]
            fn value_kind() -> ValueKind<X> {
                ValueKind::Enum
            }
        }

        impl<X: CustomValueKind, E: Encoder<X>> Encode<X, E> for $type {
            fn encode_value_kind(&self, _encoder: &mut E) -> Result<(), EncodeError> {
                match *self {}
            }

            fn encode_body(&self, _encoder: &mut E) -> Result<(), EncodeError> {
                match *self {}
            }
        }

        impl<X: CustomValueKind, D: Decoder<X>> Decode<X, D> for $type {
            fn decode_body_with_value_kind(
                decoder: &mut D,
                value_kind: ValueKind<X>,
            ) -> Result<Self, DecodeError> {
                decoder.check_preloaded_value_kind(value_kind, Self::value_kind())?;
                Err(DecodeError::UnknownDiscriminator(
                    decoder.read_discriminator()?,
                ))
            }
        }
    };
}

uninhabited_codec!(NoCustomTypeKind);

#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "type")
)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoCustomTypeValidation {}

impl CustomTypeValidation for NoCustomTypeValidation {}

uninhabited_codec!(NoCustomTypeValidation);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoCustomSchema {}

impl CustomSchema for NoCustomSchema {
    type CustomTypeKind<L: SchemaTypeLink> = NoCustomTypeKind;
    type CustomTypeValidation = NoCustomTypeValidation;

    fn linearize_type_kind(
        type_kind: Self::CustomTypeKind<RustTypeId>,
        _type_indices: &IndexSet<TypeHash>,
    ) -> Self::CustomTypeKind<LocalTypeId> {
        match type_kind {}
    }

    fn resolve_well_known_type(
        well_known_id: WellKnownTypeId,
    ) -> Option<TypeData<Self::CustomTypeKind<LocalTypeId>, LocalTypeId>> {
        basic_well_known_types::resolve(well_known_id)
    }

    fn validate_custom_type_kind(
        _schema: &Schema<Self>,
        type_kind: &Self::CustomTypeKind<LocalTypeId>,
    ) -> Result<(), SchemaValidationError> {
        match *type_kind {}
    }

    fn validate_custom_type_validation(
        custom_type_kind: &Self::CustomTypeKind<LocalTypeId>,
        _custom_type_validation: &Self::CustomTypeValidation,
    ) -> Result<(), SchemaValidationError> {
        match *custom_type_kind {}
    }

    fn validate_type_metadata_with_custom_type_kind(
        type_kind: &Self::CustomTypeKind<LocalTypeId>,
        _type_metadata: &TypeMetadata,
    ) -> Result<(), SchemaValidationError> {
        match *type_kind {}
    }
}

impl CustomExtension for NoCustomExtension {
    const PAYLOAD_PREFIX: u8 = BASIC_SBOR_V1_PAYLOAD_PREFIX;
    const DEFAULT_DEPTH_LIMIT: usize = BASIC_SBOR_V1_MAX_DEPTH;

    type CustomValueKind = NoCustomValueKind;
    type CustomSchema = NoCustomSchema;
    type CustomValue = NoCustomValue;

    fn custom_value_kind_matches_type_kind(
        custom_value_kind: Self::CustomValueKind,
        _type_kind: &TypeKind<NoCustomTypeKind, LocalTypeId>,
    ) -> bool {
        match custom_value_kind {}
    }
}

impl<T> ValidatableCustomExtension<T> for NoCustomExtension {
    fn apply_validation_for_custom_value(
        _schema: &Schema<Self::CustomSchema>,
        custom_value: &Self::CustomValue,
        _type_id: LocalTypeId,
        _context: &T,
    ) -> Result<(), PayloadValidationError> {
        match *custom_value {}
    }

    fn apply_custom_type_validation_for_custom_value(
        custom_validation: &NoCustomTypeValidation,
        _custom_value: &Self::CustomValue,
        _context: &T,
    ) -> Result<(), PayloadValidationError> {
        match *custom_validation {}
    }
}

/// Marker traits for the basic dialect, blanket-implemented for everything which
/// implements the underlying generic traits.
pub trait BasicCategorize: Categorize<NoCustomValueKind> {}
impl<T: Categorize<NoCustomValueKind> + ?Sized> BasicCategorize for T {}

pub trait BasicEncode: for<'a> Encode<NoCustomValueKind, BasicEncoder<'a>> {}
impl<T: for<'a> Encode<NoCustomValueKind, BasicEncoder<'a>> + ?Sized> BasicEncode for T {}

pub trait BasicDecode: for<'de> Decode<NoCustomValueKind, BasicDecoder<'de>> {}
impl<T: for<'de> Decode<NoCustomValueKind, BasicDecoder<'de>>> BasicDecode for T {}

pub trait BasicDescribe: Describe<NoCustomTypeKind> {}
impl<T: Describe<NoCustomTypeKind> + ?Sized> BasicDescribe for T {}

pub trait BasicSbor: BasicCategorize + BasicEncode + BasicDecode + BasicDescribe {}
impl<T: BasicCategorize + BasicEncode + BasicDecode + BasicDescribe> BasicSbor for T {}
