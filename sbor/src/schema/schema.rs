use crate::*;

/// A serializable, self-contained record of a set of types, with all cross-type links
/// resolved to local indices.
///
/// The three vectors run in parallel: index `i` of each describes the same type.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema<S: CustomSchema> {
    pub type_kinds: Vec<LocalTypeKind<S>>,
    pub type_metadata: Vec<TypeMetadata>,
    pub type_validations: Vec<TypeValidation<S::CustomTypeValidation>>,
}

impl<S: CustomSchema> Default for Schema<S> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<S: CustomSchema> Schema<S> {
    pub fn empty() -> Self {
        Self {
            type_kinds: vec![],
            type_metadata: vec![],
            type_validations: vec![],
        }
    }

    pub fn local_type_count(&self) -> usize {
        self.type_kinds.len()
    }

    pub fn resolve_type_kind(&self, type_id: LocalTypeId) -> Option<LocalTypeKind<S>> {
        match type_id {
            LocalTypeId::WellKnown(index) => {
                S::resolve_well_known_type(index).map(|type_data| type_data.kind)
            }
            LocalTypeId::SchemaLocalIndex(index) => self.type_kinds.get(index).cloned(),
        }
    }

    pub fn resolve_type_metadata(&self, type_id: LocalTypeId) -> Option<TypeMetadata> {
        match type_id {
            LocalTypeId::WellKnown(index) => {
                S::resolve_well_known_type(index).map(|type_data| type_data.metadata)
            }
            LocalTypeId::SchemaLocalIndex(index) => self.type_metadata.get(index).cloned(),
        }
    }

    pub fn resolve_type_validation(
        &self,
        type_id: LocalTypeId,
    ) -> Option<TypeValidation<S::CustomTypeValidation>> {
        match type_id {
            LocalTypeId::WellKnown(index) => {
                S::resolve_well_known_type(index).map(|type_data| type_data.validation)
            }
            LocalTypeId::SchemaLocalIndex(index) => self.type_validations.get(index).cloned(),
        }
    }

    /// Resolves the full [`TypeData`] of the given type id, whether well known or local.
    pub fn resolve_type_data(
        &self,
        type_id: LocalTypeId,
    ) -> Option<TypeData<S::CustomTypeKind<LocalTypeId>, LocalTypeId>> {
        match type_id {
            LocalTypeId::WellKnown(index) => S::resolve_well_known_type(index),
            LocalTypeId::SchemaLocalIndex(index) => {
                let kind = self.type_kinds.get(index)?.clone();
                let metadata = self.type_metadata.get(index)?.clone();
                let validation = self.type_validations.get(index)?.clone();
                Some(TypeData {
                    kind,
                    metadata,
                    validation,
                })
            }
        }
    }

    /// Checks the schema for internal consistency - see [`validate_schema`].
    pub fn validate(&self) -> Result<(), SchemaValidationError> {
        validate_schema(self)
    }
}

// The `Schema` needs to be encodable itself (schemas travel in payloads), but a derive
// would put spurious bounds on `S`, so the codec is written out by hand.

impl<S: CustomSchema, X: CustomValueKind> Categorize<X> for Schema<S> {
    #[inline]
    fn value_kind() -> ValueKind<X> {
        ValueKind::Tuple
    }
}

impl<S: CustomSchema, X: CustomValueKind, E: Encoder<X>> Encode<X, E> for Schema<S>
where
    LocalTypeKind<S>: Encode<X, E> + Categorize<X>,
    TypeValidation<S::CustomTypeValidation>: Encode<X, E> + Categorize<X>,
{
    #[inline]
    fn encode_value_kind(&self, encoder: &mut E) -> Result<(), EncodeError> {
        encoder.write_value_kind(Self::value_kind())
    }

    #[inline]
    fn encode_body(&self, encoder: &mut E) -> Result<(), EncodeError> {
        encoder.write_size(3)?;
        encoder.encode(&self.type_kinds)?;
        encoder.encode(&self.type_metadata)?;
        encoder.encode(&self.type_validations)?;
        Ok(())
    }
}

impl<S: CustomSchema, X: CustomValueKind, D: Decoder<X>> Decode<X, D> for Schema<S>
where
    LocalTypeKind<S>: Decode<X, D> + Categorize<X>,
    TypeValidation<S::CustomTypeValidation>: Decode<X, D> + Categorize<X>,
{
    fn decode_body_with_value_kind(
        decoder: &mut D,
        value_kind: ValueKind<X>,
    ) -> Result<Self, DecodeError> {
        decoder.check_preloaded_value_kind(value_kind, Self::value_kind())?;
        decoder.read_and_check_size(3)?;
        Ok(Self {
            type_kinds: decoder.decode()?,
            type_metadata: decoder.decode()?,
            type_validations: decoder.decode()?,
        })
    }
}
