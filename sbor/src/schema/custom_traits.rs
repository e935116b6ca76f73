use std::fmt::Debug;

use indexmap::IndexSet;

use crate::*;

/// The type kinds contributed by a custom extension, generic over the type link used.
pub trait CustomTypeKind<L: SchemaTypeLink>: Debug + Clone + PartialEq + Eq {
    type CustomTypeValidation: CustomTypeValidation;
}

/// The type validations contributed by a custom extension.
pub trait CustomTypeValidation: Debug + Clone + PartialEq + Eq {}

/// The schema capabilities of a custom extension: its type kinds, type validations,
/// well-known types, and how its type kinds linearize into a local schema.
pub trait CustomSchema: Debug + Clone + PartialEq + Eq + 'static {
    type CustomTypeKind<L: SchemaTypeLink>: CustomTypeKind<
        L,
        CustomTypeValidation = Self::CustomTypeValidation,
    >;
    type CustomTypeValidation: CustomTypeValidation;

    /// Maps the custom type kind from global type ids to schema-local indices.
    fn linearize_type_kind(
        type_kind: Self::CustomTypeKind<RustTypeId>,
        type_indices: &IndexSet<TypeHash>,
    ) -> Self::CustomTypeKind<LocalTypeId>;

    /// Resolves the type data of a well known type, if the index is recognised.
    fn resolve_well_known_type(
        well_known_id: WellKnownTypeId,
    ) -> Option<TypeData<Self::CustomTypeKind<LocalTypeId>, LocalTypeId>>;

    /// Checks the custom type kind is self-consistent within the given schema.
    fn validate_custom_type_kind(
        schema: &Schema<Self>,
        type_kind: &Self::CustomTypeKind<LocalTypeId>,
    ) -> Result<(), SchemaValidationError>;

    /// Checks the custom type validation is applicable to the custom type kind.
    fn validate_custom_type_validation(
        custom_type_kind: &Self::CustomTypeKind<LocalTypeId>,
        custom_type_validation: &Self::CustomTypeValidation,
    ) -> Result<(), SchemaValidationError>;

    /// Checks the metadata shape is valid for the custom type kind.
    fn validate_type_metadata_with_custom_type_kind(
        type_kind: &Self::CustomTypeKind<LocalTypeId>,
        type_metadata: &TypeMetadata,
    ) -> Result<(), SchemaValidationError>;
}

/// A fully-realised SBOR dialect: a payload prefix, a family of custom value kinds with
/// their value model, and a [`CustomSchema`].
pub trait CustomExtension: Debug + Clone + PartialEq + Eq + 'static {
    const PAYLOAD_PREFIX: u8;
    const DEFAULT_DEPTH_LIMIT: usize;

    type CustomValueKind: CustomValueKind;
    type CustomSchema: CustomSchema;

    /// The custom value model - the `Y` in `Value<X, Y>` for this extension.
    type CustomValue: for<'de> Decode<Self::CustomValueKind, VecDecoder<'de, Self::CustomValueKind>>
        + for<'a> Encode<Self::CustomValueKind, VecEncoder<'a, Self::CustomValueKind>>
        + CustomValue<Self::CustomValueKind>;

    /// Whether a custom value of the given kind can inhabit the given type kind.
    fn custom_value_kind_matches_type_kind(
        custom_value_kind: Self::CustomValueKind,
        type_kind: &TypeKind<
            <Self::CustomSchema as CustomSchema>::CustomTypeKind<LocalTypeId>,
            LocalTypeId,
        >,
    ) -> bool;
}

/// A [`CustomExtension`] which can participate in payload validation against a schema,
/// given a validation context of type `T`.
pub trait ValidatableCustomExtension<T>: CustomExtension {
    /// Applies any validation implied by the type kind itself (eg an address type kind
    /// constraining which addresses are acceptable).
    fn apply_validation_for_custom_value(
        schema: &Schema<Self::CustomSchema>,
        custom_value: &Self::CustomValue,
        type_id: LocalTypeId,
        context: &T,
    ) -> Result<(), PayloadValidationError>;

    /// Applies an explicit custom type validation to a custom value.
    fn apply_custom_type_validation_for_custom_value(
        custom_validation: &<Self::CustomSchema as CustomSchema>::CustomTypeValidation,
        custom_value: &Self::CustomValue,
        context: &T,
    ) -> Result<(), PayloadValidationError>;
}
