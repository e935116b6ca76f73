use indexmap::IndexSet;

use crate::internal_prelude::*;

/// The type kinds the Scrypto dialect contributes to schemas.
///
/// None of them link to other types, so the same enum serves at every type link.
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "type")
)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Sbor)]
pub enum ScryptoCustomTypeKind {
    Reference,
    Own,
    Decimal,
    NonFungibleLocalId,
    Hash,
    Blob,
    Expression,
}

impl<L: SchemaTypeLink> CustomTypeKind<L> for ScryptoCustomTypeKind {
    type CustomTypeValidation = ScryptoCustomTypeValidation;
}

/// The type validations the Scrypto dialect contributes to schemas.
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "type", content = "validation")
)]
#[derive(Debug, Clone, PartialEq, Eq, Sbor)]
pub enum ScryptoCustomTypeValidation {
    Reference(ReferenceValidation),
    Own(OwnValidation),
}

impl CustomTypeValidation for ScryptoCustomTypeValidation {}

/// Constrains which nodes a [`Reference`] value may point at.
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "type")
)]
#[derive(Debug, Clone, PartialEq, Eq, Sbor)]
pub enum ReferenceValidation {
    IsGlobal,
    IsGlobalPackage,
    IsGlobalComponent,
    IsGlobalResourceManager,
    IsInternal,
}

/// Constrains which nodes an [`Own`] value may own.
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "type")
)]
#[derive(Debug, Clone, PartialEq, Eq, Sbor)]
pub enum OwnValidation {
    IsVault,
    IsKeyValueStore,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScryptoCustomSchema {}

impl CustomSchema for ScryptoCustomSchema {
    type CustomTypeKind<L: SchemaTypeLink> = ScryptoCustomTypeKind;
    type CustomTypeValidation = ScryptoCustomTypeValidation;

    fn linearize_type_kind(
        type_kind: Self::CustomTypeKind<RustTypeId>,
        _type_indices: &IndexSet<TypeHash>,
    ) -> Self::CustomTypeKind<LocalTypeId> {
        // No links to linearize
        type_kind
    }

    fn resolve_well_known_type(
        well_known_id: WellKnownTypeId,
    ) -> Option<TypeData<Self::CustomTypeKind<LocalTypeId>, LocalTypeId>> {
        basic_well_known_types::resolve(well_known_id)
            .or_else(|| resolve_scrypto_well_known_type(well_known_id))
    }

    fn validate_custom_type_kind(
        _schema: &Schema<Self>,
        _type_kind: &Self::CustomTypeKind<LocalTypeId>,
    ) -> Result<(), SchemaValidationError> {
        // Custom type kinds are self-contained
        Ok(())
    }

    fn validate_custom_type_validation(
        custom_type_kind: &Self::CustomTypeKind<LocalTypeId>,
        custom_type_validation: &Self::CustomTypeValidation,
    ) -> Result<(), SchemaValidationError> {
        match custom_type_kind {
            ScryptoCustomTypeKind::Reference => {
                if matches!(
                    custom_type_validation,
                    ScryptoCustomTypeValidation::Reference(_)
                ) {
                    Ok(())
                } else {
                    Err(SchemaValidationError::TypeValidationMismatch)
                }
            }
            ScryptoCustomTypeKind::Own => {
                if matches!(custom_type_validation, ScryptoCustomTypeValidation::Own(_)) {
                    Ok(())
                } else {
                    Err(SchemaValidationError::TypeValidationMismatch)
                }
            }
            ScryptoCustomTypeKind::Decimal
            | ScryptoCustomTypeKind::NonFungibleLocalId
            | ScryptoCustomTypeKind::Hash
            | ScryptoCustomTypeKind::Blob
            | ScryptoCustomTypeKind::Expression => {
                Err(SchemaValidationError::TypeValidationMismatch)
            }
        }
    }

    fn validate_type_metadata_with_custom_type_kind(
        _type_kind: &Self::CustomTypeKind<LocalTypeId>,
        type_metadata: &TypeMetadata,
    ) -> Result<(), SchemaValidationError> {
        // Custom types are leaves, so must not name children
        if type_metadata.child_names.is_some() {
            return Err(SchemaValidationError::TypeMetadataContainedUnexpectedChildNames);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn custom_validations_only_apply_to_their_kind() {
        let reference_validation =
            ScryptoCustomTypeValidation::Reference(ReferenceValidation::IsGlobal);
        let own_validation = ScryptoCustomTypeValidation::Own(OwnValidation::IsVault);

        assert!(ScryptoCustomSchema::validate_custom_type_validation(
            &ScryptoCustomTypeKind::Reference,
            &reference_validation
        )
        .is_ok());
        assert_eq!(
            ScryptoCustomSchema::validate_custom_type_validation(
                &ScryptoCustomTypeKind::Reference,
                &own_validation
            ),
            Err(SchemaValidationError::TypeValidationMismatch)
        );
        assert_eq!(
            ScryptoCustomSchema::validate_custom_type_validation(
                &ScryptoCustomTypeKind::Decimal,
                &reference_validation
            ),
            Err(SchemaValidationError::TypeValidationMismatch)
        );
    }

    #[test]
    fn well_known_resolution_covers_base_and_custom_types() {
        // Base types fall through to the basic table
        assert!(ScryptoCustomSchema::resolve_well_known_type(basic_well_known_types::U8_TYPE)
            .is_some());
        let reference = ScryptoCustomSchema::resolve_well_known_type(REFERENCE_TYPE).unwrap();
        assert_eq!(
            reference.kind,
            TypeKind::Custom(ScryptoCustomTypeKind::Reference)
        );
        let global_address =
            ScryptoCustomSchema::resolve_well_known_type(GLOBAL_ADDRESS_TYPE).unwrap();
        assert_eq!(
            global_address.validation,
            TypeValidation::Custom(ScryptoCustomTypeValidation::Reference(
                ReferenceValidation::IsGlobal
            ))
        );
        assert!(ScryptoCustomSchema::resolve_well_known_type(WellKnownTypeId::of(0x7f)).is_none());
    }
}
