use crate::internal_prelude::*;

// The custom validations only inspect the value's node id, so any context suffices.
impl<T> ValidatableCustomExtension<T> for ScryptoCustomExtension {
    fn apply_validation_for_custom_value(
        schema: &Schema<Self::CustomSchema>,
        custom_value: &Self::CustomValue,
        type_id: LocalTypeId,
        context: &T,
    ) -> Result<(), PayloadValidationError> {
        match schema
            .resolve_type_validation(type_id)
            .ok_or_else(|| PayloadValidationError::SchemaInconsistency(
                "The type validation could not be resolved".to_string(),
            ))? {
            TypeValidation::None => Ok(()),
            TypeValidation::Custom(custom_validation) => {
                Self::apply_custom_type_validation_for_custom_value(
                    &custom_validation,
                    custom_value,
                    context,
                )
            }
            _ => Err(PayloadValidationError::SchemaInconsistency(
                "A non-custom type validation is attached to a custom type kind".to_string(),
            )),
        }
    }

    fn apply_custom_type_validation_for_custom_value(
        custom_validation: &ScryptoCustomTypeValidation,
        custom_value: &Self::CustomValue,
        _context: &T,
    ) -> Result<(), PayloadValidationError> {
        match custom_validation {
            ScryptoCustomTypeValidation::Reference(reference_validation) => {
                let ScryptoCustomValue::Reference(reference) = custom_value else {
                    return Err(PayloadValidationError::SchemaInconsistency(
                        "A reference validation is attached to a non-reference type kind"
                            .to_string(),
                    ));
                };
                let node_id = reference.0;
                let is_valid = match reference_validation {
                    ReferenceValidation::IsGlobal => node_id.is_global(),
                    ReferenceValidation::IsGlobalPackage => node_id.is_global_package(),
                    ReferenceValidation::IsGlobalComponent => node_id.is_global_component(),
                    ReferenceValidation::IsGlobalResourceManager => {
                        node_id.is_global_resource_manager()
                    }
                    ReferenceValidation::IsInternal => node_id.is_internal(),
                };
                if !is_valid {
                    return Err(PayloadValidationError::ValidationError(
                        ValidationError::CustomError(format!(
                            "Expected Reference<{:?}>, but found node {:?}",
                            reference_validation, node_id
                        )),
                    ));
                }
                Ok(())
            }
            ScryptoCustomTypeValidation::Own(own_validation) => {
                let ScryptoCustomValue::Own(own) = custom_value else {
                    return Err(PayloadValidationError::SchemaInconsistency(
                        "An own validation is attached to a non-own type kind".to_string(),
                    ));
                };
                let node_id = own.0;
                let is_valid = match own_validation {
                    OwnValidation::IsVault => node_id.is_internal_vault(),
                    OwnValidation::IsKeyValueStore => node_id.is_internal_kv_store(),
                };
                if !is_valid {
                    return Err(PayloadValidationError::ValidationError(
                        ValidationError::CustomError(format!(
                            "Expected Own<{:?}>, but found node {:?}",
                            own_validation, node_id
                        )),
                    ));
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{scrypto_encode, ScryptoCustomExtension};

    fn validate_against_well_known(
        payload: &[u8],
        well_known_id: WellKnownTypeId,
    ) -> Result<(), LocatedValidationError> {
        validate_payload_against_schema::<ScryptoCustomExtension, ()>(
            payload,
            &Schema::empty(),
            LocalTypeId::WellKnown(well_known_id),
            &(),
            SCRYPTO_SBOR_V1_MAX_DEPTH,
        )
    }

    #[test]
    fn global_address_validation_checks_the_entity_byte() {
        let global = Reference(NodeId::new(
            EntityType::GlobalPackage,
            &[1u8; NodeId::UUID_LENGTH],
        ));
        let internal = Reference(NodeId::new(
            EntityType::InternalGenericComponent,
            &[1u8; NodeId::UUID_LENGTH],
        ));

        let global_payload = scrypto_encode(&global).unwrap();
        let internal_payload = scrypto_encode(&internal).unwrap();

        assert!(validate_against_well_known(&global_payload, GLOBAL_ADDRESS_TYPE).is_ok());
        assert!(validate_against_well_known(&internal_payload, INTERNAL_ADDRESS_TYPE).is_ok());

        let error = validate_against_well_known(&internal_payload, GLOBAL_ADDRESS_TYPE)
            .unwrap_err();
        assert!(matches!(
            error.error,
            PayloadValidationError::ValidationError(ValidationError::CustomError(_))
        ));
    }

    #[test]
    fn vault_own_validation_checks_the_entity_byte() {
        let vault = Own(NodeId::new(
            EntityType::InternalFungibleVault,
            &[2u8; NodeId::UUID_LENGTH],
        ));
        let kv_store = Own(NodeId::new(
            EntityType::InternalKeyValueStore,
            &[2u8; NodeId::UUID_LENGTH],
        ));

        let vault_payload = scrypto_encode(&vault).unwrap();
        let kv_store_payload = scrypto_encode(&kv_store).unwrap();

        assert!(validate_against_well_known(&vault_payload, OWN_VAULT_TYPE).is_ok());
        assert!(
            validate_against_well_known(&kv_store_payload, OWN_KEY_VALUE_STORE_TYPE).is_ok()
        );
        assert!(validate_against_well_known(&kv_store_payload, OWN_VAULT_TYPE).is_err());
    }

    #[test]
    fn unconstrained_reference_type_accepts_any_node() {
        let unknown_space = Reference(NodeId([0x55u8; NodeId::LENGTH]));
        let payload = scrypto_encode(&unknown_space).unwrap();
        assert!(validate_against_well_known(&payload, REFERENCE_TYPE).is_ok());
    }
}
