use crate::*;

/// An inconsistency found when checking a [`Schema`]'s internal integrity.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaValidationError {
    #[error("The metadata vector length does not match the type kind vector length")]
    MetadataLengthMismatch,

    #[error("The validations vector length does not match the type kind vector length")]
    ValidationsLengthMismatch,

    #[error("A type kind links to local index {0}, which is out of range")]
    TypeKindInvalidSchemaLocalIndex(usize),

    #[error("A type kind links to well known index {0}, which is not recognised")]
    TypeKindInvalidWellKnownIndex(usize),

    #[error("Type metadata includes child names not applicable to the type kind")]
    TypeMetadataContainedUnexpectedChildNames,

    #[error("Type metadata field name count does not match the tuple field count")]
    TypeMetadataFieldNameCountMismatch,

    #[error("Type metadata enum variant naming does not match the enum variants")]
    TypeMetadataEnumVariantsMismatch,

    #[error("A type validation is not applicable to its type kind")]
    TypeValidationMismatch,

    #[error("A custom type kind is invalid: {0}")]
    InvalidCustomTypeKind(String),

    #[error("A custom type validation is invalid: {0}")]
    InvalidCustomTypeValidation(String),
}

/// Checks the internal consistency of a schema:
/// * The parallel vectors have equal length
/// * Every type link resolves (local indices in range, well known indices recognised)
/// * Metadata child names fit the shape of their type kind
/// * Every validation is applicable to its type kind
pub fn validate_schema<S: CustomSchema>(schema: &Schema<S>) -> Result<(), SchemaValidationError> {
    let types_len = schema.type_kinds.len();
    if schema.type_metadata.len() != types_len {
        return Err(SchemaValidationError::MetadataLengthMismatch);
    }
    if schema.type_validations.len() != types_len {
        return Err(SchemaValidationError::ValidationsLengthMismatch);
    }

    for i in 0..types_len {
        let type_kind = &schema.type_kinds[i];
        let metadata = &schema.type_metadata[i];
        let validation = &schema.type_validations[i];
        validate_type_kind::<S>(schema, type_kind)?;
        validate_type_metadata::<S>(type_kind, metadata)?;
        validate_type_validation::<S>(type_kind, validation)?;
    }
    Ok(())
}

fn validate_type_kind<S: CustomSchema>(
    schema: &Schema<S>,
    type_kind: &LocalTypeKind<S>,
) -> Result<(), SchemaValidationError> {
    match type_kind {
        TypeKind::Any
        | TypeKind::Bool
        | TypeKind::I8
        | TypeKind::I16
        | TypeKind::I32
        | TypeKind::I64
        | TypeKind::I128
        | TypeKind::U8
        | TypeKind::U16
        | TypeKind::U32
        | TypeKind::U64
        | TypeKind::U128
        | TypeKind::String => Ok(()),
        TypeKind::Array { element_type } => validate_type_link::<S>(schema, element_type),
        TypeKind::Tuple { field_types } => {
            for field_type in field_types {
                validate_type_link::<S>(schema, field_type)?;
            }
            Ok(())
        }
        TypeKind::Enum { variants } => {
            for field_types in variants.values() {
                for field_type in field_types {
                    validate_type_link::<S>(schema, field_type)?;
                }
            }
            Ok(())
        }
        TypeKind::Map {
            key_type,
            value_type,
        } => {
            validate_type_link::<S>(schema, key_type)?;
            validate_type_link::<S>(schema, value_type)
        }
        TypeKind::Custom(custom_type_kind) => {
            S::validate_custom_type_kind(schema, custom_type_kind)
        }
    }
}

fn validate_type_link<S: CustomSchema>(
    schema: &Schema<S>,
    type_link: &LocalTypeId,
) -> Result<(), SchemaValidationError> {
    match type_link {
        LocalTypeId::WellKnown(well_known_id) => {
            S::resolve_well_known_type(*well_known_id).map(|_| ()).ok_or(
                SchemaValidationError::TypeKindInvalidWellKnownIndex(well_known_id.as_index()),
            )
        }
        LocalTypeId::SchemaLocalIndex(index) => {
            if *index < schema.local_type_count() {
                Ok(())
            } else {
                Err(SchemaValidationError::TypeKindInvalidSchemaLocalIndex(
                    *index,
                ))
            }
        }
    }
}

fn validate_type_metadata<S: CustomSchema>(
    type_kind: &LocalTypeKind<S>,
    metadata: &TypeMetadata,
) -> Result<(), SchemaValidationError> {
    match type_kind {
        TypeKind::Tuple { field_types } => match &metadata.child_names {
            None => Ok(()),
            Some(ChildNames::NamedFields(field_names)) => {
                if field_names.len() == field_types.len() {
                    Ok(())
                } else {
                    Err(SchemaValidationError::TypeMetadataFieldNameCountMismatch)
                }
            }
            Some(ChildNames::EnumVariants(_)) => {
                Err(SchemaValidationError::TypeMetadataContainedUnexpectedChildNames)
            }
        },
        TypeKind::Enum { variants } => match &metadata.child_names {
            Some(ChildNames::EnumVariants(variant_naming)) => {
                if variant_naming.len() != variants.len() {
                    return Err(SchemaValidationError::TypeMetadataEnumVariantsMismatch);
                }
                for (discriminator, variant_metadata) in variant_naming {
                    let Some(field_types) = variants.get(discriminator) else {
                        return Err(SchemaValidationError::TypeMetadataEnumVariantsMismatch);
                    };
                    // Each variant is named like a struct of its fields
                    match &variant_metadata.child_names {
                        None => {}
                        Some(ChildNames::NamedFields(field_names)) => {
                            if field_names.len() != field_types.len() {
                                return Err(
                                    SchemaValidationError::TypeMetadataFieldNameCountMismatch,
                                );
                            }
                        }
                        Some(ChildNames::EnumVariants(_)) => {
                            return Err(
                                SchemaValidationError::TypeMetadataContainedUnexpectedChildNames,
                            );
                        }
                    }
                }
                Ok(())
            }
            _ => Err(SchemaValidationError::TypeMetadataEnumVariantsMismatch),
        },
        TypeKind::Custom(custom_type_kind) => {
            S::validate_type_metadata_with_custom_type_kind(custom_type_kind, metadata)
        }
        _ => match &metadata.child_names {
            None => Ok(()),
            Some(_) => Err(SchemaValidationError::TypeMetadataContainedUnexpectedChildNames),
        },
    }
}

fn validate_type_validation<S: CustomSchema>(
    type_kind: &LocalTypeKind<S>,
    validation: &TypeValidation<S::CustomTypeValidation>,
) -> Result<(), SchemaValidationError> {
    let valid = match validation {
        TypeValidation::None => true,
        TypeValidation::I8(_) => matches!(type_kind, TypeKind::I8),
        TypeValidation::I16(_) => matches!(type_kind, TypeKind::I16),
        TypeValidation::I32(_) => matches!(type_kind, TypeKind::I32),
        TypeValidation::I64(_) => matches!(type_kind, TypeKind::I64),
        TypeValidation::I128(_) => matches!(type_kind, TypeKind::I128),
        TypeValidation::U8(_) => matches!(type_kind, TypeKind::U8),
        TypeValidation::U16(_) => matches!(type_kind, TypeKind::U16),
        TypeValidation::U32(_) => matches!(type_kind, TypeKind::U32),
        TypeValidation::U64(_) => matches!(type_kind, TypeKind::U64),
        TypeValidation::U128(_) => matches!(type_kind, TypeKind::U128),
        TypeValidation::String(_) => matches!(type_kind, TypeKind::String),
        TypeValidation::Array(_) => matches!(type_kind, TypeKind::Array { .. }),
        TypeValidation::Map(_) => matches!(type_kind, TypeKind::Map { .. }),
        TypeValidation::Custom(custom_validation) => {
            let TypeKind::Custom(custom_type_kind) = type_kind else {
                return Err(SchemaValidationError::TypeValidationMismatch);
            };
            return S::validate_custom_type_validation(custom_type_kind, custom_validation);
        }
    };
    if valid {
        Ok(())
    } else {
        Err(SchemaValidationError::TypeValidationMismatch)
    }
}
