use std::fmt::Write;

use crate::*;

/// An error raised when validating a payload against a schema.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PayloadValidationError {
    #[error("Error occurred while traversing the payload: {0}")]
    DecodeError(#[from] DecodeError),

    #[error("Expected a value matching type kind {expected}, but found value kind {actual:#04x}")]
    ValueKindMismatchWithTypeKind { expected: &'static str, actual: u8 },

    #[error("Expected {expected} field(s), but the value contained {actual}")]
    UnexpectedFieldCount { expected: usize, actual: usize },

    #[error("The enum variant {discriminator} is not defined by the type")]
    UnknownEnumVariant { discriminator: u8 },

    #[error("The value does not pass a validation attached to the type: {0}")]
    ValidationError(ValidationError),

    #[error("The schema is inconsistent: {0}")]
    SchemaInconsistency(String),
}

/// A failure of a [`TypeValidation`] attached to a type in the schema.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Value {actual} is outside the inclusive bounds [{min}, {max}]")]
    NumericOutOfRange {
        actual: String,
        min: String,
        max: String,
    },

    #[error("Length {actual} is outside the inclusive bounds [{min}, {max}]")]
    LengthOutOfRange {
        actual: usize,
        min: u32,
        max: u32,
    },

    #[error("{0}")]
    CustomError(String),
}

/// A [`PayloadValidationError`] alongside the location in the payload it was raised at.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{error} (at byte offset {offset} under path {path})", offset = .location.start_offset, path = .location.path)]
pub struct LocatedValidationError {
    pub error: PayloadValidationError,
    pub location: ErrorLocation,
}

/// A location in a payload, for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorLocation {
    /// The byte offset into the payload at which the relevant value's body starts.
    pub start_offset: usize,
    /// A rendered path from the root of the payload to the relevant value.
    pub path: String,
}

/// Validates that the payload is a well-formed encoding of the given type in the schema,
/// and satisfies all the validations the schema attaches to the types it visits.
///
/// This decodes the payload exactly once, tracking the same depth the [`Value`] model
/// would, and returns the path and byte offset of the first failure found.
pub fn validate_payload_against_schema<'s, E: ValidatableCustomExtension<T>, T>(
    payload: &[u8],
    schema: &'s Schema<E::CustomSchema>,
    root_type_id: LocalTypeId,
    context: &T,
    depth_limit: usize,
) -> Result<(), LocatedValidationError> {
    let traverser = ValidationTraverser::<E, T> {
        decoder: VecDecoder::new(payload, depth_limit),
        schema,
        context,
        path: vec![],
    };
    traverser.validate_payload(root_type_id)
}

enum PathFrame {
    Field {
        container_name: Option<String>,
        index: usize,
        field_name: Option<String>,
    },
    Variant {
        container_name: Option<String>,
        discriminator: u8,
        variant_name: Option<String>,
    },
    Element {
        index: usize,
    },
    MapKey {
        index: usize,
    },
    MapValue {
        index: usize,
    },
}

struct ValidationTraverser<'de, 's, 't, E: ValidatableCustomExtension<T>, T> {
    decoder: VecDecoder<'de, E::CustomValueKind>,
    schema: &'s Schema<E::CustomSchema>,
    context: &'t T,
    path: Vec<PathFrame>,
}

type LocalSchemaTypeKind<E> = TypeKind<
    <<E as CustomExtension>::CustomSchema as CustomSchema>::CustomTypeKind<LocalTypeId>,
    LocalTypeId,
>;

macro_rules! as_numeric_validation {
    ($validation:expr, $variant:ident) => {
        match $validation {
            TypeValidation::$variant(validation) => Some(validation),
            _ => None,
        }
    };
}

impl<'de, 's, 't, E: ValidatableCustomExtension<T>, T> ValidationTraverser<'de, 's, 't, E, T> {
    fn validate_payload(mut self, root_type_id: LocalTypeId) -> Result<(), LocatedValidationError> {
        self.decoder
            .read_and_check_payload_prefix(E::PAYLOAD_PREFIX)
            .map_err(|error| self.located(0, error.into()))?;
        self.validate_child(root_type_id, None)?;
        let offset = self.decoder.get_offset();
        self.decoder
            .check_end()
            .map_err(|error| self.located(offset, error.into()))?;
        Ok(())
    }

    fn validate_child(
        &mut self,
        type_id: LocalTypeId,
        preloaded_value_kind: Option<ValueKind<E::CustomValueKind>>,
    ) -> Result<(), LocatedValidationError> {
        let value_kind = self.resolve_child_value_kind(preloaded_value_kind)?;
        let start_offset = self.decoder.get_offset();
        self.decoder
            .track_stack_depth_increase()
            .map_err(|error| self.located(start_offset, error.into()))?;
        self.validate_body(type_id, value_kind, start_offset)?;
        self.decoder
            .track_stack_depth_decrease()
            .map_err(|error| self.located(start_offset, error.into()))?;
        Ok(())
    }

    fn resolve_child_value_kind(
        &mut self,
        preloaded_value_kind: Option<ValueKind<E::CustomValueKind>>,
    ) -> Result<ValueKind<E::CustomValueKind>, LocatedValidationError> {
        match preloaded_value_kind {
            Some(value_kind) => Ok(value_kind),
            None => {
                let offset = self.decoder.get_offset();
                self.decoder
                    .read_value_kind()
                    .map_err(|error| self.located(offset, error.into()))
            }
        }
    }

    fn validate_body(
        &mut self,
        type_id: LocalTypeId,
        value_kind: ValueKind<E::CustomValueKind>,
        start_offset: usize,
    ) -> Result<(), LocatedValidationError> {
        let type_data = self.schema.resolve_type_data(type_id).ok_or_else(|| {
            self.located(
                start_offset,
                PayloadValidationError::SchemaInconsistency(format!(
                    "Type id {:?} could not be resolved",
                    type_id
                )),
            )
        })?;
        match &type_data.kind {
            TypeKind::Any => self.validate_any_body(value_kind, start_offset),
            TypeKind::Bool => {
                self.decode_leaf::<bool>(value_kind, start_offset)?;
                Ok(())
            }
            TypeKind::I8 => {
                let validation = as_numeric_validation!(&type_data.validation, I8);
                self.validate_numeric::<i8>(value_kind, validation, start_offset)
            }
            TypeKind::I16 => {
                let validation = as_numeric_validation!(&type_data.validation, I16);
                self.validate_numeric::<i16>(value_kind, validation, start_offset)
            }
            TypeKind::I32 => {
                let validation = as_numeric_validation!(&type_data.validation, I32);
                self.validate_numeric::<i32>(value_kind, validation, start_offset)
            }
            TypeKind::I64 => {
                let validation = as_numeric_validation!(&type_data.validation, I64);
                self.validate_numeric::<i64>(value_kind, validation, start_offset)
            }
            TypeKind::I128 => {
                let validation = as_numeric_validation!(&type_data.validation, I128);
                self.validate_numeric::<i128>(value_kind, validation, start_offset)
            }
            TypeKind::U8 => {
                let validation = as_numeric_validation!(&type_data.validation, U8);
                self.validate_numeric::<u8>(value_kind, validation, start_offset)
            }
            TypeKind::U16 => {
                let validation = as_numeric_validation!(&type_data.validation, U16);
                self.validate_numeric::<u16>(value_kind, validation, start_offset)
            }
            TypeKind::U32 => {
                let validation = as_numeric_validation!(&type_data.validation, U32);
                self.validate_numeric::<u32>(value_kind, validation, start_offset)
            }
            TypeKind::U64 => {
                let validation = as_numeric_validation!(&type_data.validation, U64);
                self.validate_numeric::<u64>(value_kind, validation, start_offset)
            }
            TypeKind::U128 => {
                let validation = as_numeric_validation!(&type_data.validation, U128);
                self.validate_numeric::<u128>(value_kind, validation, start_offset)
            }
            TypeKind::String => {
                let value = self.decode_leaf::<String>(value_kind, start_offset)?;
                if let TypeValidation::String(validation) = &type_data.validation {
                    self.check_length(validation, value.len(), start_offset)?;
                }
                Ok(())
            }
            TypeKind::Array { element_type } => {
                self.check_value_kind(value_kind, ValueKind::Array, "Array", start_offset)?;
                let element_value_kind = self.read_header_value_kind()?;
                self.check_header_kind_matches(element_value_kind, *element_type)?;
                let length = self.read_header_size()?;
                if let TypeValidation::Array(validation) = &type_data.validation {
                    self.check_length(validation, length, start_offset)?;
                }
                for index in 0..length {
                    self.path.push(PathFrame::Element { index });
                    self.validate_child(*element_type, Some(element_value_kind))?;
                    self.path.pop();
                }
                Ok(())
            }
            TypeKind::Tuple { field_types } => {
                self.check_value_kind(value_kind, ValueKind::Tuple, "Tuple", start_offset)?;
                let length = self.read_header_size()?;
                if length != field_types.len() {
                    return Err(self.located(
                        start_offset,
                        PayloadValidationError::UnexpectedFieldCount {
                            expected: field_types.len(),
                            actual: length,
                        },
                    ));
                }
                for (index, field_type) in field_types.iter().enumerate() {
                    self.path.push(PathFrame::Field {
                        container_name: type_data.metadata.get_name_string(),
                        index,
                        field_name: resolve_field_name(&type_data.metadata, index),
                    });
                    self.validate_child(*field_type, None)?;
                    self.path.pop();
                }
                Ok(())
            }
            TypeKind::Enum { variants } => {
                self.check_value_kind(value_kind, ValueKind::Enum, "Enum", start_offset)?;
                let discriminator_offset = self.decoder.get_offset();
                let discriminator = self
                    .decoder
                    .read_discriminator()
                    .map_err(|error| self.located(discriminator_offset, error.into()))?;
                let Some(field_types) = variants.get(&discriminator) else {
                    return Err(self.located(
                        discriminator_offset,
                        PayloadValidationError::UnknownEnumVariant { discriminator },
                    ));
                };
                let field_types = field_types.clone();
                let variant_metadata = type_data
                    .metadata
                    .get_matching_enum_variant_data(discriminator)
                    .cloned();
                let length = self.read_header_size()?;
                if length != field_types.len() {
                    return Err(self.located(
                        start_offset,
                        PayloadValidationError::UnexpectedFieldCount {
                            expected: field_types.len(),
                            actual: length,
                        },
                    ));
                }
                self.path.push(PathFrame::Variant {
                    container_name: type_data.metadata.get_name_string(),
                    discriminator,
                    variant_name: variant_metadata
                        .as_ref()
                        .and_then(|metadata| metadata.get_name_string()),
                });
                for (index, field_type) in field_types.iter().enumerate() {
                    self.path.push(PathFrame::Field {
                        container_name: None,
                        index,
                        field_name: variant_metadata
                            .as_ref()
                            .and_then(|metadata| resolve_field_name(metadata, index)),
                    });
                    self.validate_child(*field_type, None)?;
                    self.path.pop();
                }
                self.path.pop();
                Ok(())
            }
            TypeKind::Map {
                key_type,
                value_type,
            } => {
                self.check_value_kind(value_kind, ValueKind::Map, "Map", start_offset)?;
                let key_value_kind = self.read_header_value_kind()?;
                self.check_header_kind_matches(key_value_kind, *key_type)?;
                let value_value_kind = self.read_header_value_kind()?;
                self.check_header_kind_matches(value_value_kind, *value_type)?;
                let length = self.read_header_size()?;
                if let TypeValidation::Map(validation) = &type_data.validation {
                    self.check_length(validation, length, start_offset)?;
                }
                for index in 0..length {
                    self.path.push(PathFrame::MapKey { index });
                    self.validate_child(*key_type, Some(key_value_kind))?;
                    self.path.pop();
                    self.path.push(PathFrame::MapValue { index });
                    self.validate_child(*value_type, Some(value_value_kind))?;
                    self.path.pop();
                }
                Ok(())
            }
            TypeKind::Custom(_) => {
                let matches = match value_kind {
                    ValueKind::Custom(custom_value_kind) => {
                        E::custom_value_kind_matches_type_kind(custom_value_kind, &type_data.kind)
                    }
                    _ => false,
                };
                if !matches {
                    return Err(self.located(
                        start_offset,
                        PayloadValidationError::ValueKindMismatchWithTypeKind {
                            expected: type_data.kind.label(),
                            actual: value_kind.as_u8(),
                        },
                    ));
                }
                let custom_value =
                    E::CustomValue::decode_body_with_value_kind(&mut self.decoder, value_kind)
                        .map_err(|error| self.located(start_offset, error.into()))?;
                if let TypeValidation::Custom(custom_validation) = &type_data.validation {
                    E::apply_custom_type_validation_for_custom_value(
                        custom_validation,
                        &custom_value,
                        self.context,
                    )
                    .map_err(|error| self.located(start_offset, error))?;
                }
                E::apply_validation_for_custom_value(
                    self.schema,
                    &custom_value,
                    type_id,
                    self.context,
                )
                .map_err(|error| self.located(start_offset, error))?;
                Ok(())
            }
        }
    }

    /// An untyped walk matching the [`Value`] model, for subtrees of type `Any`.
    fn validate_any_body(
        &mut self,
        value_kind: ValueKind<E::CustomValueKind>,
        start_offset: usize,
    ) -> Result<(), LocatedValidationError> {
        match value_kind {
            ValueKind::Bool => {
                self.decode_leaf::<bool>(value_kind, start_offset)?;
            }
            ValueKind::I8 => {
                self.decode_leaf::<i8>(value_kind, start_offset)?;
            }
            ValueKind::I16 => {
                self.decode_leaf::<i16>(value_kind, start_offset)?;
            }
            ValueKind::I32 => {
                self.decode_leaf::<i32>(value_kind, start_offset)?;
            }
            ValueKind::I64 => {
                self.decode_leaf::<i64>(value_kind, start_offset)?;
            }
            ValueKind::I128 => {
                self.decode_leaf::<i128>(value_kind, start_offset)?;
            }
            ValueKind::U8 => {
                self.decode_leaf::<u8>(value_kind, start_offset)?;
            }
            ValueKind::U16 => {
                self.decode_leaf::<u16>(value_kind, start_offset)?;
            }
            ValueKind::U32 => {
                self.decode_leaf::<u32>(value_kind, start_offset)?;
            }
            ValueKind::U64 => {
                self.decode_leaf::<u64>(value_kind, start_offset)?;
            }
            ValueKind::U128 => {
                self.decode_leaf::<u128>(value_kind, start_offset)?;
            }
            ValueKind::String => {
                self.decode_leaf::<String>(value_kind, start_offset)?;
            }
            ValueKind::Enum => {
                let offset = self.decoder.get_offset();
                self.decoder
                    .read_discriminator()
                    .map_err(|error| self.located(offset, error.into()))?;
                let length = self.read_header_size()?;
                for index in 0..length {
                    self.path.push(PathFrame::Field {
                        container_name: None,
                        index,
                        field_name: None,
                    });
                    self.validate_any_child(None)?;
                    self.path.pop();
                }
            }
            ValueKind::Array => {
                let element_value_kind = self.read_header_value_kind()?;
                let length = self.read_header_size()?;
                for index in 0..length {
                    self.path.push(PathFrame::Element { index });
                    self.validate_any_child(Some(element_value_kind))?;
                    self.path.pop();
                }
            }
            ValueKind::Tuple => {
                let length = self.read_header_size()?;
                for index in 0..length {
                    self.path.push(PathFrame::Field {
                        container_name: None,
                        index,
                        field_name: None,
                    });
                    self.validate_any_child(None)?;
                    self.path.pop();
                }
            }
            ValueKind::Map => {
                let key_value_kind = self.read_header_value_kind()?;
                let value_value_kind = self.read_header_value_kind()?;
                let length = self.read_header_size()?;
                for index in 0..length {
                    self.path.push(PathFrame::MapKey { index });
                    self.validate_any_child(Some(key_value_kind))?;
                    self.path.pop();
                    self.path.push(PathFrame::MapValue { index });
                    self.validate_any_child(Some(value_value_kind))?;
                    self.path.pop();
                }
            }
            ValueKind::Custom(_) => {
                E::CustomValue::decode_body_with_value_kind(&mut self.decoder, value_kind)
                    .map_err(|error| self.located(start_offset, error.into()))?;
            }
        }
        Ok(())
    }

    fn validate_any_child(
        &mut self,
        preloaded_value_kind: Option<ValueKind<E::CustomValueKind>>,
    ) -> Result<(), LocatedValidationError> {
        let value_kind = self.resolve_child_value_kind(preloaded_value_kind)?;
        let start_offset = self.decoder.get_offset();
        self.decoder
            .track_stack_depth_increase()
            .map_err(|error| self.located(start_offset, error.into()))?;
        self.validate_any_body(value_kind, start_offset)?;
        self.decoder
            .track_stack_depth_decrease()
            .map_err(|error| self.located(start_offset, error.into()))?;
        Ok(())
    }

    fn decode_leaf<V>(
        &mut self,
        value_kind: ValueKind<E::CustomValueKind>,
        start_offset: usize,
    ) -> Result<V, LocatedValidationError>
    where
        V: Decode<E::CustomValueKind, VecDecoder<'de, E::CustomValueKind>>,
    {
        V::decode_body_with_value_kind(&mut self.decoder, value_kind)
            .map_err(|error| self.located(start_offset, error.into()))
    }

    fn validate_numeric<V>(
        &mut self,
        value_kind: ValueKind<E::CustomValueKind>,
        validation: Option<&NumericValidation<V>>,
        start_offset: usize,
    ) -> Result<(), LocatedValidationError>
    where
        V: Copy
            + PartialOrd
            + ToString
            + Decode<E::CustomValueKind, VecDecoder<'de, E::CustomValueKind>>,
    {
        let value = self.decode_leaf::<V>(value_kind, start_offset)?;
        if let Some(validation) = validation {
            if !validation.is_valid(value) {
                return Err(self.located(
                    start_offset,
                    PayloadValidationError::ValidationError(ValidationError::NumericOutOfRange {
                        actual: value.to_string(),
                        min: bound_to_string(validation.min),
                        max: bound_to_string(validation.max),
                    }),
                ));
            }
        }
        Ok(())
    }

    fn check_length(
        &self,
        validation: &LengthValidation,
        length: usize,
        start_offset: usize,
    ) -> Result<(), LocatedValidationError> {
        if validation.is_valid(length) {
            Ok(())
        } else {
            Err(self.located(
                start_offset,
                PayloadValidationError::ValidationError(ValidationError::LengthOutOfRange {
                    actual: length,
                    min: validation.min.unwrap_or(0),
                    max: validation.max.unwrap_or(u32::MAX),
                }),
            ))
        }
    }

    fn check_value_kind(
        &self,
        actual: ValueKind<E::CustomValueKind>,
        expected: ValueKind<E::CustomValueKind>,
        expected_label: &'static str,
        start_offset: usize,
    ) -> Result<(), LocatedValidationError> {
        if actual == expected {
            Ok(())
        } else {
            Err(self.located(
                start_offset,
                PayloadValidationError::ValueKindMismatchWithTypeKind {
                    expected: expected_label,
                    actual: actual.as_u8(),
                },
            ))
        }
    }

    fn read_header_value_kind(
        &mut self,
    ) -> Result<ValueKind<E::CustomValueKind>, LocatedValidationError> {
        let offset = self.decoder.get_offset();
        self.decoder
            .read_value_kind()
            .map_err(|error| self.located(offset, error.into()))
    }

    fn read_header_size(&mut self) -> Result<usize, LocatedValidationError> {
        let offset = self.decoder.get_offset();
        self.decoder
            .read_size()
            .map_err(|error| self.located(offset, error.into()))
    }

    /// Checks that the value kind declared in an array/map header can inhabit the
    /// element/key/value type.
    fn check_header_kind_matches(
        &mut self,
        value_kind: ValueKind<E::CustomValueKind>,
        type_id: LocalTypeId,
    ) -> Result<(), LocatedValidationError> {
        let offset = self.decoder.get_offset();
        let type_kind = self.schema.resolve_type_kind(type_id).ok_or_else(|| {
            self.located(
                offset,
                PayloadValidationError::SchemaInconsistency(format!(
                    "Type id {:?} could not be resolved",
                    type_id
                )),
            )
        })?;
        if value_kind_matches_type_kind::<E>(value_kind, &type_kind) {
            Ok(())
        } else {
            Err(self.located(
                offset,
                PayloadValidationError::ValueKindMismatchWithTypeKind {
                    expected: type_kind.label(),
                    actual: value_kind.as_u8(),
                },
            ))
        }
    }

    fn located(&self, start_offset: usize, error: PayloadValidationError) -> LocatedValidationError {
        LocatedValidationError {
            error,
            location: ErrorLocation {
                start_offset,
                path: render_path(&self.path),
            },
        }
    }
}

fn value_kind_matches_type_kind<E: CustomExtension>(
    value_kind: ValueKind<E::CustomValueKind>,
    type_kind: &LocalSchemaTypeKind<E>,
) -> bool {
    match value_kind {
        ValueKind::Custom(custom_value_kind) => {
            E::custom_value_kind_matches_type_kind(custom_value_kind, type_kind)
        }
        _ => match type_kind {
            TypeKind::Any => true,
            TypeKind::Bool => value_kind == ValueKind::Bool,
            TypeKind::I8 => value_kind == ValueKind::I8,
            TypeKind::I16 => value_kind == ValueKind::I16,
            TypeKind::I32 => value_kind == ValueKind::I32,
            TypeKind::I64 => value_kind == ValueKind::I64,
            TypeKind::I128 => value_kind == ValueKind::I128,
            TypeKind::U8 => value_kind == ValueKind::U8,
            TypeKind::U16 => value_kind == ValueKind::U16,
            TypeKind::U32 => value_kind == ValueKind::U32,
            TypeKind::U64 => value_kind == ValueKind::U64,
            TypeKind::U128 => value_kind == ValueKind::U128,
            TypeKind::String => value_kind == ValueKind::String,
            TypeKind::Array { .. } => value_kind == ValueKind::Array,
            TypeKind::Tuple { .. } => value_kind == ValueKind::Tuple,
            TypeKind::Enum { .. } => value_kind == ValueKind::Enum,
            TypeKind::Map { .. } => value_kind == ValueKind::Map,
            TypeKind::Custom(_) => false,
        },
    }
}

fn resolve_field_name(metadata: &TypeMetadata, index: usize) -> Option<String> {
    metadata
        .get_field_names()
        .and_then(|field_names| field_names.get(index))
        .map(|field_name| field_name.to_string())
}

fn bound_to_string<V: ToString>(bound: Option<V>) -> String {
    match bound {
        Some(value) => value.to_string(),
        None => "NONE".to_string(),
    }
}

fn render_path(path: &[PathFrame]) -> String {
    if path.is_empty() {
        return "root".to_string();
    }
    let mut rendered = String::new();
    for frame in path {
        if !rendered.is_empty() {
            rendered.push_str("->");
        }
        match frame {
            PathFrame::Field {
                container_name,
                index,
                field_name,
            } => {
                if let Some(container_name) = container_name {
                    rendered.push_str(container_name);
                }
                match field_name {
                    Some(field_name) => {
                        let _ = write!(rendered, ".[{}|{}]", index, field_name);
                    }
                    None => {
                        let _ = write!(rendered, ".[{}]", index);
                    }
                }
            }
            PathFrame::Variant {
                container_name,
                discriminator,
                variant_name,
            } => {
                if let Some(container_name) = container_name {
                    rendered.push_str(container_name);
                }
                match variant_name {
                    Some(variant_name) => {
                        let _ = write!(rendered, "::{{{}|{}}}", discriminator, variant_name);
                    }
                    None => {
                        let _ = write!(rendered, "::{{{}}}", discriminator);
                    }
                }
            }
            PathFrame::Element { index } => {
                let _ = write!(rendered, "[{}]", index);
            }
            PathFrame::MapKey { index } => {
                let _ = write!(rendered, "[{}].Key", index);
            }
            PathFrame::MapValue { index } => {
                let _ = write!(rendered, "[{}].Value", index);
            }
        }
    }
    rendered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::internal_prelude::*;

    #[derive(Debug, PartialEq, Eq, Sbor)]
    struct TestStruct {
        hello: u32,
        world: Option<String>,
    }

    #[derive(Debug, PartialEq, Eq, Sbor)]
    enum TestEnum {
        A,
        B { flag: bool },
    }

    fn validate_basic_payload(
        payload: &[u8],
        schema: &BasicSchema,
        type_id: LocalTypeId,
    ) -> Result<(), LocatedValidationError> {
        validate_payload_against_schema::<NoCustomExtension, ()>(
            payload,
            schema,
            type_id,
            &(),
            BASIC_SBOR_V1_MAX_DEPTH,
        )
    }

    #[test]
    fn valid_payload_passes_validation() {
        let (type_id, schema) = generate_basic_schema_from_single_type::<TestStruct>();
        schema.validate().unwrap();
        let payload = basic_encode(&TestStruct {
            hello: 5,
            world: Some("x".to_string()),
        })
        .unwrap();
        validate_basic_payload(&payload, &schema, type_id).unwrap();
    }

    #[test]
    fn mismatched_field_kind_reports_located_error() {
        let (type_id, schema) = generate_basic_schema_from_single_type::<TestStruct>();
        // The first field is a string instead of a u32
        let payload = basic_encode(&("not a u32".to_string(), None::<String>)).unwrap();
        let error = validate_basic_payload(&payload, &schema, type_id).unwrap_err();
        assert!(matches!(
            error.error,
            PayloadValidationError::DecodeError(DecodeError::UnexpectedValueKind { .. })
        ));
        assert_eq!(error.location.path, "TestStruct.[0|hello]");
    }

    #[test]
    fn unknown_enum_variant_is_rejected() {
        let (type_id, schema) = generate_basic_schema_from_single_type::<TestEnum>();
        let payload = basic_encode(&BasicValue::Enum {
            discriminator: 5,
            fields: vec![],
        })
        .unwrap();
        let error = validate_basic_payload(&payload, &schema, type_id).unwrap_err();
        assert_eq!(
            error.error,
            PayloadValidationError::UnknownEnumVariant { discriminator: 5 }
        );
    }

    #[test]
    fn enum_field_errors_include_variant_in_path() {
        let (type_id, schema) = generate_basic_schema_from_single_type::<TestEnum>();
        let payload = basic_encode(&BasicValue::Enum {
            discriminator: 1,
            fields: vec![BasicValue::U8 { value: 9 }],
        })
        .unwrap();
        let error = validate_basic_payload(&payload, &schema, type_id).unwrap_err();
        assert_eq!(error.location.path, "TestEnum::{1|B}->.[0|flag]");
    }

    #[test]
    fn fixed_length_array_validation_is_applied() {
        let (type_id, schema) = generate_basic_schema_from_single_type::<[u8; 5]>();
        // A 3-byte payload encodes identically to a Vec<u8> of length 3
        let payload = basic_encode(&vec![1u8, 2, 3]).unwrap();
        let error = validate_basic_payload(&payload, &schema, type_id).unwrap_err();
        assert_eq!(
            error.error,
            PayloadValidationError::ValidationError(ValidationError::LengthOutOfRange {
                actual: 3,
                min: 5,
                max: 5,
            })
        );
    }

    #[test]
    fn extra_trailing_bytes_are_rejected() {
        let (type_id, schema) = generate_basic_schema_from_single_type::<u8>();
        let mut payload = basic_encode(&1u8).unwrap();
        payload.push(0);
        let error = validate_basic_payload(&payload, &schema, type_id).unwrap_err();
        assert_eq!(
            error.error,
            PayloadValidationError::DecodeError(DecodeError::ExtraTrailingBytes(1))
        );
    }

    #[test]
    fn any_type_accepts_arbitrary_well_formed_payloads() {
        let payload = basic_encode(&(1u8, vec!["a".to_string()], (2u16, false))).unwrap();
        let schema = BasicSchema::empty();
        validate_payload_against_schema::<NoCustomExtension, ()>(
            &payload,
            &schema,
            LocalTypeId::any(),
            &(),
            BASIC_SBOR_V1_MAX_DEPTH,
        )
        .unwrap();
    }

    #[derive(Debug, PartialEq, Eq, Sbor)]
    struct TreeNode {
        value: u32,
        children: Vec<TreeNode>,
    }

    #[test]
    fn recursive_types_validate_against_their_schema() {
        let (type_id, schema) = generate_basic_schema_from_single_type::<TreeNode>();
        schema.validate().unwrap();
        let payload = basic_encode(&TreeNode {
            value: 1,
            children: vec![
                TreeNode {
                    value: 2,
                    children: vec![],
                },
                TreeNode {
                    value: 3,
                    children: vec![],
                },
            ],
        })
        .unwrap();
        validate_basic_payload(&payload, &schema, type_id).unwrap();
    }

    #[test]
    fn validation_rejects_payloads_beyond_the_depth_limit() {
        fn chain(nodes: usize) -> TreeNode {
            let mut node = TreeNode {
                value: 0,
                children: vec![],
            };
            for value in 1..nodes as u32 {
                node = TreeNode {
                    value,
                    children: vec![node],
                };
            }
            node
        }

        let (type_id, schema) = generate_basic_schema_from_single_type::<TreeNode>();

        // Each node contributes two value layers (its tuple and its child vec), so a
        // 40-node chain overflows a limit of 64. Encoded with a raised limit so that
        // only validation objects.
        let mut payload = Vec::new();
        let encoder = BasicEncoder::new(&mut payload, 4 * BASIC_SBOR_V1_MAX_DEPTH);
        encoder
            .encode_payload(&chain(40), BASIC_SBOR_V1_PAYLOAD_PREFIX)
            .unwrap();

        let error = validate_basic_payload(&payload, &schema, type_id).unwrap_err();
        assert_eq!(
            error.error,
            PayloadValidationError::DecodeError(DecodeError::MaxDepthExceeded(
                BASIC_SBOR_V1_MAX_DEPTH
            ))
        );

        // A chain within the limit passes
        let mut payload = Vec::new();
        let encoder = BasicEncoder::new(&mut payload, 4 * BASIC_SBOR_V1_MAX_DEPTH);
        encoder
            .encode_payload(&chain(30), BASIC_SBOR_V1_PAYLOAD_PREFIX)
            .unwrap();
        validate_basic_payload(&payload, &schema, type_id).unwrap();
    }
}
