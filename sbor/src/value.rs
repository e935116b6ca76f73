use crate::*;

/// A custom value which can live in the leaves of a [`Value`] model.
pub trait CustomValue<X: CustomValueKind> {
    fn get_custom_value_kind(&self) -> X;
}

/// A fully-decoded representation of any SBOR payload.
///
/// `Value` is not [`Categorize`]d - a value's kind is only known at runtime, via
/// [`Value::get_value_kind`]. This means a `Value` can't be put directly inside an
/// encoded collection; wrap it in a 1-tuple if you need to.
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "type") // See https://serde.rs/enum-representations.html
)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value<X: CustomValueKind, Y> {
    Bool {
        value: bool,
    },
    I8 {
        value: i8,
    },
    I16 {
        value: i16,
    },
    I32 {
        value: i32,
    },
    I64 {
        value: i64,
    },
    I128 {
        value: i128,
    },
    U8 {
        value: u8,
    },
    U16 {
        value: u16,
    },
    U32 {
        value: u32,
    },
    U64 {
        value: u64,
    },
    U128 {
        value: u128,
    },
    String {
        value: String,
    },
    Enum {
        discriminator: u8,
        fields: Vec<Value<X, Y>>,
    },
    Array {
        element_value_kind: ValueKind<X>,
        elements: Vec<Value<X, Y>>,
    },
    Tuple {
        fields: Vec<Value<X, Y>>,
    },
    Map {
        key_value_kind: ValueKind<X>,
        value_value_kind: ValueKind<X>,
        entries: Vec<(Value<X, Y>, Value<X, Y>)>,
    },
    Custom {
        value: Y,
    },
}

impl<X: CustomValueKind, Y: CustomValue<X>> Value<X, Y> {
    pub fn get_value_kind(&self) -> ValueKind<X> {
        match self {
            Value::Bool { .. } => ValueKind::Bool,
            Value::I8 { .. } => ValueKind::I8,
            Value::I16 { .. } => ValueKind::I16,
            Value::I32 { .. } => ValueKind::I32,
            Value::I64 { .. } => ValueKind::I64,
            Value::I128 { .. } => ValueKind::I128,
            Value::U8 { .. } => ValueKind::U8,
            Value::U16 { .. } => ValueKind::U16,
            Value::U32 { .. } => ValueKind::U32,
            Value::U64 { .. } => ValueKind::U64,
            Value::U128 { .. } => ValueKind::U128,
            Value::String { .. } => ValueKind::String,
            Value::Enum { .. } => ValueKind::Enum,
            Value::Array { .. } => ValueKind::Array,
            Value::Tuple { .. } => ValueKind::Tuple,
            Value::Map { .. } => ValueKind::Map,
            Value::Custom { value } => ValueKind::Custom(value.get_custom_value_kind()),
        }
    }

    pub fn unit() -> Self {
        Value::Tuple { fields: vec![] }
    }
}

impl<X: CustomValueKind, E: Encoder<X>, Y: CustomValue<X> + Encode<X, E>> Encode<X, E>
    for Value<X, Y>
{
    #[inline]
    fn encode_value_kind(&self, encoder: &mut E) -> Result<(), EncodeError> {
        encoder.write_value_kind(self.get_value_kind())
    }

    fn encode_body(&self, encoder: &mut E) -> Result<(), EncodeError> {
        match self {
            Value::Bool { value } => value.encode_body(encoder),
            Value::I8 { value } => value.encode_body(encoder),
            Value::I16 { value } => value.encode_body(encoder),
            Value::I32 { value } => value.encode_body(encoder),
            Value::I64 { value } => value.encode_body(encoder),
            Value::I128 { value } => value.encode_body(encoder),
            Value::U8 { value } => value.encode_body(encoder),
            Value::U16 { value } => value.encode_body(encoder),
            Value::U32 { value } => value.encode_body(encoder),
            Value::U64 { value } => value.encode_body(encoder),
            Value::U128 { value } => value.encode_body(encoder),
            Value::String { value } => value.encode_body(encoder),
            Value::Enum {
                discriminator,
                fields,
            } => {
                encoder.write_discriminator(*discriminator)?;
                encoder.write_size(fields.len())?;
                for field in fields {
                    encoder.encode(field)?;
                }
                Ok(())
            }
            Value::Array {
                element_value_kind,
                elements,
            } => {
                encoder.write_value_kind(*element_value_kind)?;
                encoder.write_size(elements.len())?;
                for element in elements {
                    let actual_value_kind = element.get_value_kind();
                    if actual_value_kind != *element_value_kind {
                        return Err(EncodeError::MismatchingArrayElementValueKind {
                            expected: element_value_kind.as_u8(),
                            actual: actual_value_kind.as_u8(),
                        });
                    }
                    encoder.encode_deeper_body(element)?;
                }
                Ok(())
            }
            Value::Tuple { fields } => {
                encoder.write_size(fields.len())?;
                for field in fields {
                    encoder.encode(field)?;
                }
                Ok(())
            }
            Value::Map {
                key_value_kind,
                value_value_kind,
                entries,
            } => {
                encoder.write_value_kind(*key_value_kind)?;
                encoder.write_value_kind(*value_value_kind)?;
                encoder.write_size(entries.len())?;
                for (key, value) in entries {
                    let actual_key_value_kind = key.get_value_kind();
                    if actual_key_value_kind != *key_value_kind {
                        return Err(EncodeError::MismatchingMapKeyValueKind {
                            expected: key_value_kind.as_u8(),
                            actual: actual_key_value_kind.as_u8(),
                        });
                    }
                    encoder.encode_deeper_body(key)?;
                    let actual_value_value_kind = value.get_value_kind();
                    if actual_value_value_kind != *value_value_kind {
                        return Err(EncodeError::MismatchingMapValueValueKind {
                            expected: value_value_kind.as_u8(),
                            actual: actual_value_value_kind.as_u8(),
                        });
                    }
                    encoder.encode_deeper_body(value)?;
                }
                Ok(())
            }
            // Custom values are leaves - their body is encoded at the same depth
            Value::Custom { value } => value.encode_body(encoder),
        }
    }
}

impl<X: CustomValueKind, D: Decoder<X>, Y: CustomValue<X> + Decode<X, D>> Decode<X, D>
    for Value<X, Y>
{
    fn decode_body_with_value_kind(
        decoder: &mut D,
        value_kind: ValueKind<X>,
    ) -> Result<Self, DecodeError> {
        match value_kind {
            ValueKind::Bool => Ok(Value::Bool {
                value: bool::decode_body_with_value_kind(decoder, value_kind)?,
            }),
            ValueKind::I8 => Ok(Value::I8 {
                value: i8::decode_body_with_value_kind(decoder, value_kind)?,
            }),
            ValueKind::I16 => Ok(Value::I16 {
                value: i16::decode_body_with_value_kind(decoder, value_kind)?,
            }),
            ValueKind::I32 => Ok(Value::I32 {
                value: i32::decode_body_with_value_kind(decoder, value_kind)?,
            }),
            ValueKind::I64 => Ok(Value::I64 {
                value: i64::decode_body_with_value_kind(decoder, value_kind)?,
            }),
            ValueKind::I128 => Ok(Value::I128 {
                value: i128::decode_body_with_value_kind(decoder, value_kind)?,
            }),
            ValueKind::U8 => Ok(Value::U8 {
                value: u8::decode_body_with_value_kind(decoder, value_kind)?,
            }),
            ValueKind::U16 => Ok(Value::U16 {
                value: u16::decode_body_with_value_kind(decoder, value_kind)?,
            }),
            ValueKind::U32 => Ok(Value::U32 {
                value: u32::decode_body_with_value_kind(decoder, value_kind)?,
            }),
            ValueKind::U64 => Ok(Value::U64 {
                value: u64::decode_body_with_value_kind(decoder, value_kind)?,
            }),
            ValueKind::U128 => Ok(Value::U128 {
                value: u128::decode_body_with_value_kind(decoder, value_kind)?,
            }),
            ValueKind::String => Ok(Value::String {
                value: String::decode_body_with_value_kind(decoder, value_kind)?,
            }),
            ValueKind::Enum => {
                let discriminator = decoder.read_discriminator()?;
                let size = decoder.read_size()?;
                let mut fields = Vec::with_capacity(if size <= 1024 { size } else { 1024 });
                for _ in 0..size {
                    fields.push(decoder.decode()?);
                }
                Ok(Value::Enum {
                    discriminator,
                    fields,
                })
            }
            ValueKind::Array => {
                let element_value_kind = decoder.read_value_kind()?;
                let size = decoder.read_size()?;
                let mut elements = Vec::with_capacity(if size <= 1024 { size } else { 1024 });
                for _ in 0..size {
                    elements.push(decoder.decode_deeper_body_with_value_kind(element_value_kind)?);
                }
                Ok(Value::Array {
                    element_value_kind,
                    elements,
                })
            }
            ValueKind::Tuple => {
                let size = decoder.read_size()?;
                let mut fields = Vec::with_capacity(if size <= 1024 { size } else { 1024 });
                for _ in 0..size {
                    fields.push(decoder.decode()?);
                }
                Ok(Value::Tuple { fields })
            }
            ValueKind::Map => {
                let key_value_kind = decoder.read_value_kind()?;
                let value_value_kind = decoder.read_value_kind()?;
                let size = decoder.read_size()?;
                let mut entries = Vec::with_capacity(if size <= 1024 { size } else { 1024 });
                for _ in 0..size {
                    entries.push((
                        decoder.decode_deeper_body_with_value_kind(key_value_kind)?,
                        decoder.decode_deeper_body_with_value_kind(value_value_kind)?,
                    ));
                }
                Ok(Value::Map {
                    key_value_kind,
                    value_value_kind,
                    entries,
                })
            }
            ValueKind::Custom(_) => Ok(Value::Custom {
                value: Y::decode_body_with_value_kind(decoder, value_kind)?,
            }),
        }
    }
}

impl<C: CustomTypeKind<RustTypeId>, X: CustomValueKind, Y> Describe<C> for Value<X, Y> {
    fn type_id() -> RustTypeId {
        RustTypeId::WellKnown(basic_well_known_types::ANY_TYPE)
    }

    fn type_data() -> TypeData<C, RustTypeId> {
        TypeData::unnamed(TypeKind::Any)
    }
}

/// A visitor for the custom values encountered during [`traverse_any`].
pub trait CustomValueVisitor<Y> {
    type Err;

    fn visit(&mut self, path: &mut SborPathBuf, value: &Y) -> Result<(), Self::Err>;
}

/// Recursively traverses the given value, calling the visitor on each custom value
/// encountered, in depth-first document order.
pub fn traverse_any<X: CustomValueKind, Y, V: CustomValueVisitor<Y>>(
    path: &mut SborPathBuf,
    value: &Value<X, Y>,
    visitor: &mut V,
) -> Result<(), V::Err> {
    match value {
        // primitive types
        Value::Bool { .. }
        | Value::I8 { .. }
        | Value::I16 { .. }
        | Value::I32 { .. }
        | Value::I64 { .. }
        | Value::I128 { .. }
        | Value::U8 { .. }
        | Value::U16 { .. }
        | Value::U32 { .. }
        | Value::U64 { .. }
        | Value::U128 { .. }
        | Value::String { .. } => {}
        Value::Enum { fields, .. } | Value::Tuple { fields } => {
            for (i, field) in fields.iter().enumerate() {
                path.push(i);
                traverse_any(path, field, visitor)?;
                path.pop();
            }
        }
        Value::Array { elements, .. } => {
            for (i, element) in elements.iter().enumerate() {
                path.push(i);
                traverse_any(path, element, visitor)?;
                path.pop();
            }
        }
        Value::Map { entries, .. } => {
            for (i, entry) in entries.iter().enumerate() {
                path.push(i);
                path.push(0);
                traverse_any(path, &entry.0, visitor)?;
                path.pop();
                path.push(1);
                traverse_any(path, &entry.1, visitor)?;
                path.pop();
                path.pop();
            }
        }
        Value::Custom { value } => {
            visitor.visit(path, value)?;
        }
    }
    Ok(())
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use crate::internal_prelude::*;

    #[test]
    fn values_serialize_with_a_type_tag() {
        let value = BasicValue::Tuple {
            fields: vec![BasicValue::U8 { value: 7 }],
        };
        assert_eq!(
            serde_json::to_value(&value).unwrap(),
            serde_json::json!({
                "type": "Tuple",
                "fields": [{ "type": "U8", "value": 7 }]
            })
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::internal_prelude::*;

    #[test]
    fn test_value_round_trip() {
        let typed = (
            1u8,
            "hello".to_string(),
            Some(42u32),
            vec![1u8, 2u8, 3u8],
        );
        let payload = basic_encode(&typed).unwrap();

        let value = basic_decode::<BasicValue>(&payload).unwrap();
        assert_eq!(
            value,
            BasicValue::Tuple {
                fields: vec![
                    BasicValue::U8 { value: 1 },
                    BasicValue::String {
                        value: "hello".to_string()
                    },
                    BasicValue::Enum {
                        discriminator: OPTION_VARIANT_SOME,
                        fields: vec![BasicValue::U32 { value: 42 }],
                    },
                    BasicValue::Array {
                        element_value_kind: ValueKind::U8,
                        elements: vec![
                            BasicValue::U8 { value: 1 },
                            BasicValue::U8 { value: 2 },
                            BasicValue::U8 { value: 3 },
                        ],
                    },
                ]
            }
        );

        let re_encoded = basic_encode(&value).unwrap();
        assert_eq!(re_encoded, payload);
    }

    #[test]
    fn test_mismatching_array_element_kinds_fail_to_encode() {
        let value = BasicValue::Array {
            element_value_kind: ValueKind::U8,
            elements: vec![
                BasicValue::U8 { value: 1 },
                BasicValue::U16 { value: 2 },
            ],
        };
        assert_eq!(
            basic_encode(&value),
            Err(EncodeError::MismatchingArrayElementValueKind {
                expected: VALUE_KIND_U8,
                actual: VALUE_KIND_U16,
            })
        );
    }

    #[test]
    fn test_mismatching_map_entry_kinds_fail_to_encode() {
        let value = BasicValue::Map {
            key_value_kind: ValueKind::U8,
            value_value_kind: ValueKind::String,
            entries: vec![(BasicValue::U8 { value: 1 }, BasicValue::U32 { value: 5 })],
        };
        assert_eq!(
            basic_encode(&value),
            Err(EncodeError::MismatchingMapValueValueKind {
                expected: VALUE_KIND_STRING,
                actual: VALUE_KIND_U32,
            })
        );
    }
}
