use crate::*;

/// A single step of a [`SchemaPath`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SchemaSubPath {
    /// An array element, a positional tuple/variant field, or a map entry.
    Index(usize),
    /// A tuple or variant field selected by name.
    Field(String),
    /// An enum variant selected by name. Subsequent steps resolve within the
    /// fields of that variant.
    Variant(String),
    /// The key of the map entry selected by the preceding [`Index`] step.
    ///
    /// [`Index`]: SchemaSubPath::Index
    MapKey,
    /// The value of the map entry selected by the preceding [`Index`] step.
    ///
    /// [`Index`]: SchemaSubPath::Index
    MapValue,
}

/// Addresses a sub-location of a payload by name as well as by position, given a
/// schema describing the payload.
///
/// Unlike the purely positional [`SborPath`], field and variant steps are looked up
/// in the schema's [`TypeMetadata`], so a path can be written against the names a
/// type was described with and survive field reordering of sibling types.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct SchemaPath(Vec<SchemaSubPath>);

impl SchemaPath {
    pub fn new() -> Self {
        Self(vec![])
    }

    pub fn field(mut self, name: &str) -> Self {
        self.0.push(SchemaSubPath::Field(name.to_string()));
        self
    }

    pub fn index(mut self, index: usize) -> Self {
        self.0.push(SchemaSubPath::Index(index));
        self
    }

    pub fn variant(mut self, name: &str) -> Self {
        self.0.push(SchemaSubPath::Variant(name.to_string()));
        self
    }

    pub fn map_key(mut self) -> Self {
        self.0.push(SchemaSubPath::MapKey);
        self
    }

    pub fn map_value(mut self) -> Self {
        self.0.push(SchemaSubPath::MapValue);
        self
    }

    /// Resolves the path against a schema, returning the positional [`SborPath`] of
    /// the addressed child within a payload of the root type, together with the type
    /// the path lands on.
    ///
    /// Returns `None` if any step does not exist under the schema: an unknown field or
    /// variant name, an out-of-range positional step, a map key/value step which does
    /// not follow an entry index, or a path ending between steps (on a bare variant or
    /// map entry).
    pub fn resolve_against_schema<S: CustomSchema>(
        &self,
        schema: &Schema<S>,
        root_type_id: LocalTypeId,
    ) -> Option<(SborPath, LocalTypeId)> {
        let resolution = self.resolve_internal(schema, root_type_id)?;
        Some((SborPath::new(resolution.indices), resolution.type_id))
    }

    /// Resolves the path against a schema and reads the addressed child out of a
    /// decoded value of the root type.
    ///
    /// Any variant steps are checked against the discriminators the value actually
    /// holds, so a path through variant `A` returns `None` when given a value holding
    /// variant `B`.
    pub fn get_from_value<'a, S: CustomSchema, X: CustomValueKind, Y>(
        &self,
        schema: &Schema<S>,
        root_type_id: LocalTypeId,
        value: &'a Value<X, Y>,
    ) -> Option<&'a Value<X, Y>> {
        let resolution = self.resolve_internal(schema, root_type_id)?;
        for &(prefix_len, expected_discriminator) in &resolution.variant_checks {
            let enclosing =
                SborPath::new(resolution.indices[..prefix_len].to_vec()).get_from_value(value)?;
            let Value::Enum { discriminator, .. } = enclosing else {
                return None;
            };
            if *discriminator != expected_discriminator {
                return None;
            }
        }
        SborPath::new(resolution.indices).get_from_value(value)
    }

    fn resolve_internal<S: CustomSchema>(
        &self,
        schema: &Schema<S>,
        root_type_id: LocalTypeId,
    ) -> Option<Resolution> {
        let mut indices = Vec::with_capacity(self.0.len());
        let mut variant_checks = vec![];
        let mut cursor = Cursor::Type(root_type_id);
        for sub_path in &self.0 {
            cursor = match (sub_path, cursor) {
                (SchemaSubPath::Index(index), Cursor::Type(type_id)) => {
                    match schema.resolve_type_kind(type_id)? {
                        TypeKind::Array { element_type } => {
                            indices.push(*index);
                            Cursor::Type(element_type)
                        }
                        TypeKind::Tuple { field_types } => {
                            let field_type = *field_types.get(*index)?;
                            indices.push(*index);
                            Cursor::Type(field_type)
                        }
                        TypeKind::Map {
                            key_type,
                            value_type,
                        } => {
                            indices.push(*index);
                            Cursor::MapEntry {
                                key_type,
                                value_type,
                            }
                        }
                        _ => return None,
                    }
                }
                (SchemaSubPath::Index(index), Cursor::VariantFields { field_types, .. }) => {
                    let field_type = *field_types.get(*index)?;
                    indices.push(*index);
                    Cursor::Type(field_type)
                }
                (SchemaSubPath::Field(name), Cursor::Type(type_id)) => {
                    let TypeKind::Tuple { field_types } = schema.resolve_type_kind(type_id)?
                    else {
                        return None;
                    };
                    let metadata = schema.resolve_type_metadata(type_id)?;
                    let index = position_of_field(&metadata, name)?;
                    let field_type = *field_types.get(index)?;
                    indices.push(index);
                    Cursor::Type(field_type)
                }
                (
                    SchemaSubPath::Field(name),
                    Cursor::VariantFields {
                        field_types,
                        metadata,
                    },
                ) => {
                    let index = position_of_field(&metadata, name)?;
                    let field_type = *field_types.get(index)?;
                    indices.push(index);
                    Cursor::Type(field_type)
                }
                (SchemaSubPath::Variant(name), Cursor::Type(type_id)) => {
                    let TypeKind::Enum { variants } = schema.resolve_type_kind(type_id)? else {
                        return None;
                    };
                    let metadata = schema.resolve_type_metadata(type_id)?;
                    let (discriminator, variant_metadata) = find_variant(&metadata, name)?;
                    let field_types = variants.get(&discriminator)?.clone();
                    variant_checks.push((indices.len(), discriminator));
                    Cursor::VariantFields {
                        field_types,
                        metadata: variant_metadata,
                    }
                }
                (SchemaSubPath::MapKey, Cursor::MapEntry { key_type, .. }) => {
                    indices.push(0);
                    Cursor::Type(key_type)
                }
                (SchemaSubPath::MapValue, Cursor::MapEntry { value_type, .. }) => {
                    indices.push(1);
                    Cursor::Type(value_type)
                }
                _ => return None,
            };
        }
        match cursor {
            Cursor::Type(type_id) => Some(Resolution {
                indices,
                type_id,
                variant_checks,
            }),
            _ => None,
        }
    }
}

struct Resolution {
    indices: Vec<usize>,
    type_id: LocalTypeId,
    /// `(prefix length, discriminator)` for each variant step taken: the enum sits
    /// at the index prefix of that length, and must hold that discriminator.
    variant_checks: Vec<(usize, u8)>,
}

enum Cursor {
    Type(LocalTypeId),
    VariantFields {
        field_types: Vec<LocalTypeId>,
        metadata: TypeMetadata,
    },
    MapEntry {
        key_type: LocalTypeId,
        value_type: LocalTypeId,
    },
}

fn position_of_field(metadata: &TypeMetadata, name: &str) -> Option<usize> {
    metadata
        .get_field_names()?
        .iter()
        .position(|field_name| field_name.as_ref() == name)
}

fn find_variant(metadata: &TypeMetadata, name: &str) -> Option<(u8, TypeMetadata)> {
    let Some(ChildNames::EnumVariants(variants)) = &metadata.child_names else {
        return None;
    };
    variants
        .iter()
        .find_map(|(discriminator, variant_metadata)| {
            (variant_metadata.get_name() == Some(name))
                .then(|| (*discriminator, variant_metadata.clone()))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::internal_prelude::*;
    use std::collections::BTreeMap;

    #[derive(Debug, PartialEq, Eq, Sbor)]
    struct Account {
        balance: u32,
        badges: Vec<String>,
        royalties: BTreeMap<String, u32>,
    }

    #[derive(Debug, PartialEq, Eq, Sbor)]
    enum Action {
        Lock,
        Transfer { amount: u32, to: String },
    }

    fn example_account() -> Account {
        let mut royalties = BTreeMap::new();
        royalties.insert("minting".to_string(), 50u32);
        Account {
            balance: 7,
            badges: vec!["admin".to_string(), "auditor".to_string()],
            royalties,
        }
    }

    #[test]
    fn named_fields_resolve_to_positional_indices() {
        let (type_id, schema) = generate_basic_schema_from_single_type::<Account>();

        let (path, resolved_type) = SchemaPath::new()
            .field("badges")
            .index(1)
            .resolve_against_schema(&schema, type_id)
            .unwrap();
        assert_eq!(path, SborPath::new(vec![1, 1]));
        assert_eq!(
            resolved_type,
            LocalTypeId::WellKnown(basic_well_known_types::STRING_TYPE)
        );

        let payload = basic_encode(&example_account()).unwrap();
        let value = basic_decode::<BasicValue>(&payload).unwrap();
        assert_eq!(
            SchemaPath::new()
                .field("badges")
                .index(1)
                .get_from_value(&schema, type_id, &value),
            Some(&BasicValue::String {
                value: "auditor".to_string()
            })
        );
    }

    #[test]
    fn map_entries_resolve_to_key_and_value() {
        let (type_id, schema) = generate_basic_schema_from_single_type::<Account>();
        let payload = basic_encode(&example_account()).unwrap();
        let value = basic_decode::<BasicValue>(&payload).unwrap();

        let key_path = SchemaPath::new().field("royalties").index(0).map_key();
        let (path, resolved_type) = key_path.resolve_against_schema(&schema, type_id).unwrap();
        assert_eq!(path, SborPath::new(vec![2, 0, 0]));
        assert_eq!(
            resolved_type,
            LocalTypeId::WellKnown(basic_well_known_types::STRING_TYPE)
        );
        assert_eq!(
            key_path.get_from_value(&schema, type_id, &value),
            Some(&BasicValue::String {
                value: "minting".to_string()
            })
        );

        let value_path = SchemaPath::new().field("royalties").index(0).map_value();
        assert_eq!(
            value_path.get_from_value(&schema, type_id, &value),
            Some(&BasicValue::U32 { value: 50 })
        );
    }

    #[test]
    fn variant_fields_resolve_by_name() {
        let (type_id, schema) = generate_basic_schema_from_single_type::<Action>();

        let path = SchemaPath::new().variant("Transfer").field("to");
        let (sbor_path, resolved_type) = path.resolve_against_schema(&schema, type_id).unwrap();
        assert_eq!(sbor_path, SborPath::new(vec![1]));
        assert_eq!(
            resolved_type,
            LocalTypeId::WellKnown(basic_well_known_types::STRING_TYPE)
        );

        let payload = basic_encode(&Action::Transfer {
            amount: 3,
            to: "treasury".to_string(),
        })
        .unwrap();
        let value = basic_decode::<BasicValue>(&payload).unwrap();
        assert_eq!(
            path.get_from_value(&schema, type_id, &value),
            Some(&BasicValue::String {
                value: "treasury".to_string()
            })
        );
    }

    #[test]
    fn variant_paths_reject_values_holding_another_variant() {
        let (type_id, schema) = generate_basic_schema_from_single_type::<Action>();
        let payload = basic_encode(&Action::Lock).unwrap();
        let value = basic_decode::<BasicValue>(&payload).unwrap();
        assert_eq!(
            SchemaPath::new()
                .variant("Transfer")
                .field("amount")
                .get_from_value(&schema, type_id, &value),
            None
        );
    }

    #[test]
    fn steps_that_do_not_exist_fail_to_resolve() {
        let (type_id, schema) = generate_basic_schema_from_single_type::<Account>();
        let no_such_field = SchemaPath::new().field("nonexistent");
        assert_eq!(no_such_field.resolve_against_schema(&schema, type_id), None);

        // A map key step must follow an entry index
        let dangling_map_key = SchemaPath::new().field("royalties").map_key();
        assert_eq!(
            dangling_map_key.resolve_against_schema(&schema, type_id),
            None
        );

        // Positional steps don't apply to leaves
        let index_into_leaf = SchemaPath::new().field("balance").index(0);
        assert_eq!(
            index_into_leaf.resolve_against_schema(&schema, type_id),
            None
        );

        let (type_id, schema) = generate_basic_schema_from_single_type::<Action>();
        let no_such_variant = SchemaPath::new().variant("Burn");
        assert_eq!(
            no_such_variant.resolve_against_schema(&schema, type_id),
            None
        );
    }
}
