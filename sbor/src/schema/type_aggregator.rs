use indexmap::{IndexMap, IndexSet};
use std::collections::HashSet;

use crate::*;

/// Generates a self-contained schema containing the given type and everything it depends on.
///
/// Returns the local id of the root type alongside the schema.
pub fn generate_full_schema_from_single_type<
    T: Describe<S::CustomTypeKind<RustTypeId>>,
    S: CustomSchema,
>() -> (LocalTypeId, Schema<S>) {
    let mut aggregator = TypeAggregator::new();
    let type_id = aggregator.add_child_type_and_descendents::<T>();
    (type_id, generate_full_schema(aggregator))
}

/// Linearizes the aggregated types into a [`Schema`], resolving each global type id
/// into a schema-local index.
pub fn generate_full_schema<S: CustomSchema>(
    aggregator: TypeAggregator<S::CustomTypeKind<RustTypeId>>,
) -> Schema<S> {
    let type_indices = IndexSet::from_iter(aggregator.types.keys().cloned());

    let mut type_kinds = Vec::with_capacity(aggregator.types.len());
    let mut type_metadata = Vec::with_capacity(aggregator.types.len());
    let mut type_validations = Vec::with_capacity(aggregator.types.len());
    for (_, type_data) in aggregator.types {
        type_kinds.push(linearize::<S>(type_data.kind, &type_indices));
        type_metadata.push(type_data.metadata);
        type_validations.push(type_data.validation);
    }

    Schema {
        type_kinds,
        type_metadata,
        type_validations,
    }
}

fn linearize<S: CustomSchema>(
    type_kind: AggregatorTypeKind<S>,
    type_indices: &IndexSet<TypeHash>,
) -> LocalTypeKind<S> {
    match type_kind {
        TypeKind::Any => TypeKind::Any,
        TypeKind::Bool => TypeKind::Bool,
        TypeKind::I8 => TypeKind::I8,
        TypeKind::I16 => TypeKind::I16,
        TypeKind::I32 => TypeKind::I32,
        TypeKind::I64 => TypeKind::I64,
        TypeKind::I128 => TypeKind::I128,
        TypeKind::U8 => TypeKind::U8,
        TypeKind::U16 => TypeKind::U16,
        TypeKind::U32 => TypeKind::U32,
        TypeKind::U64 => TypeKind::U64,
        TypeKind::U128 => TypeKind::U128,
        TypeKind::String => TypeKind::String,
        TypeKind::Array { element_type } => TypeKind::Array {
            element_type: resolve_local_type_id(type_indices, &element_type),
        },
        TypeKind::Tuple { field_types } => TypeKind::Tuple {
            field_types: field_types
                .into_iter()
                .map(|t| resolve_local_type_id(type_indices, &t))
                .collect(),
        },
        TypeKind::Enum { variants } => TypeKind::Enum {
            variants: variants
                .into_iter()
                .map(|(discriminator, field_types)| {
                    (
                        discriminator,
                        field_types
                            .into_iter()
                            .map(|t| resolve_local_type_id(type_indices, &t))
                            .collect(),
                    )
                })
                .collect(),
        },
        TypeKind::Map {
            key_type,
            value_type,
        } => TypeKind::Map {
            key_type: resolve_local_type_id(type_indices, &key_type),
            value_type: resolve_local_type_id(type_indices, &value_type),
        },
        TypeKind::Custom(custom_type_kind) => {
            TypeKind::Custom(S::linearize_type_kind(custom_type_kind, type_indices))
        }
    }
}

pub fn resolve_local_type_id(
    type_indices: &IndexSet<TypeHash>,
    type_id: &RustTypeId,
) -> LocalTypeId {
    match type_id {
        RustTypeId::WellKnown(well_known_type_id) => LocalTypeId::WellKnown(*well_known_type_id),
        RustTypeId::Novel(type_hash) => {
            LocalTypeId::SchemaLocalIndex(resolve_index(type_indices, type_hash))
        }
    }
}

fn resolve_index(type_indices: &IndexSet<TypeHash>, type_hash: &TypeHash) -> usize {
    type_indices.get_index_of(type_hash).unwrap_or_else(|| {
        panic!(
            "Something went wrong in the type aggregation process - type hash wasn't added: {:?}",
            type_hash
        )
    })
}

pub struct TypeAggregator<C: CustomTypeKind<RustTypeId>> {
    already_read_dependencies: HashSet<TypeHash>,
    types: IndexMap<TypeHash, TypeData<C, RustTypeId>>,
}

impl<C: CustomTypeKind<RustTypeId>> Default for TypeAggregator<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: CustomTypeKind<RustTypeId>> TypeAggregator<C> {
    pub fn new() -> Self {
        Self {
            already_read_dependencies: HashSet::new(),
            types: IndexMap::new(),
        }
    }

    /// Adds the dependent type (and its dependencies) to the `TypeAggregator`.
    pub fn add_child_type_and_descendents<T: Describe<C>>(&mut self) -> LocalTypeId {
        let type_id = self.add_child_type(T::type_id(), T::type_data);
        self.add_schema_descendents::<T>();
        type_id
    }

    /// Adds the type's [`TypeData`] to the `TypeAggregator`.
    ///
    /// If the type is well known or already in the aggregator, this returns early with the
    /// existing id.
    pub fn add_child_type(
        &mut self,
        type_id: RustTypeId,
        get_type_data: impl FnOnce() -> TypeData<C, RustTypeId>,
    ) -> LocalTypeId {
        let type_hash = match type_id {
            RustTypeId::WellKnown(well_known_type_id) => {
                return LocalTypeId::WellKnown(well_known_type_id);
            }
            RustTypeId::Novel(type_hash) => type_hash,
        };

        if let Some(index) = self.types.get_index_of(&type_hash) {
            return LocalTypeId::SchemaLocalIndex(index);
        }

        let local_type_data = get_type_data();
        let (index, _) = self.types.insert_full(type_hash, local_type_data);
        LocalTypeId::SchemaLocalIndex(index)
    }

    /// Adds the type's descendent types to the `TypeAggregator`, if they've not already
    /// been added.
    ///
    /// The "already read" guard is what makes aggregation of recursive types terminate.
    pub fn add_schema_descendents<T: Describe<C>>(&mut self) -> bool {
        let RustTypeId::Novel(type_hash) = T::type_id() else {
            return false;
        };

        if self.already_read_dependencies.contains(&type_hash) {
            return false;
        }

        self.already_read_dependencies.insert(type_hash);

        T::add_all_dependencies(self);

        true
    }
}
