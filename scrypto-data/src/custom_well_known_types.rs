use crate::internal_prelude::*;

// The well known index of each custom type is its value kind byte, so the common
// Scrypto types take no schema slots. A handful of constrained address types sit in
// the gaps directly above their base kind.

pub const REFERENCE_TYPE: WellKnownTypeId = WellKnownTypeId::of(VALUE_KIND_REFERENCE);
pub const GLOBAL_ADDRESS_TYPE: WellKnownTypeId = WellKnownTypeId::of(VALUE_KIND_REFERENCE + 1);
pub const INTERNAL_ADDRESS_TYPE: WellKnownTypeId = WellKnownTypeId::of(VALUE_KIND_REFERENCE + 2);
pub const OWN_TYPE: WellKnownTypeId = WellKnownTypeId::of(VALUE_KIND_OWN);
pub const OWN_VAULT_TYPE: WellKnownTypeId = WellKnownTypeId::of(VALUE_KIND_OWN + 1);
pub const OWN_KEY_VALUE_STORE_TYPE: WellKnownTypeId = WellKnownTypeId::of(VALUE_KIND_OWN + 2);
pub const DECIMAL_TYPE: WellKnownTypeId = WellKnownTypeId::of(VALUE_KIND_DECIMAL);
pub const NON_FUNGIBLE_LOCAL_ID_TYPE: WellKnownTypeId =
    WellKnownTypeId::of(VALUE_KIND_NON_FUNGIBLE_LOCAL_ID);
pub const HASH_TYPE: WellKnownTypeId = WellKnownTypeId::of(VALUE_KIND_HASH);
pub const BLOB_TYPE: WellKnownTypeId = WellKnownTypeId::of(VALUE_KIND_BLOB);
pub const EXPRESSION_TYPE: WellKnownTypeId = WellKnownTypeId::of(VALUE_KIND_EXPRESSION);

pub fn reference_type_data<L: SchemaTypeLink>() -> TypeData<ScryptoCustomTypeKind, L> {
    TypeData::unnamed(TypeKind::Custom(ScryptoCustomTypeKind::Reference))
}

pub fn global_address_type_data<L: SchemaTypeLink>() -> TypeData<ScryptoCustomTypeKind, L> {
    TypeData::no_child_names(
        TypeKind::Custom(ScryptoCustomTypeKind::Reference),
        "GlobalAddress",
    )
    .with_validation(TypeValidation::Custom(
        ScryptoCustomTypeValidation::Reference(ReferenceValidation::IsGlobal),
    ))
}

pub fn internal_address_type_data<L: SchemaTypeLink>() -> TypeData<ScryptoCustomTypeKind, L> {
    TypeData::no_child_names(
        TypeKind::Custom(ScryptoCustomTypeKind::Reference),
        "InternalAddress",
    )
    .with_validation(TypeValidation::Custom(
        ScryptoCustomTypeValidation::Reference(ReferenceValidation::IsInternal),
    ))
}

pub fn own_type_data<L: SchemaTypeLink>() -> TypeData<ScryptoCustomTypeKind, L> {
    TypeData::unnamed(TypeKind::Custom(ScryptoCustomTypeKind::Own))
}

pub fn own_vault_type_data<L: SchemaTypeLink>() -> TypeData<ScryptoCustomTypeKind, L> {
    TypeData::no_child_names(TypeKind::Custom(ScryptoCustomTypeKind::Own), "Vault")
        .with_validation(TypeValidation::Custom(ScryptoCustomTypeValidation::Own(
            OwnValidation::IsVault,
        )))
}

pub fn own_key_value_store_type_data<L: SchemaTypeLink>() -> TypeData<ScryptoCustomTypeKind, L> {
    TypeData::no_child_names(
        TypeKind::Custom(ScryptoCustomTypeKind::Own),
        "KeyValueStore",
    )
    .with_validation(TypeValidation::Custom(ScryptoCustomTypeValidation::Own(
        OwnValidation::IsKeyValueStore,
    )))
}

pub fn decimal_type_data<L: SchemaTypeLink>() -> TypeData<ScryptoCustomTypeKind, L> {
    TypeData::no_child_names(TypeKind::Custom(ScryptoCustomTypeKind::Decimal), "Decimal")
}

pub fn non_fungible_local_id_type_data<L: SchemaTypeLink>() -> TypeData<ScryptoCustomTypeKind, L> {
    TypeData::no_child_names(
        TypeKind::Custom(ScryptoCustomTypeKind::NonFungibleLocalId),
        "NonFungibleLocalId",
    )
}

pub fn hash_type_data<L: SchemaTypeLink>() -> TypeData<ScryptoCustomTypeKind, L> {
    TypeData::no_child_names(TypeKind::Custom(ScryptoCustomTypeKind::Hash), "Hash")
}

pub fn blob_type_data<L: SchemaTypeLink>() -> TypeData<ScryptoCustomTypeKind, L> {
    TypeData::no_child_names(TypeKind::Custom(ScryptoCustomTypeKind::Blob), "Blob")
}

pub fn expression_type_data<L: SchemaTypeLink>() -> TypeData<ScryptoCustomTypeKind, L> {
    TypeData::no_child_names(
        TypeKind::Custom(ScryptoCustomTypeKind::Expression),
        "Expression",
    )
}

/// Resolves a custom well known type - the base types are resolved by the caller first
/// (see [`ScryptoCustomSchema::resolve_well_known_type`][crate::ScryptoCustomSchema]).
pub fn resolve_scrypto_well_known_type(
    well_known_id: WellKnownTypeId,
) -> Option<TypeData<ScryptoCustomTypeKind, LocalTypeId>> {
    let type_data = match well_known_id {
        REFERENCE_TYPE => reference_type_data(),
        GLOBAL_ADDRESS_TYPE => global_address_type_data(),
        INTERNAL_ADDRESS_TYPE => internal_address_type_data(),
        OWN_TYPE => own_type_data(),
        OWN_VAULT_TYPE => own_vault_type_data(),
        OWN_KEY_VALUE_STORE_TYPE => own_key_value_store_type_data(),
        DECIMAL_TYPE => decimal_type_data(),
        NON_FUNGIBLE_LOCAL_ID_TYPE => non_fungible_local_id_type_data(),
        HASH_TYPE => hash_type_data(),
        BLOB_TYPE => blob_type_data(),
        EXPRESSION_TYPE => expression_type_data(),
        _ => return None,
    };
    Some(type_data)
}
