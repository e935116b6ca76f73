use crate::*;

/// The `Describe` trait allows a type to describe how to interpret and validate its
/// SBOR payloads, by contributing its [`TypeData`] to a schema.
///
/// Each type has a [`RustTypeId`], which captures the type's identity: for well known
/// types this is a static index, and for other types it is a hash over the type's name,
/// the ids of its generic type parameters, and (for derived types) a digest of the
/// type's definition. Crucially the id of a type never depends on the ids of its field
/// types - so recursive types get a finite identity.
pub trait Describe<C: CustomTypeKind<RustTypeId>> {
    /// The `RustTypeId` for this type.
    fn type_id() -> RustTypeId;

    /// Returns the local schema for the given type.
    fn type_data() -> TypeData<C, RustTypeId>;

    /// For each type referenced in `type_data`, we need to ensure that the type and all
    /// of its own references are added to the aggregator.
    ///
    /// For direct/simple type dependencies, simply call
    /// `aggregator.add_child_type_and_descendents::<D>()` for each dependency.
    fn add_all_dependencies(aggregator: &mut TypeAggregator<C>) {
        let _ = aggregator;
    }
}
