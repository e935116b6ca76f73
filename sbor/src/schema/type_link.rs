use std::fmt::Debug;

use sha2::{Digest, Sha256};

use crate::*;

/// Marker trait for a link between [`TypeKind`]s:
/// - [`RustTypeId`]: A global identifier for a type (a well known id, or type hash)
/// - [`LocalTypeId`]: A link in the context of a schema (a well known id, or a local type index)
pub trait SchemaTypeLink: Debug + Clone + PartialEq + Eq + From<WellKnownTypeId> {}

/// This is a global identifier for a given type, used by the type aggregator
/// to uniquely identify a type.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, Sbor)]
pub enum RustTypeId {
    /// This takes a well_known type index.
    WellKnown(WellKnownTypeId),
    /// The global type hash of a type - used for types which aren't well known.
    Novel(TypeHash),
}

impl From<WellKnownTypeId> for RustTypeId {
    fn from(value: WellKnownTypeId) -> Self {
        RustTypeId::WellKnown(value)
    }
}

impl SchemaTypeLink for RustTypeId {}

pub type TypeHash = [u8; 20];

impl RustTypeId {
    pub fn novel(name: &str, dependencies: &[RustTypeId]) -> Self {
        generate_type_hash(&[name], &[], dependencies)
    }

    pub fn novel_with_code(name: &str, dependencies: &[RustTypeId], code: &[u8]) -> Self {
        generate_type_hash(&[name], &[("code", code)], dependencies)
    }

    pub fn novel_validated(
        name: &str,
        dependencies: &[RustTypeId],
        validations: &[(&str, &[u8])],
    ) -> Self {
        generate_type_hash(&[name], validations, dependencies)
    }
}

/// The hash captures the type name, any distinguishing type data (such as a hash of the
/// type's definition), and the ids of the generic type dependencies.
///
/// Dependencies are the ids of the type's generic parameters, NOT its fields - so
/// recursive types get a finite id without the hash ever recursing into field types.
fn generate_type_hash(
    names: &[&str],
    type_data: &[(&str, &[u8])],
    dependencies: &[RustTypeId],
) -> RustTypeId {
    let mut hasher = Sha256::new();
    for name in names {
        hasher.update(name.as_bytes());
    }
    for (label, bytes) in type_data {
        hasher.update(label.as_bytes());
        hasher.update(bytes);
    }
    for dependency in dependencies {
        match dependency {
            RustTypeId::WellKnown(x) => hasher.update((x.as_index() as u16).to_be_bytes()),
            RustTypeId::Novel(hash) => hasher.update(hash),
        }
    }
    let digest = hasher.finalize();
    let mut hash = TypeHash::default();
    hash.copy_from_slice(&digest[..20]);
    RustTypeId::Novel(hash)
}

/// The type id which is local to a given [`Schema`].
/// This is the [`SchemaTypeLink`] used in a linearized [`Schema`] to link [`TypeKind`]s.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, Sbor)]
pub enum LocalTypeId {
    /// This takes a well_known type index
    WellKnown(WellKnownTypeId),
    /// For non-simple types
    SchemaLocalIndex(usize),
}

impl From<WellKnownTypeId> for LocalTypeId {
    fn from(value: WellKnownTypeId) -> Self {
        LocalTypeId::WellKnown(value)
    }
}

impl SchemaTypeLink for LocalTypeId {}

impl LocalTypeId {
    pub fn any() -> Self {
        Self::WellKnown(basic_well_known_types::ANY_TYPE)
    }
}

/// An index into the well-known type lookup of a schema's extension.
///
/// Well-known indices of the base types agree with their value kind bytes.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, Sbor)]
#[sbor(transparent)]
pub struct WellKnownTypeId(u8);

impl WellKnownTypeId {
    pub const fn of(x: u8) -> Self {
        Self(x)
    }

    pub const fn as_index(&self) -> usize {
        self.0 as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn novel_type_hashes_are_stable_and_distinct() {
        let a = RustTypeId::novel("MyStruct", &[]);
        let b = RustTypeId::novel("MyStruct", &[]);
        let c = RustTypeId::novel("MyOtherStruct", &[]);
        assert_eq!(a, b);
        assert_ne!(a, c);

        let d = RustTypeId::novel("Wrapper", &[a]);
        let e = RustTypeId::novel("Wrapper", &[c]);
        assert_ne!(d, e);

        let f = RustTypeId::novel_with_code("MyStruct", &[], &[1, 2, 3]);
        let g = RustTypeId::novel_with_code("MyStruct", &[], &[1, 2, 4]);
        assert_ne!(f, g);
        assert_ne!(a, f);
    }
}
