//! # Scrypto SBOR
//!
//! The Scrypto SBOR dialect ("Scrypto SBOR v1", payload prefix `0x5C`) extends the base
//! SBOR codec with custom leaf values for the Scrypto data model:
//!
//! * [`Reference`] and [`Own`] - pointers to nodes, distinguished by ownership semantics
//! * [`Decimal`] - an opaque fixed-point number
//! * [`NonFungibleLocalId`] - the local part of a non fungible global id
//! * [`Hash`] - a 32-byte digest
//! * [`ManifestBlobRef`] and [`ManifestExpression`] - placeholders which are resolved
//!   against their surrounding context (see [`IndexedScryptoValue::replace_placeholders`])
//!
//! The dialect is bound statically: [`ScryptoCustomExtension`] implements the `sbor`
//! crate's extension traits, so `Value<ScryptoCustomValueKind, ScryptoCustomValue>`
//! payloads can be encoded, decoded, schema-described and validated with the same
//! machinery as basic SBOR.

/// The `CustomExtension` implementation binding the dialect together.
pub mod custom_extension;
/// The custom type kinds and type validations contributed to schemas.
pub mod custom_schema;
/// Application of custom type validations to custom values.
pub mod custom_validation;
/// The custom value model and its wire codec.
pub mod custom_value;
/// The custom value kind bytes.
pub mod custom_value_kind;
/// Well known type ids for the custom types.
pub mod custom_well_known_types;
/// Payload prefix, encode/decode helpers and trait aliases.
pub mod definitions;
/// A decoded payload indexed by the nodes it refers to.
pub mod indexed_value;
/// The Scrypto data model types.
pub mod model;

pub use custom_extension::*;
pub use custom_schema::*;
pub use custom_validation::*;
pub use custom_value::*;
pub use custom_value_kind::*;
pub use custom_well_known_types::*;
pub use definitions::*;
pub use indexed_value::*;
pub use model::*;

pub mod prelude {
    pub use crate::custom_extension::*;
    pub use crate::custom_schema::*;
    pub use crate::custom_value::*;
    pub use crate::custom_value_kind::*;
    pub use crate::custom_well_known_types::*;
    pub use crate::definitions::*;
    pub use crate::indexed_value::*;
    pub use crate::model::*;
}

pub(crate) mod internal_prelude {
    pub use crate::prelude::*;
    pub use sbor::prelude::*;
}
