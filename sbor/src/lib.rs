//! # The SBOR codec
//!
//! SBOR (Simple Binary Object Representation) is a self-describing binary codec with:
//! * A small set of base value kinds: booleans, fixed-width integers, strings, and the
//!   container shapes - arrays, tuples, enums and maps.
//! * An extension point for custom value kinds, allowing dialects to embed their own
//!   leaf values (see [`CustomExtension`]).
//! * Canonical encodings - one payload per value - enforced at decode time.
//! * A schema model ([`Schema`]) which payloads can be validated against.
//!
//! The [`basic`] module fixes the extension point to "no custom anything", giving the
//! basic SBOR dialect with payload prefix [`BASIC_SBOR_V1_PAYLOAD_PREFIX`].

/// Defines the basic SBOR dialect, with no custom extension.
pub mod basic;
/// Defines the `Categorize` trait, capturing a type's value kind.
pub mod categorize;
/// Codecs for the rust types which map onto the base value kinds.
mod codec;
/// Payload prefixes and encoding limits.
pub mod constants;
/// Defines the `Decode` trait, and the decoding of payloads.
pub mod decode;
/// The `Decoder` abstraction and its byte-slice implementation.
pub mod decoder;
/// Defines the `Describe` trait, contributing a type's schema.
pub mod describe;
/// Defines the `Encode` trait, and the encoding of payloads.
pub mod encode;
/// The `Encoder` abstraction and its byte-vec implementation.
pub mod encoder;
/// Paths into the SBOR value model.
pub mod path;
/// Validation of payloads against schemas.
pub mod payload_validation;
/// The SBOR schema model.
pub mod schema;
/// The SBOR value model.
pub mod value;
/// The SBOR value kinds.
pub mod value_kind;

pub use basic::*;
pub use categorize::*;
pub use constants::*;
pub use decode::*;
pub use decoder::*;
pub use describe::*;
pub use encode::*;
pub use encoder::*;
pub use path::*;
pub use payload_validation::*;
pub use schema::*;
pub use value::*;
pub use value_kind::*;

// Derive macros, re-exported so a single `sbor` dependency is enough to use them.
pub use sbor_derive::{Categorize, Decode, Describe, Encode, Sbor};

// This is to make derives work within this crate.
// See: https://users.rust-lang.org/t/how-can-i-use-my-derive-macro-from-the-crate-that-declares-the-trait/60502
extern crate self as sbor;

/// Each module should have its own prelude, which:
/// * Adds preludes of upstream crates
/// * Exports types with specific-enough names which mean they can safely be used downstream.
pub mod prelude {
    pub use crate::basic::*;
    pub use crate::categorize::Categorize;
    pub use crate::constants::*;
    pub use crate::decode::Decode;
    pub use crate::decoder::*;
    pub use crate::describe::Describe;
    pub use crate::encode::Encode;
    pub use crate::encoder::*;
    pub use crate::path::*;
    pub use crate::payload_validation::*;
    pub use crate::schema::*;
    pub use crate::value::*;
    pub use crate::value_kind::*;
    pub use sbor_derive::{Categorize, Decode, Describe, Encode, Sbor};
}

pub(crate) mod internal_prelude {
    pub use crate::prelude::*;
}
