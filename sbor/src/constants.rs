/// The payload prefix byte of basic SBOR v1 payloads, chosen as the ASCII code for `[`.
pub const BASIC_SBOR_V1_PAYLOAD_PREFIX: u8 = 0x5b;

/// The depth limit used by the basic encoders/decoders.
pub const BASIC_SBOR_V1_MAX_DEPTH: usize = 64;

/// Custom value kinds live in the range `0x80..=0xff`.
pub const CUSTOM_VALUE_KIND_START: u8 = 0x80;

/// Sizes are encoded as canonical LEB128 of at most 4 bytes, so cap out at 28 bits.
pub const MAX_SIZE: usize = 0x0fffffff;

pub const OPTION_VARIANT_NONE: u8 = 0;
pub const OPTION_VARIANT_SOME: u8 = 1;

pub const RESULT_VARIANT_OK: u8 = 0;
pub const RESULT_VARIANT_ERR: u8 = 1;
