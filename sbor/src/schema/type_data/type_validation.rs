use crate::*;

/// Additional validation to apply to a payload of the given type, beyond validating
/// that the payload is of the correct type kind.
///
/// The validation must be valid for the type kind it is attached to (see
/// [`validate_schema`][crate::validate_schema]).
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "type")
)]
#[derive(Debug, Clone, PartialEq, Eq, Sbor)]
pub enum TypeValidation<V: CustomTypeValidation> {
    None,
    I8(NumericValidation<i8>),
    I16(NumericValidation<i16>),
    I32(NumericValidation<i32>),
    I64(NumericValidation<i64>),
    I128(NumericValidation<i128>),
    U8(NumericValidation<u8>),
    U16(NumericValidation<u16>),
    U32(NumericValidation<u32>),
    U64(NumericValidation<u64>),
    U128(NumericValidation<u128>),
    String(LengthValidation),
    Array(LengthValidation),
    Map(LengthValidation),
    Custom(V),
}

/// Validates a length against (inclusive) bounds.
///
/// An unset bound does not constrain the length.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Sbor)]
pub struct LengthValidation {
    pub min: Option<u32>,
    pub max: Option<u32>,
}

impl LengthValidation {
    pub const fn none() -> Self {
        Self {
            min: None,
            max: None,
        }
    }

    pub const fn is_none(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }

    pub fn is_valid(&self, length: usize) -> bool {
        self.min.unwrap_or(0) as usize <= length
            && length <= self.max.unwrap_or(u32::MAX) as usize
    }
}

/// Validates a numeric value against (inclusive) bounds.
///
/// An unset bound does not constrain the value.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Sbor)]
pub struct NumericValidation<T> {
    pub min: Option<T>,
    pub max: Option<T>,
}

impl<T: Copy + PartialOrd> NumericValidation<T> {
    pub const fn none() -> Self {
        Self {
            min: None,
            max: None,
        }
    }

    pub const fn is_none(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }

    pub fn is_valid(&self, value: T) -> bool {
        if let Some(min) = self.min {
            if value < min {
                return false;
            }
        }
        if let Some(max) = self.max {
            if value > max {
                return false;
            }
        }
        true
    }
}
