//! Dynamically typed generator results.

use serde::Serialize;
use std::fmt;

/// Value produced by a registered generator.
///
/// Serializes untagged, so `Int8(24)` becomes `24` and `IntArray` becomes a
/// JSON array.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum LookupValue {
    Int8(i8),
    Int16(i16),
    Int32(i32),
    Int64(i64),
    Uint8(u8),
    Uint16(u16),
    Uint32(u32),
    Uint64(u64),
    Float32(f32),
    Float64(f64),
    IntArray(Vec<i64>),
}

impl LookupValue {
    /// Name of the variant's primitive type.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Int8(_) => "int8",
            Self::Int16(_) => "int16",
            Self::Int32(_) => "int32",
            Self::Int64(_) => "int64",
            Self::Uint8(_) => "uint8",
            Self::Uint16(_) => "uint16",
            Self::Uint32(_) => "uint32",
            Self::Uint64(_) => "uint64",
            Self::Float32(_) => "float32",
            Self::Float64(_) => "float64",
            Self::IntArray(_) => "[]int",
        }
    }

    /// Try to get this value as an i64.
    ///
    /// Succeeds for every integer variant whose value fits.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int8(i) => Some(i64::from(*i)),
            Self::Int16(i) => Some(i64::from(*i)),
            Self::Int32(i) => Some(i64::from(*i)),
            Self::Int64(i) => Some(*i),
            Self::Uint8(u) => Some(i64::from(*u)),
            Self::Uint16(u) => Some(i64::from(*u)),
            Self::Uint32(u) => Some(i64::from(*u)),
            Self::Uint64(u) => i64::try_from(*u).ok(),
            _ => None,
        }
    }

    /// Try to get this value as a u64.
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Self::Uint8(u) => Some(u64::from(*u)),
            Self::Uint16(u) => Some(u64::from(*u)),
            Self::Uint32(u) => Some(u64::from(*u)),
            Self::Uint64(u) => Some(*u),
            other => other.as_i64().and_then(|i| u64::try_from(i).ok()),
        }
    }

    /// Try to get this value as an f64.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float32(f) => Some(f64::from(*f)),
            Self::Float64(f) => Some(*f),
            _ => None,
        }
    }

    /// Try to get this value as an integer slice.
    pub fn as_int_array(&self) -> Option<&[i64]> {
        match self {
            Self::IntArray(ints) => Some(ints.as_slice()),
            _ => None,
        }
    }

    /// Consume this value, returning the integer array if it is one.
    pub fn into_int_array(self) -> Option<Vec<i64>> {
        match self {
            Self::IntArray(ints) => Some(ints),
            _ => None,
        }
    }
}

impl fmt::Display for LookupValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int8(v) => write!(f, "{v}"),
            Self::Int16(v) => write!(f, "{v}"),
            Self::Int32(v) => write!(f, "{v}"),
            Self::Int64(v) => write!(f, "{v}"),
            Self::Uint8(v) => write!(f, "{v}"),
            Self::Uint16(v) => write!(f, "{v}"),
            Self::Uint32(v) => write!(f, "{v}"),
            Self::Uint64(v) => write!(f, "{v}"),
            Self::Float32(v) => write!(f, "{v}"),
            Self::Float64(v) => write!(f, "{v}"),
            Self::IntArray(ints) => {
                for (i, v) in ints.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{v}")?;
                }
                Ok(())
            }
        }
    }
}

macro_rules! impl_from_primitive {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for LookupValue {
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }
        )*
    };
}

impl_from_primitive! {
    i8 => Int8,
    i16 => Int16,
    i32 => Int32,
    i64 => Int64,
    u8 => Uint8,
    u16 => Uint16,
    u32 => Uint32,
    u64 => Uint64,
    f32 => Float32,
    f64 => Float64,
    Vec<i64> => IntArray,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(LookupValue::Int8(-24).to_string(), "-24");
        assert_eq!(LookupValue::Float64(914774.5).to_string(), "914774.5");
        assert_eq!(LookupValue::IntArray(vec![3, 1, 4, 2]).to_string(), "3,1,4,2");
        assert_eq!(LookupValue::IntArray(vec![]).to_string(), "");
    }

    #[test]
    fn test_serialize_untagged() {
        assert_eq!(serde_json::to_string(&LookupValue::Uint16(7)).unwrap(), "7");
        assert_eq!(
            serde_json::to_string(&LookupValue::IntArray(vec![1, 2])).unwrap(),
            "[1,2]"
        );
    }

    #[test]
    fn test_integer_accessors() {
        assert_eq!(LookupValue::Int16(-5).as_i64(), Some(-5));
        assert_eq!(LookupValue::Uint64(u64::MAX).as_i64(), None);
        assert_eq!(LookupValue::Uint64(u64::MAX).as_u64(), Some(u64::MAX));
        assert_eq!(LookupValue::Int32(-1).as_u64(), None);
        assert_eq!(LookupValue::Float32(1.5).as_i64(), None);
        assert_eq!(LookupValue::Float32(1.5).as_f64(), Some(1.5));
    }

    #[test]
    fn test_from_primitive() {
        assert_eq!(LookupValue::from(5u8), LookupValue::Uint8(5));
        assert_eq!(LookupValue::from(vec![1i64]).type_name(), "[]int");
        assert_eq!(
            LookupValue::from(vec![1, 2]).into_int_array(),
            Some(vec![1, 2])
        );
    }
}
