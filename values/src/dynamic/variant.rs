use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use bindery_types::VariantType;
use bindery_types::hash::{self, HASH_SEED};

use crate::math::Vector3;

/// A dynamically typed value: the currency of the dynamic call path.
///
/// # Example
///
/// ```
/// use bindery_types::VariantType;
/// use bindery_values::dynamic::Variant;
///
/// let v = Variant::from(42);
/// assert_eq!(v.variant_type(), VariantType::Int);
/// assert_eq!(v.as_int(), Some(42));
/// assert_eq!(v.as_bool(), None);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Variant {
    #[default]
    Nil,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Vector3(Vector3),
    Array(Vec<Variant>),
    PackedVector3Array(Vec<Vector3>),
}

impl Variant {
    /// The dynamic type tag of this value.
    pub fn variant_type(&self) -> VariantType {
        match self {
            Variant::Nil => VariantType::Nil,
            Variant::Bool(_) => VariantType::Bool,
            Variant::Int(_) => VariantType::Int,
            Variant::Float(_) => VariantType::Float,
            Variant::String(_) => VariantType::String,
            Variant::Vector3(_) => VariantType::Vector3,
            Variant::Array(_) => VariantType::Array,
            Variant::PackedVector3Array(_) => VariantType::PackedVector3Array,
        }
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, Variant::Nil)
    }

    // --- Exact accessors: no coercion ---

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Variant::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Variant::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Variant::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Variant::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_vector3(&self) -> Option<Vector3> {
        match self {
            Variant::Vector3(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Variant]> {
        match self {
            Variant::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_packed_vector3_array(&self) -> Option<&[Vector3]> {
        match self {
            Variant::PackedVector3Array(items) => Some(items),
            _ => None,
        }
    }

    /// Whether this value may be passed where `ty` is expected.
    pub fn can_convert_to(&self, ty: VariantType) -> bool {
        VariantType::can_convert_strict(self.variant_type(), ty)
    }

    /// A hash that is stable across builds and platforms.
    ///
    /// Default arguments feed into method signature hashes, which are stored
    /// alongside serialized call sites, so `core::hash::Hash` is not enough.
    pub fn stable_hash(&self) -> u32 {
        hash::fmix32(self.hash_into(HASH_SEED))
    }

    fn hash_into(&self, seed: u32) -> u32 {
        let seed = hash::murmur3_one_32(self.variant_type() as u32, seed);
        match self {
            Variant::Nil => seed,
            Variant::Bool(b) => hash::murmur3_one_32(*b as u32, seed),
            Variant::Int(i) => hash::murmur3_one_64(*i as u64, seed),
            Variant::Float(f) => hash::murmur3_one_f64(*f, seed),
            Variant::String(s) => {
                hash::murmur3_one_32(hash::murmur3_bytes(s.as_bytes(), seed), seed)
            }
            Variant::Vector3(v) => hash_vector3(*v, seed),
            Variant::Array(items) => items
                .iter()
                .fold(hash::murmur3_one_32(items.len() as u32, seed), |h, item| item.hash_into(h)),
            Variant::PackedVector3Array(items) => items
                .iter()
                .fold(hash::murmur3_one_32(items.len() as u32, seed), |h, v| hash_vector3(*v, h)),
        }
    }
}

fn hash_vector3(v: Vector3, seed: u32) -> u32 {
    let h = hash::murmur3_one_f64(v.x as f64, seed);
    let h = hash::murmur3_one_f64(v.y as f64, h);
    hash::murmur3_one_f64(v.z as f64, h)
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variant::Nil => f.write_str("null"),
            Variant::Bool(b) => write!(f, "{}", b),
            Variant::Int(i) => write!(f, "{}", i),
            Variant::Float(x) => write!(f, "{:?}", x),
            Variant::String(s) => write!(f, "{:?}", s),
            Variant::Vector3(v) => write!(f, "{}", v),
            Variant::Array(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str("]")
            }
            Variant::PackedVector3Array(items) => {
                f.write_str("PackedVector3Array[")?;
                for (i, v) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", v)?;
                }
                f.write_str("]")
            }
        }
    }
}

// =============================================================================
// Conversions from plain Rust values
// =============================================================================

impl From<bool> for Variant {
    fn from(value: bool) -> Self {
        Variant::Bool(value)
    }
}

impl From<i64> for Variant {
    fn from(value: i64) -> Self {
        Variant::Int(value)
    }
}

impl From<i32> for Variant {
    fn from(value: i32) -> Self {
        Variant::Int(value as i64)
    }
}

impl From<f64> for Variant {
    fn from(value: f64) -> Self {
        Variant::Float(value)
    }
}

impl From<&str> for Variant {
    fn from(value: &str) -> Self {
        Variant::String(String::from(value))
    }
}

impl From<String> for Variant {
    fn from(value: String) -> Self {
        Variant::String(value)
    }
}

impl From<Vector3> for Variant {
    fn from(value: Vector3) -> Self {
        Variant::Vector3(value)
    }
}

impl From<Vec<Variant>> for Variant {
    fn from(value: Vec<Variant>) -> Self {
        Variant::Array(value)
    }
}

impl From<Vec<Vector3>> for Variant {
    fn from(value: Vec<Vector3>) -> Self {
        Variant::PackedVector3Array(value)
    }
}
