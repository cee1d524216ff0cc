//! Conversion between native Rust types and dynamic values.
//!
//! [`Bridge`] carries the static facts about a type (its dynamic tag, its
//! metadata code, its property descriptor). [`Marshal`] does the actual
//! conversion in both directions.
//!
//! # Implemented for
//!
//! - `bool`
//! - `i8`, `i16`, `i32`, `i64`, `u8`, `u16`, `u32`, `u64` (dynamic `Int`)
//! - `f32`, `f64` (dynamic `Float`)
//! - `String`, [`Vector3`]
//! - `Vec<Variant>` (dynamic `Array`), `Vec<Vector3>` (`PackedVector3Array`)
//! - [`Variant`] itself, which accepts any value
//! - `()`, the "no return value" type
//! - `Vec<Face3>`, carried as a flat vertex array (see [`super::faces`])

use alloc::string::String;
use alloc::vec::Vec;

use bindery_types::{PropertyInfo, TypeMetadata, VariantType};

use crate::dynamic::Variant;
use crate::math::Vector3;

/// Static type information for a native type.
pub trait Bridge {
    /// The dynamic tag values of this type carry.
    const VARIANT_TYPE: VariantType;

    /// Native representation behind `VARIANT_TYPE`.
    const METADATA: TypeMetadata = TypeMetadata::None;

    /// `true` only for `()`: a callable returning this returns nothing.
    const IS_VOID: bool = false;

    /// Descriptor for a slot of this type. Names are filled in by the caller.
    fn property_info() -> PropertyInfo {
        PropertyInfo::new(Self::VARIANT_TYPE)
    }
}

/// Conversion between a native type and a [`Variant`].
pub trait Marshal: Bridge + Sized {
    /// Convert a dynamic value, applying the strict coercions allowed by
    /// [`VariantType::can_convert_strict`]. Returns `None` if the value cannot
    /// represent this type.
    fn try_from_variant(value: &Variant) -> Option<Self>;

    /// Wrap this value as a dynamic value.
    fn to_variant(self) -> Variant;

    /// Convert a value whose type a caller has already validated.
    ///
    /// Passing a value that does not convert is a contract violation and
    /// panics.
    fn from_validated(value: &Variant) -> Self {
        match Self::try_from_variant(value) {
            Some(native) => native,
            None => invalid_validated_value(Self::VARIANT_TYPE, value.variant_type()),
        }
    }
}

#[cold]
#[track_caller]
fn invalid_validated_value(expected: VariantType, found: VariantType) -> ! {
    panic!("validated value of type {found} does not convert to {expected}")
}

// =============================================================================
// Scalars
// =============================================================================

impl Bridge for bool {
    const VARIANT_TYPE: VariantType = VariantType::Bool;
}

impl Marshal for bool {
    fn try_from_variant(value: &Variant) -> Option<Self> {
        match value {
            Variant::Bool(b) => Some(*b),
            Variant::Int(i) => Some(*i != 0),
            Variant::Float(f) => Some(*f != 0.0),
            _ => None,
        }
    }

    fn to_variant(self) -> Variant {
        Variant::Bool(self)
    }
}

/// Integers of every width share the dynamic `Int` tag. Narrowing wraps, the
/// same way an `as` cast does.
macro_rules! impl_int {
    ($($ty:ty => $meta:ident),* $(,)?) => {
        $(
            impl Bridge for $ty {
                const VARIANT_TYPE: VariantType = VariantType::Int;
                const METADATA: TypeMetadata = TypeMetadata::$meta;
            }

            impl Marshal for $ty {
                fn try_from_variant(value: &Variant) -> Option<Self> {
                    match value {
                        Variant::Int(i) => Some(*i as $ty),
                        Variant::Bool(b) => Some(*b as $ty),
                        Variant::Float(f) => Some(*f as $ty),
                        _ => None,
                    }
                }

                fn to_variant(self) -> Variant {
                    Variant::Int(self as i64)
                }
            }
        )*
    };
}

impl_int! {
    i8 => IntIsInt8,
    i16 => IntIsInt16,
    i32 => IntIsInt32,
    i64 => IntIsInt64,
    u8 => IntIsUint8,
    u16 => IntIsUint16,
    u32 => IntIsUint32,
    u64 => IntIsUint64,
}

macro_rules! impl_real {
    ($($ty:ty => $meta:ident),* $(,)?) => {
        $(
            impl Bridge for $ty {
                const VARIANT_TYPE: VariantType = VariantType::Float;
                const METADATA: TypeMetadata = TypeMetadata::$meta;
            }

            impl Marshal for $ty {
                fn try_from_variant(value: &Variant) -> Option<Self> {
                    match value {
                        Variant::Float(f) => Some(*f as $ty),
                        Variant::Int(i) => Some(*i as $ty),
                        Variant::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
                        _ => None,
                    }
                }

                fn to_variant(self) -> Variant {
                    Variant::Float(self as f64)
                }
            }
        )*
    };
}

impl_real! {
    f32 => RealIsFloat,
    f64 => RealIsDouble,
}

impl Bridge for String {
    const VARIANT_TYPE: VariantType = VariantType::String;
}

impl Marshal for String {
    fn try_from_variant(value: &Variant) -> Option<Self> {
        value.as_str().map(String::from)
    }

    fn to_variant(self) -> Variant {
        Variant::String(self)
    }
}

impl Bridge for Vector3 {
    const VARIANT_TYPE: VariantType = VariantType::Vector3;
}

impl Marshal for Vector3 {
    fn try_from_variant(value: &Variant) -> Option<Self> {
        value.as_vector3()
    }

    fn to_variant(self) -> Variant {
        Variant::Vector3(self)
    }
}

// =============================================================================
// Collections
// =============================================================================

impl Bridge for Vec<Variant> {
    const VARIANT_TYPE: VariantType = VariantType::Array;
}

impl Marshal for Vec<Variant> {
    fn try_from_variant(value: &Variant) -> Option<Self> {
        match value {
            Variant::Array(items) => Some(items.clone()),
            Variant::PackedVector3Array(items) => {
                Some(items.iter().copied().map(Variant::Vector3).collect())
            }
            _ => None,
        }
    }

    fn to_variant(self) -> Variant {
        Variant::Array(self)
    }
}

impl Bridge for Vec<Vector3> {
    const VARIANT_TYPE: VariantType = VariantType::PackedVector3Array;
}

impl Marshal for Vec<Vector3> {
    /// A plain `Array` converts only if every element is a `Vector3`.
    fn try_from_variant(value: &Variant) -> Option<Self> {
        match value {
            Variant::PackedVector3Array(items) => Some(items.clone()),
            Variant::Array(items) => items.iter().map(Variant::as_vector3).collect(),
            _ => None,
        }
    }

    fn to_variant(self) -> Variant {
        Variant::PackedVector3Array(self)
    }
}

// =============================================================================
// Variant and ()
// =============================================================================

impl Bridge for Variant {
    const VARIANT_TYPE: VariantType = VariantType::Nil;

    fn property_info() -> PropertyInfo {
        PropertyInfo::any()
    }
}

impl Marshal for Variant {
    fn try_from_variant(value: &Variant) -> Option<Self> {
        Some(value.clone())
    }

    fn to_variant(self) -> Variant {
        self
    }
}

impl Bridge for () {
    const VARIANT_TYPE: VariantType = VariantType::Nil;
    const IS_VOID: bool = true;
}

impl Marshal for () {
    fn try_from_variant(value: &Variant) -> Option<Self> {
        value.is_nil().then_some(())
    }

    fn to_variant(self) -> Variant {
        Variant::Nil
    }
}
