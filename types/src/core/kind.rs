use core::fmt;

/// Dynamic type tag of a `Variant`.
///
/// This is the only type information the dynamic call path sees. Several
/// native types can share one tag (every integer width maps to `Int`); the
/// [`TypeMetadata`] code tells them apart where it matters.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum VariantType {
    /// No value. As a parameter type it means "no constraint".
    #[default]
    Nil,

    /// Boolean.
    Bool,

    /// 64-bit signed integer.
    Int,

    /// 64-bit float.
    Float,

    /// Owned UTF-8 string.
    String,

    /// Three component vector.
    Vector3,

    /// Heterogeneous array of dynamic values.
    Array,

    /// Packed array of `Vector3`.
    PackedVector3Array,
}

impl VariantType {
    /// Every tag, in declaration order.
    pub const ALL: [VariantType; 8] = [
        VariantType::Nil,
        VariantType::Bool,
        VariantType::Int,
        VariantType::Float,
        VariantType::String,
        VariantType::Vector3,
        VariantType::Array,
        VariantType::PackedVector3Array,
    ];

    /// Human readable name, as shown in error messages and API dumps.
    pub const fn name(self) -> &'static str {
        match self {
            VariantType::Nil => "Nil",
            VariantType::Bool => "bool",
            VariantType::Int => "int",
            VariantType::Float => "float",
            VariantType::String => "String",
            VariantType::Vector3 => "Vector3",
            VariantType::Array => "Array",
            VariantType::PackedVector3Array => "PackedVector3Array",
        }
    }

    /// Whether a value of type `from` can be converted to `to` without loss of
    /// meaning.
    ///
    /// Numeric and boolean tags convert between each other, arrays convert to
    /// and from their packed form, and `Nil` as a target accepts anything.
    pub const fn can_convert_strict(from: VariantType, to: VariantType) -> bool {
        if from as u8 == to as u8 {
            return true;
        }
        match to {
            VariantType::Nil => true,
            VariantType::Bool => matches!(from, VariantType::Int | VariantType::Float),
            VariantType::Int => matches!(from, VariantType::Bool | VariantType::Float),
            VariantType::Float => matches!(from, VariantType::Bool | VariantType::Int),
            VariantType::Array => matches!(from, VariantType::PackedVector3Array),
            VariantType::PackedVector3Array => matches!(from, VariantType::Array),
            VariantType::String | VariantType::Vector3 => false,
        }
    }
}

impl fmt::Display for VariantType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Fine-grained native representation behind a [`VariantType`].
///
/// The raw-pointer path always moves integers as `i64` and reals as `f64`;
/// this code records which native width the callee actually declared.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum TypeMetadata {
    #[default]
    None,
    IntIsInt8,
    IntIsInt16,
    IntIsInt32,
    IntIsInt64,
    IntIsUint8,
    IntIsUint16,
    IntIsUint32,
    IntIsUint64,
    RealIsFloat,
    RealIsDouble,
}

impl TypeMetadata {
    /// Width in bytes of the native representation, if it is a sized scalar.
    pub const fn native_width(self) -> Option<usize> {
        match self {
            TypeMetadata::None => None,
            TypeMetadata::IntIsInt8 | TypeMetadata::IntIsUint8 => Some(1),
            TypeMetadata::IntIsInt16 | TypeMetadata::IntIsUint16 => Some(2),
            TypeMetadata::IntIsInt32 | TypeMetadata::IntIsUint32 | TypeMetadata::RealIsFloat => {
                Some(4)
            }
            TypeMetadata::IntIsInt64 | TypeMetadata::IntIsUint64 | TypeMetadata::RealIsDouble => {
                Some(8)
            }
        }
    }

    /// Whether this is one of the unsigned integer codes.
    pub const fn is_unsigned(self) -> bool {
        matches!(
            self,
            TypeMetadata::IntIsUint8
                | TypeMetadata::IntIsUint16
                | TypeMetadata::IntIsUint32
                | TypeMetadata::IntIsUint64
        )
    }
}

static_assertions::assert_eq_size!(VariantType, u8);
static_assertions::assert_eq_size!(TypeMetadata, u8);
