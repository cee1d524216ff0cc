use alloc::string::String;
use core::fmt;

use super::{PropertyUsage, StringName, TypeMetadata, VariantType};

/// Editor/documentation hint attached to a property or argument.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PropertyHint {
    #[default]
    None,
    /// `hint_string` is `"min,max[,step]"`.
    Range,
    /// `hint_string` is a comma separated list of names.
    Enum,
    /// `hint_string` is a comma separated list of flag names.
    Flags,
    /// `hint_string` names the element type of an array.
    ArrayType,
}

/// Rich description of a typed slot: a property, an argument, or a return value.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PropertyInfo {
    pub variant_type: VariantType,
    pub name: StringName,
    pub class_name: StringName,
    pub hint: PropertyHint,
    pub hint_string: String,
    pub usage: PropertyUsage,
}

impl PropertyInfo {
    /// An unnamed slot of the given type with default usage.
    pub fn new(variant_type: VariantType) -> Self {
        Self {
            variant_type,
            ..Self::default()
        }
    }

    /// A slot accepting any value: `Nil` with [`PropertyUsage::NIL_IS_VARIANT`].
    pub fn any() -> Self {
        Self {
            usage: PropertyUsage::DEFAULT | PropertyUsage::NIL_IS_VARIANT,
            ..Self::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<StringName>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_class_name(mut self, class_name: impl Into<StringName>) -> Self {
        self.class_name = class_name.into();
        self
    }

    pub fn with_hint(mut self, hint: PropertyHint, hint_string: impl Into<String>) -> Self {
        self.hint = hint;
        self.hint_string = hint_string.into();
        self
    }

    pub fn with_usage(mut self, usage: PropertyUsage) -> Self {
        self.usage = usage;
        self
    }

    /// Whether a `Nil` type on this slot stands for "any value".
    pub fn is_variant(&self) -> bool {
        self.variant_type == VariantType::Nil && self.usage.contains(PropertyUsage::NIL_IS_VARIANT)
    }
}

impl fmt::Display for PropertyInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ty = if self.is_variant() {
            "Variant"
        } else if !self.class_name.is_empty() {
            &*self.class_name
        } else {
            self.variant_type.name()
        };
        if self.name.is_empty() {
            f.write_str(ty)
        } else {
            write!(f, "{}: {}", self.name, ty)
        }
    }
}

/// Everything known about one argument slot (or the return slot) of a bind.
///
/// Built once when a bind is constructed and never mutated afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ArgumentDescriptor {
    pub variant_type: VariantType,
    pub info: PropertyInfo,
    pub metadata: TypeMetadata,
}

impl ArgumentDescriptor {
    pub fn new(info: PropertyInfo, metadata: TypeMetadata) -> Self {
        Self {
            variant_type: info.variant_type,
            info,
            metadata,
        }
    }

    /// Descriptor of an untyped wildcard slot.
    pub fn any() -> Self {
        Self::new(PropertyInfo::any(), TypeMetadata::None)
    }
}
