//! Serializable method descriptions.

use alloc::vec::Vec;

use bindery_types::{MethodFlags, PropertyInfo, StringName};
use bindery_values::Variant;

/// Everything a class's method list reports about one method.
///
/// Also used to declare the arguments of a vararg method.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MethodInfo {
    pub name: StringName,
    pub id: u32,
    pub return_val: PropertyInfo,
    pub arguments: Vec<PropertyInfo>,
    pub default_arguments: Vec<Variant>,
    pub flags: MethodFlags,
}

impl MethodInfo {
    pub fn new(name: impl Into<StringName>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_argument(mut self, argument: PropertyInfo) -> Self {
        self.arguments.push(argument);
        self
    }

    pub fn with_return(mut self, return_val: PropertyInfo) -> Self {
        self.return_val = return_val;
        self
    }

    pub fn with_flags(mut self, flags: MethodFlags) -> Self {
        self.flags = flags;
        self
    }

    pub fn with_default_arguments(mut self, defaults: Vec<Variant>) -> Self {
        self.default_arguments = defaults;
        self
    }

    pub fn is_vararg(&self) -> bool {
        self.flags.contains(MethodFlags::VARARG)
    }
}
