//! Core descriptor types for the binding layer.
//!
//! - [`VariantType`]: the dynamic type tag seen by the dynamic call path
//! - [`TypeMetadata`]: the native representation behind a tag
//! - [`PropertyInfo`] and [`ArgumentDescriptor`]: rich per-slot descriptions
//! - [`MethodFlags`] and [`PropertyUsage`]: flag sets attached to the above
//! - [`StringName`]: interned names for methods, classes and arguments

mod flags;
mod kind;
mod property;

pub use flags::{MethodFlags, PropertyUsage};
pub use kind::{TypeMetadata, VariantType};
pub use property::{ArgumentDescriptor, PropertyHint, PropertyInfo};

/// Interned string used for method, class and argument names.
///
/// Comparing two names is a pointer comparison, which keeps lookups on the
/// dispatch surface cheap.
pub type StringName = string_cache::DefaultAtom;
