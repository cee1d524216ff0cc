//! Type descriptors for the Bindery method binding layer.
//!
//! This crate holds the vocabulary shared by the dynamic value crate and the
//! binding core: dynamic type tags, native type metadata, property descriptors,
//! method flags, interned names, and the stable hash used for signature
//! compatibility checks.
//!
//! # Example
//!
//! ```
//! use bindery_types::{PropertyInfo, PropertyUsage, VariantType};
//!
//! let info = PropertyInfo::new(VariantType::Int).with_name("count");
//! assert_eq!(info.to_string(), "count: int");
//! assert_eq!(info.usage, PropertyUsage::DEFAULT);
//! ```

#![no_std]
extern crate alloc;

pub mod core;
pub mod hash;

pub use crate::core::{
    ArgumentDescriptor, MethodFlags, PropertyHint, PropertyInfo, PropertyUsage, StringName,
    TypeMetadata, VariantType,
};
