//! Bindery - typed method binding for dynamic object systems
//!
//! # Overview
//!
//! Bindery wraps native Rust methods in a uniform, type-erased handle, the
//! [`MethodBind`], that a dynamic runtime can introspect and invoke without
//! knowing the method's signature. Every bind offers three call paths:
//!
//! 1. **Dynamic** ([`MethodBind::call`]): checks arity and argument types,
//!    fills in default arguments, reports a [`CallError`].
//! 2. **Validated** ([`MethodBind::validated_call`]): the caller guarantees
//!    the arguments, the result is written into a [`Variant`].
//! 3. **Raw pointer** ([`MethodBind::ptrcall`]): arguments and result travel
//!    as untyped slot pointers, for callers that already hold native values.
//!
//! # Quick Start
//!
//! ```
//! use bindery::{Class, ClassBinder, MethodBind, Object, StringName, Variant, Vector3};
//!
//! #[derive(Default)]
//! struct Node3D {
//!     position: Vector3,
//! }
//!
//! impl Object for Node3D {
//!     fn class_name(&self) -> StringName {
//!         StringName::from(Self::CLASS_NAME)
//!     }
//! }
//!
//! impl Class for Node3D {
//!     const CLASS_NAME: &'static str = "Node3D";
//! }
//!
//! impl Node3D {
//!     fn translate(&mut self, x: f64, y: f64, z: f64) -> Vector3 {
//!         self.position = self.position + Vector3::new(x as f32, y as f32, z as f32);
//!         self.position
//!     }
//! }
//!
//! let methods = ClassBinder::of::<Node3D>()
//!     .bind_with_defaults(
//!         "translate",
//!         &["x", "y", "z"],
//!         MethodBind::method(Node3D::translate),
//!         vec![Variant::Float(0.0)],
//!     )
//!     .build()
//!     .unwrap();
//!
//! let mut node = Node3D::default();
//! let result = methods
//!     .call("translate", Some(&mut node), &[&Variant::Float(1.0), &Variant::Int(2)])
//!     .unwrap();
//! assert_eq!(result, Variant::Vector3(Vector3::new(1.0, 2.0, 0.0)));
//! ```
//!
//! # Crates
//!
//! - `bindery-types`: dynamic type tags, property descriptors, flags, hashing.
//! - `bindery-values`: the [`Variant`] value type and native conversions.
//! - `bindery-core`: bound methods, call paths and class registration.

pub use bindery_core::{
    ArgList, BindError, BindOptions, BindType, CallError, CallErrorKind, Class, ClassBinder,
    ClassMethods, Const, MethodBind, MethodFn, MethodInfo, Mut, Object, Receiver, Signature,
    StaticFn, VarArgFn,
};
pub use bindery_types::{
    self as types, ArgumentDescriptor, MethodFlags, PropertyHint, PropertyInfo, PropertyUsage,
    StringName, TypeMetadata, VariantType,
};
pub use bindery_values::{
    self as values, Face3, Variant, Vector3,
    typed::{Bridge, Marshal, faces},
};
