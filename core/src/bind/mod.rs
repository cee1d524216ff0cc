//! Bound methods and their call paths.
//!
//! Start with [`MethodBind::method`], [`MethodBind::static_fn`] or
//! [`MethodBind::vararg`], then register the bind with a [`ClassBinder`].

pub mod binder;
pub mod call;
pub mod function;
mod method;
pub mod method_bind;
pub mod method_info;
pub mod signature;
mod static_method;
mod vararg;

pub use binder::{ClassBinder, ClassMethods};
pub use method_bind::MethodBind;
pub use method_info::MethodInfo;
